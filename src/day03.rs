use crate::{
    error::{Error, Result},
    parse::{parse_lines, regex},
};

fn parse(input: &str) -> Result<Vec<&str>> {
    let report = parse_lines(input, regex(r"^[01]+"))?;

    let width = report.first().map_or(0, |s| s.len());
    if width > u64::BITS as usize {
        return Err(Error::parse(1, format!("{width} bits don't fit in a u64")));
    }
    if let Some(i) = report.iter().position(|s| s.len() != width) {
        return Err(Error::parse(i + 1, "inconsistent number of bits"));
    }

    Ok(report)
}

fn count_ones(report: &[&str], bit: usize) -> usize {
    report
        .iter()
        .filter(|line| line.as_bytes()[bit] == b'1')
        .count()
}

fn to_int(bits: &str) -> u64 {
    bits.bytes().fold(0, |n, b| n * 2 + (b - b'0') as u64)
}

pub fn solve(input: &str) -> Result<u64> {
    let report = parse(input)?;
    let width = report.first().map_or(0, |s| s.len());

    let gamma = (0..width)
        .map(|bit| if count_ones(&report, bit) * 2 >= report.len() { '1' } else { '0' })
        .collect::<String>();

    let epsilon = (0..width)
        .map(|bit| if count_ones(&report, bit) * 2 > report.len() { '0' } else { '1' })
        .collect::<String>();

    power(to_int(&gamma), to_int(&epsilon))
}

fn power(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b)
        .ok_or_else(|| Error::unsolvable(format!("{a} * {b} overflows")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Keep the most common bit, `1` on a tie
    OxygenGenerator,
    /// Keep the least common bit, `0` on a tie
    Co2Scrubber,
}

impl Rating {
    fn keep(self, ones: usize, zeros: usize) -> u8 {
        match self {
            Rating::OxygenGenerator if ones >= zeros => b'1',
            Rating::OxygenGenerator => b'0',
            Rating::Co2Scrubber if ones < zeros => b'1',
            Rating::Co2Scrubber => b'0',
        }
    }

    /// Narrows the candidates down one column at a time, until one is left.
    pub fn find(self, report: &[&str]) -> Result<u64> {
        let mut candidates = report.to_vec();
        let width = report.first().map_or(0, |s| s.len());

        for bit in 0..width {
            if candidates.len() <= 1 {
                break;
            }

            let ones = count_ones(&candidates, bit);
            let zeros = candidates.len() - ones;

            // a column where everybody agrees says nothing
            if ones > 0 && zeros > 0 {
                let keep = self.keep(ones, zeros);
                candidates.retain(|line| line.as_bytes()[bit] == keep);
            }
        }

        candidates
            .first()
            .map(|bits| to_int(bits))
            .ok_or_else(|| Error::unsolvable("empty diagnostic report"))
    }
}

pub fn bonus(input: &str) -> Result<u64> {
    let report = parse(input)?;

    power(
        Rating::OxygenGenerator.find(&report)?,
        Rating::Co2Scrubber.find(&report)?,
    )
}

#[test]
fn test() {
    let example_input = "
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    assert_eq!(solve(example_input).unwrap(), 198);
    assert_eq!(bonus(example_input).unwrap(), 230);
}

#[test]
fn ratings() {
    use Rating::*;

    assert_eq!(OxygenGenerator.find(&["00100"]).unwrap(), 0b00100);
    assert_eq!(OxygenGenerator.find(&["00001", "11111"]).unwrap(), 0b11111);
    assert_eq!(
        OxygenGenerator.find(&["00001", "10110", "11111"]).unwrap(),
        0b11111
    );
    assert_eq!(Co2Scrubber.find(&["00011", "11110", "11111"]).unwrap(), 0b00011);
    assert_eq!(Co2Scrubber.find(&["11110", "11111"]).unwrap(), 0b11110);
    assert!(Co2Scrubber.find(&[]).is_err());
}

#[test]
fn too_wide() {
    assert_eq!(solve(&"1".repeat(64)).unwrap(), 0);
    assert!(matches!(
        solve(&"1".repeat(65)),
        Err(Error::Parse { line: 1, .. })
    ));
    assert!(bonus(&"10".repeat(40)).is_err());

    let wide = format!("{}\n{}\n{}", "10".repeat(20), "10".repeat(20), "01".repeat(20));
    assert!(matches!(solve(&wide), Err(Error::Unsolvable(_))));
}
