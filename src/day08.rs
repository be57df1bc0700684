use fxhash::FxHashMap;

use crate::{
    error::{Error, Result},
    parse::{map_opt, parse_lines, regex, separated1, seq, tag, Parser},
};

/// A set of lit segments `a..=g`, one bit each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segments(u8);

impl Segments {
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .try_fold(0u8, |bits, c| match c {
                'a'..='g' => Some(bits | 1 << (c as u8 - b'a')),
                _ => None,
            })
            .map(Segments)
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset_of(self, other: Segments) -> bool {
        self.0 & other.0 == self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub patterns: Vec<Segments>,
    pub output: Vec<Segments>,
}

fn entry<'i>() -> impl Parser<&'i str, Output = Entry> {
    let segments = || map_opt(regex(r"^[a-g]+"), Segments::parse);

    map_opt(
        seq((
            separated1(segments(), tag(" ")),
            tag(" | "),
            separated1(segments(), tag(" ")),
        )),
        |(patterns, _, output)| (patterns.len() == 10).then_some(Entry { patterns, output }),
    )
}

pub fn parse(input: &str) -> Result<Vec<Entry>> {
    parse_lines(input, entry())
}

/// Digits 1, 4, 7 and 8 are the only ones with their number of segments.
pub fn is_easy_digit(s: Segments) -> bool {
    matches!(s.len(), 2 | 3 | 4 | 7)
}

/// The wiring of one display, worked out from its ten unique patterns.
#[derive(Debug)]
pub struct Wiring {
    digits: FxHashMap<Segments, u64>,
}

impl Wiring {
    pub fn deduce(patterns: &[Segments]) -> Result<Self> {
        let undeducible = || Error::unsolvable("could not deduce seven-segment wiring");

        let find = |digit: &dyn Fn(Segments) -> bool| {
            patterns.iter().copied().find(|&s| digit(s)).ok_or_else(undeducible)
        };

        let one = find(&|s| s.len() == 2)?;
        let four = find(&|s| s.len() == 4)?;
        let seven = find(&|s| s.len() == 3)?;
        let eight = find(&|s| s.len() == 7)?;

        let six = find(&|s| s.len() == 6 && !one.is_subset_of(s))?;
        let nine = find(&|s| s.len() == 6 && four.is_subset_of(s))?;
        let zero = find(&|s| s.len() == 6 && s != six && s != nine)?;

        let three = find(&|s| s.len() == 5 && one.is_subset_of(s))?;
        let five = find(&|s| s.len() == 5 && s != three && s.is_subset_of(six))?;
        let two = find(&|s| s.len() == 5 && s != three && s != five)?;

        let digits = [zero, one, two, three, four, five, six, seven, eight, nine]
            .into_iter()
            .zip(0..)
            .collect::<FxHashMap<_, _>>();

        if digits.len() != 10 {
            return Err(undeducible());
        }

        Ok(Wiring { digits })
    }

    pub fn digit(&self, s: Segments) -> Option<u64> {
        self.digits.get(&s).copied()
    }

    pub fn read(&self, output: &[Segments]) -> Result<u64> {
        output.iter().try_fold(0, |n, &s| {
            self.digit(s)
                .map(|d| n * 10 + d)
                .ok_or_else(|| Error::unsolvable("output digit not among the patterns"))
        })
    }
}

pub fn solve(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .iter()
        .flat_map(|entry| &entry.output)
        .filter(|&&s| is_easy_digit(s))
        .count())
}

pub fn bonus(input: &str) -> Result<u64> {
    parse(input)?
        .iter()
        .map(|entry| Wiring::deduce(&entry.patterns)?.read(&entry.output))
        .sum()
}
