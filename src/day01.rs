use itertools::Itertools;

use crate::{
    error::Result,
    parse::{parse_lines, uint},
};

fn parse(input: &str) -> Result<Vec<u32>> {
    parse_lines(input, uint())
}

pub fn solve(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .into_iter()
        .tuple_windows()
        .filter(|(a, b)| a < b)
        .count())
}

pub fn bonus(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .into_iter()
        .tuple_windows()
        .map(|(a, b, c)| a + b + c)
        .tuple_windows()
        .filter(|(a, b)| a < b)
        .count())
}

#[test]
fn test() {
    let example_input = "
199
200
208
210
200
207
240
269
260
263
";

    assert_eq!(solve(example_input).unwrap(), 7);
    assert_eq!(bonus(example_input).unwrap(), 5);
}
