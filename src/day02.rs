use crate::{
    error::Result,
    parse::{map_opt, parse_lines, seq, tag, uint, word, Parser},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

use Command::*;

fn command<'i>() -> impl Parser<&'i str, Output = Command> {
    map_opt(
        seq((word(), tag(" "), uint::<i64>())),
        |(dir, _, n)| match dir {
            "forward" => Some(Forward(n)),
            "down" => Some(Down(n)),
            "up" => Some(Up(n)),
            _ => None,
        },
    )
}

pub fn parse(input: &str) -> Result<Vec<Command>> {
    parse_lines(input, command())
}

pub fn solve(input: &str) -> Result<i64> {
    let (mut x, mut depth) = (0, 0);

    for cmd in parse(input)? {
        match cmd {
            Forward(n) => x += n,
            Down(n) => depth += n,
            Up(n) => depth -= n,
        }
    }

    Ok(x * depth)
}

pub fn bonus(input: &str) -> Result<i64> {
    let (mut x, mut depth, mut aim) = (0, 0, 0);

    for cmd in parse(input)? {
        match cmd {
            Forward(n) => {
                x += n;
                depth += aim * n;
            }
            Down(n) => aim += n,
            Up(n) => aim -= n,
        }
    }

    Ok(x * depth)
}

#[test]
fn test() {
    let example_input = "
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

    assert_eq!(solve(example_input).unwrap(), 150);
    assert_eq!(bonus(example_input).unwrap(), 900);
}

#[test]
fn unknown_command() {
    assert!(parse("backward 3").is_err());
    assert_eq!(parse("up 3\n").unwrap(), vec![Up(3)]);
}
