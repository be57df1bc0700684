use std::{fmt, ops::RangeInclusive};

use tracing::debug;

use crate::{
    day01, day02, day03, day04, day05, day06, day07, day08, day09, day10, day11, day12, day13,
    day14,
    error::{Error, Result},
};

pub const DAYS: RangeInclusive<u8> = 1..=14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    First,
    Bonus,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::First => write!(f, "First part"),
            Part::Bonus => write!(f, "Bonus"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub first: String,
    pub bonus: String,
}

pub fn title(day: u8) -> Option<&'static str> {
    Some(match day {
        1 => "Sonar Sweep",
        2 => "Dive!",
        3 => "Binary Diagnostic",
        4 => "Giant Squid",
        5 => "Hydrothermal Venture",
        6 => "Lanternfish",
        7 => "The Treachery of Whales",
        8 => "Seven Segment Search",
        9 => "Smoke Basin",
        10 => "Syntax Scoring",
        11 => "Dumbo Octopus",
        12 => "Passage Pathing",
        13 => "Transparent Origami",
        14 => "Extended Polymerization",
        _ => return None,
    })
}

fn answer<T: ToString>(result: Result<T>) -> Result<String> {
    result.map(|answer| answer.to_string())
}

/// Solves one part of one day, rendering the answer as text.
pub fn run_part(day: u8, part: Part, input: &str) -> Result<String> {
    debug!(day, %part, bytes = input.len(), "solving");

    match (day, part) {
        (1, Part::First) => answer(day01::solve(input)),
        (1, Part::Bonus) => answer(day01::bonus(input)),
        (2, Part::First) => answer(day02::solve(input)),
        (2, Part::Bonus) => answer(day02::bonus(input)),
        (3, Part::First) => answer(day03::solve(input)),
        (3, Part::Bonus) => answer(day03::bonus(input)),
        (4, Part::First) => answer(day04::solve(input)),
        (4, Part::Bonus) => answer(day04::bonus(input)),
        (5, Part::First) => answer(day05::solve(input)),
        (5, Part::Bonus) => answer(day05::bonus(input)),
        (6, Part::First) => answer(day06::solve(input)),
        (6, Part::Bonus) => answer(day06::bonus(input)),
        (7, Part::First) => answer(day07::solve(input)),
        (7, Part::Bonus) => answer(day07::bonus(input)),
        (8, Part::First) => answer(day08::solve(input)),
        (8, Part::Bonus) => answer(day08::bonus(input)),
        (9, Part::First) => answer(day09::solve(input)),
        (9, Part::Bonus) => answer(day09::bonus(input)),
        (10, Part::First) => answer(day10::solve(input)),
        (10, Part::Bonus) => answer(day10::bonus(input)),
        (11, Part::First) => answer(day11::solve(input)),
        (11, Part::Bonus) => answer(day11::bonus(input)),
        (12, Part::First) => answer(day12::solve(input)),
        (12, Part::Bonus) => answer(day12::bonus(input)),
        (13, Part::First) => answer(day13::solve(input)),
        (13, Part::Bonus) => day13::bonus(input),
        (14, Part::First) => answer(day14::solve(input)),
        (14, Part::Bonus) => answer(day14::bonus(input)),
        _ => Err(Error::UnknownDay(day)),
    }
}

pub fn run(day: u8, input: &str) -> Result<Answers> {
    Ok(Answers {
        first: run_part(day, Part::First, input)?,
        bonus: run_part(day, Part::Bonus, input)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_day_has_a_title() {
        for day in DAYS {
            assert!(title(day).is_some(), "day {day}");
        }
        assert_eq!(title(15), None);
    }

    #[test]
    fn unknown_days() {
        assert!(matches!(run(0, ""), Err(Error::UnknownDay(0))));
        assert!(matches!(run(15, ""), Err(Error::UnknownDay(15))));
    }
}
