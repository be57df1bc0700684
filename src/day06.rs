use std::ops::Index;

use tracing::debug;

use crate::{
    error::{Error, Result},
    parse::number_list,
};

const NEWBORN: usize = 8;
const RESPAWN: usize = 6;

/// Fish counts by timer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    counts: [u64; NEWBORN + 1],
}

impl School {
    pub fn new(timers: &[u8]) -> Result<Self> {
        let mut counts = [0; NEWBORN + 1];

        for &t in timers {
            let Some(count) = counts.get_mut(t as usize) else {
                return Err(Error::parse(1, format!("timer {t} is out of range")));
            };
            *count += 1;
        }

        Ok(School { counts })
    }

    pub fn parse(input: &str) -> Result<Self> {
        Self::new(&number_list::<u8>(input)?)
    }

    pub fn tick(&mut self) {
        let birthed = self.counts[0];
        // newborns land in the last slot
        self.counts.rotate_left(1);
        self.counts[RESPAWN] += birthed;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Index<usize> for School {
    type Output = u64;

    fn index(&self, days_left: usize) -> &u64 {
        &self.counts[days_left]
    }
}

pub fn simulate_individually(fish: &[u8]) -> Vec<u8> {
    let mut birthed = 0;

    let mut next = fish
        .iter()
        .map(|&f| {
            if f == 0 {
                birthed += 1;
                RESPAWN as u8
            } else {
                f - 1
            }
        })
        .collect::<Vec<_>>();

    next.extend(std::iter::repeat(NEWBORN as u8).take(birthed));
    next
}

fn population_after(input: &str, days: usize) -> Result<u64> {
    let mut school = School::parse(input)?;

    for _ in 0..days {
        school.tick();
    }

    debug!(days, total = school.total(), "school grown");
    Ok(school.total())
}

pub fn solve(input: &str) -> Result<u64> {
    population_after(input, 80)
}

pub fn bonus(input: &str) -> Result<u64> {
    population_after(input, 256)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticking_individually() {
        assert_eq!(simulate_individually(&[3, 5]), vec![2, 4]);
        assert_eq!(simulate_individually(&[0, 5]), vec![6, 4, 8]);
    }

    #[test]
    fn ticking_buckets() {
        let mut school = School::new(&[3, 5]).unwrap();
        school.tick();
        assert_eq!((school[2], school[4]), (1, 1));

        let mut school = School::new(&[0, 5]).unwrap();
        school.tick();
        assert_eq!((school[6], school[4], school[8]), (1, 1, 1));

        let mut school = School::new(&[0, 7, 8, 6]).unwrap();
        school.tick();
        assert_eq!((school[6], school[7], school[5], school[8]), (2, 1, 1, 1));

        let mut school = School::new(&[3, 5, 3]).unwrap();
        school.tick();
        assert_eq!((school[2], school[4]), (2, 1));
    }

    #[test]
    fn totals() {
        let mut school = School::new(&[3, 4, 3, 1, 0]).unwrap();
        assert_eq!(school.total(), 5);

        let mut last = school.total();
        for _ in 0..40 {
            school.tick();
            assert!(school.total() >= last);
            last = school.total();
        }

        assert!(School::new(&[9]).is_err());
        assert!(School::parse("3,4,x").is_err());
    }

    #[test]
    fn test() {
        let example_input = "3,4,3,1,2";

        assert_eq!(population_after(example_input, 18).unwrap(), 26);
        assert_eq!(solve(example_input).unwrap(), 5934);
        assert_eq!(bonus(example_input).unwrap(), 26984457539);
    }
}
