use crate::{
    error::{Error, Result},
    parse::number_list,
};

fn parse(input: &str) -> Result<Vec<i64>> {
    let crabs = number_list::<i64>(input)?;

    if crabs.is_empty() {
        return Err(Error::unsolvable("no crabs"));
    }

    Ok(crabs)
}

pub fn median(crabs: &[i64]) -> i64 {
    let mut sorted = crabs.to_vec();
    sorted.sort_unstable();
    sorted[(sorted.len() - 1) / 2]
}

pub fn fuel(crabs: &[i64], target: i64) -> i64 {
    crabs.iter().map(|&x| (target - x).abs()).sum()
}

/// Every extra step costs one more than the last: 1, 2, 3, ...
pub fn increasing_fuel(crabs: &[i64], target: i64) -> i64 {
    crabs
        .iter()
        .map(|&x| {
            let n = (target - x).abs();
            n * (n + 1) / 2
        })
        .sum()
}

pub fn solve(input: &str) -> Result<i64> {
    let crabs = parse(input)?;

    Ok(fuel(&crabs, median(&crabs)))
}

pub fn bonus(input: &str) -> Result<i64> {
    let crabs = parse(input)?;

    // the optimum lies within half a step of the mean
    let mean = crabs.iter().sum::<i64>().div_euclid(crabs.len() as i64);

    Ok([mean, mean + 1]
        .into_iter()
        .map(|target| increasing_fuel(&crabs, target))
        .min()
        .unwrap_or_default())
}

#[test]
fn test() {
    let example_input = "16,1,2,0,4,2,7,1,2,14";
    let crabs = parse(example_input).unwrap();

    assert_eq!(median(&crabs), 2);
    assert_eq!(fuel(&crabs, 2), 37);
    assert_eq!(increasing_fuel(&crabs, 5), 168);

    assert_eq!(solve(example_input).unwrap(), 37);
    assert_eq!(bonus(example_input).unwrap(), 168);
}
