use std::fmt;

use fxhash::FxHashSet;
use itertools::Itertools;
use tuple::Map;

use crate::{
    error::{Error, Result},
    parse::{map, map_opt, parse_line, preceded, regex, seq, tag, uint, Parser},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fold {
    pub axis: Axis,
    pub at: u32,
}

fn fold<'i>() -> impl Parser<&'i str, Output = Fold> {
    let axis = map_opt(regex(r"^[xy]"), |s: &str| match s {
        "x" => Some(Axis::X),
        "y" => Some(Axis::Y),
        _ => None,
    });

    map(
        preceded(tag("fold along "), seq((axis, tag("="), uint()))),
        |(axis, _, at)| Fold { axis, at },
    )
}

fn dot(line_no: usize, line: &str) -> Result<(u32, u32)> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| Error::parse(line_no, format!("expected a dot, found {line:?}")))?
        .map(|s: &str| {
            s.parse::<u32>()
                .map_err(|e| Error::parse(line_no, format!("{s:?}: {e}")))
        });

    Ok((x?, y?))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    dots: FxHashSet<(u32, u32)>,
}

impl Paper {
    pub fn new(dots: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Paper {
            dots: dots.into_iter().collect(),
        }
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Mirrors every dot past the fold line onto the near side. Dots that
    /// land on top of each other merge.
    pub fn fold(&mut self, Fold { axis, at }: Fold) -> Result<()> {
        let reflect = |c: u32| {
            if c > at {
                at.checked_sub(c - at)
                    .ok_or_else(|| Error::unsolvable(format!("dot at {c} folds past the edge")))
            } else {
                Ok(c)
            }
        };

        self.dots = self
            .dots
            .iter()
            .map(|&(x, y)| match axis {
                Axis::X => Ok((reflect(x)?, y)),
                Axis::Y => Ok((x, reflect(y)?)),
            })
            .collect::<Result<_>>()?;

        Ok(())
    }
}

impl fmt::Display for Paper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(width) = self.dots.iter().map(|&(x, _)| x).max() else {
            return Ok(());
        };
        let height = self.dots.iter().map(|&(_, y)| y).max().unwrap_or(0);

        let rows = (0..=height).map(|y| {
            (0..=width)
                .map(|x| if self.dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        });

        write!(f, "{}", rows.format("\n"))
    }
}

pub fn parse(input: &str) -> Result<(Paper, Vec<Fold>)> {
    let mut dots = vec![];
    let mut folds = vec![];
    let mut instruction = fold();

    for (i, line) in input.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        } else if line.starts_with("fold") {
            folds.push(parse_line(&mut instruction, i + 1, line)?);
        } else if !folds.is_empty() {
            return Err(Error::parse(i + 1, "dot after fold instructions"));
        } else {
            dots.push(dot(i + 1, line)?);
        }
    }

    Ok((Paper::new(dots), folds))
}

pub fn solve(input: &str) -> Result<usize> {
    let (mut paper, folds) = parse(input)?;

    let first = folds
        .first()
        .ok_or_else(|| Error::unsolvable("no fold instructions"))?;
    paper.fold(*first)?;

    Ok(paper.dot_count())
}

pub fn bonus(input: &str) -> Result<String> {
    let (mut paper, folds) = parse(input)?;

    for fold in folds {
        paper.fold(fold)?;
    }

    Ok(paper.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding() {
        let mut paper = Paper::new([(0, 0), (0, 2)]);
        paper.fold(Fold { axis: Axis::Y, at: 1 }).unwrap();
        assert_eq!(paper.dot_count(), 1);

        let mut paper = Paper::new([(0, 0), (2, 0)]);
        paper.fold(Fold { axis: Axis::X, at: 1 }).unwrap();
        assert_eq!(paper.dot_count(), 1);

        let mut paper = Paper::new([(0, 0), (2, 0), (5, 3)]);
        let x = Fold { axis: Axis::X, at: 3 };
        paper.fold(x).unwrap();
        let count = paper.dot_count();
        paper.fold(x).unwrap();
        assert_eq!(paper.dot_count(), count);

        assert!(Paper::new([(9, 0)]).fold(Fold { axis: Axis::X, at: 2 }).is_err());
    }

    #[test]
    fn instructions() {
        let mut p = fold();

        assert_eq!(
            parse_line(&mut p, 1, "fold along y=7").unwrap(),
            Fold { axis: Axis::Y, at: 7 }
        );
        assert!(parse_line(&mut p, 1, "fold along z=7").is_err());
        assert!(dot(1, "6,x").is_err());
    }

    #[test]
    fn test() {
        let example_input = "
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

        assert_eq!(solve(example_input).unwrap(), 17);
        assert_eq!(
            bonus(example_input).unwrap(),
            "#####\n#...#\n#...#\n#...#\n#####"
        );

        let (mut paper, folds) = parse(example_input).unwrap();
        for fold in folds {
            paper.fold(fold).unwrap();
        }
        assert_eq!(paper.dot_count(), 16);
    }
}
