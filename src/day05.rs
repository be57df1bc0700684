use std::iter::successors;

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    error::{Error, Result},
    parse::{map, parse_line, seq, tag, uint, Parser},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A horizontal, vertical or 45° line, with inclusive endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    /// Endpoints are stored in `(x, y)` order, so `start` is the leftmost one.
    pub fn new(a: Point, b: Point) -> Self {
        Line {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Unit step from `start` towards `end`.
    pub fn direction(&self) -> (i32, i32) {
        (
            (self.end.x - self.start.x).signum(),
            (self.end.y - self.start.y).signum(),
        )
    }

    pub fn is_horizontal(&self) -> bool {
        self.direction().1 == 0
    }

    pub fn is_vertical(&self) -> bool {
        self.direction().0 == 0
    }

    pub fn is_diagonal(&self) -> bool {
        let (dx, dy) = self.direction();
        dx != 0 && dy != 0
    }

    fn is_supported(&self) -> bool {
        let (w, h) = (self.end.x - self.start.x, self.end.y - self.start.y);
        w == 0 || h == 0 || w.abs() == h.abs()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (dx, dy) = self.direction();
        let end = self.end;

        successors(Some(self.start), move |&p| {
            (p != end).then(|| Point::new(p.x + dx, p.y + dy))
        })
    }
}

#[derive(Debug, Default)]
pub struct Overlaps {
    points: FxHashMap<Point, usize>,
}

impl Overlaps {
    pub fn traverse(&mut self, line: &Line) {
        for p in line.points() {
            *self.points.entry(p).or_default() += 1;
        }
    }

    pub fn get(&self, p: Point) -> usize {
        self.points.get(&p).copied().unwrap_or(0)
    }

    /// Number of points covered by at least two lines.
    pub fn count(&self) -> usize {
        self.points.values().filter(|&&n| n > 1).count()
    }
}

fn point<'i>() -> impl Parser<&'i str, Output = Point> {
    map(seq((uint(), tag(","), uint())), |(x, _, y)| Point::new(x, y))
}

pub fn parse(input: &str) -> Result<Vec<Line>> {
    let mut line = map(seq((point(), tag(" -> "), point())), |(a, _, b)| Line::new(a, b));

    input
        .lines()
        .enumerate()
        .filter(|(_, s)| !s.trim().is_empty())
        .map(|(i, s)| {
            let vent = parse_line(&mut line, i + 1, s.trim())?;
            if vent.is_supported() {
                Ok(vent)
            } else {
                Err(Error::parse(i + 1, "only straight and 45° lines are supported"))
            }
        })
        .collect()
}

fn count_overlaps<'a>(lines: impl IntoIterator<Item = &'a Line>) -> usize {
    let mut overlaps = Overlaps::default();
    for line in lines {
        overlaps.traverse(line);
    }

    debug!(points = overlaps.points.len(), "traversed vent lines");
    overlaps.count()
}

pub fn solve(input: &str) -> Result<usize> {
    let lines = parse(input)?;

    Ok(count_overlaps(lines.iter().filter(|l| !l.is_diagonal())))
}

pub fn bonus(input: &str) -> Result<usize> {
    Ok(count_overlaps(&parse(input)?))
}
