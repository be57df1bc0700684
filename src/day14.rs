use fxhash::FxHashMap;
use itertools::{Itertools, MinMaxResult};
use tracing::debug;

use crate::{
    error::{Error, Result},
    parse::{map_opt, parse_line, regex, seq, tag, Parser},
};

type Pair = (char, char);

/// Insertion rules, `AB -> C`.
#[derive(Debug, Default)]
pub struct Rules {
    insertions: FxHashMap<Pair, char>,
}

impl Rules {
    pub fn add(&mut self, pair: Pair, insert: char) {
        self.insertions.insert(pair, insert);
    }

    pub fn get(&self, pair: Pair) -> Option<char> {
        self.insertions.get(&pair).copied()
    }
}

fn rule<'i>() -> impl Parser<&'i str, Output = (Pair, char)> {
    map_opt(
        seq((regex(r"^[A-Z]{2}"), tag(" -> "), regex(r"^[A-Z]"))),
        |(pair, _, insert): (&str, &str, &str)| {
            let (a, b) = pair.chars().collect_tuple()?;
            Some(((a, b), insert.chars().next()?))
        },
    )
}

/// A polymer tracked only by how often each adjacent pair and each element
/// occurs, which is all that's needed to grow it and count elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polymer {
    pairs: FxHashMap<Pair, u64>,
    elements: FxHashMap<char, u64>,
}

impl Polymer {
    pub fn new(template: &str) -> Self {
        let mut pairs = FxHashMap::default();
        for pair in template.chars().tuple_windows() {
            *pairs.entry(pair).or_default() += 1;
        }

        let mut elements = FxHashMap::default();
        for c in template.chars() {
            *elements.entry(c).or_default() += 1;
        }

        Polymer { pairs, elements }
    }

    pub fn pairs(&self) -> &FxHashMap<Pair, u64> {
        &self.pairs
    }

    pub fn elements(&self) -> &FxHashMap<char, u64> {
        &self.elements
    }

    /// Inserts an element into every pair that has a rule. Pairs without
    /// one carry over unchanged.
    pub fn step(&mut self, rules: &Rules) {
        let mut next = FxHashMap::default();

        for (&(a, b), &count) in &self.pairs {
            match rules.get((a, b)) {
                Some(c) => {
                    *next.entry((a, c)).or_default() += count;
                    *next.entry((c, b)).or_default() += count;
                    *self.elements.entry(c).or_default() += count;
                }
                None => *next.entry((a, b)).or_default() += count,
            }
        }

        self.pairs = next;
    }

    pub fn len(&self) -> u64 {
        self.elements.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most common element count minus least common.
    pub fn spread(&self) -> u64 {
        match self.elements.values().minmax() {
            MinMaxResult::NoElements | MinMaxResult::OneElement(_) => 0,
            MinMaxResult::MinMax(min, max) => max - min,
        }
    }
}

pub fn parse(input: &str) -> Result<(Polymer, Rules)> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, template) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing polymer template"))?;

    if let Some(c) = template.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(Error::UnexpectedChar(c));
    }

    let mut rules = Rules::default();
    let mut p = rule();
    for (line_no, line) in lines {
        let (pair, insert) = parse_line(&mut p, line_no, line)?;
        rules.add(pair, insert);
    }

    Ok((Polymer::new(template), rules))
}

fn spread_after(input: &str, steps: usize) -> Result<u64> {
    let (mut polymer, rules) = parse(input)?;

    for _ in 0..steps {
        polymer.step(&rules);
    }

    debug!(steps, len = polymer.len(), "polymer grown");
    Ok(polymer.spread())
}

pub fn solve(input: &str) -> Result<u64> {
    spread_after(input, 10)
}

pub fn bonus(input: &str) -> Result<u64> {
    spread_after(input, 40)
}
