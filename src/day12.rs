use fxhash::FxHashMap;

use crate::{
    error::{Error, Result},
    parse::{parse_lines, seq, tag, word},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Big,
}

impl Size {
    fn of(label: &str) -> Self {
        if label.chars().all(|c| c.is_ascii_uppercase()) {
            Size::Big
        } else {
            Size::Small
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cave {
    pub label: String,
    pub neighbors: Vec<usize>,
    pub size: Size,
}

/// Caves live in one vec; connections are indices into it.
#[derive(Debug, Default)]
pub struct CaveSystem {
    caves: Vec<Cave>,
    index: FxHashMap<String, usize>,
}

fn added(prev: &[usize], next: usize) -> Vec<usize> {
    let mut prev = prev.to_vec();
    prev.push(next);
    prev
}

impl CaveSystem {
    fn id(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }

        let id = self.caves.len();
        self.caves.push(Cave {
            label: label.to_string(),
            neighbors: vec![],
            size: Size::of(label),
        });
        self.index.insert(label.to_string(), id);
        id
    }

    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.id(a);
        let b = self.id(b);

        self.caves[a].neighbors.push(b);
        self.caves[b].neighbors.push(a);
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut system = CaveSystem::default();

        for (a, _, b) in parse_lines(input, seq((word(), tag("-"), word())))? {
            system.add_edge(a, b);
        }

        Ok(system)
    }

    pub fn find(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn cave(&self, id: usize) -> &Cave {
        &self.caves[id]
    }

    pub fn len(&self) -> usize {
        self.caves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caves.is_empty()
    }

    /// Counts distinct paths from `start` to `end`. Small caves are entered
    /// at most once, except that `allow_revisit` lets a single one of them
    /// (never `start`) be entered twice per path.
    pub fn paths(&self, allow_revisit: bool) -> Result<usize> {
        let start = self
            .find("start")
            .ok_or_else(|| Error::unsolvable("no start cave"))?;

        // two linked big caves would allow endlessly long paths
        for cave in self.caves.iter().filter(|c| c.size == Size::Big) {
            if let Some(&other) = cave
                .neighbors
                .iter()
                .find(|&&n| self.caves[n].size == Size::Big)
            {
                return Err(Error::unsolvable(format!(
                    "big caves {} and {} are connected",
                    cave.label, self.caves[other].label
                )));
            }
        }

        let Some(end) = self.find("end") else {
            return Ok(0);
        };

        Ok(self.explore(start, end, vec![start], allow_revisit, start))
    }

    fn explore(
        &self,
        start: usize,
        end: usize,
        visited: Vec<usize>,
        revisit: bool,
        at: usize,
    ) -> usize {
        if at == end {
            return 1;
        }

        self.caves[at]
            .neighbors
            .iter()
            .map(|&next| {
                if next == start {
                    return 0;
                }

                match self.caves[next].size {
                    Size::Big => self.explore(start, end, visited.clone(), revisit, next),
                    Size::Small if !visited.contains(&next) => {
                        self.explore(start, end, added(&visited, next), revisit, next)
                    }
                    Size::Small if revisit => self.explore(start, end, visited.clone(), false, next),
                    Size::Small => 0,
                }
            })
            .sum()
    }
}

pub fn solve(input: &str) -> Result<usize> {
    CaveSystem::parse(input)?.paths(false)
}

pub fn bonus(input: &str) -> Result<usize> {
    CaveSystem::parse(input)?.paths(true)
}
