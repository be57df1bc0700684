use std::fmt;

use tracing::debug;

use crate::{
    error::{Error, Result},
    grid::{Grid, Pos},
    parse::digit_rows,
};

/// Gives up on synchronising after this many steps.
const MAX_STEPS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octopus {
    pub energy: u8,
    pub flashed: bool,
}

impl Octopus {
    pub fn new(energy: u8) -> Self {
        Octopus {
            energy,
            flashed: false,
        }
    }
}

impl fmt::Display for Octopus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.energy)
    }
}

pub struct Simulator {
    grid: Grid<Octopus>,
    flash_count: usize,
    last_flash_count: usize,
}

impl Simulator {
    pub fn new(grid: Grid<Octopus>) -> Self {
        Simulator {
            grid,
            flash_count: 0,
            last_flash_count: 0,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self::new(Grid::from_rows_with(
            digit_rows(input)?,
            Octopus::new,
        )?))
    }

    pub fn grid(&self) -> &Grid<Octopus> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<Octopus> {
        &mut self.grid
    }

    /// Bumps the energy at `pos`. Crossing 9 fires the octopus, which bumps
    /// all eight around it in turn; each one fires at most once until reset.
    pub fn increment(&mut self, pos: Pos) {
        let mut todo = vec![pos];

        while let Some(pos) = todo.pop() {
            let octopus = &mut self.grid[pos];
            octopus.energy = octopus.energy.saturating_add(1);

            if octopus.energy > 9 && !octopus.flashed {
                octopus.flashed = true;
                todo.extend(self.grid.neighbors(pos));
            }
        }
    }

    pub fn reset(&mut self, pos: Pos) {
        let octopus = &mut self.grid[pos];
        if octopus.energy > 9 {
            octopus.energy = 0;
        }
        octopus.flashed = false;
    }

    /// Advances one step and returns how many octopuses flashed during it.
    pub fn step(&mut self) -> usize {
        let positions = self.grid.positions().collect::<Vec<_>>();

        for &pos in &positions {
            self.increment(pos);
        }

        let mut flashes = 0;
        for &pos in &positions {
            if self.grid[pos].flashed {
                flashes += 1;
            }
            self.reset(pos);
        }

        debug!(flashes, "step");

        self.flash_count += flashes;
        self.last_flash_count = flashes;
        flashes
    }

    pub fn flash_count(&self) -> usize {
        self.flash_count
    }

    /// Whether every octopus flashed during the last step.
    pub fn all_flashed(&self) -> bool {
        self.last_flash_count == self.grid.len()
    }
}

pub fn solve(input: &str) -> Result<usize> {
    let mut sim = Simulator::parse(input)?;

    for _ in 0..100 {
        sim.step();
    }

    Ok(sim.flash_count())
}

pub fn bonus(input: &str) -> Result<usize> {
    let mut sim = Simulator::parse(input)?;

    for step in 1..=MAX_STEPS {
        sim.step();
        if sim.all_flashed() {
            return Ok(step);
        }
    }

    Err(Error::unsolvable(format!(
        "octopuses did not synchronise within {MAX_STEPS} steps"
    )))
}
