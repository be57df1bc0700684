//! Row-major grid addressed by `(row, col)`.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::error::{Error, Result};

pub type Pos = (usize, usize);

const AROUND: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// left, right, up, down
const BESIDE: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows_with(rows, |value| value)
    }

    pub fn from_rows_with<R>(rows: Vec<Vec<R>>, mut f: impl FnMut(R) -> T) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::parse(
                    i + 1,
                    format!("expected {width} cells, found {}", row.len()),
                ));
            }
            cells.extend(row.into_iter().map(&mut f));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn contains(&self, (row, col): Pos) -> bool {
        row < self.height && col < self.width
    }

    fn index_of(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {pos:?} outside of {}x{} grid",
            self.height,
            self.width
        );
        pos.0 * self.width + pos.1
    }

    /// The payload at `pos`. Panics when `pos` is out of range.
    pub fn at(&self, pos: Pos) -> &T {
        &self.cells[self.index_of(pos)]
    }

    pub fn at_mut(&mut self, pos: Pos) -> &mut T {
        let i = self.index_of(pos);
        &mut self.cells[i]
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.contains(pos).then(|| self.at(pos))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    fn offsets<'a>(
        &self,
        (row, col): Pos,
        offsets: &'a [(isize, isize)],
    ) -> impl Iterator<Item = Pos> + 'a {
        let (height, width) = (self.height, self.width);

        offsets.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < height && c < width).then_some((r, c))
        })
    }

    /// Up to 8 surrounding positions, without wrapping around the edges.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        self.offsets(pos, &AROUND)
    }

    pub fn adjacents(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        self.offsets(pos, &BESIDE)
    }

    pub fn cell(&self, pos: Pos) -> Cell<'_, T> {
        assert!(self.contains(pos), "position {pos:?} outside of grid");
        Cell { grid: self, pos }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell<'_, T>> {
        self.positions().map(move |pos| Cell { grid: self, pos })
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        self.at(pos)
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        self.at_mut(pos)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Cell<'g, T> {
    grid: &'g Grid<T>,
    pos: Pos,
}

impl<'g, T> Clone for Cell<'g, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, T> Copy for Cell<'g, T> {}

impl<'g, T> Cell<'g, T> {
    pub fn row(&self) -> usize {
        self.pos.0
    }

    pub fn col(&self) -> usize {
        self.pos.1
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn value(&self) -> &'g T {
        self.grid.at(self.pos)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Cell<'g, T>> {
        let grid = self.grid;
        grid.neighbors(self.pos).map(move |pos| Cell { grid, pos })
    }

    pub fn adjacents(&self) -> impl Iterator<Item = Cell<'g, T>> {
        let grid = self.grid;
        grid.adjacents(self.pos).map(move |pos| Cell { grid, pos })
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn neighbors_stay_in_bounds(height in 1usize..12, width in 1usize..12, seed in any::<usize>()) {
            let grid = Grid::new(vec![vec![(); width]; height]).unwrap();
            let pos = (seed % height, (seed / height) % width);

            let around = grid.neighbors(pos).collect::<Vec<_>>();
            prop_assert!(around.len() <= 8);
            prop_assert!(!around.contains(&pos));
            for (r, c) in around {
                prop_assert!(r < height && c < width);
                prop_assert!(r.abs_diff(pos.0) <= 1 && c.abs_diff(pos.1) <= 1);
            }
        }

        #[test]
        fn neighbor_counts_by_position(height in 3usize..12, width in 3usize..12) {
            let grid = Grid::new(vec![vec![(); width]; height]).unwrap();

            for pos @ (r, c) in grid.positions() {
                let on_row_edge = r == 0 || r == height - 1;
                let on_col_edge = c == 0 || c == width - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                prop_assert_eq!(grid.neighbors(pos).count(), expected);
            }
        }
    }
}
