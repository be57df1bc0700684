use fxhash::FxHashSet;

use crate::{
    error::Result,
    grid::{Grid, Pos},
    parse::digit_rows,
};

pub struct HeightMap {
    grid: Grid<u8>,
}

impl HeightMap {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(HeightMap {
            grid: Grid::new(digit_rows(input)?)?,
        })
    }

    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    /// Positions strictly lower than every orthogonal neighbour.
    pub fn low_points(&self) -> impl Iterator<Item = Pos> + '_ {
        self.grid.cells().filter_map(|cell| {
            cell.adjacents()
                .all(|adj| adj.value() > cell.value())
                .then_some(cell.pos())
        })
    }

    pub fn risk_level(&self) -> u32 {
        self.low_points()
            .map(|pos| 1 + self.grid[pos] as u32)
            .sum()
    }

    /// Every position that drains into `start`, bounded by height 9.
    pub fn basin(&self, start: Pos) -> Vec<Pos> {
        let mut seen = FxHashSet::default();
        let mut basin = vec![];
        let mut todo = vec![start];

        while let Some(pos) = todo.pop() {
            if self.grid[pos] == 9 || !seen.insert(pos) {
                continue;
            }

            basin.push(pos);
            todo.extend(self.grid.adjacents(pos).filter(|p| !seen.contains(p)));
        }

        basin
    }

    pub fn largest_basins(&self, n: usize) -> Vec<usize> {
        let mut sizes = self
            .low_points()
            .map(|pos| self.basin(pos).len())
            .collect::<Vec<_>>();

        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.truncate(n);
        sizes
    }
}

pub fn solve(input: &str) -> Result<u32> {
    Ok(HeightMap::parse(input)?.risk_level())
}

pub fn bonus(input: &str) -> Result<usize> {
    Ok(HeightMap::parse(input)?
        .largest_basins(3)
        .into_iter()
        .product())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn adjacents() {
        let map = HeightMap::parse(EXAMPLE).unwrap();
        let grid = map.grid();
        let heights = |pos| grid.cell(pos).adjacents().map(|c| *c.value()).collect::<Vec<_>>();

        assert_eq!(grid[(0, 2)], 9);
        assert_eq!(heights((0, 0)), vec![1, 3]);
        assert_eq!(heights((0, 9)), vec![1, 1]);
        assert_eq!(heights((4, 0)), vec![8, 8]);
        assert_eq!(heights((4, 9)), vec![7, 9]);
    }

    #[test]
    fn filling_basin() {
        let map = HeightMap::parse("98765432").unwrap();

        let mut heights = map
            .basin((0, 7))
            .into_iter()
            .map(|pos| map.grid()[pos])
            .collect::<Vec<_>>();
        heights.sort();

        assert_eq!(heights, vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(map.basin((0, 7)).len(), 7);
    }

    #[test]
    fn empty_map() {
        assert!(HeightMap::parse("").is_err());
        assert!(bonus("").is_err());
    }

    #[test]
    fn test() {
        assert_eq!(solve(EXAMPLE).unwrap(), 15);
        assert_eq!(
            HeightMap::parse(EXAMPLE).unwrap().largest_basins(3),
            vec![14, 9, 9]
        );
        assert_eq!(bonus(EXAMPLE).unwrap(), 1134);
    }
}
