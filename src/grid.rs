use crate::error::{Error, Result};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

// the 8 neighbor offsets, row/col deltas
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square board of cells with toroidal wraparound.
///
/// Cells are stored row-major. Neighbor lookups wrap each axis independently,
/// so row 0 borders row `N - 1` and likewise for columns; there is no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::Dimension(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterates the rows of the grid as slices.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Counts live cells among the 8 toroidally-wrapped neighbors of
    /// `(row, col)`. On a 1×1 board all 8 offsets land back on the cell
    /// itself, so a live cell counts 8 live neighbors.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u32 {
        let n = self.size as isize;
        NEIGHBORS
            .iter()
            .filter(|(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(n) as usize;
                let c = (col as isize + dc).rem_euclid(n) as usize;
                self.get(r, c).is_alive()
            })
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_alive(size: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive);
        }
        grid
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Grid::new(0), Err(Error::Dimension(0)));
    }

    #[test]
    fn neighbors_in_the_interior() {
        let grid = grid_with_alive(5, &[(1, 1), (1, 2), (2, 1), (3, 3)]);

        assert_eq!(grid.live_neighbors(2, 2), 4);
        assert_eq!(grid.live_neighbors(1, 1), 2);
        assert_eq!(grid.live_neighbors(4, 4), 1);
    }

    #[test]
    fn corners_wrap_on_both_axes() {
        // live cells at all four corners of a 5x5 board; each corner's 8
        // neighbors include the other three corners via wraparound
        let grid = grid_with_alive(5, &[(0, 0), (0, 4), (4, 0), (4, 4)]);

        for &(r, c) in &[(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(grid.live_neighbors(r, c), 3, "corner ({r}, {c})");
        }
    }

    #[test]
    fn edges_wrap_to_the_opposite_side() {
        let grid = grid_with_alive(5, &[(0, 2)]);

        // the cell on the top edge is a neighbor of the bottom edge
        assert_eq!(grid.live_neighbors(4, 1), 1);
        assert_eq!(grid.live_neighbors(4, 2), 1);
        assert_eq!(grid.live_neighbors(4, 3), 1);
        // and of its own row's neighbors
        assert_eq!(grid.live_neighbors(0, 1), 1);
        assert_eq!(grid.live_neighbors(1, 2), 1);

        let grid = grid_with_alive(5, &[(2, 0)]);
        assert_eq!(grid.live_neighbors(2, 4), 1);
        assert_eq!(grid.live_neighbors(1, 4), 1);
        assert_eq!(grid.live_neighbors(3, 4), 1);
    }

    #[test]
    fn single_cell_board_is_its_own_neighbor() {
        let alive = grid_with_alive(1, &[(0, 0)]);
        assert_eq!(alive.live_neighbors(0, 0), 8);

        let dead = Grid::new(1).unwrap();
        assert_eq!(dead.live_neighbors(0, 0), 0);
    }

    #[test]
    fn population_counts_live_cells() {
        let grid = grid_with_alive(4, &[(0, 0), (1, 2), (3, 3)]);

        assert_eq!(grid.population(), 3);
        assert_eq!(Grid::new(4).unwrap().population(), 0);
    }
}
