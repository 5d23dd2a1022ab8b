use crate::grid::Grid;

/// Read-only rectangular view of a grid, used by renderers.
///
/// The rectangle is clamped to the board, so a window larger than the grid
/// simply shows the whole board.
pub struct GridWindow<'a> {
    grid: &'a Grid,
    tl: (usize, usize),
    br: (usize, usize),
}

impl<'a> GridWindow<'a> {
    pub fn new(grid: &'a Grid, top_left: (usize, usize), bottom_right: (usize, usize)) -> Self {
        let size = grid.size();
        let tl = (top_left.0.min(size), top_left.1.min(size));
        let br = (
            bottom_right.0.clamp(tl.0, size),
            bottom_right.1.clamp(tl.1, size),
        );
        Self { grid, tl, br }
    }

    /// Iterates live cells inside the window, in row-major order, as
    /// absolute `(row, col)` grid coordinates.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.tl.0..self.br.0).flat_map(move |r| {
            (self.tl.1..self.br.1)
                .filter(move |&c| self.grid.get(r, c).is_alive())
                .map(move |c| (r, c))
        })
    }

    #[inline]
    pub fn top_left(&self) -> (usize, usize) {
        self.tl
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.tl.0..self.br.0 {
            for c in self.tl.1..self.br.1 {
                f.write_str(if self.grid.get(r, c).is_alive() {
                    "█"
                } else {
                    " "
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
