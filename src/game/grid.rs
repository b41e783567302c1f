/// The two states a cell can be in. Internal state is this enum; the
/// `O`/space glyphs used on screen belong to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height} (both must be >= 1)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// A fixed-size rectangular board of cells.
///
/// Indexing is zero-based `(row, col)` with `row < height` and
/// `col < width`. Cells outside the board have no wraparound: the board
/// edge is a wall of permanently dead cells, which is what [`Grid::get_or`]
/// encodes for the neighbor scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: Cell) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// Create a grid of the same dimensions as this one, filled with `fill`.
    ///
    /// Infallible because `self` already proves the dimensions are valid;
    /// the generation transition uses this so it cannot fail.
    pub fn like(&self, fill: Cell) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            cells: vec![fill; self.width * self.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `(row, col)`, failing if the coordinate is off-grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.index(row, col)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Get the cell at a possibly off-grid coordinate, returning `default`
    /// for anything outside the board.
    ///
    /// Takes signed coordinates so the neighbor scan can probe one step past
    /// every edge without overflow gymnastics at row or column zero.
    pub fn get_or(&self, row: i64, col: i64, default: Cell) -> Cell {
        if row < 0 || col < 0 {
            return default;
        }
        self.index(row as usize, col as usize)
            .map_or(default, |i| self.cells[i])
    }

    /// Set the cell at `(row, col)`, failing if the coordinate is off-grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let i = self
            .index(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Count the live cells on the whole board (display only).
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_uniform() {
        let grid = Grid::new(5, 3, Cell::Dead).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(grid.get(row, col), Ok(Cell::Dead));
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5, Cell::Dead),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0, Cell::Dead),
            Err(GridError::InvalidDimensions { width: 5, height: 0 })
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 4, Cell::Dead).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();
        assert_eq!(grid.get(2, 1), Ok(Cell::Alive));
        assert_eq!(grid.get(1, 2), Ok(Cell::Dead));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 4, Cell::Dead).unwrap();
        assert_eq!(grid.get(4, 0), Err(GridError::OutOfBounds { row: 4, col: 0 }));
        assert_eq!(grid.get(0, 4), Err(GridError::OutOfBounds { row: 0, col: 4 }));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(4, 4, Cell::Dead).unwrap();
        assert_eq!(
            grid.set(9, 9, Cell::Alive),
            Err(GridError::OutOfBounds { row: 9, col: 9 })
        );
    }

    #[test]
    fn test_get_or_resolves_off_grid_to_default() {
        let mut grid = Grid::new(4, 4, Cell::Alive).unwrap();
        grid.set(0, 0, Cell::Dead).unwrap();

        assert_eq!(grid.get_or(-1, 0, Cell::Dead), Cell::Dead);
        assert_eq!(grid.get_or(0, -1, Cell::Dead), Cell::Dead);
        assert_eq!(grid.get_or(4, 0, Cell::Dead), Cell::Dead);
        assert_eq!(grid.get_or(0, 4, Cell::Dead), Cell::Dead);
        // In-bounds queries ignore the default.
        assert_eq!(grid.get_or(0, 0, Cell::Alive), Cell::Dead);
        assert_eq!(grid.get_or(1, 1, Cell::Dead), Cell::Alive);
    }

    #[test]
    fn test_like_copies_dimensions_not_contents() {
        let grid = Grid::new(6, 2, Cell::Alive).unwrap();
        let fresh = grid.like(Cell::Dead);
        assert_eq!(fresh.width(), 6);
        assert_eq!(fresh.height(), 2);
        assert_eq!(fresh.live_count(), 0);
    }

    #[test]
    fn test_live_count() {
        let mut grid = Grid::new(4, 4, Cell::Dead).unwrap();
        assert_eq!(grid.live_count(), 0);
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.live_count(), 1);
        grid.set(3, 3, Cell::Alive).unwrap();
        assert_eq!(grid.live_count(), 2);
    }
}
