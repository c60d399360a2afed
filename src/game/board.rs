pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    /// Wire encoding used by the oracle protocol (0 = empty, 1/2 = players).
    pub fn code(self) -> u8 {
        match self {
            Piece::Empty => 0,
            Piece::PlayerOne => 1,
            Piece::PlayerTwo => 2,
        }
    }
}

/// The 6x7 cell store. Row 0 is the top, row 5 the bottom. Within any column
/// the occupied cells are contiguous from the bottom; the only way to place a
/// piece is `drop_piece`, which preserves that invariant by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Piece; COLS]; ROWS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            cells: [[Piece::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Piece::Empty
    }

    /// Drop a piece in a column under gravity. Returns the row where it
    /// landed, or `None` if the column is out of range or already full.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }

        // Lowest empty row; the full-column check above guarantees one exists.
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Piece::Empty {
                self.cells[row][col] = piece;
                return Some(row);
            }
        }

        unreachable!("column cannot be full after is_column_full returned false");
    }

    /// True iff every cell of the top row is occupied. Under gravity this is
    /// equivalent to the whole board being full.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still accept a piece.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(grid.get(row, col), Piece::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut grid = Grid::new();

        let row = grid.drop_piece(3, Piece::PlayerOne).unwrap();
        assert_eq!(row, 5);
        assert_eq!(grid.get(5, 3), Piece::PlayerOne);

        let row = grid.drop_piece(3, Piece::PlayerTwo).unwrap();
        assert_eq!(row, 4);
        assert_eq!(grid.get(4, 3), Piece::PlayerTwo);
    }

    #[test]
    fn test_full_column_rejects_drop() {
        let mut grid = Grid::new();
        for _ in 0..ROWS {
            grid.drop_piece(0, Piece::PlayerOne).unwrap();
        }

        assert!(grid.is_column_full(0));
        let before = grid;
        assert_eq!(grid.drop_piece(0, Piece::PlayerTwo), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_out_of_range_column_rejects_drop() {
        let mut grid = Grid::new();
        assert_eq!(grid.drop_piece(COLS, Piece::PlayerOne), None);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_full_board() {
        let mut grid = Grid::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                grid.drop_piece(col, Piece::PlayerOne).unwrap();
            }
        }
        assert!(grid.is_full());
        assert!(grid.open_columns().is_empty());
    }

    #[test]
    fn test_open_columns_shrink_as_columns_fill() {
        let mut grid = Grid::new();
        assert_eq!(grid.open_columns(), vec![0, 1, 2, 3, 4, 5, 6]);

        for _ in 0..ROWS {
            grid.drop_piece(2, Piece::PlayerOne).unwrap();
        }
        assert_eq!(grid.open_columns(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_piece_wire_codes() {
        assert_eq!(Piece::Empty.code(), 0);
        assert_eq!(Piece::PlayerOne.code(), 1);
        assert_eq!(Piece::PlayerTwo.code(), 2);
    }
}
