//! Board module - manages the game grid
//!
//! The board is a square `size x size` grid that includes its own walls:
//! column 0, column `size - 1` and row `size - 1` are permanently filled.
//! The top row has no wall sentinel. Uses a flat row-major buffer.
//! Coordinates: (row, col) where row grows downward from 0 and col grows rightward.

use crate::shape::Shape;
use crate::types::{Cell, MAX_BOARD_SIZE};

/// Signed offset of a shape's local origin on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    pub fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    pub fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    pub fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }
}

/// The game board with walls on the left, right and bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with its three walls filled and an empty interior
    ///
    /// # Panics
    ///
    /// Panics if `size < 3` or `size > MAX_BOARD_SIZE`; use
    /// [`crate::GameConfig::validate`] for user input.
    pub fn new(size: usize) -> Self {
        assert!(size >= 3, "board of size {size} has no interior");
        assert!(
            size <= MAX_BOARD_SIZE,
            "board of size {size} exceeds {MAX_BOARD_SIZE}"
        );
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
        };
        for row in 0..size {
            board.cells[row * size] = Cell::Filled;
            board.cells[row * size + size - 1] = Cell::Filled;
        }
        let bottom = (size - 1) * size;
        for cell in &mut board.cells[bottom..bottom + size] {
            *cell = Cell::Filled;
        }
        board
    }

    /// Side length, walls included
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        let size = self.size as i16;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(row as usize * self.size + col as usize)
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether (row, col) is one of the permanent wall cells
    pub fn is_wall(&self, row: i16, col: i16) -> bool {
        let last = self.size as i16 - 1;
        self.index(row, col).is_some() && (col == 0 || col == last || row == last)
    }

    /// Set an interior cell.
    ///
    /// Returns false for out-of-bounds and wall coordinates; walls never change.
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        if self.is_wall(row, col) {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether `shape` placed at `pos` overlaps nothing.
    ///
    /// Only cells with value 1 are tested. A 1-cell that maps outside the grid
    /// counts as blocked, so the open top row is bounded as well as the walls.
    pub fn fits(&self, shape: &Shape, pos: Position) -> bool {
        shape.filled_cells().all(|(r, c)| {
            matches!(
                self.get(pos.row + r as i16, pos.col + c as i16),
                Some(Cell::Empty)
            )
        })
    }

    /// Number of filled cells in a row (walls included)
    pub fn filled_in_row(&self, row: usize) -> usize {
        self.row(row)
            .map_or(0, |cells| cells.iter().filter(|c| c.is_filled()).count())
    }

    /// Check if a clearable row is completely filled.
    ///
    /// The bottom wall row is always full and never counts.
    pub fn is_row_full(&self, row: usize) -> bool {
        row + 1 < self.size && self.filled_in_row(row) == self.size
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Total filled cells on the board, walls included
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// OR the shape's cells into the board without any checks, skipping cells
    /// that fall outside the grid.
    fn write_shape(&mut self, shape: &Shape, pos: Position) {
        for (r, c) in shape.filled_cells() {
            if let Some(idx) = self.index(pos.row + r as i16, pos.col + c as i16) {
                self.cells[idx] = self.cells[idx].or(Cell::Filled);
            }
        }
    }

    /// Composite `shape` at `pos` onto a copy of the board.
    ///
    /// The board itself is left untouched.
    pub fn overlay(&self, shape: &Shape, pos: Position) -> Board {
        let mut copy = self.clone();
        copy.write_shape(shape, pos);
        copy
    }

    /// Merge a settled piece into the board and clear every full row.
    ///
    /// Returns the number of rows cleared; the bottom wall row is never counted
    /// or removed.
    pub fn merge_and_compact(&mut self, shape: &Shape, pos: Position) -> usize {
        self.write_shape(shape, pos);
        self.clear_full_rows()
    }

    /// Clear all full rows above the bottom wall, shifting the rows above down.
    ///
    /// Two-pointer compaction from the bottom up, with no allocation.
    /// Freed rows at the top are reset to empty-with-walls.
    pub fn clear_full_rows(&mut self) -> usize {
        let size = self.size;
        let mut cleared = 0;
        // Row `size - 1` is the wall and stays in place.
        let mut write_row = size - 1;

        for read_row in (0..size - 1).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * size;
                self.cells.copy_within(src..src + size, write_row * size);
            }
        }

        for row in 0..write_row {
            self.reset_row(row);
        }

        cleared
    }

    fn reset_row(&mut self, row: usize) {
        let size = self.size;
        let start = row * size;
        for cell in &mut self.cells[start..start + size] {
            *cell = Cell::Empty;
        }
        self.cells[start] = Cell::Filled;
        self.cells[start + size - 1] = Cell::Filled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(22);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 21), Some(21));
        assert_eq!(board.index(1, 0), Some(22));
        assert_eq!(board.index(21, 21), Some(483));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 22), None);
        assert_eq!(board.index(22, 0), None);
    }

    #[test]
    fn test_largest_board_indexes_every_corner() {
        let n = MAX_BOARD_SIZE as i16;
        let board = Board::new(MAX_BOARD_SIZE);
        assert_eq!(board.index(n - 1, n - 1), Some(MAX_BOARD_SIZE * MAX_BOARD_SIZE - 1));
        assert_eq!(board.index(n, 0), None);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_oversized_board_panics() {
        let _ = Board::new(MAX_BOARD_SIZE + 1);
    }

    #[test]
    fn test_walls_cannot_be_overwritten() {
        let mut board = Board::new(8);
        assert!(!board.set(3, 0, Cell::Empty));
        assert!(!board.set(3, 7, Cell::Empty));
        assert!(!board.set(7, 4, Cell::Empty));
        assert!(!board.set(-1, 4, Cell::Filled));
        assert_eq!(board.get(3, 0), Some(Cell::Filled));

        assert!(board.set(0, 3, Cell::Filled));
        assert_eq!(board.get(0, 3), Some(Cell::Filled));
    }

    #[test]
    fn test_top_row_has_only_side_walls() {
        let board = Board::new(8);
        assert_eq!(board.filled_in_row(0), 2);
        assert!(board.is_wall(0, 0));
        assert!(!board.is_wall(0, 1));
    }

    #[test]
    fn test_bottom_wall_is_never_full_for_clearing() {
        let board = Board::new(8);
        assert_eq!(board.filled_in_row(7), 8);
        assert!(!board.is_row_full(7));

        let mut copy = board.clone();
        assert_eq!(copy.clear_full_rows(), 0);
        assert_eq!(copy, board);
    }

    #[test]
    fn test_fits_rejects_out_of_range_top() {
        let board = Board::new(8);
        let bar = crate::shape::ShapeKind::Bar.shape();
        assert!(board.fits(&bar, Position::new(0, 3)));
        assert!(!board.fits(&bar, Position::new(-1, 3)));
    }

    #[test]
    fn test_fits_ignores_zero_cells_outside_grid() {
        // Only the top-left cell is filled; the rest of the matrix may hang
        // over the right edge without being inspected.
        let hook = Shape::from_rows(&[&[1, 0, 0], &[1, 0, 0]]).unwrap();
        let board = Board::new(8);
        assert!(board.fits(&hook, Position::new(2, 6)));
        assert!(!board.fits(&hook, Position::new(2, 7)));
    }
}
