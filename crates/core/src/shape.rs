//! Shape module - piece matrices and rotation
//!
//! A shape is a small rectangular 0/1 matrix in its own local frame, origin at
//! the top-left cell. Rotation always builds a fresh matrix from the current
//! one; there is a single primitive ([`Shape::rotate_cw`]) and the
//! anticlockwise turn is three clockwise turns.

use crate::types::MAX_SHAPE_DIM;

/// The five shapes of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// 4x1 vertical bar
    Bar,
    /// L: three tall with a foot to the right
    L,
    /// J: three tall with a foot to the left
    J,
    /// S: offset pair of vertical dominoes
    S,
    /// 2x2 square
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Bar,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Square,
    ];

    /// Spawn orientation of this kind
    pub fn shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            ShapeKind::Bar => &[&[1], &[1], &[1], &[1]],
            ShapeKind::L => &[&[1, 0], &[1, 0], &[1, 1]],
            ShapeKind::J => &[&[0, 1], &[0, 1], &[1, 1]],
            ShapeKind::S => &[&[0, 1], &[1, 1], &[1, 0]],
            ShapeKind::Square => &[&[1, 1], &[1, 1]],
        };
        Shape::from_table(rows)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Bar => "bar",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Square => "square",
        }
    }
}

/// Immutable 0/1 matrix of at most 4x4 cells
///
/// Cells outside `rows x cols` are always zero, so derived equality compares
/// exactly the meaningful region plus the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices.
    ///
    /// Returns `None` for empty, ragged or oversized input, or any value other
    /// than 0 or 1.
    ///
    /// ```
    /// use textris_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Shape> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width || row.iter().any(|&v| v > 1)) {
            return None;
        }
        Some(Self::from_table(rows))
    }

    fn from_table(rows: &[&[u8]]) -> Shape {
        let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v;
            }
        }
        Shape {
            rows: rows.len() as u8,
            cols: rows.first().map_or(0, |row| row.len()) as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Width of the matrix
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell value at local `(r, c)`; zero outside the matrix
    pub fn get(&self, r: usize, c: usize) -> u8 {
        if r < self.rows() && c < self.cols() {
            self.cells[r][c]
        } else {
            0
        }
    }

    /// Local coordinates of every cell with value 1, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c] == 1)
    }

    pub fn cell_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.rows();
        let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        // reversed[j] = self[rows - 1 - j]; out[i][j] = reversed[j][i]
        for (i, out_row) in cells.iter_mut().enumerate().take(self.cols()) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Rotate 90° anticlockwise as three clockwise turns.
    pub fn rotate_ccw(&self) -> Shape {
        self.rotate_cw().rotate_cw().rotate_cw()
    }
}
