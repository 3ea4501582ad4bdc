//! Piece placement - spawning and movement/rotation legality
//!
//! Every check computes a candidate (position or rotated shape) and delegates
//! to [`Board::fits`]. Nothing here mutates the board or the piece.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Position};
use crate::shape::{Shape, ShapeKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub pos: Position,
}

impl Piece {
    /// Piece of `kind` in spawn orientation at `pos`
    pub fn new(kind: ShapeKind, pos: Position) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            pos,
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.pos)
    }

    pub fn moved_to(&self, pos: Position) -> Self {
        Self { pos, ..*self }
    }

    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }
}

/// Half-open range of legal spawn columns for a shape of `width`.
///
/// Keeps the shape strictly inside the side walls: `[1, size - width - 1)`.
pub fn spawn_columns(board_size: usize, width: usize) -> std::ops::Range<i16> {
    let end = board_size.saturating_sub(width + 1).max(2);
    1..end as i16
}

/// Pick a random shape and a random legal column; row is always 0.
pub fn spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Piece {
    let kind = *ShapeKind::ALL.choose(rng).unwrap_or(&ShapeKind::Bar);
    let columns = spawn_columns(board.size(), kind.shape().cols());
    let col = rng.gen_range(columns);
    Piece::new(kind, Position::new(0, col))
}

pub fn can_move_left(board: &Board, piece: &Piece) -> bool {
    board.fits(&piece.shape, piece.pos.left())
}

pub fn can_move_right(board: &Board, piece: &Piece) -> bool {
    board.fits(&piece.shape, piece.pos.right())
}

pub fn can_move_down(board: &Board, piece: &Piece) -> bool {
    board.fits(&piece.shape, piece.pos.down())
}

/// Naive in-place rotation check; no kicks are tried.
pub fn can_rotate_cw(board: &Board, piece: &Piece) -> bool {
    board.fits(&piece.shape.rotate_cw(), piece.pos)
}

pub fn can_rotate_ccw(board: &Board, piece: &Piece) -> bool {
    board.fits(&piece.shape.rotate_ccw(), piece.pos)
}

/// A piece blocked while still on the spawn row ends the game.
pub fn is_game_over(board: &Board, piece: &Piece) -> bool {
    !can_move_down(board, piece) && piece.pos.row == 0
}
