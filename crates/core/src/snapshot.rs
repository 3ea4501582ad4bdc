//! Render snapshot - an owned copy of what a frame needs.
//!
//! The board in a snapshot never contains the falling piece; renderers call
//! [`GameSnapshot::composited`] to overlay it on a copy.

use crate::board::Board;
use crate::game_state::{Rejection, Status};
use crate::placement::Piece;

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub piece: Piece,
    pub score: u32,
    pub level: u32,
    pub lines_in_level: u32,
    pub total_lines: u32,
    pub fall_interval: f64,
    pub rejection: Option<Rejection>,
    pub status: Status,
}

impl GameSnapshot {
    /// Board with the active piece OR-merged in
    pub fn composited(&self) -> Board {
        self.board.overlay(&self.piece.shape, self.piece.pos)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Cell;
    use crate::{GameConfig, GameState};

    #[test]
    fn test_snapshot_excludes_active_piece() {
        let state = GameState::new(&GameConfig::default().with_seed(3)).unwrap();
        let snap = state.snapshot();
        let piece = snap.piece;

        for (r, c) in piece.shape.filled_cells() {
            let (row, col) = (piece.pos.row + r as i16, piece.pos.col + c as i16);
            assert_eq!(snap.board.get(row, col), Some(Cell::Empty));
            assert_eq!(snap.composited().get(row, col), Some(Cell::Filled));
        }
        assert_eq!(
            snap.composited().filled_count(),
            snap.board.filled_count() + piece.shape.cell_count()
        );
        // Compositing works on a copy.
        assert_eq!(&snap.board, state.board());
    }
}
