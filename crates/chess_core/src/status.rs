use crate::{board::Board, movegen::legal_moves};

/// Terminal-state query used by the game loop after every half-move.
///
/// The discriminants are the codes the loop reports: 0 ongoing, 1 checkmate,
/// 2 stalemate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GameStatus {
    Ongoing = 0,
    Checkmate = 1,
    Stalemate = 2,
}

impl GameStatus {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Status of the game for the side to move.
pub fn game_status(board: &Board) -> GameStatus {
    if !legal_moves(board).is_empty() {
        GameStatus::Ongoing
    } else if board.in_check(board.side_to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
