//! Error types for the core crate.
//!
//! None of these represent a broken board: they describe input the core
//! refused (a malformed FEN, malformed move text, or a move the rules forbid).

use thiserror::Error;

use crate::types::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in FEN board section, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}' in FEN")]
    BadPiece(char),
    #[error("rank {rank} of FEN board section does not describe 8 files")]
    BadRankWidth { rank: u8 },
    #[error("invalid side to move '{0}'")]
    BadSideToMove(String),
    #[error("invalid castling character '{0}'")]
    BadCastling(char),
    #[error("invalid en-passant square '{0}'")]
    BadEnPassant(String),
    #[error("invalid move counter '{0}'")]
    BadCounter(String),
    #[error("expected exactly one {0} king")]
    KingCount(&'static str),
}

/// Rejections produced by the move-text layer before anything reaches the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Invalid input length: expected 4 characters, got {0}")]
    WrongLength(usize),
    #[error("Invalid input: '{0}' is not of the form <rank><file><rank><file>")]
    OutOfRange(String),
    #[error("Invalid move: starting square cannot be the same as the destination")]
    SameSquare,
}

/// Why a proposed move was refused. Callers are expected to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("there is no piece on {0}")]
    NoPiece(Coord),
    #[error("the piece on {0} belongs to the side not on move")]
    WrongSide(Coord),
    #[error("the piece on {from} cannot move to {to}")]
    MovementRule { from: Coord, to: Coord },
    #[error("{from}{to} would leave the king in check")]
    ExposesKing { from: Coord, to: Coord },
}
