use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot {operation} while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: &'static str,
    },
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("No legal moves available")]
    NoMovesAvailable,
    #[error("Invalid board size {0}")]
    InvalidBoardSize(Coord),
}

/// Why a placement, move or door pick was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("coordinates are outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
    #[error("game already ended, no new moves are accepted")]
    GameOver,
    #[error("no such door")]
    UnknownDoor,
    #[error("not a knight move")]
    NotKnightMove,
    #[error("cell was already visited")]
    AlreadyVisited,
}

pub type Result<T> = core::result::Result<T, GameError>;
