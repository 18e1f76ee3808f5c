//! Error types for the game controller.
//!
//! Every variant is a rejected request; the board is left untouched.

use crate::game::Phase;
use crate::types::Player;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("cannot {action} while {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("it is not the player's turn")]
    NotHumanTurn,

    #[error("it is not AI's turn")]
    NotAiTurn,

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Player),

    #[error("AI selected an illegal move")]
    SelectorFailed,
}

pub type GameResult<T> = Result<T, GameError>;
