use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod presenter;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::{Board, Cell};
pub use error::{GameError, GameResult};
pub use game::{GameInstance, Phase};
pub use presenter::{EventLog, GameEvent, NullPresenter, Presenter};
pub use rules::{LegalMoves, Move};
pub use types::{AiStrategy, GameConfig, GameOutcome, GameState, Player, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
