//! JavaScript surface.
//!
//! The page owns rendering and pacing: after `play`/`aiMove` it animates the
//! events from `drainEvents`, then calls `resume` to settle the next turn.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::error::GameError;
use crate::game::GameInstance;
use crate::presenter::EventLog;
use crate::types::GameConfig;

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[wasm_bindgen]
pub struct ReversiGame {
    game: GameInstance,
    events: EventLog,
}

#[wasm_bindgen]
impl ReversiGame {
    /// `config` is `{ opponentIsAi, aiPlayer, aiStrategy }`; missing fields
    /// and `undefined` fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let events = EventLog::new();
        let game = GameInstance::new(config, Box::new(events.clone()));
        Ok(Self { game, events })
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.legal_moves())?)
    }

    /// Returns `false` and changes nothing when the move is not accepted.
    pub fn play(&mut self, row: u8, col: u8) -> bool {
        match self.game.play(row, col) {
            Ok(_) => true,
            Err(err) => {
                debug!(row, col, %err, "move rejected");
                false
            }
        }
    }

    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        let mv = self.game.play_ai()?;
        Ok(serde_wasm_bindgen::to_value(&mv)?)
    }

    /// Returns the phase the game settled into.
    pub fn resume(&mut self) -> Result<JsValue, JsValue> {
        let phase = self.game.resume()?;
        Ok(serde_wasm_bindgen::to_value(&phase)?)
    }

    /// Presenter events since the last call, oldest first.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.events.drain())?)
    }

    /// Final counts and winner, or `undefined` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.outcome())?)
    }
}
