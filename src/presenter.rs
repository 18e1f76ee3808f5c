//! Boundary between the game core and whatever draws it.
//!
//! The core calls these hooks synchronously and never waits on them. Any
//! animation or pacing belongs to the presentation, which decides when to
//! call [`crate::game::GameInstance::resume`] after a move.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::board::Board;
use crate::rules::{LegalMoves, Move};
use crate::types::{GameOutcome, Player};

pub trait Presenter {
    /// Board contents changed; redraw all 64 squares.
    fn on_board_changed(&mut self, board: &Board);

    /// A human is to move. Only these squares accept input.
    fn on_legal_moves_available(&mut self, player: Player, moves: &LegalMoves);

    /// `mv` was placed; its captures may be animated in order.
    fn on_move_applied(&mut self, player: Player, mv: &Move);

    /// `skipped` had no legal move and loses the turn.
    fn on_pass(&mut self, _skipped: Player) {}

    /// Neither side can move. No input is accepted until a reset.
    fn on_game_over(&mut self, outcome: &GameOutcome);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_board_changed(&mut self, _board: &Board) {}
    fn on_legal_moves_available(&mut self, _player: Player, _moves: &LegalMoves) {}
    fn on_move_applied(&mut self, _player: Player, _mv: &Move) {}
    fn on_game_over(&mut self, _outcome: &GameOutcome) {}
}

/// A presenter notification in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    BoardChanged { board: Vec<u8> },
    LegalMovesAvailable { player: Player, moves: LegalMoves },
    MoveApplied {
        player: Player,
        #[serde(rename = "move")]
        mv: Move,
    },
    Passed { player: Player },
    GameOver { outcome: GameOutcome },
}

/// Records notifications for a consumer that polls instead of subscribing.
///
/// Clones share the same queue, so one handle can be given to the game and
/// another kept for draining.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far, oldest first.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Presenter for EventLog {
    fn on_board_changed(&mut self, board: &Board) {
        self.push(GameEvent::BoardChanged {
            board: board.to_array().to_vec(),
        });
    }

    fn on_legal_moves_available(&mut self, player: Player, moves: &LegalMoves) {
        self.push(GameEvent::LegalMovesAvailable {
            player,
            moves: moves.clone(),
        });
    }

    fn on_move_applied(&mut self, player: Player, mv: &Move) {
        self.push(GameEvent::MoveApplied {
            player,
            mv: mv.clone(),
        });
    }

    fn on_pass(&mut self, skipped: Player) {
        self.push(GameEvent::Passed { player: skipped });
    }

    fn on_game_over(&mut self, outcome: &GameOutcome) {
        self.push(GameEvent::GameOver { outcome: *outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;

    #[test]
    fn clones_share_one_queue() {
        let log = EventLog::new();
        let mut handle = log.clone();

        handle.on_pass(Player::Black);
        handle.on_board_changed(&Board::new());

        assert_eq!(log.len(), 2);
        let events = log.drain();
        assert_eq!(events[0], GameEvent::Passed { player: Player::Black });
        assert!(matches!(events[1], GameEvent::BoardChanged { .. }));
        assert!(handle.is_empty());
    }

    #[test]
    fn legal_moves_are_recorded_in_row_major_order() {
        let mut log = EventLog::new();
        let moves = legal_moves(&Board::new(), Player::Black);

        log.on_legal_moves_available(Player::Black, &moves);

        match log.drain().as_slice() {
            [GameEvent::LegalMovesAvailable { player, moves: recorded }] => {
                assert_eq!(*player, Player::Black);
                assert_eq!(recorded, &moves);
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }
}
