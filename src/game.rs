use serde::Serialize;
use tracing::{debug, info};
use web_time::{Instant, SystemTime, UNIX_EPOCH};

use crate::ai::{MoveSelector, selector_for};
use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::presenter::Presenter;
use crate::rules::{self, LegalMoves, Move};
use crate::types::{GameConfig, GameOutcome, GameState, Player, Position};

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    AwaitingHumanMove,
    AwaitingAiMove,
    /// A move was applied; waiting for [`GameInstance::resume`].
    Transitioning,
    GameOver,
}

/// One game: the board, whose turn it is, and the computer opponent.
///
/// A move is committed with [`play`](Self::play) or
/// [`play_ai`](Self::play_ai), which leaves the game in
/// [`Phase::Transitioning`] so the presentation can animate. Calling
/// [`resume`](Self::resume) then settles whose turn is next, including forced
/// passes and game over.
pub struct GameInstance {
    board: Board,
    config: GameConfig,
    current_player: Player,
    phase: Phase,
    is_pass: bool,
    flipped: Vec<u8>,
    outcome: Option<GameOutcome>,
    selector: Box<dyn MoveSelector>,
    presenter: Box<dyn Presenter>,
}

impl GameInstance {
    /// Random strategies are seeded from the wall clock.
    pub fn new(config: GameConfig, presenter: Box<dyn Presenter>) -> Self {
        Self::with_seed(config, presenter, clock_seed())
    }

    pub fn with_seed(config: GameConfig, presenter: Box<dyn Presenter>, seed: u64) -> Self {
        Self::with_selector(config, selector_for(config.ai_strategy, seed), presenter)
    }

    pub fn with_selector(
        config: GameConfig,
        selector: Box<dyn MoveSelector>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        let mut game = Self {
            board: Board::new(),
            config,
            current_player: Player::Black,
            phase: Phase::Transitioning,
            is_pass: false,
            flipped: Vec::new(),
            outcome: None,
            selector,
            presenter,
        };
        game.reset();
        game
    }

    /// Back to the four-piece opening with black to move.
    pub fn reset(&mut self) {
        info!(config = ?self.config, "starting new game");
        self.board = Board::new();
        self.is_pass = false;
        self.flipped.clear();
        self.outcome = None;
        self.presenter.on_board_changed(&self.board);
        self.begin_turn(Player::Black);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Set once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Legal moves of the current player, computed against the board as it is now.
    pub fn legal_moves(&self) -> LegalMoves {
        rules::legal_moves(&self.board, self.current_player)
    }

    /// Commits a human move for the current player.
    pub fn play(&mut self, row: u8, col: u8) -> GameResult<Move> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::AwaitingAiMove => return Err(GameError::NotHumanTurn),
            Phase::Transitioning => {
                return Err(GameError::WrongPhase {
                    action: "play",
                    phase: self.phase,
                });
            }
            Phase::AwaitingHumanMove => {}
        }

        let pos = Position::new(row, col).ok_or(GameError::OutOfRange { row, col })?;
        let mv = self
            .legal_moves()
            .get(pos)
            .cloned()
            .ok_or(GameError::IllegalMove { row, col })?;

        self.commit(mv)
    }

    /// Lets the configured strategy choose and commit a move for the AI player.
    pub fn play_ai(&mut self) -> GameResult<Move> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::AwaitingHumanMove => return Err(GameError::NotAiTurn),
            Phase::Transitioning => {
                return Err(GameError::WrongPhase {
                    action: "play_ai",
                    phase: self.phase,
                });
            }
            Phase::AwaitingAiMove => {}
        }

        let legal = self.legal_moves();
        if legal.is_empty() {
            return Err(GameError::NoLegalMoves(self.current_player));
        }

        let started = Instant::now();
        let selected = self
            .selector
            .select_move(&legal)
            .ok_or(GameError::NoLegalMoves(self.current_player))?;
        let mv = legal.get(selected).cloned().ok_or(GameError::SelectorFailed)?;
        debug!(
            player = ?self.current_player,
            row = selected.row,
            col = selected.col,
            elapsed_us = started.elapsed().as_micros() as u64,
            "AI selected move"
        );

        self.commit(mv)
    }

    /// Settles the next turn after a committed move.
    pub fn resume(&mut self) -> GameResult<Phase> {
        if self.phase != Phase::Transitioning {
            return Err(GameError::WrongPhase {
                action: "resume",
                phase: self.phase,
            });
        }

        self.begin_turn(self.current_player.opponent());
        Ok(self.phase)
    }

    /// [`play`](Self::play) followed by [`resume`](Self::resume), for callers
    /// that do not animate.
    pub fn play_and_resume(&mut self, row: u8, col: u8) -> GameResult<Move> {
        let mv = self.play(row, col)?;
        self.resume()?;
        Ok(mv)
    }

    pub fn play_ai_and_resume(&mut self) -> GameResult<Move> {
        let mv = self.play_ai()?;
        self.resume()?;
        Ok(mv)
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            phase: self.phase,
            black_count,
            white_count,
            is_game_over: self.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameOutcome {
        let (black_count, white_count) = self.board.count();
        GameOutcome::from_counts(black_count, white_count)
    }

    fn commit(&mut self, mv: Move) -> GameResult<Move> {
        let player = self.current_player;
        rules::apply_move(&mut self.board, player, &mv);

        self.is_pass = false;
        self.flipped = mv.captures.iter().map(|pos| pos.index() as u8).collect();
        self.phase = Phase::Transitioning;
        debug!(
            ?player,
            row = mv.position.row,
            col = mv.position.col,
            captured = mv.capture_count(),
            "move applied"
        );

        self.presenter.on_move_applied(player, &mv);
        self.presenter.on_board_changed(&self.board);
        Ok(mv)
    }

    /// `next` moves if it can; otherwise the other side moves again; otherwise
    /// the game ends.
    fn begin_turn(&mut self, next: Player) {
        if rules::has_legal_move(&self.board, next) {
            self.enter_turn(next);
            return;
        }

        let other = next.opponent();
        if rules::has_legal_move(&self.board, other) {
            debug!(skipped = ?next, "forced pass");
            self.is_pass = true;
            self.presenter.on_pass(next);
            self.enter_turn(other);
            return;
        }

        self.end_game();
    }

    fn enter_turn(&mut self, player: Player) {
        self.current_player = player;
        if self.config.is_ai(player) {
            self.phase = Phase::AwaitingAiMove;
        } else {
            self.phase = Phase::AwaitingHumanMove;
            let legal = self.legal_moves();
            self.presenter.on_legal_moves_available(player, &legal);
        }
    }

    fn end_game(&mut self) {
        let outcome = self.to_game_result();
        info!(
            black = outcome.black_count,
            white = outcome.white_count,
            winner = ?outcome.winner,
            "game over"
        );
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        self.presenter.on_game_over(&outcome);
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.is_pass = false;
        self.flipped.clear();
        self.outcome = None;
        self.begin_turn(current_player);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
