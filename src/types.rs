use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Cell encoding used in snapshots: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

/// A board coordinate. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when the coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES, "square index out of range: {idx}");
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Neighbouring square in direction `(dr, dc)`, if still on the board.
    pub(crate) fn step(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Move-selection policy used by the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiStrategy {
    /// Uniformly random legal move.
    #[default]
    Basic,
    /// Move with the most captures.
    Advanced,
}

/// Startup configuration. Not mutable once a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub opponent_is_ai: bool,
    pub ai_player: Player,
    pub ai_strategy: AiStrategy,
}

impl GameConfig {
    /// Two humans sharing one board.
    pub fn hot_seat() -> Self {
        Self {
            opponent_is_ai: false,
            ..Self::default()
        }
    }

    pub fn vs_ai(ai_player: Player, ai_strategy: AiStrategy) -> Self {
        Self {
            opponent_is_ai: true,
            ai_player,
            ai_strategy,
        }
    }

    pub fn is_ai(&self, player: Player) -> bool {
        self.opponent_is_ai && self.ai_player == player
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::vs_ai(Player::White, AiStrategy::Basic)
    }
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    /// `None` on a draw.
    pub winner: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameOutcome {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        let winner = if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        };
        Self {
            winner,
            black_count,
            white_count,
        }
    }

    pub fn total(&self) -> u8 {
        self.black_count + self.white_count
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// 0=empty, 1=black, 2=white, row-major.
    pub board: Vec<u8>,
    pub current_player: Player,
    pub phase: crate::game::Phase,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last turn change skipped a player who had no move.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Contract:
    /// - Square indices (0..=63) captured by the last applied move.
    /// - Empty before the first move and after a reset.
    pub flipped: Vec<u8>,
}
