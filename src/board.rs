use crate::types::{NUM_SQUARES, Player, Position};

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// 8x8 board state represented by two bitboards.
///
/// Pure data: legality lives in [`crate::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// Builds a board from raw masks. Squares set in both masks belong to black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Occupied(Player::Black)
        } else if (self.white & square) != 0 {
            Cell::Occupied(Player::White)
        } else {
            Cell::Empty
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    pub fn owner(&self, pos: Position) -> Option<Player> {
        match self.cell(pos) {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }

    /// Gives `pos` to `player`, taking it from the other side if needed.
    pub fn set(&mut self, pos: Position, player: Player) {
        let square = bit(pos.index());
        match player {
            Player::Black => {
                self.black |= square;
                self.white &= !square;
            }
            Player::White => {
                self.white |= square;
                self.black &= !square;
            }
        }
    }

    pub fn mask(&self, player: Player) -> u64 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    pub fn count_of(&self, player: Player) -> u8 {
        self.mask(player).count_ones() as u8
    }

    pub fn occupied_count(&self) -> u8 {
        (self.black | self.white).count_ones() as u8
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.occupied_count()
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (idx, cell) in board.iter_mut().enumerate() {
            *cell = match self.cell(Position::from_index(idx)) {
                Cell::Occupied(player) => player.code(),
                Cell::Empty => 0,
            };
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(idx: usize) -> u64 {
    if idx < NUM_SQUARES { 1u64 << idx } else { 0 }
}
