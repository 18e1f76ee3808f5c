//! Move legality and capture rules.
//!
//! A square is a legal move for a player when it is empty and at least one of
//! the eight rays leaving it holds a contiguous run of opponent pieces closed
//! off by one of the player's own pieces. Every such run is captured.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::trace;

use crate::board::{Board, Cell};
use crate::types::{NUM_SQUARES, Player, Position};

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// For every square, the eight rays leaving it in `DIRECTIONS` order,
/// nearest square first. Rays end at the board edge.
static RAYS: Lazy<[[Vec<Position>; 8]; NUM_SQUARES]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let origin = Position::from_index(idx);
        DIRECTIONS.map(|(dr, dc)| {
            let mut ray = Vec::new();
            let mut cursor = origin.step(dr, dc);
            while let Some(pos) = cursor {
                ray.push(pos);
                cursor = pos.step(dr, dc);
            }
            ray
        })
    })
});

/// A legal placement and the opponent pieces it converts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub position: Position,
    /// Ray by ray in fixed direction order, nearest first within a ray.
    pub captures: Vec<Position>,
}

impl Move {
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

/// Every legal move of one player against one board snapshot, in row-major
/// order. Must be recomputed after any board mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LegalMoves {
    moves: Vec<Move>,
}

impl LegalMoves {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, pos: Position) -> Option<&Move> {
        self.moves
            .binary_search_by(|mv| mv.position.cmp(&pos))
            .ok()
            .map(|i| &self.moves[i])
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.iter().map(|mv| mv.position)
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

/// Collects moves into row-major order. Later duplicates of a position are dropped.
impl FromIterator<Move> for LegalMoves {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut moves: Vec<Move> = iter.into_iter().collect();
        moves.sort_by_key(|mv| mv.position);
        moves.dedup_by_key(|mv| mv.position);
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Pieces `player` would capture by placing at `pos`.
/// Empty when `pos` is occupied or captures nothing, i.e. not a legal move.
pub fn captures(board: &Board, pos: Position, player: Player) -> Vec<Position> {
    if !board.is_empty_at(pos) {
        return Vec::new();
    }

    let opponent = player.opponent();
    let mut flips = Vec::new();

    for ray in &RAYS[pos.index()] {
        let run = ray
            .iter()
            .take_while(|&&sq| board.cell(sq) == Cell::Occupied(opponent))
            .count();
        if run > 0 && ray.get(run).is_some_and(|&sq| board.owner(sq) == Some(player)) {
            flips.extend_from_slice(&ray[..run]);
        }
    }

    flips
}

/// All legal moves for `player`, row-major.
pub fn legal_moves(board: &Board, player: Player) -> LegalMoves {
    let moves: Vec<Move> = (0..NUM_SQUARES)
        .map(Position::from_index)
        .filter_map(|position| {
            let captures = captures(board, position, player);
            (!captures.is_empty()).then_some(Move { position, captures })
        })
        .collect();

    trace!(?player, count = moves.len(), "computed legal moves");
    LegalMoves { moves }
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    (0..NUM_SQUARES)
        .map(Position::from_index)
        .any(|pos| !captures(board, pos, player).is_empty())
}

/// Places `mv.position` for `player` and converts every captured square.
///
/// Caller contract: `mv` was produced by [`legal_moves`] for this exact board
/// and player. A move computed before the last mutation is stale.
pub fn apply_move(board: &mut Board, player: Player, mv: &Move) {
    debug_assert!(
        captures(board, mv.position, player) == mv.captures,
        "apply_move() called with a move that is not legal on this board"
    );

    board.set(mv.position, player);
    for &pos in &mv.captures {
        board.set(pos, player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BOARD: u64 = u64::MAX;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn bit(row: u8, col: u8) -> u64 {
        1u64 << pos(row, col).index()
    }

    /// Small deterministic walk through the game tree for property checks.
    fn sample_boards() -> Vec<(Board, Player)> {
        let mut out = Vec::new();
        let mut board = Board::new();
        let mut player = Player::Black;

        for ply in 0..60 {
            out.push((board, player));
            let moves = legal_moves(&board, player);
            if moves.is_empty() {
                player = player.opponent();
                if !has_legal_move(&board, player) {
                    break;
                }
                continue;
            }
            let mv = &moves.as_slice()[(ply * 7) % moves.len()];
            apply_move(&mut board, player, mv);
            player = player.opponent();
        }

        out
    }

    #[test]
    fn initial_black_legal_moves_are_four_single_captures() {
        let moves = legal_moves(&Board::new(), Player::Black);

        let expected = vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]; // d3,c4,f5,e6
        assert_eq!(moves.positions().collect::<Vec<_>>(), expected);
        assert!(moves.iter().all(|mv| mv.capture_count() == 1));
        assert_eq!(moves.get(pos(2, 3)).unwrap().captures, vec![pos(3, 3)]);
    }

    #[test]
    fn occupied_square_has_no_captures() {
        let board = Board::new();

        assert!(captures(&board, pos(3, 3), Player::Black).is_empty());
        assert!(captures(&board, pos(3, 4), Player::Black).is_empty());
    }

    #[test]
    fn run_reaching_the_edge_is_not_captured() {
        // Black at (0,0) would look right across white pieces that run off the board.
        let white = bit(0, 1) | bit(0, 2) | bit(0, 3) | bit(0, 4) | bit(0, 5) | bit(0, 6) | bit(0, 7);
        let board = Board::from_bitboards(0, white);

        assert!(captures(&board, pos(0, 0), Player::Black).is_empty());
        assert!(!has_legal_move(&board, Player::Black));
    }

    #[test]
    fn rays_do_not_wrap_between_rows() {
        // (0,7) white, (1,0) black: adjacent in index order but not on a ray from (0,6).
        let board = Board::from_bitboards(bit(1, 0), bit(0, 7));

        assert!(captures(&board, pos(0, 6), Player::Black).is_empty());
    }

    #[test]
    fn captures_concatenate_every_closed_ray() {
        // Black at (4,4) can close runs to the left and upward from (4,2)/(2,4).
        let black = bit(4, 0) | bit(0, 4);
        let white = bit(4, 1) | bit(4, 2) | bit(4, 3) | bit(1, 4) | bit(2, 4) | bit(3, 4);
        let board = Board::from_bitboards(black, white);

        let caps = captures(&board, pos(4, 4), Player::Black);

        // Up ray comes before left ray; nearest square first.
        assert_eq!(
            caps,
            vec![pos(3, 4), pos(2, 4), pos(1, 4), pos(4, 3), pos(4, 2), pos(4, 1)]
        );
    }

    #[test]
    fn run_interrupted_by_empty_square_is_not_captured() {
        let board = Board::from_bitboards(bit(0, 3), bit(0, 1));

        assert!(captures(&board, pos(0, 0), Player::Black).is_empty());
    }

    #[test]
    fn apply_move_flips_exactly_the_target_and_captures() {
        for (board, player) in sample_boards() {
            for mv in &legal_moves(&board, player) {
                let mut next = board;
                apply_move(&mut next, player, mv);

                let before = board.to_array();
                let after = next.to_array();
                let changed: Vec<usize> = (0..NUM_SQUARES).filter(|&i| before[i] != after[i]).collect();

                assert_eq!(changed.len(), 1 + mv.capture_count());
                assert!(changed.iter().all(|&i| after[i] == player.code()));
                assert_eq!(next.occupied_count(), board.occupied_count() + 1);
            }
        }
    }

    #[test]
    fn legal_moves_never_include_occupied_squares() {
        for (board, player) in sample_boards() {
            for mv in &legal_moves(&board, player) {
                assert!(board.is_empty_at(mv.position));
                assert!(mv.captures.iter().all(|&c| board.owner(c) == Some(player.opponent())));
            }
        }
    }

    #[test]
    fn has_legal_move_agrees_with_legal_moves() {
        for (board, player) in sample_boards() {
            assert_eq!(has_legal_move(&board, player), !legal_moves(&board, player).is_empty());
        }
    }

    #[test]
    fn full_board_has_no_moves_for_either_side() {
        let board = Board::from_bitboards(FULL_BOARD ^ bit(7, 7), bit(7, 7));

        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(legal_moves(&board, Player::White).is_empty());
    }

    #[test]
    fn get_finds_moves_by_position() {
        let moves = legal_moves(&Board::new(), Player::White);

        assert!(moves.contains(pos(2, 4)));
        assert!(!moves.contains(pos(0, 0)));
        assert_eq!(moves.get(pos(0, 0)), None);
    }
}
