use crate::ai::MoveSelector;
use crate::rules::LegalMoves;
use crate::types::Position;

/// Advanced opponent: takes the move that captures the most pieces right now.
/// Ties go to the earliest square in row-major order. No lookahead.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&mut self, moves: &LegalMoves) -> Option<Position> {
        let mut best: Option<(Position, usize)> = None;
        for mv in moves {
            let captured = mv.capture_count();
            if best.is_none_or(|(_, most)| captured > most) {
                best = Some((mv.position, captured));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rules::{Move, legal_moves};
    use crate::types::Player;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn mv(row: u8, col: u8, captured: usize) -> Move {
        Move {
            position: pos(row, col),
            captures: (0..captured as u8).map(|c| pos(7, c)).collect(),
        }
    }

    #[test]
    fn empty_set_yields_none() {
        assert_eq!(GreedySelector.select_move(&LegalMoves::default()), None);
    }

    #[test]
    fn strict_maximum_wins_regardless_of_position() {
        let moves: LegalMoves = vec![mv(0, 0, 1), mv(2, 5, 2), mv(6, 6, 4), mv(7, 7, 3)]
            .into_iter()
            .collect();

        assert_eq!(GreedySelector.select_move(&moves), Some(pos(6, 6)));
    }

    #[test]
    fn tie_goes_to_row_major_earliest() {
        // Inserted out of order on purpose; collection sorts row-major.
        let moves: LegalMoves = vec![mv(5, 1, 3), mv(1, 6, 3), mv(1, 2, 1), mv(4, 0, 3)]
            .into_iter()
            .collect();

        assert_eq!(GreedySelector.select_move(&moves), Some(pos(1, 6)));
    }

    #[test]
    fn opening_position_picks_first_square() {
        let moves = legal_moves(&Board::new(), Player::Black);

        // All four openings capture one piece; d3 comes first.
        assert_eq!(GreedySelector.select_move(&moves), Some(pos(2, 3)));
    }

    #[test]
    fn prefers_the_larger_capture_on_a_real_board() {
        let bit = |row: u8, col: u8| 1u64 << pos(row, col).index();
        let black = bit(4, 0) | bit(0, 4) | bit(7, 7);
        let white = bit(4, 1) | bit(4, 2) | bit(4, 3) | bit(1, 4) | bit(2, 4) | bit(3, 4) | bit(6, 6);
        let board = Board::from_bitboards(black, white);

        let moves = legal_moves(&board, Player::Black);
        assert_eq!(moves.get(pos(5, 5)).map(Move::capture_count), Some(1));
        assert_eq!(moves.get(pos(4, 4)).map(Move::capture_count), Some(6));

        assert_eq!(GreedySelector.select_move(&moves), Some(pos(4, 4)));
    }
}
