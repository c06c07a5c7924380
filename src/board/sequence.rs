use super::position::{Board, Color};
use super::reconstruct::apply_san;
use crate::pgn::{tokenize_moves, MoveRecord};

/// Ordered position sequence for one game, paired with the move records it
/// was built from (the records drive square highlighting downstream)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePositions {
    pub records: Vec<MoveRecord>,
    pub positions: Vec<Board>,
}

/// Fold the move records into board snapshots, starting from the initial
/// position. Index 0 is the initial position; one snapshot is appended per
/// present token, alternating white and black. Absent black tokens are
/// skipped without a placeholder, so an empty record list yields a
/// one-element sequence.
pub fn calculate_positions(records: &[MoveRecord]) -> Vec<Board> {
    let mut positions = vec![Board::initial()];
    let mut current = Board::initial();

    for record in records {
        current = apply_san(&current, &record.white, Color::White);
        positions.push(current.clone());

        if let Some(black) = &record.black {
            current = apply_san(&current, black, Color::Black);
            positions.push(current.clone());
        }
    }

    positions
}

/// Tokenize raw movetext and fold it into a position sequence in one step
pub fn build_game(movetext: &str) -> GamePositions {
    let records = tokenize_moves(movetext);
    let positions = calculate_positions(&records);
    GamePositions { records, positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::position::{Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_empty_record_list() {
        let positions = calculate_positions(&[]);
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0], Board::initial());
    }

    #[test]
    fn test_sequence_length_counts_plies() {
        let game = build_game("1. e4 e5 2. Nf3");
        assert_eq!(game.records.len(), 2);
        // initial + e4 + e5 + Nf3
        assert_eq!(game.positions.len(), 4);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let game = build_game("1. e4 e5");
        // Earlier snapshots must not see later moves
        assert_eq!(game.positions[0], Board::initial());
        assert_eq!(
            game.positions[1].piece_at(sq("e4")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert!(
            game.positions[1].piece_at(sq("e5")).is_none(),
            "white's snapshot must not contain black's reply"
        );
    }
}
