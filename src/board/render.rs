use serde::Serialize;

use super::position::{Board, Square};
use crate::pgn::MoveRecord;

/// Boundary transforms for rendering collaborators: flattening a board into
/// a piece list, deriving the highlight square for a ply, and marking
/// highlighted moves. No board logic lives here.

/// One piece placement for a board renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedPiece {
    /// Two-character piece identifier ("wp" .. "bk")
    pub piece: String,
    /// Algebraic square name ("a1" .. "h8")
    pub square: String,
}

/// Flatten a board into {piece identifier, square name} pairs, scanning
/// row-major from rank 8
pub fn board_pieces(board: &Board) -> Vec<PlacedPiece> {
    let mut pieces = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let square = Square { row, col };
            if let Some(piece) = board.piece_at(square) {
                pieces.push(PlacedPiece {
                    piece: piece.ui_name().to_string(),
                    square: square.to_algebraic(),
                });
            }
        }
    }
    pieces
}

/// Destination square of the given ply's move text, for highlighting.
/// Ply 1 is white's first move. Ply 0 and out-of-range plies yield None.
/// Only the destination is derived; the origin would require replaying the
/// game, which is the position sequence's job.
pub fn last_move_destination(records: &[MoveRecord], ply: usize) -> Option<String> {
    if ply == 0 {
        return None;
    }

    let record = records.get((ply - 1) / 2)?;
    let is_black = (ply - 1) % 2 == 1;
    let token = if is_black {
        record.black.as_deref()?
    } else {
        record.white.as_str()
    };

    // Strip symbols and piece letters, keep the trailing two characters
    let clean: Vec<char> = token
        .chars()
        .filter(|c| !matches!(c, '+' | '#' | '!' | '?' | 'x' | '='))
        .filter(|c| !matches!(c, 'K' | 'Q' | 'R' | 'B' | 'N'))
        .collect();
    if clean.is_empty() {
        return None;
    }
    let start = clean.len().saturating_sub(2);
    Some(clean[start..].iter().collect())
}

/// Highlight classification attached to a move record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveClass {
    Brilliant,
}

/// A move record paired with its highlight classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedMove {
    pub number: u32,
    pub white: String,
    pub black: Option<String>,
    pub classification: Option<MoveClass>,
}

/// Mark the records whose move number appears in `brilliant_numbers`
pub fn classify_moves(records: &[MoveRecord], brilliant_numbers: &[u32]) -> Vec<ClassifiedMove> {
    records
        .iter()
        .map(|record| ClassifiedMove {
            number: record.number,
            white: record.white.clone(),
            black: record.black.clone(),
            classification: if brilliant_numbers.contains(&record.number) {
                Some(MoveClass::Brilliant)
            } else {
                None
            },
        })
        .collect()
}
