//! PGN to Board Positions Library
//!
//! This library reconstructs per-ply chess board positions from PGN movetext.
//! Move resolution is best-effort SAN interpretation: candidate search plus
//! per-piece reachability rules, with no legal-move generation, check
//! detection, or castling-rights tracking. Unresolvable moves leave the
//! board unchanged rather than aborting the sequence.

pub mod board;
pub mod pgn;

pub use board::{
    apply_san, board_pieces, build_game, calculate_positions, classify_moves,
    last_move_destination, Board, ClassifiedMove, Color, GamePositions, MoveClass, ParsedSan,
    Piece, PieceKind, PlacedPiece, SanToken, Square,
};
pub use pgn::{parse_headers, tokenize_moves, MoveRecord};
