pub mod position;
pub mod reconstruct;
pub mod render;
pub mod resolver;
pub mod sequence;

pub use position::{Board, Color, Piece, PieceKind, Square};
pub use reconstruct::{apply_san, ParsedSan, SanToken};
pub use render::{
    board_pieces, classify_moves, last_move_destination, ClassifiedMove, MoveClass, PlacedPiece,
};
pub use sequence::{build_game, calculate_positions, GamePositions};
