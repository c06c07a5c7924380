use super::position::{Board, Color, PieceKind, Square};

/// Origin-square resolution for SAN tokens
///
/// A SAN token names only the destination (plus optional file/rank hints), so
/// the moving piece has to be found by searching the board. The scan visits
/// all 64 squares row-major from rank 8 to rank 1, file a to file h, keeps
/// pieces of the requested kind and color, drops candidates that violate a
/// disambiguation hint, and drops candidates whose reachability rule fails.
///
/// The FIRST surviving candidate in scan order wins. When a position leaves
/// more than one candidate (under-disambiguated input, or a rule that is
/// more permissive than real legality) the scan order is what keeps the
/// output reproducible, so it must not change.
///
/// The reachability rules are deliberately weaker than chess legality: there
/// is no check or pin detection, and the en passant rule only looks at rank
/// and adjacency, not at whether the neighboring pawn just moved two squares.

/// Find the origin square of the `color` piece of `kind` that can move to
/// `dest`, or None when no candidate survives filtering.
pub fn find_origin(
    board: &Board,
    kind: PieceKind,
    dest: Square,
    file_hint: Option<usize>,
    rank_hint: Option<usize>,
    color: Color,
) -> Option<Square> {
    for row in 0..8 {
        for col in 0..8 {
            let from = Square { row, col };
            let piece = match board.piece_at(from) {
                Some(p) => p,
                None => continue,
            };
            if piece.kind != kind || piece.color != color {
                continue;
            }
            if let Some(hint) = file_hint {
                if col != hint {
                    continue;
                }
            }
            if let Some(hint) = rank_hint {
                if row != hint {
                    continue;
                }
            }
            if can_reach(board, kind, from, dest, color) {
                return Some(from);
            }
        }
    }
    None
}

/// Per-piece-kind reachability from `from` to `to`, ignoring check legality
pub fn can_reach(board: &Board, kind: PieceKind, from: Square, to: Square, color: Color) -> bool {
    let d_col = to.col as i8 - from.col as i8;
    let d_row = to.row as i8 - from.row as i8;

    match kind {
        PieceKind::Pawn => {
            // White moves toward row 0, black toward row 7
            let direction: i8 = match color {
                Color::White => -1,
                Color::Black => 1,
            };

            // Single push to an empty square
            if d_col == 0 && d_row == direction && board.piece_at(to).is_none() {
                return true;
            }

            // Double push from the starting rank, both squares empty
            let start_row = match color {
                Color::White => 6,
                Color::Black => 1,
            };
            if d_col == 0 && from.row == start_row && d_row == 2 * direction {
                let intermediate = match from.shifted(direction, 0) {
                    Some(sq) => sq,
                    None => return false,
                };
                return board.piece_at(to).is_none() && board.piece_at(intermediate).is_none();
            }

            // Diagonal step: ordinary capture, or the en passant heuristic
            if d_col.abs() == 1 && d_row == direction {
                if let Some(target) = board.piece_at(to) {
                    return target.color != color;
                }
                // Empty destination: allowed only from the en passant rank
                // with an enemy pawn directly beside the origin on the
                // destination's file. No double-push verification.
                let en_passant_row = match color {
                    Color::White => 3,
                    Color::Black => 4,
                };
                if from.row == en_passant_row {
                    let beside = Square {
                        row: from.row,
                        col: to.col,
                    };
                    if let Some(adjacent) = board.piece_at(beside) {
                        return adjacent.kind == PieceKind::Pawn && adjacent.color != color;
                    }
                }
                return false;
            }

            false
        }
        PieceKind::Knight => {
            (d_col.abs() == 2 && d_row.abs() == 1) || (d_col.abs() == 1 && d_row.abs() == 2)
        }
        PieceKind::Bishop => {
            if d_col.abs() != d_row.abs() {
                return false;
            }
            path_clear(board, from, to)
        }
        PieceKind::Rook => {
            if d_col != 0 && d_row != 0 {
                return false;
            }
            path_clear(board, from, to)
        }
        PieceKind::Queen => {
            if d_col != 0 && d_row != 0 && d_col.abs() != d_row.abs() {
                return false;
            }
            path_clear(board, from, to)
        }
        PieceKind::King => {
            // One step in any direction, or the two-file sideways step that
            // castling notation implies (the rook is moved elsewhere)
            (d_col.abs() <= 1 && d_row.abs() <= 1) || (d_col.abs() == 2 && d_row == 0)
        }
    }
}

/// Whether every square strictly between `from` and `to` is empty.
/// Origin and destination are not checked; destination occupancy is the
/// caller's concern (capture vs. non-capture).
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_col = (to.col as i8 - from.col as i8).signum();
    let d_row = (to.row as i8 - from.row as i8).signum();

    let mut col = from.col as i8 + d_col;
    let mut row = from.row as i8 + d_row;

    while col != to.col as i8 || row != to.row as i8 {
        // A walk between misaligned squares leaves the board; treat that
        // as blocked rather than indexing out of range
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return false;
        }
        let square = Square {
            row: row as usize,
            col: col as usize,
        };
        if board.piece_at(square).is_some() {
            return false;
        }
        col += d_col;
        row += d_row;
    }

    true
}
