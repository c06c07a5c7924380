use super::position::{Board, Color, Piece, PieceKind, Square};
use super::resolver::find_origin;

/// SAN move application
///
/// ## Token grammar handled here
/// ```text
/// O-O / 0-0 / O-O-O / 0-0-0        castling (fixed square relocation)
/// [KQRBN]? [a-h]? [1-8]? x? <file><rank> (=[QRBN])? [+#!?]*
/// ```
/// Check, mate and annotation symbols are stripped before parsing. The last
/// two characters of what remains are the destination; whatever sits between
/// the piece letter and the destination is disambiguation. Pawn captures
/// carry their origin file as the token's first character ("exd5"), which is
/// read from the unstripped token when no other disambiguation produced one.
///
/// Application is total: a token whose piece cannot be located (or that is
/// too short to parse) leaves the board unchanged, and the failure is
/// reported on stderr. Castling relocates king and rook without checking
/// that either still had the right to castle.

/// Parsed form of one SAN token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSan {
    /// `O-O` / `0-0` (kingside) or `O-O-O` / `0-0-0` (queenside)
    Castle { kingside: bool },
    /// Any other move form
    Standard(SanToken),
}

/// The generic (non-castling) SAN move form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanToken {
    /// Moving piece kind; pawn when the token has no leading capital
    pub kind: PieceKind,
    /// Origin file disambiguation, as a column index
    pub file_hint: Option<usize>,
    /// Origin rank disambiguation, as a row index
    pub rank_hint: Option<usize>,
    /// Destination square, from the token's trailing two characters
    pub dest: Square,
    pub is_capture: bool,
    /// Promotion target from an `=<PieceLetter>` suffix
    pub promotion: Option<PieceKind>,
}

impl ParsedSan {
    /// Parse a SAN token. None means the token is too short or malformed;
    /// callers treat that the same as an unresolvable move.
    pub fn parse(token: &str) -> Option<ParsedSan> {
        // Castling is matched verbatim, before any stripping
        if token == "O-O" || token == "0-0" {
            return Some(ParsedSan::Castle { kingside: true });
        }
        if token == "O-O-O" || token == "0-0-0" {
            return Some(ParsedSan::Castle { kingside: false });
        }

        let mut work: String = token
            .chars()
            .filter(|c| !matches!(c, '+' | '#' | '!' | '?'))
            .collect();

        let is_capture = work.contains('x');
        work = work.replace('x', "");

        let mut promotion = None;
        if let Some(eq) = work.find('=') {
            promotion = work[eq + 1..].chars().next().and_then(PieceKind::from_san_letter);
            work.truncate(eq);
        }

        let mut chars: Vec<char> = work.chars().collect();

        let mut kind = PieceKind::Pawn;
        if let Some(&first) = chars.first() {
            if first.is_ascii_uppercase() && first != 'O' {
                kind = PieceKind::from_san_letter(first)?;
                chars.remove(0);
            }
        }

        if chars.len() < 2 {
            return None;
        }

        let dest_file = chars[chars.len() - 2];
        let dest_rank = chars[chars.len() - 1];
        let dest = Square::from_file_rank(dest_file, dest_rank)?;

        let disambig = &chars[..chars.len() - 2];
        let mut file_hint = None;
        let mut rank_hint = None;
        match disambig.len() {
            0 => {}
            1 => {
                let c = disambig[0];
                if let Some(col) = Square::col_from_file(c) {
                    file_hint = Some(col);
                } else {
                    rank_hint = Some(Square::row_from_rank(c)?);
                }
            }
            2 => {
                file_hint = Some(Square::col_from_file(disambig[0])?);
                rank_hint = Some(Square::row_from_rank(disambig[1])?);
            }
            _ => return None,
        }

        // Pawn captures always lead with the origin file ("exd5")
        if kind == PieceKind::Pawn && is_capture && file_hint.is_none() {
            file_hint = Some(token.chars().next().and_then(Square::col_from_file)?);
        }

        Some(ParsedSan::Standard(SanToken {
            kind,
            file_hint,
            rank_hint,
            dest,
            is_capture,
            promotion,
        }))
    }
}

/// Apply one SAN token for `color`, returning the resulting board.
/// The input board is never modified; failure returns an identical clone.
pub fn apply_san(board: &Board, token: &str, color: Color) -> Board {
    let mut next = board.clone();

    let san = match ParsedSan::parse(token) {
        Some(san) => san,
        None => return unresolved(next, token, color),
    };

    let san = match san {
        ParsedSan::Castle { kingside } => {
            castle(&mut next, color, kingside);
            return next;
        }
        ParsedSan::Standard(san) => san,
    };

    let origin = match find_origin(
        &next,
        san.kind,
        san.dest,
        san.file_hint,
        san.rank_hint,
        color,
    ) {
        Some(sq) => sq,
        None => return unresolved(next, token, color),
    };

    // Destination occupancy on the pre-move board decides en passant
    let dest_was_empty = board.piece_at(san.dest).is_none();

    next.clear(origin);

    if san.kind == PieceKind::Pawn && san.is_capture && dest_was_empty {
        // En passant: the captured pawn sits behind the destination square
        let behind = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        if let Some(captured) = san.dest.shifted(behind, 0) {
            next.clear(captured);
        }
    }

    let placed = match san.promotion {
        Some(promoted) => Piece::new(color, promoted),
        None => Piece::new(color, san.kind),
    };
    next.place(san.dest, placed);

    next
}

/// Relocate king and rook to their castling squares on the back rank.
/// No verification that either piece is still on its home square.
fn castle(board: &mut Board, color: Color, kingside: bool) {
    let row = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    let king = Piece::new(color, PieceKind::King);
    let rook = Piece::new(color, PieceKind::Rook);

    if kingside {
        board.clear(Square { row, col: 4 });
        board.clear(Square { row, col: 7 });
        board.place(Square { row, col: 6 }, king);
        board.place(Square { row, col: 5 }, rook);
    } else {
        board.clear(Square { row, col: 4 });
        board.clear(Square { row, col: 0 });
        board.place(Square { row, col: 2 }, king);
        board.place(Square { row, col: 3 }, rook);
    }
}

/// Failure path: report the token on stderr, hand back the unchanged clone
fn unresolved(board: Board, token: &str, color: Color) -> Board {
    eprintln!(
        "pgntoboard: could not resolve {} move '{}' - position left unchanged",
        match color {
            Color::White => "white",
            Color::Black => "black",
        },
        token
    );
    board
}
