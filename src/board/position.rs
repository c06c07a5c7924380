use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Parse the SAN piece letter ('P', 'N', 'B', 'R', 'Q', 'K')
    pub fn from_san_letter(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { kind, color }
    }

    /// One-character identifier: uppercase for white, lowercase for black
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Two-character identifier used by board renderers ("wp" .. "bk")
    pub fn ui_name(self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => "wp",
            (Color::White, PieceKind::Knight) => "wn",
            (Color::White, PieceKind::Bishop) => "wb",
            (Color::White, PieceKind::Rook) => "wr",
            (Color::White, PieceKind::Queen) => "wq",
            (Color::White, PieceKind::King) => "wk",
            (Color::Black, PieceKind::Pawn) => "bp",
            (Color::Black, PieceKind::Knight) => "bn",
            (Color::Black, PieceKind::Bishop) => "bb",
            (Color::Black, PieceKind::Rook) => "br",
            (Color::Black, PieceKind::Queen) => "bq",
            (Color::Black, PieceKind::King) => "bk",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Board square as (row, col), row 0 = rank 8, col 0 = file 'a'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Option<Square> {
        if row >= 8 || col >= 8 {
            return None;
        }
        Some(Square { row, col })
    }

    /// Column index for a file letter ('a' -> 0 .. 'h' -> 7)
    pub fn col_from_file(c: char) -> Option<usize> {
        match c {
            'a'..='h' => Some((c as u8 - b'a') as usize),
            _ => None,
        }
    }

    /// Row index for a rank digit ('8' -> 0 .. '1' -> 7)
    pub fn row_from_rank(c: char) -> Option<usize> {
        match c {
            '1'..='8' => Some((b'8' - c as u8) as usize),
            _ => None,
        }
    }

    pub fn from_file_rank(file: char, rank: char) -> Option<Square> {
        Some(Square {
            row: Square::row_from_rank(rank)?,
            col: Square::col_from_file(file)?,
        })
    }

    pub fn from_algebraic(notation: &str) -> Option<Square> {
        let mut chars = notation.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Square::from_file_rank(file, rank)
    }

    /// The square offset by (d_row, d_col), or None when off the board
    pub fn shifted(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        Some(Square {
            row: row as usize,
            col: col as usize,
        })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col as u8) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row as u8) as char
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// 8x8 piece placement snapshot
///
/// ## Board Coordinates
/// The grid is indexed `[row][col]`:
/// ```text
/// row 0 = rank 8 (black's back rank)
/// row 7 = rank 1 (white's back rank)
/// col 0 = file 'a', col 7 = file 'h'
/// ```
/// Algebraic square names map to (row, col) with `row = 8 - rank` and
/// `col = file - 'a'`.
///
/// Boards are never mutated once published: applying a move clones the board
/// and returns a fresh snapshot, so earlier positions in a sequence stay
/// valid while later ones are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The canonical starting position
    pub fn initial() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, kind));
            board.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        for col in 0..8 {
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row][square.col]
    }

    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row][square.col] = Some(piece);
    }

    pub fn clear(&mut self, square: Square) {
        self.squares[square.row][square.col] = None;
    }

    /// Render the board as an ASCII diagram (rank 8 at the top)
    pub fn ascii(&self) -> String {
        let mut result = String::new();
        result.push_str("  a b c d e f g h\n");
        for row in 0..8 {
            let rank = 8 - row;
            result.push_str(&format!("{} ", rank));
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(piece) => result.push(piece.to_char()),
                    None => result.push('.'),
                }
                result.push(' ');
            }
            result.push_str(&format!(" {}\n", rank));
        }
        result.push_str("  a b c d e f g h\n");
        result
    }
}
