use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref HEADER_TAG: Regex = Regex::new(r#"\[(\w+)\s+"([^"]+)"\]"#).unwrap();
    static ref BRACKET_TAG: Regex = Regex::new(r"\[[^\]]+\]").unwrap();
    static ref BRACE_COMMENT: Regex = Regex::new(r"\{[^}]+\}").unwrap();
    static ref VARIATION: Regex = Regex::new(r"\([^)]+\)").unwrap();
    static ref BLACK_TO_MOVE_MARKER: Regex = Regex::new(r"\d+\.\.\.").unwrap();
    static ref RESULT_TOKEN: Regex = Regex::new(r"1-0|0-1|1/2-1/2|\*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref MOVE_PAIR: Regex =
        Regex::new(r"(\d+)\.\s*([a-zA-Z][a-zA-Z0-9+#=\-]+)(?:\s+([a-zA-Z][a-zA-Z0-9+#=\-]+))?")
            .unwrap();
    static ref PURELY_NUMERIC: Regex = Regex::new(r"^\d+$").unwrap();
}

/// One numbered move record: white's token plus black's when present.
/// A missing black move (game ending on white) is absent, not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub number: u32,
    pub white: String,
    pub black: Option<String>,
}

/// Extract `[Key "Value"]` header tags into a name -> value map
pub fn parse_headers(text: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    for caps in HEADER_TAG.captures_iter(text) {
        headers.insert(caps[1].to_string(), caps[2].to_string());
    }
    headers
}

/// Tokenize raw movetext into ordered move records
///
/// ## Input shape
/// A PGN game is bracketed header tags followed by movetext:
/// ```text
/// [Event "Casual Game"]
/// [White "Anderssen, Adolf"]
///
/// 1. e4 e5 2. Nf3 {a comment} Nc6 (2... d6 3. d4) 3. Bb5 1-0
/// ```
/// Headers, brace comments, parenthesized variations, "N..." black-to-move
/// markers and the result token are all stripped before scanning; what
/// remains is scanned for `<number>. <white> [<black>]` records. A second
/// captured token that is purely numeric is the next move number leaking
/// into the record (white ended the game) and is discarded, leaving the
/// black move absent.
///
/// Empty or header-only input yields an empty list.
pub fn tokenize_moves(text: &str) -> Vec<MoveRecord> {
    let stripped = BRACKET_TAG.replace_all(text, "");
    let stripped = BRACE_COMMENT.replace_all(&stripped, "");
    let stripped = VARIATION.replace_all(&stripped, "");
    let stripped = BLACK_TO_MOVE_MARKER.replace_all(&stripped, "");
    let stripped = RESULT_TOKEN.replace_all(&stripped, "");
    let movetext = WHITESPACE.replace_all(&stripped, " ");
    let movetext = movetext.trim();

    let mut records = Vec::new();
    for caps in MOVE_PAIR.captures_iter(movetext) {
        let number = caps[1].parse().unwrap_or(0);
        let white = caps[2].to_string();
        let black = caps
            .get(3)
            .map(|m| m.as_str().to_string())
            .filter(|token| !PURELY_NUMERIC.is_match(token));
        records.push(MoveRecord {
            number,
            white,
            black,
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers() {
        let pgn = r#"[Event "Casual Game"]
[Site "London"]
[White "Anderssen, Adolf"]

1. e4 e5 1-0"#;
        let headers = parse_headers(pgn);
        assert_eq!(headers.get("Event").map(String::as_str), Some("Casual Game"));
        assert_eq!(headers.get("Site").map(String::as_str), Some("London"));
        assert_eq!(
            headers.get("White").map(String::as_str),
            Some("Anderssen, Adolf")
        );
        assert!(headers.get("Black").is_none());
    }

    #[test]
    fn test_tokenize_simple_game() {
        let records = tokenize_moves("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6");
        assert_eq!(records.len(), 3, "three numbered pairs expected");
        assert_eq!(records[0].number, 1);
        assert_eq!(records[0].white, "e4");
        assert_eq!(records[0].black.as_deref(), Some("e5"));
        assert_eq!(records[2].white, "Bb5");
        assert_eq!(records[2].black.as_deref(), Some("a6"));
    }

    #[test]
    fn test_tokenize_strips_headers_comments_variations() {
        let pgn = r#"[Event "Test"]
[Result "1-0"]

1. e4 {best by test} e5 (1... c5 2. Nf3) 2. Nf3 Nc6 1-0"#;
        let records = tokenize_moves(pgn);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].white, "e4");
        assert_eq!(records[0].black.as_deref(), Some("e5"));
        assert_eq!(records[1].white, "Nf3");
        assert_eq!(records[1].black.as_deref(), Some("Nc6"));
    }

    #[test]
    fn test_tokenize_black_to_move_marker() {
        let records = tokenize_moves("1. e4 e5 2. Nf3 2... Nc6");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].white, "Nf3");
        assert_eq!(records[1].black.as_deref(), Some("Nc6"));
    }

    #[test]
    fn test_tokenize_missing_black_moves() {
        // White-only moves, the following move number must not be mistaken
        // for a black move
        let records = tokenize_moves("1. e4 2. d4");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].white, "e4");
        assert!(records[0].black.is_none());
        assert_eq!(records[1].white, "d4");
        assert!(records[1].black.is_none());
    }

    #[test]
    fn test_tokenize_final_move_without_black() {
        let records = tokenize_moves("1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7# 1-0");
        assert_eq!(records.len(), 4);
        assert_eq!(records[3].white, "Qxf7#");
        assert!(records[3].black.is_none(), "result token must not become a move");
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize_moves("").is_empty());
        assert!(tokenize_moves("   \n\n  ").is_empty());
        assert!(tokenize_moves(r#"[Event "Headers only"]"#).is_empty());
    }

    #[test]
    fn test_tokenize_castling_and_annotations() {
        let records = tokenize_moves("1. O-O O-O-O 2. Re1+ Qxd2");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].white, "O-O");
        assert_eq!(records[0].black.as_deref(), Some("O-O-O"));
        assert_eq!(records[1].white, "Re1+");
        assert_eq!(records[1].black.as_deref(), Some("Qxd2"));
    }
}
