use pgntoboard::{parse_headers, tokenize_moves, Square};

// Integration tests for PGN tokenization: header tag extraction and
// movetext-to-record splitting against realistic game text.

const IMMORTAL_GAME_PRELUDE: &str = r#"[Event "Casual Game"]
[Site "London ENG"]
[Date "1851.06.21"]
[White "Anderssen, Adolf"]
[Black "Kieseritzky, Lionel"]
[Result "1-0"]

1. e4 e5 2. f4 exf4 3. Bc4 Qh4+ 4. Kf1 b5 5. Bxb5 Nf6 1-0"#;

#[test]
fn test_header_extraction() {
    let headers = parse_headers(IMMORTAL_GAME_PRELUDE);

    assert_eq!(headers.len(), 6, "all six header tags should be captured");
    assert_eq!(
        headers.get("White").map(String::as_str),
        Some("Anderssen, Adolf")
    );
    assert_eq!(
        headers.get("Date").map(String::as_str),
        Some("1851.06.21")
    );
    assert_eq!(headers.get("Result").map(String::as_str), Some("1-0"));
}

#[test]
fn test_record_count_matches_move_pairs() {
    let records = tokenize_moves(IMMORTAL_GAME_PRELUDE);

    assert_eq!(records.len(), 5, "five numbered move pairs expected");
    for (i, record) in records.iter().enumerate() {
        assert_eq!(
            record.number,
            (i + 1) as u32,
            "move numbers should ascend from 1"
        );
        assert!(
            record.black.is_some(),
            "every move pair in this game has a black reply"
        );
    }
}

#[test]
fn test_every_token_carries_a_valid_destination() {
    // Clean movetext, no castling: the trailing two characters of every
    // stripped token must name a real square
    let records = tokenize_moves("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 Nf6 5. d3 b5");

    assert_eq!(records.len(), 5);
    let tokens = records.iter().flat_map(|record| {
        std::iter::once(record.white.as_str()).chain(record.black.as_deref())
    });
    for token in tokens {
        let clean: Vec<char> = token
            .chars()
            .filter(|c| !matches!(c, '+' | '#' | '!' | '?' | 'x' | '='))
            .collect();
        let start = clean.len() - 2;
        let destination: String = clean[start..].iter().collect();
        assert!(
            Square::from_algebraic(&destination).is_some(),
            "token '{}' should end in a valid square, got '{}'",
            token,
            destination
        );
    }
}

#[test]
fn test_comments_variations_and_markers_are_ignored() {
    let pgn = r#"1. d4 {Queen's pawn} d5 (1... Nf6 2. c4 {Indian lines}) 2. c4 2... e6 3. Nc3 *"#;
    let records = tokenize_moves(pgn);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].white, "d4");
    assert_eq!(records[0].black.as_deref(), Some("d5"));
    assert_eq!(records[1].white, "c4");
    assert_eq!(records[1].black.as_deref(), Some("e6"));
    assert_eq!(records[2].white, "Nc3");
    assert!(
        records[2].black.is_none(),
        "the result marker must not be read as a black move"
    );
}

#[test]
fn test_empty_and_headerless_input() {
    assert!(tokenize_moves("").is_empty());
    assert!(parse_headers("1. e4 e5").is_empty());
    assert!(
        tokenize_moves(r#"[Event "No moves recorded"]"#).is_empty(),
        "header-only input should yield no records"
    );
}
