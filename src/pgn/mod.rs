pub mod tokenizer;

pub use tokenizer::{parse_headers, tokenize_moves, MoveRecord};
