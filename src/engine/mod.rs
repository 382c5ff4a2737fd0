// ============================================================================
// Engine Module
// Tokenizer, parser, formatter and the facade composing them
// ============================================================================

mod facade;
mod formatter;

pub mod parser;
pub mod tokenizer;

pub use facade::{
    format, format_decimal, format_decimal_with, format_value, format_with, parse, parse_decimal,
    parse_decimal_with, parse_value, parse_with,
};
pub use parser::ParsedNumber;
pub use tokenizer::{tokenize, Tokens};
