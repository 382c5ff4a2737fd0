// ============================================================================
// Domain Module
// Core domain types: tokens and parse/format configuration
// ============================================================================

pub mod config;
pub mod token;

pub use config::{FormatOptions, FormatStyle, MinusSign, ParseOptions, DEFAULT_MAX_LEN};
pub use token::NumeralToken;
