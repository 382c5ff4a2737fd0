// ============================================================================
// Basic Usage Example
// ============================================================================

use japanese_number::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(err) = japanese_number::utils::init_logging("japanese_number=debug") {
        eprintln!("{}", err);
    }

    println!("=== Japanese Number Example ===\n");

    // Parse everyday, formal, mixed and positional text
    println!("Parsing...");
    for text in ["二百三十四", "一万二千三百四十五", "壱萬弐千", "3千", "1234万5678", "二〇二六"] {
        match parse(text) {
            Ok(value) => println!("  {} -> {}", text, value),
            Err(err) => println!("  {} -> error: {}", text, err),
        }
    }

    // Format in each style
    println!("\nFormatting 12345678...");
    let styles = [
        ("kanji", FormatOptions::default()),
        ("daiji", FormatOptions::formal()),
        ("positional", FormatOptions::positional()),
        ("mixed", FormatOptions::mixed()),
    ];
    for (name, options) in styles.iter() {
        println!("  {:<10} {}", name, format_with(12_345_678, options));
    }

    // Decimals
    println!("\nDecimals...");
    let pi = Decimal::new(314_159, 5);
    let text = format_decimal(pi);
    println!("  {} -> {} -> {:?}", pi, text, parse_decimal(&text));

    // Rejected input
    println!("\nRejected input...");
    for text in ["", "一万一万", "十百", "三個"] {
        if let Err(err) = parse(text) {
            println!("  {:?}: {}", text, err);
        }
    }
}
