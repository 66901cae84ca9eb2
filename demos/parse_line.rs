//! # Ingredient Line Parsing Demo
//!
//! Parses ingredient lines given as command-line arguments, or a built-in
//! sample recipe when none are given, and prints the structured result for
//! each line.
//!
//! ```text
//! cargo run --example parse_line -- "1 1/2 cups flour" "2 CUPS sugar"
//! ```

use anyhow::Result;
use recipe_quantities::parse;
use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let lines: Vec<String> = if args.is_empty() {
        [
            "1 1/2 cups all-purpose flour",
            "1 teaspoon baking soda",
            "1/2 tsp salt",
            "1 (12 oz) can black beans",
            "2 CUPS sugar",
            "a pinch saffron",
            "salt to taste",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    for line in &lines {
        match parse(line) {
            Ok(parsed) => {
                let unit = parsed
                    .unit
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<32} -> quantity={:<6} unit={:<8} ingredient={:?} display={:?}",
                    line, parsed.quantity, unit, parsed.ingredient, parsed.fraction_display
                );
            }
            Err(err) => println!("{:<32} -> error: {}", line, err),
        }
    }

    Ok(())
}
