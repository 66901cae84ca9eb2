//! # Recipe Quantities
//!
//! Parses a free-text recipe ingredient line (e.g. "1 1/2 cups flour") into
//! structured data: a decimal quantity, a normalized unit token, and the
//! remaining ingredient name.
//!
//! ## Features
//!
//! - Positional grammar over amount, fraction, and parenthesized container
//!   size (e.g. "1 (12 oz) can beans" scales the outer amount)
//! - Forgiving numeric parsing: malformed amounts resolve to 0.0
//! - A fixed table of English and metric unit spellings normalized to a
//!   closed set of tokens, with a case-insensitive retry
//!
//! ## Usage
//!
//! ```rust
//! use recipe_quantities::{parse, CanonicalUnit};
//!
//! let parsed = parse("1 (12 oz) can beans").unwrap();
//! assert_eq!(parsed.quantity, 12.0);
//! assert_eq!(parsed.unit, Some(CanonicalUnit::Can));
//! assert_eq!(parsed.ingredient, "beans");
//! ```

pub mod errors;
pub mod grammar;
pub mod parser;
pub mod quantity;
pub mod units;

// Re-export types for easier access
pub use errors::{ParseError, ParseResult};
pub use parser::{parse, ParsedIngredient};
pub use units::CanonicalUnit;
