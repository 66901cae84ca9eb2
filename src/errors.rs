//! # Parser Error Types
//!
//! The parser has exactly one hard failure: the grammar could not produce the
//! mandatory tail. Numeric leniency (malformed amounts defaulting to 0.0) and
//! unrecognized units are design choices, not errors, so they never appear
//! here.

use std::fmt;

/// Errors reported by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input cannot be segmented into the grammar's mandatory tail, e.g.
    /// an empty or whitespace-only string.
    NoMatch,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoMatch => write!(f, "input does not match the ingredient grammar"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for convenience
pub type ParseResult<T> = Result<T, ParseError>;
