//! # Ingredient Line Parser
//!
//! Orchestrates the pipeline over one raw ingredient line: grammar
//! segmentation, numeric resolution, unit extraction, and final assembly of
//! the [`ParsedIngredient`] record.

use crate::errors::{ParseError, ParseResult};
use crate::grammar;
use crate::quantity;
use crate::units::{self, CanonicalUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured result of parsing one ingredient line.
///
/// Immutable once produced; re-parsing `original_query` yields an identical
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Resolved decimal quantity; 0.0 when no amount or fraction was found.
    pub quantity: f64,
    /// Recognized unit token, if any.
    pub unit: Option<CanonicalUnit>,
    /// Ingredient name with surrounding whitespace removed. May be empty when
    /// a matched unit consumed the whole tail.
    pub ingredient: String,
    /// The raw amount and fraction substrings as they appeared, joined and
    /// trimmed (e.g. "1 1/2"). Presentational only.
    pub fraction_display: String,
    /// The unmodified input line, retained for diagnostics.
    pub original_query: String,
}

/// Parse one free-text ingredient line into structured data.
///
/// ```
/// use recipe_quantities::{parse, CanonicalUnit};
///
/// let parsed = parse("1 1/2 cups flour").unwrap();
/// assert_eq!(parsed.quantity, 1.5);
/// assert_eq!(parsed.unit, Some(CanonicalUnit::Cup));
/// assert_eq!(parsed.ingredient, "flour");
/// ```
///
/// The only failure is [`ParseError::NoMatch`] for input the grammar cannot
/// segment (empty or whitespace-only strings). Missing or malformed numeric
/// text resolves to a quantity of 0.0 and an unrecognized unit is simply
/// absent; neither is an error.
pub fn parse(query: &str) -> ParseResult<ParsedIngredient> {
    let segments = grammar::segment(query).ok_or(ParseError::NoMatch)?;

    let quantity = quantity::resolve(segments.amount, segments.fraction, segments.container_amount);
    let fraction_display = quantity::fraction_display(segments.amount, segments.fraction);
    let (stripped_tail, unit) = units::extract_unit(segments.tail, segments.container_unit);
    let ingredient = stripped_tail.trim().to_string();

    debug!(
        quantity,
        unit = ?unit,
        ingredient = %ingredient,
        "parsed ingredient line"
    );

    Ok(ParsedIngredient {
        quantity,
        unit,
        ingredient,
        fraction_display,
        original_query: query.to_string(),
    })
}
