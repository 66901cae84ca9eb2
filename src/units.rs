//! # Canonical Units and the Alias Table
//!
//! This module owns the closed set of unit tokens the parser can emit and the
//! ordered table mapping every accepted spelling to its token. The table is
//! built once per process and never rebuilt per parse.
//!
//! Matching scans the *entire* table, so a later entry overwrites an earlier
//! one when both accept the tail's leading token. That ordering is part of
//! the matching contract and the reason the table is a `Vec` rather than a
//! `HashMap`.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// One member of the fixed set of normalized unit tokens.
///
/// The serialized spelling of each variant is its token (e.g. `fl_oz`, `mL`);
/// `Display` uses the same spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalUnit {
    #[serde(rename = "cup")]
    Cup,
    #[serde(rename = "fl_oz")]
    FluidOunce,
    #[serde(rename = "gal")]
    Gallon,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "pt")]
    Pint,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "qt")]
    Quart,
    #[serde(rename = "tbs")]
    Tablespoon,
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "mL")]
    Milliliter,
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "pinch")]
    Pinch,
    #[serde(rename = "handful")]
    Handful,
    #[serde(rename = "sprig")]
    Sprig,
    #[serde(rename = "bunch")]
    Bunch,
    #[serde(rename = "stick")]
    Stick,
    #[serde(rename = "clove")]
    Clove,
    #[serde(rename = "can")]
    Can,
    #[serde(rename = "package")]
    Package,
    #[serde(rename = "bag")]
    Bag,
    #[serde(rename = "capful")]
    Capful,
    #[serde(rename = "cube")]
    Cube,
    #[serde(rename = "jar")]
    Jar,
    #[serde(rename = "container")]
    Container,
    #[serde(rename = "egg")]
    Egg,
}

impl CanonicalUnit {
    /// The normalized token for this unit.
    pub fn token(&self) -> &'static str {
        match self {
            CanonicalUnit::Cup => "cup",
            CanonicalUnit::FluidOunce => "fl_oz",
            CanonicalUnit::Gallon => "gal",
            CanonicalUnit::Ounce => "oz",
            CanonicalUnit::Pint => "pt",
            CanonicalUnit::Pound => "lb",
            CanonicalUnit::Quart => "qt",
            CanonicalUnit::Tablespoon => "tbs",
            CanonicalUnit::Teaspoon => "tsp",
            CanonicalUnit::Inch => "in",
            CanonicalUnit::Gram => "g",
            CanonicalUnit::Kilogram => "kg",
            CanonicalUnit::Liter => "L",
            CanonicalUnit::Milligram => "mg",
            CanonicalUnit::Milliliter => "mL",
            CanonicalUnit::Dash => "dash",
            CanonicalUnit::Pinch => "pinch",
            CanonicalUnit::Handful => "handful",
            CanonicalUnit::Sprig => "sprig",
            CanonicalUnit::Bunch => "bunch",
            CanonicalUnit::Stick => "stick",
            CanonicalUnit::Clove => "clove",
            CanonicalUnit::Can => "can",
            CanonicalUnit::Package => "package",
            CanonicalUnit::Bag => "bag",
            CanonicalUnit::Capful => "capful",
            CanonicalUnit::Cube => "cube",
            CanonicalUnit::Jar => "jar",
            CanonicalUnit::Container => "container",
            CanonicalUnit::Egg => "egg",
        }
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

lazy_static! {
    /// Ordered alias table, built once for the process. Insertion order is
    /// load-bearing: the scan in [`extract_unit`] lets later entries win.
    static ref ALIAS_TABLE: Vec<(&'static str, CanonicalUnit)> = build_alias_table();
}

fn build_alias_table() -> Vec<(&'static str, CanonicalUnit)> {
    use CanonicalUnit::*;

    let mut table = Vec::new();
    let mut add = |unit: CanonicalUnit, spellings: &[&'static str]| {
        for &spelling in spellings {
            table.push((spelling, unit));
        }
    };

    // english units
    add(Cup, &["c.", "c", "cup", "cups"]);
    add(FluidOunce, &["fl. oz.", "fl oz", "fluid ounce", "fluid ounces"]);
    add(Gallon, &["gal", "gal.", "gallon", "gallons"]);
    add(Ounce, &["oz", "oz.", "ozs", "ozs.", "ounce", "ounces"]);
    add(Pint, &["pt", "pt.", "pint", "pints"]);
    add(Pound, &["lb", "lb.", "lbs", "lbs.", "pound", "pounds"]);
    add(Quart, &["qt", "qt.", "qts", "qts.", "quart", "quarts"]);
    add(
        Tablespoon,
        &[
            "tbsp.",
            "tbsp",
            "tbs.",
            "tbs",
            "tb",
            "tb.",
            "T",
            "T.",
            "tablespoon",
            "tablespoons",
            "table spoon",
            "table spoons",
        ],
    );
    add(
        Teaspoon,
        &[
            "t",
            "t.",
            "ts",
            "ts.",
            "tsp",
            "tsp.",
            "teaspoon",
            "tea spoon",
            "teaspoons",
            "tea spoons",
        ],
    );
    add(Inch, &["inch", "inches"]);
    // metric units
    add(Gram, &["g", "g.", "gr", "gr.", "gram", "grams"]);
    add(Kilogram, &["kg", "kg.", "kilogram", "kilograms"]);
    add(Liter, &["l", "l.", "liter", "liters"]);
    add(Milligram, &["mg", "mg.", "milligram", "milligrams"]);
    add(Milliliter, &["ml", "ml.", "milliliter", "milliliters"]);
    // non-specific units
    add(Dash, &["dash", "a dash", "dashes"]);
    add(Pinch, &["pinch", "a pinch", "pinches"]);
    add(Handful, &["handful", "a handful", "handfuls"]);
    add(Sprig, &["sprig", "a sprig", "sprigs"]);
    add(Bunch, &["bunch", "a bunch", "bunches"]);
    add(Stick, &["stick", "a stick", "sticks"]);
    add(Clove, &["clove", "cloves"]);
    add(Can, &["can", "cans"]);
    add(Package, &["package", "packages"]);
    add(Bag, &["bag", "bags"]);
    add(Capful, &["capful", "capfuls"]);
    add(Cube, &["cube", "cubes"]);
    add(Jar, &["jar", "jars"]);
    add(Container, &["container", "containers"]);
    add(Egg, &["egg", "eggs"]);

    table
}

/// Identify a canonical unit in `tail` and strip its spelling.
///
/// Three passes, stopping at the first that finds a unit:
///
/// 1. Case-sensitive scan for an alias the tail starts with (followed by a
///    space); the alias is removed from the working tail.
/// 2. The working tail is lower-cased in place and the scan repeats. The
///    lower-cased tail is what flows on to the ingredient name.
/// 3. The captured container unit, if any, is compared for exact equality
///    against every alias; this pass never modifies the tail.
///
/// Returns the working tail (owned; the input is never mutated) and the unit,
/// if one was recognized.
pub fn extract_unit(tail: &str, container_unit: Option<&str>) -> (String, Option<CanonicalUnit>) {
    let mut working = tail.to_string();

    let mut unit = scan_leading_alias(&mut working);
    if unit.is_none() {
        working = working.to_lowercase();
        unit = scan_leading_alias(&mut working);
    }
    if unit.is_none() {
        if let Some(captured) = container_unit {
            for &(alias, candidate) in ALIAS_TABLE.iter() {
                if alias == captured {
                    unit = Some(candidate);
                }
            }
            if unit.is_some() {
                trace!(container_unit = captured, "unit taken from container size");
            }
        }
    }

    (working, unit)
}

/// One full pass over the alias table. Every alias is tested against the
/// current working string; a hit removes the first occurrence of the alias
/// text and records the unit, and the scan keeps going so that the last
/// matching table entry wins.
fn scan_leading_alias(working: &mut String) -> Option<CanonicalUnit> {
    let mut unit = None;
    for &(alias, candidate) in ALIAS_TABLE.iter() {
        let leads = working
            .strip_prefix(alias)
            .is_some_and(|rest| rest.starts_with(' '));
        if leads {
            *working = working.replacen(alias, "", 1);
            unit = Some(candidate);
        }
    }
    unit
}
