//! # Numeric Resolution
//!
//! Turns the raw substrings captured by [`crate::grammar`] into a single
//! decimal quantity plus the presentational `fraction_display` string.
//!
//! Numeric text is parsed leniently: anything that does not read as a number
//! resolves to 0.0. Messy recipe text is the norm here, so a stray character
//! in the amount is forgiven rather than reported.

/// Combine the amount, fraction, and container-amount substrings into one
/// quantity.
///
/// The fraction is added to the amount, and a container amount (the "12" in
/// "1 (12 oz) can") scales the result. A zero denominator is not rejected;
/// the IEEE division result flows through as-is.
pub fn resolve(
    amount: Option<&str>,
    fraction: Option<&str>,
    container_amount: Option<&str>,
) -> f64 {
    let fraction_value = fraction.map(fraction_value).unwrap_or(0.0);
    let base = amount.map(lenient_f64).unwrap_or(0.0) + fraction_value;
    match container_amount {
        Some(scale) => base * lenient_f64(scale),
        None => base,
    }
}

/// The raw amount and fraction substrings joined for display, e.g. "1 1/2".
/// Purely presentational; never reparsed and not derivable from the computed
/// quantity.
pub fn fraction_display(amount: Option<&str>, fraction: Option<&str>) -> String {
    format!("{} {}", amount.unwrap_or(""), fraction.unwrap_or(""))
        .trim()
        .to_string()
}

fn fraction_value(text: &str) -> f64 {
    match text.split_once('/') {
        Some((numerator, denominator)) => lenient_f64(numerator) / lenient_f64(denominator),
        None => lenient_f64(text),
    }
}

/// Forgiving float parse: surrounding whitespace is ignored and anything else
/// unparseable is 0.0.
fn lenient_f64(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}
