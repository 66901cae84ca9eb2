//! # Ingredient Line Grammar
//!
//! This module segments a raw ingredient line into its positional parts:
//!
//! ```text
//! [fraction " "]? [amount " "?]? [fraction " "]? ["(" amount " " unit ")" " "]? tail
//! ```
//!
//! Every leading group is optional and the trailing `tail` is mandatory, so
//! the matcher prefers to consume the optional groups greedily but backs off
//! any assignment that would leave the tail empty. Each optional slot is
//! driven by a candidate generator that yields viable spans in preference
//! order (greedy first); a depth-first walk over the slots takes the first
//! assignment that still leaves at least one tail character.
//!
//! The matcher only segments; it never interprets the substrings it captures.
//! Numeric resolution lives in [`crate::quantity`] and unit recognition in
//! [`crate::units`].

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    /// A fraction followed by a single whitespace separator, e.g. "1/2 ".
    static ref FRACTION_RE: Regex =
        Regex::new(r"^(\d+/\d+)\s").expect("Invalid fraction regex pattern");
}

/// Raw substrings captured from one ingredient line.
///
/// All fields borrow from the query string handed to [`segment`]. The two
/// grammar slots for a fraction (before and after the amount) collapse into
/// the single `fraction` field; when both slots match, the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Amount substring as matched, including any single leading non-digit
    /// character the grammar tolerates (e.g. "2", "2.5", ".5").
    pub amount: Option<&'a str>,
    /// Fraction substring as matched, e.g. "1/2".
    pub fraction: Option<&'a str>,
    /// Numeric part of a parenthesized container size, e.g. "12" in "(12 oz)".
    pub container_amount: Option<&'a str>,
    /// Unit part of a parenthesized container size, e.g. "oz" in "(12 oz)".
    pub container_unit: Option<&'a str>,
    /// Everything left for unit matching and the ingredient name.
    pub tail: &'a str,
}

/// Byte span of a capture plus the position where matching resumes.
type Candidate = ((usize, usize), usize);

#[derive(Debug, Default)]
struct Captures {
    fraction_before: Option<(usize, usize)>,
    amount: Option<(usize, usize)>,
    fraction_after: Option<(usize, usize)>,
    container_amount: Option<(usize, usize)>,
    container_unit: Option<(usize, usize)>,
}

/// Segment one ingredient line according to the positional grammar.
///
/// Returns `None` when the mandatory tail cannot be produced, i.e. for empty
/// or whitespace-only input. The match covers a single line: a newline ends
/// the tail and anything beyond it is discarded.
pub fn segment(query: &str) -> Option<Segments<'_>> {
    if query.trim().is_empty() {
        return None;
    }

    let mut captures = Captures::default();
    let tail_start = match_slots(query, 0, 0, &mut captures)?;
    let tail = current_line(query, tail_start)?;

    let span = |s: Option<(usize, usize)>| s.map(|(a, b)| &query[a..b]);
    let segments = Segments {
        amount: span(captures.amount),
        // The engine reads a single fraction value; the later slot shadows
        // the earlier one when both matched.
        fraction: span(captures.fraction_after.or(captures.fraction_before)),
        container_amount: span(captures.container_amount),
        container_unit: span(captures.container_unit),
        tail,
    };
    trace!(?segments, "segmented ingredient line");
    Some(segments)
}

/// Depth-first walk over the four optional slots. Returns the tail start
/// position of the first assignment whose tail is non-empty.
fn match_slots(s: &str, slot: usize, at: usize, caps: &mut Captures) -> Option<usize> {
    match slot {
        0 | 2 => {
            if let Some((span, next)) = fraction_candidate(s, at) {
                let field = if slot == 0 {
                    &mut caps.fraction_before
                } else {
                    &mut caps.fraction_after
                };
                *field = Some(span);
                if let Some(tail) = match_slots(s, slot + 1, next, caps) {
                    return Some(tail);
                }
                let field = if slot == 0 {
                    &mut caps.fraction_before
                } else {
                    &mut caps.fraction_after
                };
                *field = None;
            }
            match_slots(s, slot + 1, at, caps)
        }
        1 => {
            for (span, next) in amount_candidates(s, at) {
                caps.amount = Some(span);
                if let Some(tail) = match_slots(s, slot + 1, next, caps) {
                    return Some(tail);
                }
            }
            caps.amount = None;
            match_slots(s, slot + 1, at, caps)
        }
        3 => {
            for (amount_span, unit_span, next) in container_candidates(s, at) {
                caps.container_amount = Some(amount_span);
                caps.container_unit = Some(unit_span);
                if let Some(tail) = match_slots(s, slot + 1, next, caps) {
                    return Some(tail);
                }
            }
            caps.container_amount = None;
            caps.container_unit = None;
            match_slots(s, slot + 1, at, caps)
        }
        _ => current_line(s, at).map(|_| at),
    }
}

/// The rest of the current line starting at `at`, or `None` when empty.
fn current_line(s: &str, at: usize) -> Option<&str> {
    let rest = &s[at..];
    let end = rest.find('\n').unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// `digits "/" digits` followed by one whitespace separator. The digit runs
/// are anchored by the slash and separator, so there is exactly one viable
/// span per position.
fn fraction_candidate(s: &str, at: usize) -> Option<Candidate> {
    let caps = FRACTION_RE.captures(&s[at..])?;
    let fraction = caps.get(1)?;
    let whole = caps.get(0)?;
    Some(((at + fraction.start(), at + fraction.end()), at + whole.end()))
}

/// Candidates for the amount slot, greedy-first: one optional arbitrary
/// non-newline character, one-or-more digits, an optional decimal part, and
/// an optional single trailing whitespace. Shorter digit runs and the
/// no-separator variants come later so the walk can shrink the amount when a
/// greedy capture would starve the tail.
fn amount_candidates(s: &str, at: usize) -> Vec<Candidate> {
    let mut out = Vec::new();
    let bytes = s.as_bytes();

    let mut digit_starts = Vec::new();
    if let Some(c) = s[at..].chars().next() {
        if c != '\n' {
            digit_starts.push(at + c.len_utf8());
        }
    }
    digit_starts.push(at);

    for &digits_at in &digit_starts {
        let run = digit_run(bytes, digits_at);
        for len in (1..=run).rev() {
            let int_end = digits_at + len;
            for number_end in decimal_ends(bytes, int_end) {
                if let Some(ws) = whitespace_at(s, number_end) {
                    out.push(((at, number_end), number_end + ws));
                }
                out.push(((at, number_end), number_end));
            }
        }
    }
    out
}

/// Candidates for the parenthesized container-size slot, greedy-first. The
/// unit text is greedy, so the rightmost closing paren on the line that is
/// followed by whitespace is preferred.
fn container_candidates(s: &str, at: usize) -> Vec<((usize, usize), (usize, usize), usize)> {
    let mut out = Vec::new();
    let bytes = s.as_bytes();
    if bytes.get(at) != Some(&b'(') {
        return out;
    }

    let digits_at = at + 1;
    let run = digit_run(bytes, digits_at);
    for len in (1..=run).rev() {
        let int_end = digits_at + len;
        for amount_end in decimal_ends(bytes, int_end) {
            let Some(ws) = whitespace_at(s, amount_end) else {
                continue;
            };
            let unit_start = amount_end + ws;
            let Some(line) = current_line(s, unit_start) else {
                continue;
            };
            for (pos, _) in line.char_indices().rev().filter(|&(_, c)| c == ')') {
                if pos == 0 {
                    continue; // unit text needs at least one character
                }
                let close = unit_start + pos;
                if let Some(after_ws) = whitespace_at(s, close + 1) {
                    out.push((
                        (digits_at, amount_end),
                        (unit_start, close),
                        close + 1 + after_ws,
                    ));
                }
            }
        }
    }
    out
}

/// Possible end positions of `digits ["." digits]?` whose integer part ends
/// at `int_end`, longest decimal first, then the integer-only form.
fn decimal_ends(bytes: &[u8], int_end: usize) -> Vec<usize> {
    let mut ends = Vec::new();
    if bytes.get(int_end) == Some(&b'.') {
        let run = digit_run(bytes, int_end + 1);
        for len in (1..=run).rev() {
            ends.push(int_end + 1 + len);
        }
    }
    ends.push(int_end);
    ends
}

fn digit_run(bytes: &[u8], at: usize) -> usize {
    bytes[at.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Length in bytes of a single whitespace character at `at`, if any.
fn whitespace_at(s: &str, at: usize) -> Option<usize> {
    s.get(at..)
        .and_then(|rest| rest.chars().next())
        .filter(|c| c.is_whitespace())
        .map(|c| c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_and_tail() {
        let segments = segment("1 cup flour").unwrap();
        assert_eq!(segments.amount, Some("1"));
        assert_eq!(segments.fraction, None);
        assert_eq!(segments.tail, "cup flour");
    }

    #[test]
    fn test_leading_fraction() {
        let segments = segment("1/2 cup flour").unwrap();
        assert_eq!(segments.amount, None);
        assert_eq!(segments.fraction, Some("1/2"));
        assert_eq!(segments.tail, "cup flour");
    }

    #[test]
    fn test_amount_then_fraction() {
        let segments = segment("1 1/2 cups flour").unwrap();
        assert_eq!(segments.amount, Some("1"));
        assert_eq!(segments.fraction, Some("1/2"));
        assert_eq!(segments.tail, "cups flour");
    }

    #[test]
    fn test_multi_digit_fraction() {
        let segments = segment("11/16 inch ginger").unwrap();
        assert_eq!(segments.fraction, Some("11/16"));
        assert_eq!(segments.tail, "inch ginger");
    }

    #[test]
    fn test_container_size() {
        let segments = segment("1 (12 oz) can beans").unwrap();
        assert_eq!(segments.amount, Some("1"));
        assert_eq!(segments.container_amount, Some("12"));
        assert_eq!(segments.container_unit, Some("oz"));
        assert_eq!(segments.tail, "can beans");
    }

    #[test]
    fn test_decimal_container_amount() {
        let segments = segment("2 (14.5 oz) cans tomatoes").unwrap();
        assert_eq!(segments.amount, Some("2"));
        assert_eq!(segments.container_amount, Some("14.5"));
        assert_eq!(segments.container_unit, Some("oz"));
        assert_eq!(segments.tail, "cans tomatoes");
    }

    #[test]
    fn test_decimal_amount() {
        let segments = segment("2.5 cups milk").unwrap();
        assert_eq!(segments.amount, Some("2.5"));
        assert_eq!(segments.tail, "cups milk");
    }

    #[test]
    fn test_bare_decimal_amount() {
        // One arbitrary character may precede the digits; here it is the dot.
        let segments = segment(".5 cups milk").unwrap();
        assert_eq!(segments.amount, Some(".5"));
        assert_eq!(segments.tail, "cups milk");
    }

    #[test]
    fn test_whole_line_is_tail() {
        let segments = segment("salt and pepper").unwrap();
        assert_eq!(segments.amount, None);
        assert_eq!(segments.fraction, None);
        assert_eq!(segments.tail, "salt and pepper");
    }

    #[test]
    fn test_empty_and_blank_fail() {
        assert!(segment("").is_none());
        assert!(segment("   ").is_none());
        assert!(segment("\t\n").is_none());
    }

    #[test]
    fn test_backtracks_to_keep_tail() {
        // The amount would swallow the whole line; the matcher gives digits
        // back until one tail character remains.
        let segments = segment("25").unwrap();
        assert_eq!(segments.amount, Some("2"));
        assert_eq!(segments.tail, "5");
    }

    #[test]
    fn test_lone_number_stays_in_tail() {
        // A one-digit amount cannot shrink, so the slot is skipped entirely.
        let segments = segment("2").unwrap();
        assert_eq!(segments.amount, None);
        assert_eq!(segments.tail, "2");
    }

    #[test]
    fn test_trailing_space_becomes_tail() {
        let segments = segment("2 ").unwrap();
        assert_eq!(segments.amount, Some("2"));
        assert_eq!(segments.tail, " ");
    }

    #[test]
    fn test_fraction_without_separator_stays_in_tail() {
        let segments = segment("1 1/2").unwrap();
        assert_eq!(segments.amount, Some("1"));
        assert_eq!(segments.fraction, None);
        assert_eq!(segments.tail, "1/2");
    }

    #[test]
    fn test_later_fraction_slot_wins() {
        let segments = segment("1/2 2 1/3 milk").unwrap();
        assert_eq!(segments.amount, Some("2"));
        assert_eq!(segments.fraction, Some("1/3"));
        assert_eq!(segments.tail, "milk");
    }

    #[test]
    fn test_newline_ends_the_match() {
        let segments = segment("1 cup flour\n2 eggs").unwrap();
        assert_eq!(segments.amount, Some("1"));
        assert_eq!(segments.tail, "cup flour");
    }

    #[test]
    fn test_greedy_container_unit() {
        // The unit text is greedy up to the last viable closing paren.
        let segments = segment("1 (12 fl. oz.) bottle (chilled) soda").unwrap();
        assert_eq!(segments.container_amount, Some("12"));
        assert_eq!(segments.container_unit, Some("fl. oz.) bottle (chilled"));
        assert_eq!(segments.tail, "soda");
    }
}
