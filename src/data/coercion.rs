//! Value coercion
//!
//! The single translation boundary between raw ingested cells and the rest
//! of the pipeline. Coercion is permissive: anything that is not a clean
//! finite number reads as `0` when a magnitude is needed.

use crate::types::RawValue;

/// Parse text as a finite decimal, accepting only a full match after trimming.
fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Returns true if the value is a number or text that fully parses as one.
pub fn is_numeric(value: &RawValue) -> bool {
    match value {
        RawValue::Number(_) => true,
        RawValue::Text(s) => parse_finite(s).is_some(),
        RawValue::Empty => false,
    }
}

/// Convert a value to a magnitude, degrading to `0` for blanks and
/// non-numeric text.
pub fn to_number(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) if n.is_finite() => *n,
        RawValue::Number(_) => 0.0,
        RawValue::Text(s) => parse_finite(s).unwrap_or(0.0),
        RawValue::Empty => 0.0,
    }
}

/// Printable text form of a value, used for display and as the sort fallback.
pub fn to_comparable(value: &RawValue) -> String {
    match value {
        // f64's Display drops the trailing ".0" on whole numbers
        RawValue::Number(n) => n.to_string(),
        RawValue::Text(s) => s.clone(),
        RawValue::Empty => String::new(),
    }
}
