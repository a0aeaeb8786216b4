//! Range notation parsing for header and key cells
//!
//! Three notations are accepted: `"N-M"` (closed interval), `"N+"` (no upper
//! bound) and a bare `"N"` (single value). Numbers may carry grouping commas
//! (`"1,000"`).

use crate::error::{ExportError, ExportResult};

/// An inclusive interval over rank positions or entry counts.
///
/// `max: None` means unbounded ("+" notation). Unbounded is always a tagged
/// absence, never a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: i64,
    pub max: Option<i64>,
}

impl MinMax {
    /// Interval covering a single value (bare `"N"` notation)
    pub fn exact(value: i64) -> Self {
        Self {
            min: value,
            max: Some(value),
        }
    }

    /// Closed interval (`"N-M"` notation)
    pub fn bounded(min: i64, max: i64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Interval with no upper bound (`"N+"` notation)
    pub fn open(min: i64) -> Self {
        Self { min, max: None }
    }
}

/// Parse a single range token into a [`MinMax`].
///
/// First match wins, in order:
/// 1. `-` at index > 0 splits into min and max (index 0 would be a sign)
/// 2. `+` at index > 0 gives an unbounded interval
/// 3. anything else parses as a single value
pub fn parse_range(text: &str) -> ExportResult<MinMax> {
    if let Some(idx) = text.find('-').filter(|&i| i > 0) {
        let min = parse_int(&text[..idx])?;
        let max = parse_int(&text[idx + 1..])?;
        Ok(MinMax::bounded(min, max))
    } else if text.find('+').filter(|&i| i > 0).is_some() {
        Ok(MinMax::open(parse_int(text)?))
    } else {
        Ok(MinMax::exact(parse_int(text)?))
    }
}

/// Lenient integer parse in the style of a locale number parser: grouping
/// commas are dropped and parsing stops at the first character after the
/// leading numeric token (so `"10+"` parses as 10).
fn parse_int(text: &str) -> ExportResult<i64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    let mut end = 0;
    for (i, ch) in cleaned.char_indices() {
        if ch.is_ascii_digit() || (i == 0 && ch == '-') {
            end = i + ch.len_utf8();
        } else {
            break;
        }
    }

    let token = &cleaned[..end];
    if token.is_empty() || token == "-" {
        return Err(ExportError::RangeFormat(text.to_string()));
    }

    token
        .parse::<i64>()
        .map_err(|_| ExportError::RangeFormat(text.to_string()))
}
