//! Cell value normalization
//!
//! The single point where a heterogeneous spreadsheet cell becomes text for
//! the range parser and the fraction parser.

use calamine::Data;

/// Reduce a cell to its canonical text, or `None` for blank and other
/// unusable cells.
///
/// `None` signals "end of populated cells" to callers: both the header scan
/// and the data-row scan stop at the first `None`.
///
/// Numeric cells (including cached formula results, which calamine surfaces
/// as their value) go through [`format_decimal`] so binary-float artifacts
/// like `0.30000000000000004` never reach the parsers.
pub fn cell_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Float(f) => Some(format_decimal(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::DateTime(dt) => Some(format_decimal(dt.as_f64())),
        Data::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Format a number with at most 4 fraction digits, trailing zeros trimmed
/// (the `0.####` pattern).
pub fn format_decimal(value: f64) -> String {
    let mut s = format!("{:.4}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
