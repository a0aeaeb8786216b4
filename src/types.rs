//! Output payout model
//!
//! These types serialize to the JSON schema consumed downstream:
//!
//! ```json
//! {"pointPrizeRanges":[
//!   {"minEntries":3,"maxEntries":10,
//!    "prizes":[{"minRank":1,"maxRank":1,"prizePercent":70.00}]}
//! ]}
//! ```
//!
//! Field names and the exact 2-decimal rendering of `prizePercent` are part
//! of the contract and must not change.

use crate::error::{ExportError, ExportResult};
use serde::{Serialize, Serializer};
use std::fmt;

//==============================================================================
// Percent
//==============================================================================

/// A prize percentage with 2 fractional digits, truncated toward zero.
///
/// Stored as basis points (1 unit = 0.01%) so no floating-point error can
/// creep in between parsing and serialization. `0.7035` of the pool is
/// exactly `Percent(7035)`, rendered as `70.35`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(i64);

impl Percent {
    /// Construct directly from basis points (hundredths of a percent).
    pub fn from_basis_points(basis_points: i64) -> Self {
        Percent(basis_points)
    }

    /// Parse a decimal fraction of the prize pool (e.g. `"0.7"`) and convert
    /// it to a percentage.
    ///
    /// The conversion is exact string arithmetic: the decimal point shifts
    /// four places and any further digits are dropped, never rounded up.
    /// `"0.70359"` yields 70.35, not 70.36.
    pub fn from_fraction(text: &str) -> ExportResult<Self> {
        let err = || ExportError::FractionFormat(text.to_string());

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(err());
        }

        let int_val: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| err())?
        };

        // Truncate toward zero at four fraction digits (= two percent digits)
        let padded: String = frac_part
            .chars()
            .chain(std::iter::repeat('0'))
            .take(4)
            .collect();
        let frac: i64 = padded.parse().map_err(|_| err())?;

        let basis_points = int_val * 10_000 + frac;
        Ok(Percent(if negative { -basis_points } else { basis_points }))
    }

    pub fn basis_points(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl Serialize for Percent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // arbitrary_precision lets the exact "70.00" token reach the output
        let number: serde_json::Number = self
            .to_string()
            .parse()
            .map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

//==============================================================================
// Payout model
//==============================================================================

/// One payout: a rank interval and its share of the prize pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointPrize {
    pub min_rank: i64,
    /// Absent for unbounded ranks ("10+" columns)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rank: Option<i64>,
    pub prize_percent: Percent,
}

/// Payouts for one entry-count interval (one spreadsheet data row).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointPrizeRange {
    pub min_entries: i64,
    /// Absent for unbounded entry counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<i64>,
    pub prizes: Vec<PointPrize>,
}

/// The complete payout model, rows in spreadsheet order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutStructure {
    pub point_prize_ranges: Vec<PointPrizeRange>,
}
