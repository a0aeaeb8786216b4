//! Payout Export - tournament payout spreadsheet to JSON converter
//!
//! Reads the first sheet of an .xlsx file containing a payout structure and
//! exports it to JSON. The header row holds the winner rank ranges;
//! subsequent rows hold entry-count ranges with the payout fraction per
//! winner rank.
//!
//! # Features
//!
//! - Range notation parsing ("1", "2-3", "10+")
//! - Exact 2-decimal percentages, truncated toward zero so payouts never sum
//!   past 100% through rounding
//! - Malformed rows are logged and skipped, never abort the run
//!
//! # Example
//!
//! ```no_run
//! use payout_export::excel::PayoutImporter;
//!
//! let importer = PayoutImporter::new("payouts.xlsx");
//! let structure = importer.import()?;
//!
//! println!("Entry ranges: {}", structure.point_prize_ranges.len());
//! # Ok::<(), payout_export::error::ExportError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod range;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ExportError, ExportResult};
pub use range::MinMax;
pub use types::{PayoutStructure, Percent, PointPrize, PointPrizeRange};
