//! Excel import module
//!
//! Reads the first sheet of a payout .xlsx file and builds the payout model:
//! - `cell`: normalizes heterogeneous cells to canonical text
//! - `importer`: header/row parsing and model assembly

mod cell;
mod importer;

pub use cell::{cell_value, format_decimal};
pub use importer::PayoutImporter;
