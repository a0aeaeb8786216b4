//! Payout importer implementation - Excel (.xlsx) → payout model
//!
//! The first sheet is laid out with winner rank ranges in the header row and
//! one data row per entry-count range:
//!
//! ```text
//! +---------------+-----+-----+
//! | Range \ Ranks |  1  |  2  |
//! +---------------+-----+-----+
//! |       2       | 1.0 |     |
//! +---------------+-----+-----+
//! |      3-10     | 0.7 | 0.3 |
//! +---------------+-----+-----+
//! ```
//!
//! Malformed rows are logged and skipped; partial success is the normal mode.

use crate::error::{ExportError, ExportResult};
use crate::excel::cell::cell_value;
use crate::range::{parse_range, MinMax};
use crate::types::{PayoutStructure, Percent, PointPrize, PointPrizeRange};
use calamine::{open_workbook, Data, Reader, Xlsx};
use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

/// Index of the row containing winner ranks
const RANK_ROW_INDEX: usize = 0;
/// Index of the column containing entry ranges
const RANGE_COL_INDEX: usize = 0;

/// Importer for converting a payout .xlsx file to a [`PayoutStructure`]
pub struct PayoutImporter {
    path: std::path::PathBuf,
}

impl PayoutImporter {
    /// Create a new payout importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the first sheet into a payout structure.
    ///
    /// Only I/O and workbook-level failures propagate. A row that fails to
    /// parse is logged with its index and skipped; the run continues and the
    /// result contains every row that did parse, in spreadsheet order.
    pub fn import(&self) -> ExportResult<PayoutStructure> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ExportError::Sheet("workbook contains no sheets".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let (height, _) = range.get_size();
        println!("   \"{}\" has {} row(s)", sheet_name, height);

        let mut ranks: HashMap<usize, MinMax> = HashMap::new();
        let mut ranges: Vec<PointPrizeRange> = Vec::new();

        for (r, row) in range.rows().enumerate() {
            if r == RANK_ROW_INDEX {
                match self.parse_ranks(row) {
                    Ok(parsed) => ranks = parsed,
                    Err(e) => eprintln!(
                        "{}",
                        format!("⚠️  Failed to parse header row {}: {}", r, e).yellow()
                    ),
                }
            } else {
                match self.parse_prize_row(row, &ranks) {
                    Ok(Some(prize_range)) => ranges.push(prize_range),
                    Ok(None) => {} // blank or label-only row
                    Err(e) => eprintln!(
                        "{}",
                        format!("⚠️  Failed to parse row {}: {}", r, e).yellow()
                    ),
                }
            }
        }

        Ok(PayoutStructure {
            point_prize_ranges: ranges,
        })
    }

    /// Build the rank lookup from the header row.
    ///
    /// Column 0 is the "Range \ Ranks" label and is skipped. The scan stops
    /// at the first blank cell: a blank ends the header, columns after it are
    /// never read even if populated.
    fn parse_ranks(&self, row: &[Data]) -> ExportResult<HashMap<usize, MinMax>> {
        let mut ranks = HashMap::new();

        for (c, cell) in row.iter().enumerate() {
            let Some(text) = cell_value(cell) else { break };
            if c != RANGE_COL_INDEX {
                ranks.insert(c, parse_range(&text)?);
            }
        }

        Ok(ranks)
    }

    /// Build one payout row from a data row and the rank lookup.
    ///
    /// Column 0 parses as the row's entry range. Every other populated cell
    /// pairs with its column's rank range and parses as a decimal fraction of
    /// the pool. A cell whose column has no header rank is skipped on its
    /// own; the row survives. Returns `Ok(None)` when no prizes were
    /// collected, which is how blank and label-only rows are filtered out.
    fn parse_prize_row(
        &self,
        row: &[Data],
        ranks: &HashMap<usize, MinMax>,
    ) -> ExportResult<Option<PointPrizeRange>> {
        let mut entries: Option<MinMax> = None;
        let mut prizes: Vec<PointPrize> = Vec::new();

        for (c, cell) in row.iter().enumerate() {
            let Some(text) = cell_value(cell) else { break };

            if c == RANGE_COL_INDEX {
                entries = Some(parse_range(&text)?);
            } else {
                let Some(rank) = ranks.get(&c) else { continue };
                prizes.push(PointPrize {
                    min_rank: rank.min,
                    max_rank: rank.max,
                    prize_percent: Percent::from_fraction(&text)?,
                });
            }
        }

        let Some(entries) = entries else {
            return Ok(None);
        };
        if prizes.is_empty() {
            return Ok(None);
        }

        Ok(Some(PointPrizeRange {
            min_entries: entries.min,
            max_entries: entries.max,
            prizes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn create_test_importer() -> PayoutImporter {
        PayoutImporter::new(PathBuf::from("test.xlsx"))
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_parse_ranks_skips_key_column() {
        let importer = create_test_importer();
        let row = vec![text("Range \\ Ranks"), text("1"), text("2-3")];

        let ranks = importer.parse_ranks(&row).unwrap();

        assert_eq!(ranks.len(), 2);
        assert_eq!(ranks[&1], MinMax::exact(1));
        assert_eq!(ranks[&2], MinMax::bounded(2, 3));
        assert!(!ranks.contains_key(&0));
    }

    #[test]
    fn test_parse_ranks_stops_at_first_blank() {
        let importer = create_test_importer();
        // column 3 is populated but sits behind a blank, so it is never read
        let row = vec![text("R"), text("1"), Data::Empty, text("3")];

        let ranks = importer.parse_ranks(&row).unwrap();

        assert_eq!(ranks.len(), 1);
        assert!(ranks.contains_key(&1));
        assert!(!ranks.contains_key(&3));
    }

    #[test]
    fn test_parse_ranks_accepts_numeric_header_cells() {
        let importer = create_test_importer();
        let row = vec![text("R"), Data::Float(1.0), Data::Float(2.0)];

        let ranks = importer.parse_ranks(&row).unwrap();

        assert_eq!(ranks[&1], MinMax::exact(1));
        assert_eq!(ranks[&2], MinMax::exact(2));
    }

    #[test]
    fn test_parse_ranks_bad_cell_fails_the_row() {
        let importer = create_test_importer();
        let row = vec![text("R"), text("first")];

        assert!(matches!(
            importer.parse_ranks(&row),
            Err(ExportError::RangeFormat(_))
        ));
    }

    fn sample_ranks() -> HashMap<usize, MinMax> {
        let mut ranks = HashMap::new();
        ranks.insert(1, MinMax::exact(1));
        ranks.insert(2, MinMax::bounded(2, 3));
        ranks
    }

    #[test]
    fn test_parse_prize_row_basic() {
        let importer = create_test_importer();
        let row = vec![text("3-10"), Data::Float(0.7), Data::Float(0.3)];

        let result = importer
            .parse_prize_row(&row, &sample_ranks())
            .unwrap()
            .unwrap();

        assert_eq!(result.min_entries, 3);
        assert_eq!(result.max_entries, Some(10));
        assert_eq!(result.prizes.len(), 2);
        assert_eq!(result.prizes[0].min_rank, 1);
        assert_eq!(result.prizes[0].prize_percent.to_string(), "70.00");
        assert_eq!(result.prizes[1].max_rank, Some(3));
        assert_eq!(result.prizes[1].prize_percent.to_string(), "30.00");
    }

    #[test]
    fn test_parse_prize_row_stops_at_first_blank() {
        let importer = create_test_importer();
        let row = vec![text("2"), Data::Float(1.0), Data::Empty, Data::Float(0.5)];

        let result = importer
            .parse_prize_row(&row, &sample_ranks())
            .unwrap()
            .unwrap();

        assert_eq!(result.prizes.len(), 1);
        assert_eq!(result.prizes[0].prize_percent.to_string(), "100.00");
    }

    #[test]
    fn test_parse_prize_row_skips_cell_without_header_rank() {
        let importer = create_test_importer();
        let mut ranks = HashMap::new();
        ranks.insert(1, MinMax::exact(1));
        // column 2 has a value but no header rank: that cell is dropped,
        // the row survives
        let row = vec![text("5"), Data::Float(0.6), Data::Float(0.4)];

        let result = importer.parse_prize_row(&row, &ranks).unwrap().unwrap();

        assert_eq!(result.prizes.len(), 1);
        assert_eq!(result.prizes[0].prize_percent.to_string(), "60.00");
    }

    #[test]
    fn test_parse_prize_row_without_prizes_is_discarded() {
        let importer = create_test_importer();
        let row = vec![text("4-5")];

        assert_eq!(importer.parse_prize_row(&row, &sample_ranks()).unwrap(), None);
    }

    #[test]
    fn test_parse_prize_row_blank_key_is_discarded() {
        let importer = create_test_importer();
        let row = vec![Data::Empty, Data::Float(0.5)];

        assert_eq!(importer.parse_prize_row(&row, &sample_ranks()).unwrap(), None);
    }

    #[test]
    fn test_parse_prize_row_bad_key_fails_the_row() {
        let importer = create_test_importer();
        let row = vec![text("abc"), Data::Float(0.5)];

        assert!(matches!(
            importer.parse_prize_row(&row, &sample_ranks()),
            Err(ExportError::RangeFormat(_))
        ));
    }

    #[test]
    fn test_parse_prize_row_bad_fraction_fails_the_row() {
        let importer = create_test_importer();
        let row = vec![text("3-10"), text("lots")];

        assert!(matches!(
            importer.parse_prize_row(&row, &sample_ranks()),
            Err(ExportError::FractionFormat(_))
        ));
    }

    #[test]
    fn test_parse_prize_row_open_entry_range() {
        let importer = create_test_importer();
        let row = vec![text("100+"), Data::Float(0.05)];

        let result = importer
            .parse_prize_row(&row, &sample_ranks())
            .unwrap()
            .unwrap();

        assert_eq!(result.min_entries, 100);
        assert_eq!(result.max_entries, None);
        assert_eq!(result.prizes[0].prize_percent.to_string(), "5.00");
    }

    #[test]
    fn test_import_missing_file_is_fatal() {
        let importer = PayoutImporter::new("does-not-exist.xlsx");
        assert!(importer.import().is_err());
    }
}
