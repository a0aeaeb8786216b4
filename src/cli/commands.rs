//! CLI command implementations

use crate::error::ExportResult;
use crate::excel::PayoutImporter;
use crate::writer;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command: payout .xlsx in, payout JSON out.
///
/// Row-level parse failures are reported by the importer and skipped; only
/// I/O and workbook-level failures propagate out of here.
pub fn convert(input: PathBuf, output: PathBuf) -> ExportResult<()> {
    println!("{}", "Payout Export - XLSX → JSON".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let importer = PayoutImporter::new(&input);
    let structure = importer.import()?;

    println!(
        "   Parsed {} entry range(s)\n",
        structure.point_prize_ranges.len()
    );

    writer::write_json(&structure, &output)?;

    println!("{}", "✅ Export complete".bold().green());
    println!("   JSON file: {}", output.display());

    Ok(())
}
