use crate::error::ExportResult;
use crate::types::PayoutStructure;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the payout structure to a JSON file (compact, single line).
pub fn write_json(structure: &PayoutStructure, path: &Path) -> ExportResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, structure)?;
    writer.flush()?;
    Ok(())
}
