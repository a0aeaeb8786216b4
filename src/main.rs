use clap::Parser;
use payout_export::cli;
use payout_export::error::ExportResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "payout2json")]
#[command(about = "Convert a tournament payout spreadsheet (.xlsx) to JSON")]
#[command(long_about = "payout2json - payout spreadsheet to JSON converter

Reads the first sheet of an .xlsx file. The header row lists winner rank
ranges; each subsequent row is keyed by an entry-count range and holds the
fraction of the prize pool per rank range.

  +---------------+-----+-----+
  | Range \\ Ranks |  1  |  2  |
  +---------------+-----+-----+
  |       2       | 1.0 |     |
  |      3-10     | 0.7 | 0.3 |
  +---------------+-----+-----+

Range notation: \"N\" (exact), \"N-M\" (closed), \"N+\" (no upper bound).

Rows that fail to parse are logged and skipped; the run only aborts when the
input cannot be read or the output cannot be written.

EXAMPLE:
  payout2json payouts.xlsx payouts.json")]
#[command(version)]
struct Cli {
    /// Path to the input .xlsx payout structure
    input: PathBuf,

    /// Path to write the JSON output
    output: PathBuf,
}

fn main() -> ExportResult<()> {
    let cli = Cli::parse();

    cli::convert(cli.input, cli.output)
}
