use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use xlsx2csv::cli;

#[derive(Parser)]
#[command(name = "xlsx2csv")]
#[command(about = "Convert an XLSX spreadsheet to CSV")]
#[command(long_about = "xlsx2csv - Memory-efficient XLSX to CSV conversion

Reads the workbook's active sheet row by row and writes one CSV record
per spreadsheet row. Empty cells become empty fields, and formula cells
are passed through as stored formula text, not recomputed.

EXAMPLES:
  xlsx2csv report.xlsx report.csv
  xlsx2csv export.xlsx export.csv --verbose")]
#[command(version)]
struct Cli {
    /// Path to the XLSX file to read (active sheet only)
    input: PathBuf,

    /// Path of the CSV file to write (overwritten if it exists)
    output: PathBuf,

    /// Show verbose conversion steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // clap exits with status 2 on usage errors; this tool's contract is 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = cli::convert(cli.input, cli.output, cli.verbose) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
