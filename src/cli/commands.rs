use crate::converter::Converter;
use crate::error::ConvertResult;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the conversion
pub fn convert(input: PathBuf, output: PathBuf, verbose: bool) -> ConvertResult<()> {
    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }

    let converter = Converter::new(&input);
    let stats = converter.convert(&output)?;

    if verbose {
        println!("   {} rows, {} cells", stats.rows, stats.cells);
        println!("{}", "💾 CSV written".cyan());
        println!();
    }

    println!("Converted {} to {}", input.display(), output.display());
    Ok(())
}
