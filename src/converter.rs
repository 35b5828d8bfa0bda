//! XLSX → CSV conversion

use crate::error::{ConvertError, ConvertResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Counters reported back to the CLI after a conversion
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertStats {
    /// CSV records written (one per spreadsheet row)
    pub rows: usize,
    /// Fields written across all records
    pub cells: usize,
}

/// Converts the active sheet of an XLSX workbook to a CSV file
pub struct Converter {
    input: PathBuf,
}

impl Converter {
    /// Create a converter for the given XLSX file
    pub fn new<P: AsRef<Path>>(input: P) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
        }
    }

    /// Convert the workbook's active sheet to a CSV file at `output`.
    ///
    /// The output file is created (or overwritten) and every row of the
    /// sheet's used range becomes one CSV record, in sheet order. Cells
    /// with no stored value become empty fields. Cells that store a
    /// formula are written as the formula text, not a computed value.
    pub fn convert<P: AsRef<Path>>(&self, output: P) -> ConvertResult<ConvertStats> {
        let mut workbook: Xlsx<_> = open_workbook(&self.input)?;

        // calamine does not expose the workbook's activeTab attribute, so
        // the first sheet in workbook order stands in for the active sheet.
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ConvertError::NoSheets)?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let formulas = workbook.worksheet_formula(&sheet_name).ok();

        let mut writer = csv::Writer::from_path(output)?;
        let mut stats = ConvertStats::default();

        if let (Some(start), Some(end)) = (range.start(), range.end()) {
            for row in start.0..=end.0 {
                let record: Vec<String> = (start.1..=end.1)
                    .map(|col| field_at(&range, formulas.as_ref(), (row, col)))
                    .collect();

                stats.cells += record.len();
                writer.write_record(&record)?;
                stats.rows += 1;
            }
        }

        writer.flush()?;
        Ok(stats)
    }
}

/// Render the field at an absolute cell position, preferring stored
/// formula text over the cached value
fn field_at(range: &Range<Data>, formulas: Option<&Range<String>>, pos: (u32, u32)) -> String {
    if let Some(formulas) = formulas {
        if let Some(formula) = formulas.get_value(pos) {
            if !formula.is_empty() {
                // calamine strips the leading = from stored formulas
                return if formula.starts_with('=') {
                    formula.clone()
                } else {
                    format!("={formula}")
                };
            }
        }
    }

    range.get_value(pos).map(format_cell).unwrap_or_default()
}

/// Render a single cell value as a CSV field
fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        other => other.to_string(),
    }
}
