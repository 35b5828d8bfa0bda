//! CLI command tests

use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xlsx2csv::cli::commands;

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Name").unwrap();
    sheet.write_string(0, 1, "Qty").unwrap();
    sheet.write_string(1, 0, "Widget").unwrap();
    sheet.write_number(1, 1, 10).unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn test_convert_basic() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx_path = temp_dir.path().join("in.xlsx");
    let csv_path = temp_dir.path().join("out.csv");
    write_fixture(&xlsx_path);

    let result = commands::convert(xlsx_path, csv_path.clone(), false);
    assert!(result.is_ok(), "Convert should succeed on valid file");
    assert!(csv_path.exists(), "Output file should exist");
}

#[test]
fn test_convert_verbose() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx_path = temp_dir.path().join("in.xlsx");
    let csv_path = temp_dir.path().join("out.csv");
    write_fixture(&xlsx_path);

    let result = commands::convert(xlsx_path, csv_path, true);
    assert!(result.is_ok(), "Convert verbose should succeed");
}

#[test]
fn test_convert_nonexistent_input() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("out.csv");

    let result = commands::convert(PathBuf::from("nonexistent.xlsx"), csv_path, false);
    assert!(result.is_err(), "Convert should fail on nonexistent input");
}

#[test]
fn test_convert_output_parent_missing() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx_path = temp_dir.path().join("in.xlsx");
    write_fixture(&xlsx_path);

    let result = commands::convert(xlsx_path, temp_dir.path().join("no_dir/out.csv"), false);
    assert!(result.is_err(), "Convert should fail when parent dir is missing");
}

#[test]
fn test_convert_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx_path = temp_dir.path().join("in.xlsx");
    let csv_path = temp_dir.path().join("out.csv");
    write_fixture(&xlsx_path);
    fs::write(&csv_path, "stale contents that should disappear").unwrap();

    let result = commands::convert(xlsx_path, csv_path.clone(), false);
    assert!(result.is_ok());

    let contents = fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("Name,Qty"));
    assert!(!contents.contains("stale"));
}
