use std::io::Write;

use roster_ingest::{ParseError, parse_file};
use roster_model::RawValue;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn parses_csv_headers_and_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "roster.csv",
        "First,Last,Email\nAnn,Smith,ann@example.org\nBob,Jones,\n",
    );

    let table = parse_file(&path).unwrap();
    assert_eq!(table.headers, vec!["First", "Last", "Email"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.rows[0].value("Email").display(), "ann@example.org");
    assert_eq!(table.rows[1].value("Email"), &RawValue::Empty);
}

#[test]
fn short_rows_read_empty_in_missing_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "roster.csv", "First,Last,Email\nAnn\n");

    let table = parse_file(&path).unwrap();
    assert_eq!(table.rows[0].value("First").display(), "Ann");
    assert_eq!(table.rows[0].value("Last"), &RawValue::Empty);
}

#[test]
fn blank_rows_are_dropped() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "roster.csv", "First,Last\nAnn,Smith\n,\nBob,Jones\n");

    let table = parse_file(&path).unwrap();
    assert_eq!(table.row_count(), 2);
}

#[test]
fn header_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "roster.csv", "First,Last,Email\n");

    let error = parse_file(&path).unwrap_err();
    assert!(matches!(error, ParseError::EmptyFile));
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "roster.pdf", "not a roster");

    let error = parse_file(&path).unwrap_err();
    assert!(matches!(
        error,
        ParseError::UnsupportedFormat { extension } if extension == "pdf"
    ));
}

#[test]
fn tab_delimited_files_parse() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "roster.tsv", "First\tLast\nAnn\tSmith\n");

    let table = parse_file(&path).unwrap();
    assert_eq!(table.headers, vec!["First", "Last"]);
    assert_eq!(table.rows[0].value("Last").display(), "Smith");
}
