//! Delimited-text parsing (.csv, .tsv, .txt).

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use roster_model::{ParsedTable, RawRow, RawValue};

use crate::error::{ParseError, Result};

fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file into headers plus raw rows.
///
/// Header names come from the first record; rows shorter than the header
/// list read as empty in the missing columns, and fully blank rows are
/// dropped.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<ParsedTable> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| ParseError::Delimited {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(clean_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ParseError::Delimited {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let cell = record.get(idx).unwrap_or("");
            row.set(header.clone(), RawValue::from_cell(cell));
        }
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    Ok(ParsedTable { headers, rows })
}
