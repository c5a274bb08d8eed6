#![deny(unsafe_code)]

//! Tabular parser: turns an uploaded roster file into an ordered header
//! list plus untyped raw rows.
//!
//! Supported formats are delimited text (`.csv`, `.tsv`, `.txt`) and
//! spreadsheets (`.xlsx`, `.xls`). Parsing has no side effects and never
//! touches the network.

pub mod delimited;
pub mod error;
pub mod sheet;

use std::path::Path;

use roster_model::ParsedTable;

pub use crate::delimited::read_delimited;
pub use crate::error::{ParseError, Result};
pub use crate::sheet::read_sheet;

/// Parse an uploaded file, dispatching on its extension.
///
/// Fails with [`ParseError::UnsupportedFormat`] for unknown extensions and
/// [`ParseError::EmptyFile`] when zero data rows follow the header row.
pub fn parse_file(path: &Path) -> Result<ParsedTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = match extension.as_str() {
        "csv" | "txt" => read_delimited(path, b',')?,
        "tsv" => read_delimited(path, b'\t')?,
        "xlsx" | "xls" => read_sheet(path)?,
        _ => return Err(ParseError::UnsupportedFormat { extension }),
    };

    if table.rows.is_empty() {
        return Err(ParseError::EmptyFile);
    }
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        file = %path.display(),
        "parsed roster file"
    );
    Ok(table)
}
