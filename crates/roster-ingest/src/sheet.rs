//! Spreadsheet parsing (.xlsx, .xls) via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use roster_model::{ParsedTable, RawRow, RawValue};

use crate::error::{ParseError, Result};

fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(text) => RawValue::from_cell(text),
        Data::Float(number) => RawValue::Number(*number),
        Data::Int(number) => RawValue::Number(*number as f64),
        Data::Bool(flag) => RawValue::Text(flag.to_string()),
        other => RawValue::from_cell(&other.to_string()),
    }
}

/// Read the first worksheet of a workbook into headers plus raw rows.
pub fn read_sheet(path: &Path) -> Result<ParsedTable> {
    let workbook_error = |message: String| ParseError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook =
        open_workbook_auto(path).map_err(|error| workbook_error(error.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| workbook_error("workbook has no worksheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|error| workbook_error(error.to_string()))?;

    let mut cell_rows = range.rows();
    let header_row = cell_rows.next().ok_or(ParseError::EmptyFile)?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for cells in cell_rows {
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = cells.get(idx).map_or(RawValue::Empty, cell_value);
            row.set(header.clone(), value);
        }
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    Ok(ParsedTable { headers, rows })
}
