//! Raw tabular data as produced by the parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw cell value from an uploaded file.
///
/// Absent cells and explicit nulls both collapse to `Empty`; the rest of
/// the pipeline never distinguishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawValue {
    Text(String),
    Number(f64),
    Empty,
}

impl RawValue {
    /// Build a value from a text cell, folding blanks into `Empty`.
    pub fn from_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Render for preview display. Whole numbers drop the decimal point.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) => {
                if number.fract() == 0.0 && number.is_finite() {
                    format!("{}", *number as i64)
                } else {
                    format!("{number}")
                }
            }
        }
    }
}

/// One parsed row: source header to raw value.
///
/// Rows are heterogeneous; a header missing from a row reads as `Empty`.
/// Duplicate source headers collapse last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    cells: BTreeMap<String, RawValue>,
}

impl RawRow {
    const EMPTY: RawValue = RawValue::Empty;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, header: impl Into<String>, value: RawValue) {
        self.cells.insert(header.into(), value);
    }

    pub fn value(&self, header: &str) -> &RawValue {
        self.cells.get(header).unwrap_or(&Self::EMPTY)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(RawValue::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.cells.iter().map(|(header, value)| (header.as_str(), value))
    }
}

/// Output of the tabular parser: ordered headers plus raw rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl ParsedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_collapse_to_empty() {
        assert_eq!(RawValue::from_cell("  "), RawValue::Empty);
        assert_eq!(RawValue::from_cell(" x "), RawValue::Text("x".to_string()));
        assert!(RawValue::Text("  ".to_string()).is_empty());
    }

    #[test]
    fn missing_header_reads_empty() {
        let mut row = RawRow::new();
        row.set("First", RawValue::from_cell("Ann"));
        assert_eq!(row.value("Last"), &RawValue::Empty);
        assert_eq!(row.value("First").display(), "Ann");
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(RawValue::Number(42.0).display(), "42");
        assert_eq!(RawValue::Number(1.5).display(), "1.5");
    }
}
