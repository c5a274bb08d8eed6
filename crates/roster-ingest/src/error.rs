//! Parser error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from turning an uploaded file into a [`roster_model::ParsedTable`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file extension is not in the supported set.
    #[error("unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// The file parsed but held zero data rows after the header row.
    #[error("no data rows found after the header row")]
    EmptyFile,

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data in {path}")]
    Delimited {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
