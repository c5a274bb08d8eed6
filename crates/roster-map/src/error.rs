//! Mapping editor errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The header is not part of the parsed file.
    #[error("unknown source header: {0}")]
    UnknownHeader(String),

    /// The target name is not in the fixed schema; the mapper must never
    /// invent target columns.
    #[error("unknown target column: {0}")]
    UnknownTarget(String),

    /// Advancing requires at least one mapped column.
    #[error("no columns are mapped")]
    NoColumnsMapped,

    /// A gender-like column was detected; the caller must decide whether
    /// to split before advancing.
    #[error("gender column {0:?} detected; a split decision is required")]
    SplitDecisionRequired(String),

    /// The split decision is immutable once made for a session.
    #[error("the gender split decision has already been made")]
    SplitDecisionAlreadySet,
}

pub type Result<T> = std::result::Result<T, MapError>;
