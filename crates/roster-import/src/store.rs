//! The row-store seam the executor writes through.

use std::collections::BTreeMap;

use roster_model::Gender;
use serde_json::Value;
use thiserror::Error;

/// Field every stored record carries to scope it to one community.
pub const COMMUNITY_FIELD: &str = "community_id";

/// One record ready for insertion: target column to JSON value.
pub type Record = BTreeMap<String, Value>;

/// Destination table for a gender group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetTable {
    Men,
    Women,
}

impl TargetTable {
    pub fn name(self) -> &'static str {
        match self {
            Self::Men => "pescadores_men",
            Self::Women => "pescadores_women",
        }
    }
}

impl From<Gender> for TargetTable {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Men => Self::Men,
            Gender::Women => Self::Women,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o failure on store file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed store file {path}: {message}")]
    Corrupt { path: String, message: String },
    #[error("insert into {table} rejected: {message}")]
    InsertRejected { table: String, message: String },
    #[error("query against {table} failed: {message}")]
    QueryFailed { table: String, message: String },
}

/// Backend the import executor talks to.
///
/// Key generation is deliberately read-then-increment: the executor calls
/// [`RowStore::max_key`] once per table, then assigns sequential keys
/// itself. Concurrent imports into the same community can therefore
/// collide; a backend may reject the duplicate on insert.
pub trait RowStore {
    /// Highest numeric key present in `table` for `community`, or 0 when
    /// the table has no keyed rows.
    fn max_key(&self, table: TargetTable, community: &str) -> Result<i64, StoreError>;

    /// Insert one batch of records as a single store operation. A failed
    /// batch persists none of its records.
    fn insert(&self, table: TargetTable, records: &[Record]) -> Result<(), StoreError>;

    /// All records in `table` belonging to `community`.
    fn select(&self, table: TargetTable, community: &str) -> Result<Vec<Record>, StoreError>;
}

/// Read a record's key field as a number, tolerating numeric strings.
pub(crate) fn record_key(record: &Record) -> Option<i64> {
    match record.get(roster_model::PESCADORE_KEY)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
