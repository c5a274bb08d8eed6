//! File-backed store: one JSON array per table under a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{COMMUNITY_FIELD, Record, RowStore, StoreError, TargetTable, record_key};

/// A [`RowStore`] persisted as `<dir>/<table>.json`.
///
/// Writes go through a temp file and rename so a crash mid-write never
/// leaves a truncated table behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, table: TargetTable) -> PathBuf {
        self.dir.join(format!("{}.json", table.name()))
    }

    fn read_table(&self, table: TargetTable) -> Result<Vec<Record>, StoreError> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|error| StoreError::Corrupt {
            path: path.display().to_string(),
            message: error.to_string(),
        })
    }

    fn write_table(&self, table: TargetTable, records: &[Record]) -> Result<(), StoreError> {
        let path = self.table_path(table);
        let io_err = |source| StoreError::Io {
            path: path.display().to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let json = serde_json::to_string_pretty(records).map_err(|error| StoreError::Corrupt {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        let tmp = tmp_path(&path);
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

impl RowStore for JsonFileStore {
    fn max_key(&self, table: TargetTable, community: &str) -> Result<i64, StoreError> {
        let max = self
            .read_table(table)?
            .iter()
            .filter(|record| {
                record.get(COMMUNITY_FIELD).and_then(|value| value.as_str()) == Some(community)
            })
            .filter_map(record_key)
            .max()
            .unwrap_or(0);
        Ok(max)
    }

    fn insert(&self, table: TargetTable, records: &[Record]) -> Result<(), StoreError> {
        let mut stored = self.read_table(table)?;
        // The executor generates keys without a transaction; reject the
        // duplicate rather than silently storing two rows under one key.
        // Duplicates are checked before anything is appended, so a
        // rejected batch leaves the table file untouched.
        for record in records {
            if let Some(key) = record_key(record)
                && stored.iter().any(|existing| record_key(existing) == Some(key))
            {
                return Err(StoreError::InsertRejected {
                    table: table.name().to_string(),
                    message: format!("duplicate key {key}"),
                });
            }
            stored.push(record.clone());
        }
        self.write_table(table, &stored)
    }

    fn select(&self, table: TargetTable, community: &str) -> Result<Vec<Record>, StoreError> {
        Ok(self
            .read_table(table)?
            .into_iter()
            .filter(|record| {
                record.get(COMMUNITY_FIELD).and_then(|value| value.as_str()) == Some(community)
            })
            .collect())
    }
}
