//! In-memory store used by tests and dry-run inspection.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::store::{COMMUNITY_FIELD, Record, RowStore, StoreError, TargetTable, record_key};

#[derive(Debug, Default)]
struct Inner {
    tables: BTreeMap<String, Vec<Record>>,
    insert_calls: usize,
    fail_on_insert: Option<usize>,
    fail_max_key: bool,
}

/// A [`RowStore`] backed by a mutex-guarded map, with failure injection
/// for exercising the executor's error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the nth batch insert (1-based, counted across tables) fail.
    pub fn fail_on_insert(&self, nth: usize) {
        self.locked().fail_on_insert = Some(nth);
    }

    /// Make every max-key query fail.
    pub fn fail_max_key(&self) {
        self.locked().fail_max_key = true;
    }

    /// Number of batch insert calls received, including rejected ones.
    pub fn insert_calls(&self) -> usize {
        self.locked().insert_calls
    }

    /// Pre-populate a table, bypassing the failure counters.
    pub fn seed(&self, table: TargetTable, records: Vec<Record>) {
        self.locked()
            .tables
            .entry(table.name().to_string())
            .or_default()
            .extend(records);
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl RowStore for MemoryStore {
    fn max_key(&self, table: TargetTable, community: &str) -> Result<i64, StoreError> {
        let inner = self.locked();
        if inner.fail_max_key {
            return Err(StoreError::QueryFailed {
                table: table.name().to_string(),
                message: "injected max-key failure".to_string(),
            });
        }
        let max = inner
            .tables
            .get(table.name())
            .into_iter()
            .flatten()
            .filter(|record| {
                record.get(COMMUNITY_FIELD).and_then(|value| value.as_str()) == Some(community)
            })
            .filter_map(record_key)
            .max()
            .unwrap_or(0);
        Ok(max)
    }

    fn insert(&self, table: TargetTable, records: &[Record]) -> Result<(), StoreError> {
        let mut inner = self.locked();
        inner.insert_calls += 1;
        if inner.fail_on_insert == Some(inner.insert_calls) {
            return Err(StoreError::InsertRejected {
                table: table.name().to_string(),
                message: "injected insert failure".to_string(),
            });
        }
        inner
            .tables
            .entry(table.name().to_string())
            .or_default()
            .extend_from_slice(records);
        Ok(())
    }

    fn select(&self, table: TargetTable, community: &str) -> Result<Vec<Record>, StoreError> {
        let inner = self.locked();
        Ok(inner
            .tables
            .get(table.name())
            .into_iter()
            .flatten()
            .filter(|record| {
                record.get(COMMUNITY_FIELD).and_then(|value| value.as_str()) == Some(community)
            })
            .cloned()
            .collect())
    }
}
