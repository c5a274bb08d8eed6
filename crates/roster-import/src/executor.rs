//! The batched import executor.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use roster_model::{
    ColumnMapping, GeneratedKey, ImportOutcome, PESCADORE_KEY, RawRow, RawValue,
};
use roster_validate::ImportPlan;

use crate::progress::ProgressSink;
use crate::store::{COMMUNITY_FIELD, Record, RowStore, StoreError, TargetTable};

/// Rows inserted per batch.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Per-row pause during a dry run, so a run over a real file is visibly
/// a run and not a no-op.
pub const DEFAULT_DRY_RUN_ROW_DELAY: Duration = Duration::from_millis(25);

#[derive(Debug, Error)]
pub enum ImportError {
    /// The starting key could not be read; nothing was inserted.
    #[error("failed to query max key in {table}")]
    MaxKey {
        table: String,
        #[source]
        source: StoreError,
    },
    #[error("import already ran; state is {state:?}")]
    NotIdle { state: ImportState },
}

/// Lifecycle of one executor. There is no cancellation; a running import
/// finishes or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    Idle,
    Running,
    Completed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub batch_size: usize,
    pub dry_run_row_delay: Duration,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            dry_run_row_delay: DEFAULT_DRY_RUN_ROW_DELAY,
        }
    }
}

/// Runs one import plan to completion. Single use: a second call to
/// [`ImportExecutor::run`] is rejected.
#[derive(Debug)]
pub struct ImportExecutor {
    options: ImportOptions,
    state: ImportState,
}

impl ImportExecutor {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            state: ImportState::Idle,
        }
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    /// Execute the plan against `store`, scoping every record to
    /// `community`.
    ///
    /// Per-batch insert failures are recorded in the outcome and the run
    /// continues with the next batch. Only a failed starting-key query
    /// aborts the run, since without it no keys can be assigned. Dry
    /// runs make no store calls at all and always complete.
    pub fn run(
        &mut self,
        plan: &ImportPlan,
        community: &str,
        store: &dyn RowStore,
        sink: &dyn ProgressSink,
    ) -> Result<ImportOutcome, ImportError> {
        if self.state != ImportState::Idle {
            return Err(ImportError::NotIdle { state: self.state });
        }
        self.state = ImportState::Running;

        let total: usize = plan.groups.iter().map(|group| group.rows.len()).sum();
        let mut outcome = ImportOutcome::new(total, plan.dry_run);
        let mut row_number = 0usize;

        for group in &plan.groups {
            if group.rows.is_empty() {
                continue;
            }
            let table = TargetTable::from(group.gender);
            // Dry runs never contact the store; keys preview from a
            // local counter instead of the stored maximum.
            let start_key = if plan.dry_run {
                0
            } else {
                match store.max_key(table, community) {
                    Ok(key) => key,
                    Err(source) => {
                        self.state = ImportState::Failed;
                        return Err(ImportError::MaxKey {
                            table: table.name().to_string(),
                            source,
                        });
                    }
                }
            };
            tracing::info!(
                table = table.name(),
                rows = group.rows.len(),
                start_key,
                dry_run = plan.dry_run,
                "importing group"
            );

            let mut next_key = start_key;
            for batch in group.rows.chunks(self.options.batch_size) {
                let first_row = row_number + 1;
                let mut records = Vec::with_capacity(batch.len());
                for row in batch {
                    row_number += 1;
                    let record = build_record(
                        row,
                        &plan.mapping,
                        community,
                        &mut next_key,
                        row_number,
                        &mut outcome.generated_keys,
                    );
                    records.push(record);
                    if plan.dry_run {
                        std::thread::sleep(self.options.dry_run_row_delay);
                    }
                }
                let last_row = row_number;

                if plan.dry_run {
                    outcome.succeeded += records.len();
                } else {
                    match store.insert(table, &records) {
                        Ok(()) => outcome.succeeded += records.len(),
                        Err(error) => {
                            // The whole batch is counted failed; the run
                            // moves on to the next one.
                            outcome.failed += records.len();
                            let message = error.to_string();
                            tracing::warn!(
                                table = table.name(),
                                first_row,
                                last_row,
                                %message,
                                "batch failed"
                            );
                            sink.notify(
                                &format!("batch rows {first_row}-{last_row} failed: {message}"),
                                true,
                            );
                            outcome.batch_errors.push(roster_model::BatchFailure {
                                first_row,
                                last_row,
                                message,
                            });
                        }
                    }
                }
                sink.on_progress(outcome.processed(), total);
            }
        }

        self.state = ImportState::Completed;
        Ok(outcome)
    }
}

/// Project one raw row into a record, assigning a key when the source
/// did not carry one.
fn build_record(
    row: &RawRow,
    mapping: &ColumnMapping,
    community: &str,
    next_key: &mut i64,
    row_number: usize,
    generated: &mut Vec<GeneratedKey>,
) -> Record {
    let mut record = Record::new();
    for entry in mapping.entries() {
        let Some(target) = entry.target.as_deref() else {
            continue;
        };
        let value = match row.value(&entry.header) {
            RawValue::Empty => continue,
            RawValue::Text(text) => Value::String(text.trim().to_string()),
            RawValue::Number(number) => serde_json::Number::from_f64(*number)
                .map_or(Value::Null, Value::Number),
        };
        record.insert(target.to_string(), value);
    }

    let existing_key = record
        .get(PESCADORE_KEY)
        .and_then(|value| match value {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        });
    let key = match existing_key {
        Some(key) => key,
        None => {
            *next_key += 1;
            generated.push(GeneratedKey {
                row_number,
                key: *next_key,
            });
            *next_key
        }
    };
    record.insert(PESCADORE_KEY.to_string(), Value::from(key));
    record.insert(COMMUNITY_FIELD.to_string(), Value::from(community));
    record
}
