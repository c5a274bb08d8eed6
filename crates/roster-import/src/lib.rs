//! Import execution: row stores, key generation, and the batched
//! executor that writes an [`roster_validate::ImportPlan`] into the
//! men/women member tables.

#![deny(unsafe_code)]

mod executor;
mod json_store;
mod memory;
mod progress;
mod store;

pub use executor::{
    DEFAULT_BATCH_SIZE, DEFAULT_DRY_RUN_ROW_DELAY, ImportError, ImportExecutor, ImportOptions,
    ImportState,
};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use progress::{NullSink, ProgressSink};
pub use store::{COMMUNITY_FIELD, Record, RowStore, StoreError, TargetTable};
