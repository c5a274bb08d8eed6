//! File-system persistence for finalized mappings.
//!
//! A corrected mapping can be saved as JSON and replayed over a later
//! upload with the same (or overlapping) headers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_model::ColumnMapping;

use crate::state::MappingState;

/// A mapping plus the metadata stored alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMapping {
    pub mapping: ColumnMapping,
    pub saved_at: DateTime<Utc>,
    pub description: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredMapping {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self {
            mapping,
            saved_at: Utc::now(),
            description: None,
            version: default_version(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Save a mapping to `path` as pretty-printed JSON.
pub fn save_mapping(mapping: &ColumnMapping, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create mapping directory: {}", parent.display()))?;
    }
    let stored = StoredMapping::new(mapping.clone());
    let json = serde_json::to_string_pretty(&stored).context("serialize mapping")?;
    fs::write(path, json).with_context(|| format!("write mapping: {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved mapping");
    Ok(())
}

/// Load a stored mapping from `path`.
pub fn load_mapping(path: &Path) -> Result<StoredMapping> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read mapping: {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parse mapping: {}", path.display()))
}

/// Replay a stored mapping's assignments onto a live session.
///
/// Only headers present in the session are applied; assignments for
/// headers the new file lacks are skipped with a debug log.
pub fn apply_stored(stored: &StoredMapping, state: &mut MappingState) -> Result<usize> {
    let mut applied = 0usize;
    for entry in stored.mapping.entries() {
        let Some(target) = entry.target.as_deref() else {
            continue;
        };
        match state.set_mapping(&entry.header, Some(target)) {
            Ok(()) => applied += 1,
            Err(error) => {
                tracing::debug!(header = %entry.header, %error, "skipped stored assignment");
            }
        }
    }
    Ok(applied)
}
