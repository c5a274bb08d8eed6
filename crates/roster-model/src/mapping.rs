//! Column mapping types shared across the import pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One source header and the target column it maps to, if any.
///
/// `target: None` means "considered and unmapped", which is distinct from
/// a header the mapper never saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub header: String,
    pub target: Option<String>,
}

/// Mapping from source headers to target columns.
///
/// Header order is preserved for display. A target may be assigned to any
/// number of headers; downstream projection applies entries in order, so
/// the last assignment wins for a shared target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    /// Start an all-unset mapping over the given headers. Duplicate
    /// headers keep their first position and collapse to one entry.
    pub fn new(headers: &[String]) -> Self {
        let mut entries: Vec<MappingEntry> = Vec::with_capacity(headers.len());
        for header in headers {
            if !entries.iter().any(|entry| &entry.header == header) {
                entries.push(MappingEntry {
                    header: header.clone(),
                    target: None,
                });
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_header(&self, header: &str) -> bool {
        self.entries.iter().any(|entry| entry.header == header)
    }

    /// Assign or clear the target for a header. Returns false when the
    /// header is not part of this mapping.
    pub fn set(&mut self, header: &str, target: Option<String>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.header == header) {
            Some(entry) => {
                entry.target = target;
                true
            }
            None => false,
        }
    }

    pub fn target_for(&self, header: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.header == header)
            .and_then(|entry| entry.target.as_deref())
    }

    /// First header assigned to `target`, used when merging cell edits
    /// back into raw rows.
    pub fn source_for_target(&self, target: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.target.as_deref() == Some(target))
            .map(|entry| entry.header.as_str())
    }

    /// All headers assigned to `target`, in display order.
    pub fn sources_for_target(&self, target: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.target.as_deref() == Some(target))
            .map(|entry| entry.header.as_str())
            .collect()
    }

    pub fn mapped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.target.is_some())
            .count()
    }

    pub fn stats(&self) -> MappingStats {
        let total = self.entries.len();
        let mapped = self.mapped_count();
        MappingStats {
            total,
            mapped,
            unmapped: total - mapped,
        }
    }
}

/// Summary counts over a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    pub total: usize,
    pub mapped: usize,
    pub unmapped: usize,
}

/// Destination group for imported members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
        }
    }
}

/// Whether an import splits rows into the men/women tables based on a
/// detected gender column. Set once per session, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderSplitDecision {
    /// No gender-like column was detected.
    NotApplicable,
    /// Split rows by the values of the named source header.
    Split { header: String },
    /// A gender column exists but the caller chose one destination.
    DoNotSplit,
}

/// Per-cell overrides entered during preview, keyed by row index and
/// target column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEdits {
    edits: BTreeMap<usize, BTreeMap<String, String>>,
}

impl CellEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: usize, target: impl Into<String>, value: impl Into<String>) {
        self.edits
            .entry(row)
            .or_default()
            .insert(target.into(), value.into());
    }

    pub fn get(&self, row: usize, target: &str) -> Option<&str> {
        self.edits
            .get(&row)
            .and_then(|cells| cells.get(target))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        self.edits.iter().flat_map(|(row, cells)| {
            cells
                .iter()
                .map(move |(target, value)| (*row, target.as_str(), value.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn stats_partition_the_headers() {
        let mut mapping = ColumnMapping::new(&headers(&["a", "b", "c"]));
        mapping.set("a", Some("First".to_string()));
        let stats = mapping.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.mapped, 1);
        assert_eq!(stats.unmapped, 2);
    }

    #[test]
    fn duplicate_headers_collapse() {
        let mapping = ColumnMapping::new(&headers(&["a", "b", "a"]));
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn reverse_lookup_returns_first_source() {
        let mut mapping = ColumnMapping::new(&headers(&["a", "b"]));
        mapping.set("a", Some("Email".to_string()));
        mapping.set("b", Some("Email".to_string()));
        assert_eq!(mapping.source_for_target("Email"), Some("a"));
        assert_eq!(mapping.sources_for_target("Email"), vec!["a", "b"]);
    }

    #[test]
    fn set_unknown_header_is_rejected() {
        let mut mapping = ColumnMapping::new(&headers(&["a"]));
        assert!(!mapping.set("missing", Some("First".to_string())));
    }

    #[test]
    fn cell_edit_round_trip() {
        let mut edits = CellEdits::new();
        edits.set(2, "Email", "a@b.org");
        assert_eq!(edits.get(2, "Email"), Some("a@b.org"));
        assert_eq!(edits.get(1, "Email"), None);
    }
}
