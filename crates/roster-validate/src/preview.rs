//! Preview projection: raw rows seen through the active mapping, with
//! cell edits layered on top and an optional gender split.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use roster_model::{CellEdits, ColumnMapping, Gender, GenderSplitDecision, RawRow};

/// One projected row: target column to display value. Unmapped source
/// headers are dropped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    values: BTreeMap<String, String>,
}

impl PreviewRow {
    pub fn value(&self, target: &str) -> Option<&str> {
        self.values.get(target).map(String::as_str)
    }

    /// True when the target is absent or blank.
    pub fn is_field_empty(&self, target: &str) -> bool {
        self.value(target).is_none_or(|value| value.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(target, value)| (target.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Row indices grouped by classified gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderGroups {
    /// Source header the classification reads.
    pub header: String,
    pub men: Vec<usize>,
    pub women: Vec<usize>,
}

/// Projection of all rows plus the optional split.
#[derive(Debug, Clone)]
pub struct Preview {
    pub rows: Vec<PreviewRow>,
    pub groups: Option<GenderGroups>,
}

/// Classify a raw gender cell. `None` means unrecognized; the caller
/// applies the documented default (men) and logs a diagnostic.
pub fn classify_gender(raw: &str) -> Option<Gender> {
    match raw.trim().to_lowercase().as_str() {
        "m" | "male" | "men" | "man" => Some(Gender::Men),
        "f" | "female" | "women" | "woman" => Some(Gender::Women),
        _ => None,
    }
}

/// Build the preview. The output row count always equals the input row
/// count, even when zero columns are mapped.
pub fn build_preview(
    rows: &[RawRow],
    mapping: &ColumnMapping,
    decision: &GenderSplitDecision,
    edits: &CellEdits,
) -> Preview {
    let mut preview_rows = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let mut values = BTreeMap::new();
        // Entries apply in display order: for a target mapped from two
        // headers the later assignment wins.
        for entry in mapping.entries() {
            let Some(target) = entry.target.as_deref() else {
                continue;
            };
            let value = match edits.get(idx, target) {
                Some(edited) => edited.to_string(),
                None => row.value(&entry.header).display(),
            };
            values.insert(target.to_string(), value);
        }
        preview_rows.push(PreviewRow { values });
    }

    let groups = match decision {
        GenderSplitDecision::Split { header } => Some(split_rows(rows, header)),
        GenderSplitDecision::NotApplicable | GenderSplitDecision::DoNotSplit => None,
    };

    Preview {
        rows: preview_rows,
        groups,
    }
}

fn split_rows(rows: &[RawRow], header: &str) -> GenderGroups {
    let mut men = Vec::new();
    let mut women = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let raw = row.value(header).display();
        match classify_gender(&raw) {
            Some(Gender::Men) => men.push(idx),
            Some(Gender::Women) => women.push(idx),
            None => {
                // Documented policy: unrecognized values land with the men.
                tracing::warn!(
                    row = idx + 1,
                    value = %raw,
                    "unrecognized gender value; defaulting to the men group"
                );
                men.push(idx);
            }
        }
    }
    GenderGroups {
        header: header.to_string(),
        men,
        women,
    }
}
