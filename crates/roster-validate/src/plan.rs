//! The gate from preview to import.

use roster_model::{
    CellEdits, ColumnMapping, Gender, GenderSplitDecision, RawRow, ValidationReport,
};
use thiserror::Error;

use crate::preview::classify_gender;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Blocking findings exist; the pipeline cannot advance.
    #[error("validation blocked by {errors} error finding(s)")]
    Blocked { errors: usize },
}

/// Rows destined for one target table.
#[derive(Debug, Clone)]
pub struct ImportGroup {
    pub gender: Gender,
    pub rows: Vec<RawRow>,
}

/// Everything the import executor needs for a run.
#[derive(Debug, Clone)]
pub struct ImportPlan {
    pub mapping: ColumnMapping,
    pub dry_run: bool,
    pub groups: Vec<ImportGroup>,
}

/// Advance past validation.
///
/// Fails while any error finding exists. On success, cell edits are
/// merged back into the raw rows (locating the source header by reverse
/// mapping, first match) so import and preview cannot disagree, and the
/// rows are grouped per the split decision. Without a split every row
/// goes to `fallback`.
pub fn proceed(
    rows: &[RawRow],
    mapping: &ColumnMapping,
    decision: &GenderSplitDecision,
    edits: &CellEdits,
    report: &ValidationReport,
    dry_run: bool,
    fallback: Gender,
) -> Result<ImportPlan, ValidationError> {
    if report.has_errors() {
        return Err(ValidationError::Blocked {
            errors: report.error_count(),
        });
    }

    let merged = merge_edits(rows, mapping, edits);

    let groups = match decision {
        GenderSplitDecision::Split { header } => {
            let mut men = Vec::new();
            let mut women = Vec::new();
            for (idx, row) in merged.into_iter().enumerate() {
                let raw = row.value(header).display();
                match classify_gender(&raw) {
                    Some(Gender::Men) => men.push(row),
                    Some(Gender::Women) => women.push(row),
                    None => {
                        tracing::warn!(
                            row = idx + 1,
                            value = %raw,
                            "unrecognized gender value; defaulting to the men group"
                        );
                        men.push(row);
                    }
                }
            }
            vec![
                ImportGroup {
                    gender: Gender::Men,
                    rows: men,
                },
                ImportGroup {
                    gender: Gender::Women,
                    rows: women,
                },
            ]
        }
        GenderSplitDecision::NotApplicable | GenderSplitDecision::DoNotSplit => {
            vec![ImportGroup {
                gender: fallback,
                rows: merged,
            }]
        }
    };

    Ok(ImportPlan {
        mapping: mapping.clone(),
        dry_run,
        groups,
    })
}

fn merge_edits(rows: &[RawRow], mapping: &ColumnMapping, edits: &CellEdits) -> Vec<RawRow> {
    let mut merged = rows.to_vec();
    for (row_idx, target, value) in edits.iter() {
        let Some(row) = merged.get_mut(row_idx) else {
            tracing::debug!(row = row_idx, target, "edit for out-of-range row skipped");
            continue;
        };
        match mapping.source_for_target(target) {
            Some(header) => {
                row.set(header.to_string(), roster_model::RawValue::from_cell(value));
            }
            None => {
                tracing::debug!(target, "edit for unmapped target skipped");
            }
        }
    }
    merged
}
