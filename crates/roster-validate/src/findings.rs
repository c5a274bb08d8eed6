//! Validation rules over the preview.

use roster_model::{
    CHURCH, ColumnMapping, EMAIL, FIRST, Finding, LAST, PESCADORE_KEY, PHONE1, RowIssue,
    ValidationReport,
};

use crate::preview::Preview;

/// Compute the findings for one preview pass.
///
/// Errors gate the import. When `First` or `Last` is entirely unmapped a
/// single blocking finding is emitted and the row-level scan is skipped;
/// there is nothing meaningful to scan.
pub fn validate(preview: &Preview, mapping: &ColumnMapping) -> ValidationReport {
    let mut report = ValidationReport::new();

    let unmapped_required: Vec<&str> = [FIRST, LAST]
        .into_iter()
        .filter(|target| mapping.source_for_target(target).is_none())
        .collect();
    if !unmapped_required.is_empty() {
        report.push(Finding::error(format!(
            "Required column(s) not mapped: {}",
            unmapped_required.join(", ")
        )));
        return report;
    }

    let mut missing_name_rows = Vec::new();
    for (idx, row) in preview.rows.iter().enumerate() {
        let missing: Vec<&str> = [FIRST, LAST]
            .into_iter()
            .filter(|target| row.is_field_empty(target))
            .collect();
        if !missing.is_empty() {
            missing_name_rows.push(RowIssue {
                row_number: idx + 1,
                message: format!("missing {}", missing.join(", ")),
            });
        }
    }
    if !missing_name_rows.is_empty() {
        report.push(
            Finding::error(format!(
                "{} row(s) are missing a required name field",
                missing_name_rows.len()
            ))
            .with_rows(missing_name_rows),
        );
    }

    for target in [EMAIL, PHONE1, CHURCH] {
        let count = preview
            .rows
            .iter()
            .filter(|row| row.is_field_empty(target))
            .count();
        if count > 0 {
            report.push(Finding::warning(format!("{count} row(s) have no {target}")));
        }
    }

    let keyless = preview
        .rows
        .iter()
        .filter(|row| row.is_field_empty(PESCADORE_KEY))
        .count();
    if keyless > 0 {
        report.push(Finding::info(format!(
            "{keyless} row(s) have no {PESCADORE_KEY}; sequential keys will be generated on import"
        )));
    }

    report_shared_targets(mapping, &mut report);

    if let Some(groups) = &preview.groups {
        report.push(Finding::info(format!(
            "Gender split on {:?}: {} men, {} women, {} total",
            groups.header,
            groups.men.len(),
            groups.women.len(),
            preview.rows.len()
        )));
    }

    report
}

/// A target fed by two or more source headers is permitted, but the later
/// assignment silently wins, so surface it.
fn report_shared_targets(mapping: &ColumnMapping, report: &mut ValidationReport) {
    let mut seen = Vec::new();
    for entry in mapping.entries() {
        let Some(target) = entry.target.as_deref() else {
            continue;
        };
        if seen.contains(&target) {
            continue;
        }
        seen.push(target);
        let sources = mapping.sources_for_target(target);
        if sources.len() > 1 {
            report.push(Finding::warning(format!(
                "Target column {target} is mapped from {} source headers ({}); the last one wins",
                sources.len(),
                sources.join(", ")
            )));
        }
    }
}
