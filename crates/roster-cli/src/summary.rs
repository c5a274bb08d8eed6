use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use roster_map::MappingState;
use roster_model::{ColumnKind, ImportOutcome, Severity, TargetSchema, ValidationReport};
use roster_validate::Preview;

pub fn print_mapping(state: &MappingState) {
    let stats = state.stats();
    println!(
        "Columns: {} total, {} mapped, {} unmapped",
        stats.total, stats.mapped, stats.unmapped
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Source Header"), header_cell("Target")]);
    apply_table_style(&mut table);
    for entry in state.mapping().entries() {
        let target = match entry.target.as_deref() {
            Some(target) => Cell::new(target).fg(comfy_table::Color::Green),
            None => dim_cell("(unmapped)"),
        };
        table.add_row(vec![Cell::new(&entry.header), target]);
    }
    println!("{table}");

    if let Some(header) = state.detect_gender_column() {
        println!("Gender column detected: {header}");
    }
}

pub fn print_preview(preview: &Preview, limit: usize) {
    if limit == 0 || preview.rows.is_empty() {
        return;
    }
    // Column set is the union over the shown rows; BTreeMap ordering keeps
    // it stable.
    let shown = &preview.rows[..preview.rows.len().min(limit)];
    let mut columns: Vec<&str> = Vec::new();
    for row in shown {
        for (target, _) in row.iter() {
            if !columns.contains(&target) {
                columns.push(target);
            }
        }
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(columns.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, row) in shown.iter().enumerate() {
        let mut cells = vec![Cell::new(idx + 1)];
        for column in &columns {
            cells.push(match row.value(column) {
                Some(value) if !value.trim().is_empty() => Cell::new(value),
                _ => dim_cell("-"),
            });
        }
        table.add_row(cells);
    }
    println!("Preview ({} of {} rows):", shown.len(), preview.rows.len());
    println!("{table}");
}

pub fn print_findings(report: &ValidationReport) {
    if report.findings.is_empty() {
        println!("No findings.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Message"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for finding in &report.findings {
        let rows = if finding.rows.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(row_list(finding))
        };
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(&finding.message),
            rows,
        ]);
    }
    println!("{table}");
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}

pub fn print_outcome(outcome: &ImportOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Succeeded"),
        header_cell("Failed"),
        header_cell("Keys Generated"),
        header_cell("Mode"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.total_rows),
        Cell::new(outcome.succeeded).fg(comfy_table::Color::Green),
        count_cell(outcome.failed, comfy_table::Color::Red),
        Cell::new(outcome.generated_keys.len()),
        if outcome.dry_run {
            Cell::new("dry run").fg(comfy_table::Color::Yellow)
        } else {
            Cell::new("import")
        },
    ]);
    println!("{table}");

    for failure in &outcome.batch_errors {
        eprintln!(
            "batch rows {}-{} failed: {}",
            failure.first_row, failure.last_row, failure.message
        );
    }
}

pub fn print_schema() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    for column in TargetSchema::global().columns() {
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(kind_label(column.kind)),
            match column.role.as_deref() {
                Some(role) => Cell::new(role),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

fn kind_label(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Identity => "identity",
        ColumnKind::Contact => "contact",
        ColumnKind::Flag => "flag",
        ColumnKind::RoleStatus => "role",
        ColumnKind::RoleService => "role service",
        ColumnKind::RoleQuantity => "role quantity",
    }
}

fn row_list(finding: &roster_model::Finding) -> String {
    const SHOWN: usize = 8;
    let numbers: Vec<String> = finding
        .rows
        .iter()
        .take(SHOWN)
        .map(|issue| issue.row_number.to_string())
        .collect();
    if finding.rows.len() > SHOWN {
        format!("{} (+{})", numbers.join(", "), finding.rows.len() - SHOWN)
    } else {
        numbers.join(", ")
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(comfy_table::Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(comfy_table::Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(comfy_table::Color::Blue),
    }
}

fn count_cell(value: usize, color: comfy_table::Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
