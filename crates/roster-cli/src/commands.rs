use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use roster_import::{ImportExecutor, ImportOptions, JsonFileStore};
use roster_ingest::parse_file;
use roster_map::{MappingState, apply_stored, load_mapping, save_mapping};
use roster_model::{CellEdits, Gender, GenderSplitDecision, ParsedTable};
use roster_validate::{build_preview, proceed, validate};

use crate::cli::{ImportArgs, InspectArgs, MappingArgs, TargetArg};
use crate::progress::BarSink;
use crate::summary::{print_findings, print_mapping, print_outcome, print_preview, print_schema};

pub fn run_schema() -> Result<()> {
    print_schema();
    Ok(())
}

/// Parse, map, validate, and print. Returns true when blocking errors
/// were found, so main can set the exit code.
pub fn run_inspect(args: &InspectArgs) -> Result<bool> {
    let span = info_span!("inspect", file = %args.mapping.file.display());
    let _guard = span.enter();

    let (table, state) = build_session(&args.mapping)?;
    print_mapping(&state);

    // Inspect never asks for a split decision; when a gender column is
    // present the split counts are shown as a courtesy.
    let decision = match state.detect_gender_column() {
        Some(header) => GenderSplitDecision::Split {
            header: header.to_string(),
        },
        None => GenderSplitDecision::NotApplicable,
    };
    let preview = build_preview(&table.rows, state.mapping(), &decision, &CellEdits::new());
    let report = validate(&preview, state.mapping());

    print_preview(&preview, args.rows);
    print_findings(&report);
    Ok(report.has_errors())
}

pub fn run_import(args: &ImportArgs) -> Result<bool> {
    let span = info_span!(
        "import",
        file = %args.mapping.file.display(),
        community = %args.community
    );
    let _guard = span.enter();

    let (table, mut state) = build_session(&args.mapping)?;
    resolve_split_decision(args, &mut state)?;

    let handoff = state
        .proceed()
        .context("mapping is not ready for import")?;

    let edits = parse_edits(&args.edit)?;
    let preview = build_preview(&table.rows, &handoff.mapping, &handoff.decision, &edits);
    let report = validate(&preview, &handoff.mapping);
    print_findings(&report);

    let fallback = match args.target {
        TargetArg::Men => Gender::Men,
        TargetArg::Women => Gender::Women,
    };
    let plan = proceed(
        &table.rows,
        &handoff.mapping,
        &handoff.decision,
        &edits,
        &report,
        args.dry_run,
        fallback,
    )
    .context("validation did not pass")?;

    let store = JsonFileStore::new(&args.store_dir);
    let mut executor = ImportExecutor::new(ImportOptions {
        batch_size: args.batch_size,
        ..ImportOptions::default()
    });
    let total: usize = plan.groups.iter().map(|group| group.rows.len()).sum();
    let sink = BarSink::new(total as u64);
    let outcome = executor
        .run(&plan, &args.community, &store, &sink)
        .context("import run failed")?;
    sink.finish();

    info!(
        succeeded = outcome.succeeded,
        failed = outcome.failed,
        dry_run = outcome.dry_run,
        "import finished"
    );
    print_outcome(&outcome);
    Ok(!outcome.batch_errors.is_empty())
}

/// Parse the file and build the mapping session: auto-map, replay a saved
/// mapping if given, apply the --map/--unmap overrides, then optionally
/// save the result.
fn build_session(args: &MappingArgs) -> Result<(ParsedTable, MappingState)> {
    let table = parse_file(&args.file)
        .with_context(|| format!("parse {}", args.file.display()))?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "parsed roster file"
    );

    let mut state = MappingState::auto(&table.headers);

    if let Some(path) = &args.mapping_file {
        let stored = load_mapping(path)?;
        let applied = apply_stored(&stored, &mut state)?;
        info!(path = %path.display(), applied, "applied saved mapping");
    }

    for spec in &args.map {
        let (header, target) = spec
            .split_once('=')
            .with_context(|| format!("--map needs HEADER=TARGET, got {spec:?}"))?;
        state
            .set_mapping(header.trim(), Some(target.trim()))
            .with_context(|| format!("apply --map {spec:?}"))?;
    }
    for header in &args.unmap {
        state
            .set_mapping(header.trim(), None)
            .with_context(|| format!("apply --unmap {header:?}"))?;
    }

    if let Some(path) = &args.save_mapping {
        save_mapping(state.mapping(), path)?;
    }
    Ok((table, state))
}

fn resolve_split_decision(args: &ImportArgs, state: &mut MappingState) -> Result<()> {
    let detected = state.detect_gender_column().map(str::to_string);
    let decision = match (&detected, args.split, args.no_split) {
        (Some(header), true, _) => GenderSplitDecision::Split {
            header: header.clone(),
        },
        (Some(_), false, true) => GenderSplitDecision::DoNotSplit,
        (Some(header), false, false) => {
            bail!(
                "gender column {header:?} detected; pass --split to divide the rows \
                 into the men/women tables or --no-split to keep them together"
            );
        }
        (None, true, _) => bail!("--split given but no gender column was detected"),
        (None, false, _) => GenderSplitDecision::NotApplicable,
    };
    state.set_decision(decision)?;
    Ok(())
}

/// Parse `--edit ROW:Target=value` flags. Rows are 1-based on the command
/// line and 0-based internally.
fn parse_edits(specs: &[String]) -> Result<CellEdits> {
    let mut edits = CellEdits::new();
    for spec in specs {
        let (row_part, rest) = spec
            .split_once(':')
            .with_context(|| format!("--edit needs ROW:TARGET=VALUE, got {spec:?}"))?;
        let (target, value) = rest
            .split_once('=')
            .with_context(|| format!("--edit needs ROW:TARGET=VALUE, got {spec:?}"))?;
        let row: usize = row_part
            .trim()
            .parse()
            .with_context(|| format!("--edit row must be a number, got {row_part:?}"))?;
        if row == 0 {
            bail!("--edit rows are 1-based");
        }
        edits.set(row - 1, target.trim(), value.trim());
    }
    Ok(edits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_specs_are_one_based() {
        let edits = parse_edits(&["2:First=Nina".to_string()]).unwrap();
        assert_eq!(edits.get(1, "First"), Some("Nina"));
        assert!(parse_edits(&["0:First=x".to_string()]).is_err());
        assert!(parse_edits(&["nope".to_string()]).is_err());
    }
}
