//! End-to-end runs over a real file: parse, auto-map, validate, import.

use std::time::Duration;

use tempfile::TempDir;

use roster_import::{
    ImportExecutor, ImportOptions, JsonFileStore, NullSink, RowStore, TargetTable,
};
use roster_ingest::parse_file;
use roster_map::MappingState;
use roster_model::{CellEdits, Gender, GenderSplitDecision};
use roster_validate::{build_preview, proceed, validate};

const ROSTER_CSV: &str = "\
Name,Last,E-mail,Gender,svc_kitchen
Ann,Lee,ann@x.org,F,3
Bob,Ng,bob@x.org,M,
Cal,Orr,cal@x.org,?,1
";

fn options() -> ImportOptions {
    ImportOptions {
        batch_size: 50,
        dry_run_row_delay: Duration::ZERO,
    }
}

#[test]
fn csv_to_store_with_a_gender_split() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("roster.csv");
    std::fs::write(&csv_path, ROSTER_CSV).unwrap();

    let table = parse_file(&csv_path).unwrap();
    let mut state = MappingState::auto(&table.headers);

    // "Name" and "svc_kitchen" have no synonyms and stay unmapped;
    // fix them by hand.
    assert_eq!(state.mapping().target_for("Name"), None);
    assert_eq!(state.mapping().target_for("E-mail"), Some("Email"));
    assert_eq!(state.mapping().target_for("svc_kitchen"), None);
    state.set_mapping("Name", Some("First")).unwrap();
    state
        .set_mapping("svc_kitchen", Some("Kitchen Service"))
        .unwrap();

    assert_eq!(state.detect_gender_column(), Some("Gender"));
    state
        .set_decision(GenderSplitDecision::Split {
            header: "Gender".to_string(),
        })
        .unwrap();
    let handoff = state.proceed().unwrap();

    let edits = CellEdits::new();
    let preview = build_preview(&table.rows, &handoff.mapping, &handoff.decision, &edits);
    let report = validate(&preview, &handoff.mapping);
    assert!(!report.has_errors());

    let plan = proceed(
        &table.rows,
        &handoff.mapping,
        &handoff.decision,
        &edits,
        &report,
        false,
        Gender::Men,
    )
    .unwrap();

    let store = JsonFileStore::new(dir.path().join("data"));
    let mut executor = ImportExecutor::new(options());
    let outcome = executor.run(&plan, "c1", &store, &NullSink).unwrap();

    assert_eq!(outcome.total_rows, 3);
    assert_eq!(outcome.succeeded, 3);
    assert!(outcome.is_complete());

    // Bob plus the unrecognized "?" row land in the men table.
    let men = store.select(TargetTable::Men, "c1").unwrap();
    let women = store.select(TargetTable::Women, "c1").unwrap();
    assert_eq!(men.len(), 2);
    assert_eq!(women.len(), 1);
    assert_eq!(women[0].get("First"), Some(&serde_json::json!("Ann")));
    assert_eq!(
        women[0].get("Kitchen Service"),
        Some(&serde_json::json!("3"))
    );
}

#[test]
fn blocked_validation_stops_before_the_store() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("roster.csv");
    std::fs::write(&csv_path, "First,Last\nAnn,\n").unwrap();

    let table = parse_file(&csv_path).unwrap();
    let state = MappingState::auto(&table.headers);
    let handoff = state.proceed().unwrap();

    let edits = CellEdits::new();
    let preview = build_preview(&table.rows, &handoff.mapping, &handoff.decision, &edits);
    let report = validate(&preview, &handoff.mapping);
    assert!(report.has_errors());

    let result = proceed(
        &table.rows,
        &handoff.mapping,
        &handoff.decision,
        &edits,
        &report,
        false,
        Gender::Men,
    );
    assert!(result.is_err());
}
