use proptest::prelude::*;

use roster_model::{CellEdits, ColumnMapping, GenderSplitDecision, RawRow, RawValue};
use roster_validate::build_preview;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn row(cells: &[(&str, &str)]) -> RawRow {
    let mut row = RawRow::new();
    for (header, value) in cells {
        row.set((*header).to_string(), RawValue::from_cell(value));
    }
    row
}

#[test]
fn projection_uses_mapped_targets_only() {
    let mut mapping = ColumnMapping::new(&headers(&["fname", "surname", "notes"]));
    mapping.set("fname", Some("First".to_string()));
    mapping.set("surname", Some("Last".to_string()));

    let rows = vec![row(&[("fname", "Ann"), ("surname", "Lee"), ("notes", "x")])];
    let preview = build_preview(
        &rows,
        &mapping,
        &GenderSplitDecision::NotApplicable,
        &CellEdits::new(),
    );

    assert_eq!(preview.rows.len(), 1);
    assert_eq!(preview.rows[0].value("First"), Some("Ann"));
    assert_eq!(preview.rows[0].value("Last"), Some("Lee"));
    // The unmapped notes column is dropped from the projection.
    assert_eq!(preview.rows[0].len(), 2);
}

#[test]
fn edits_override_source_values() {
    let mut mapping = ColumnMapping::new(&headers(&["fname"]));
    mapping.set("fname", Some("First".to_string()));

    let mut edits = CellEdits::new();
    edits.set(1, "First", "Beth");

    let rows = vec![row(&[("fname", "Ann")]), row(&[("fname", "Bob")])];
    let preview = build_preview(&rows, &mapping, &GenderSplitDecision::NotApplicable, &edits);

    assert_eq!(preview.rows[0].value("First"), Some("Ann"));
    assert_eq!(preview.rows[1].value("First"), Some("Beth"));
}

#[test]
fn shared_target_takes_the_later_source() {
    let mut mapping = ColumnMapping::new(&headers(&["email_a", "email_b"]));
    mapping.set("email_a", Some("Email".to_string()));
    mapping.set("email_b", Some("Email".to_string()));

    let rows = vec![row(&[("email_a", "a@x.org"), ("email_b", "b@x.org")])];
    let preview = build_preview(
        &rows,
        &mapping,
        &GenderSplitDecision::NotApplicable,
        &CellEdits::new(),
    );

    assert_eq!(preview.rows[0].value("Email"), Some("b@x.org"));
}

#[test]
fn split_defaults_unrecognized_values_to_men() {
    let mut mapping = ColumnMapping::new(&headers(&["fname", "Gender"]));
    mapping.set("fname", Some("First".to_string()));

    let rows = vec![
        row(&[("fname", "Ann"), ("Gender", "F")]),
        row(&[("fname", "Bob"), ("Gender", "M")]),
        row(&[("fname", "Cal"), ("Gender", "unsure")]),
        row(&[("fname", "Dee"), ("Gender", "female")]),
    ];
    let preview = build_preview(
        &rows,
        &mapping,
        &GenderSplitDecision::Split {
            header: "Gender".to_string(),
        },
        &CellEdits::new(),
    );

    let groups = preview.groups.expect("split requested");
    assert_eq!(groups.men, vec![1, 2]);
    assert_eq!(groups.women, vec![0, 3]);
    assert_eq!(preview.rows.len(), 4);
}

proptest! {
    /// The preview never drops or invents rows, whatever the mapping.
    #[test]
    fn row_count_is_preserved(
        values in proptest::collection::vec("[a-z ]{0,8}", 0..40),
        map_it in any::<bool>(),
    ) {
        let rows: Vec<RawRow> = values
            .iter()
            .map(|value| row(&[("col", value)]))
            .collect();
        let mut mapping = ColumnMapping::new(&headers(&["col"]));
        if map_it {
            mapping.set("col", Some("First".to_string()));
        }
        let preview = build_preview(
            &rows,
            &mapping,
            &GenderSplitDecision::NotApplicable,
            &CellEdits::new(),
        );
        prop_assert_eq!(preview.rows.len(), rows.len());
    }
}
