use proptest::prelude::*;

use roster_map::auto_map;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn every_header_gets_an_entry() {
    let input = headers(&["Name", "E-mail", "svc_kitchen"]);
    let mapping = auto_map(&input);

    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.target_for("Name"), None);
    assert_eq!(mapping.target_for("E-mail"), Some("Email"));
    assert_eq!(mapping.target_for("svc_kitchen"), None);
}

#[test]
fn precedence_synonym_then_exact_then_pattern() {
    let input = headers(&["home_phone", "Phone2", "Dorm Service", "dorm_service_qty"]);
    let mapping = auto_map(&input);

    assert_eq!(mapping.target_for("home_phone"), Some("Phone1"));
    assert_eq!(mapping.target_for("Phone2"), Some("Phone2"));
    assert_eq!(mapping.target_for("Dorm Service"), Some("Dorm Service"));
    assert_eq!(
        mapping.target_for("dorm_service_qty"),
        Some("Dorm_Service_Qty")
    );
}

#[test]
fn compound_role_headers_bind_their_own_role() {
    let input = headers(&["Asst Table Leader Service", "Asst Head Service"]);
    let mapping = auto_map(&input);

    assert_eq!(
        mapping.target_for("Asst Table Leader Service"),
        Some("Asst Table Leader Service")
    );
    assert_eq!(
        mapping.target_for("Asst Head Service"),
        Some("Asst Head Service")
    );
}

// A header whose remainder contains two role fragments binds the role that
// iterates last. Pinned so any change to the resolution order is a
// deliberate one.
#[test]
fn overlapping_role_fragments_resolve_to_last_match() {
    let input = headers(&["Head Worship Service"]);
    let mapping = auto_map(&input);

    assert_eq!(
        mapping.target_for("Head Worship Service"),
        Some("Worship Service")
    );
}

#[test]
fn duplicate_headers_map_once() {
    let input = headers(&["Email", "Email"]);
    let mapping = auto_map(&input);
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.target_for("Email"), Some("Email"));
}

proptest! {
    // The auto-map is a pure function of the header list.
    #[test]
    fn auto_map_is_deterministic(raw in proptest::collection::vec("[A-Za-z _-]{0,24}", 0..12)) {
        let first = auto_map(&raw);
        let second = auto_map(&raw);
        prop_assert_eq!(first, second);
    }

    // Mapped and unmapped always partition the header set.
    #[test]
    fn stats_partition(raw in proptest::collection::vec("[A-Za-z _-]{0,24}", 0..12)) {
        let mapping = auto_map(&raw);
        let stats = mapping.stats();
        prop_assert_eq!(stats.mapped + stats.unmapped, stats.total);
        prop_assert_eq!(stats.total, mapping.len());
    }
}
