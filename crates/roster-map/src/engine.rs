//! Auto-mapping engine.
//!
//! Maps arbitrary source headers onto the fixed target schema using, in
//! strict precedence order: the synonym table, normalized target-name
//! lookup, the service-history pattern, and the quantity pattern. Headers
//! nothing matches stay explicitly unset.

use roster_model::{
    ColumnMapping, PROFESSOR_ROLES, TEAM_ROLES, TargetSchema, normalize_name, quantity_column,
    service_column,
};

use crate::synonyms::synonym_table;

/// Map every header; the result always carries one entry per header.
/// Deterministic: the same header list always yields the same mapping.
pub fn auto_map(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new(headers);
    for header in headers {
        if let Some(target) = map_header(header) {
            mapping.set(header, Some(target));
        }
    }
    let stats = mapping.stats();
    tracing::debug!(
        total = stats.total,
        mapped = stats.mapped,
        "auto-mapped headers"
    );
    mapping
}

/// Resolve a single header to a target column name, or `None`.
pub fn map_header(header: &str) -> Option<String> {
    let normalized = normalize_name(header);
    if normalized.is_empty() {
        return None;
    }

    if let Some(target) = synonym_table().get(normalized.as_str()) {
        return Some((*target).to_string());
    }

    if let Some(column) = TargetSchema::global().find_normalized(&normalized) {
        return Some(column.name.clone());
    }

    if normalized.contains("service") {
        return match_role_pattern(&normalized);
    }

    None
}

/// Pattern rules for service-history and quantity headers.
///
/// Strips the "service"/"qty" tokens and compares the remainder against
/// every role's normalized base name. All roles are scanned; when the
/// remainder contains more than one role fragment the last match in role
/// order wins.
fn match_role_pattern(normalized: &str) -> Option<String> {
    let wants_quantity = normalized.contains("qty");
    let remainder = if wants_quantity {
        normalized.replace("serviceqty", "").replace("service", "").replace("qty", "")
    } else {
        normalized.replace("service", "")
    };
    if remainder.is_empty() {
        return None;
    }

    let mut matched = None;
    for role in TEAM_ROLES.iter().chain(PROFESSOR_ROLES) {
        let role_normalized = normalize_name(role);
        if remainder.contains(&role_normalized) {
            matched = Some(if wants_quantity {
                quantity_column(role)
            } else {
                service_column(role)
            });
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_wins_over_everything() {
        assert_eq!(map_header("E-mail Address"), Some("Email".to_string()));
        assert_eq!(map_header("zip_code"), Some("Zip".to_string()));
    }

    #[test]
    fn exact_target_name_matches_after_synonyms() {
        assert_eq!(map_header("first"), Some("First".to_string()));
        assert_eq!(map_header("PESCADORE-KEY"), Some("PescadoreKey".to_string()));
    }

    #[test]
    fn service_pattern_binds_the_role_service_column() {
        assert_eq!(
            map_header("Kitchen Service"),
            Some("Kitchen Service".to_string())
        );
        assert_eq!(
            map_header("service_chapel"),
            Some("Chapel Service".to_string())
        );
    }

    #[test]
    fn quantity_pattern_binds_the_qty_column() {
        assert_eq!(
            map_header("kitchen_service_qty"),
            Some("Kitchen_Service_Qty".to_string())
        );
        assert_eq!(
            map_header("ServiceQty Palanca"),
            Some("Palanca_Service_Qty".to_string())
        );
    }

    #[test]
    fn unmatched_headers_stay_unset() {
        assert_eq!(map_header("svc_kitchen"), None);
        assert_eq!(map_header("Name"), None);
        assert_eq!(map_header("   "), None);
    }
}
