//! Static target schema for the member roster.
//!
//! The destination tables carry a fixed, closed set of columns: identity
//! and contact fields, one status column per team/professor role, and a
//! paired "last served" and quantity column for every role. The schema is
//! defined here as data so the mapper can never invent a target name.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Identity column holding the member's sequential key.
pub const PESCADORE_KEY: &str = "PescadoreKey";
/// Required identity column: first name.
pub const FIRST: &str = "First";
/// Required identity column: last name.
pub const LAST: &str = "Last";
/// Contact column checked by the soft validations.
pub const EMAIL: &str = "Email";
/// Contact column checked by the soft validations.
pub const PHONE1: &str = "Phone1";
/// Contact column checked by the soft validations.
pub const CHURCH: &str = "Church";

const IDENTITY_COLUMNS: &[&str] = &[
    PESCADORE_KEY,
    FIRST,
    LAST,
    "Middle",
    "Preferred",
    "Spouse",
    "Weekend",
    "Sponsor",
];

const CONTACT_COLUMNS: &[&str] = &[
    EMAIL,
    PHONE1,
    "Phone2",
    "Address1",
    "Address2",
    "City",
    "State",
    "Zip",
    CHURCH,
    "Birthday",
    "Occupation",
];

const FLAG_COLUMNS: &[&str] = &["Active", "Clergy"];

/// Team roles served on a weekend. One status column per role, plus the
/// derived service and quantity columns.
pub const TEAM_ROLES: &[&str] = &[
    "Rector",
    "BUR",
    "Rover",
    "Head",
    "Asst Head",
    "Kitchen",
    "Dining",
    "Chapel",
    "Dorm",
    "Palanca",
    "Prayer",
    "Music",
    "Audio",
    "Worship",
    "Table Leader",
    "Asst Table Leader",
    "Silent",
    "Storeroom",
    "Speakers",
    "Gopher",
    "Closing",
    "Medic",
    "Tech",
    "Supply",
    "Agape",
    "Serenade",
    "Photography",
    "Floater",
    "Banner",
];

/// Professor roles, one per talk.
pub const PROFESSOR_ROLES: &[&str] = &[
    "Ideals",
    "Piety",
    "Study",
    "Action",
    "Leaders",
    "Environment",
    "CCIA",
    "Reunion Groups",
    "Fourth Day",
    "Sacred Moments",
];

/// Name of the "last served" column for a role.
pub fn service_column(role: &str) -> String {
    format!("{role} Service")
}

/// Name of the service-count column for a role.
pub fn quantity_column(role: &str) -> String {
    format!("{}_Service_Qty", role.replace(' ', "_"))
}

/// Canonical form used for all header/column comparisons: lowercase with
/// whitespace, underscores, and hyphens removed.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Category of a target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Identity,
    Contact,
    Flag,
    RoleStatus,
    RoleService,
    RoleQuantity,
}

/// One destination column in the fixed schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetColumn {
    pub name: String,
    pub kind: ColumnKind,
    /// Base role name for role-derived columns.
    pub role: Option<String>,
}

/// The full destination schema, indexed by normalized column name.
#[derive(Debug)]
pub struct TargetSchema {
    columns: Vec<TargetColumn>,
    by_normalized: BTreeMap<String, usize>,
}

impl TargetSchema {
    fn build() -> Self {
        let mut columns = Vec::new();
        let mut push = |name: String, kind: ColumnKind, role: Option<&str>| {
            columns.push(TargetColumn {
                name,
                kind,
                role: role.map(str::to_string),
            });
        };
        for name in IDENTITY_COLUMNS {
            push((*name).to_string(), ColumnKind::Identity, None);
        }
        for name in CONTACT_COLUMNS {
            push((*name).to_string(), ColumnKind::Contact, None);
        }
        for name in FLAG_COLUMNS {
            push((*name).to_string(), ColumnKind::Flag, None);
        }
        for role in TEAM_ROLES.iter().chain(PROFESSOR_ROLES) {
            push((*role).to_string(), ColumnKind::RoleStatus, Some(role));
            push(service_column(role), ColumnKind::RoleService, Some(role));
            push(quantity_column(role), ColumnKind::RoleQuantity, Some(role));
        }

        let mut by_normalized = BTreeMap::new();
        for (idx, column) in columns.iter().enumerate() {
            by_normalized.insert(normalize_name(&column.name), idx);
        }
        Self {
            columns,
            by_normalized,
        }
    }

    /// Global schema instance. The column set is fixed for the lifetime of
    /// the process.
    pub fn global() -> &'static TargetSchema {
        static SCHEMA: OnceLock<TargetSchema> = OnceLock::new();
        SCHEMA.get_or_init(TargetSchema::build)
    }

    pub fn columns(&self) -> &[TargetColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by its exact name.
    pub fn find(&self, name: &str) -> Option<&TargetColumn> {
        self.find_normalized(&normalize_name(name))
            .filter(|column| column.name == name)
    }

    /// Look up a column by its normalized name.
    pub fn find_normalized(&self, normalized: &str) -> Option<&TargetColumn> {
        self.by_normalized
            .get(normalized)
            .map(|idx| &self.columns[*idx])
    }

    /// True when `name` is exactly a schema column name.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_counts() {
        assert_eq!(TEAM_ROLES.len(), 29);
        assert_eq!(PROFESSOR_ROLES.len(), 10);
    }

    #[test]
    fn schema_size_covers_all_roles() {
        let schema = TargetSchema::global();
        let roles = TEAM_ROLES.len() + PROFESSOR_ROLES.len();
        assert_eq!(
            schema.len(),
            IDENTITY_COLUMNS.len() + CONTACT_COLUMNS.len() + FLAG_COLUMNS.len() + roles * 3
        );
    }

    #[test]
    fn normalized_names_are_unique() {
        let schema = TargetSchema::global();
        assert_eq!(schema.by_normalized.len(), schema.len());
    }

    #[test]
    fn derived_column_names() {
        assert_eq!(service_column("Kitchen"), "Kitchen Service");
        assert_eq!(quantity_column("Table Leader"), "Table_Leader_Service_Qty");
    }

    #[test]
    fn lookup_is_normalization_insensitive() {
        let schema = TargetSchema::global();
        let column = schema.find_normalized("kitchenservice").unwrap();
        assert_eq!(column.name, "Kitchen Service");
        assert_eq!(column.kind, ColumnKind::RoleService);
        assert_eq!(column.role.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn normalize_strips_separators_only() {
        assert_eq!(normalize_name("First_Name"), "firstname");
        assert_eq!(normalize_name("E-mail"), "email");
        assert_eq!(normalize_name("M/F"), "m/f");
    }
}
