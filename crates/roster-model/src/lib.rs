#![deny(unsafe_code)]

pub mod finding;
pub mod mapping;
pub mod outcome;
pub mod row;
pub mod schema;

pub use finding::{Finding, RowIssue, Severity, ValidationReport};
pub use mapping::{
    CellEdits, ColumnMapping, Gender, GenderSplitDecision, MappingEntry, MappingStats,
};
pub use outcome::{BatchFailure, GeneratedKey, ImportOutcome};
pub use row::{ParsedTable, RawRow, RawValue};
pub use schema::{
    CHURCH, ColumnKind, EMAIL, FIRST, LAST, PESCADORE_KEY, PHONE1, PROFESSOR_ROLES, TEAM_ROLES,
    TargetColumn, TargetSchema, normalize_name, quantity_column, service_column,
};
