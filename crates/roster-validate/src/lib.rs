//! Preview and validation stage of the roster import pipeline.
//!
//! The preview projects raw rows through the active column mapping, with
//! per-cell edits layered on top. Validation scans the projection and
//! produces severity-ranked findings; error findings block the import.
//! [`proceed`] is the gate that turns a clean preview into an
//! [`ImportPlan`].

#![deny(unsafe_code)]

mod findings;
mod plan;
mod preview;

pub use findings::validate;
pub use plan::{ImportGroup, ImportPlan, ValidationError, proceed};
pub use preview::{GenderGroups, Preview, PreviewRow, build_preview, classify_gender};
