//! CLI library components for the roster importer.

pub mod logging;
