#![deny(unsafe_code)]

//! Header auto-mapping and the interactive mapping editor state.

pub mod engine;
pub mod error;
pub mod repository;
pub mod state;
pub mod synonyms;

pub use engine::{auto_map, map_header};
pub use error::{MapError, Result};
pub use repository::{StoredMapping, apply_stored, load_mapping, save_mapping};
pub use state::{MappingHandoff, MappingState};
pub use synonyms::synonym_table;
