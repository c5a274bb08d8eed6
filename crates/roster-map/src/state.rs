//! Mapping editor state: user overrides layered on the auto-map, summary
//! statistics, gender-column detection, and the gate to the preview stage.

use roster_model::{
    ColumnMapping, GenderSplitDecision, MappingStats, TargetSchema, normalize_name,
};

use crate::engine::auto_map;
use crate::error::{MapError, Result};

/// Interactive state for one mapping session.
#[derive(Debug, Clone)]
pub struct MappingState {
    headers: Vec<String>,
    mapping: ColumnMapping,
    decision: Option<GenderSplitDecision>,
}

/// Read-only hand-off to the preview stage.
#[derive(Debug, Clone)]
pub struct MappingHandoff {
    pub mapping: ColumnMapping,
    pub decision: GenderSplitDecision,
}

impl MappingState {
    /// Start a session from the parsed headers by running the auto-mapper.
    pub fn auto(headers: &[String]) -> Self {
        Self::new(headers, auto_map(headers))
    }

    pub fn new(headers: &[String], mapping: ColumnMapping) -> Self {
        Self {
            headers: headers.to_vec(),
            mapping,
            decision: None,
        }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Override a single header's target. `None` clears the assignment.
    /// Targets are validated against the schema so a typo cannot invent a
    /// destination column.
    pub fn set_mapping(&mut self, header: &str, target: Option<&str>) -> Result<()> {
        if let Some(name) = target
            && !TargetSchema::global().contains(name)
        {
            return Err(MapError::UnknownTarget(name.to_string()));
        }
        if !self.mapping.set(header, target.map(str::to_string)) {
            return Err(MapError::UnknownHeader(header.to_string()));
        }
        Ok(())
    }

    pub fn stats(&self) -> MappingStats {
        self.mapping.stats()
    }

    /// First header that looks like a gender column, scanning original
    /// header text rather than the mapping.
    pub fn detect_gender_column(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| {
                let normalized = normalize_name(header);
                normalized.contains("gender")
                    || normalized.contains("sex")
                    || normalized == "m/f"
                    || normalized == "male/female"
            })
            .map(String::as_str)
    }

    pub fn decision(&self) -> Option<&GenderSplitDecision> {
        self.decision.as_ref()
    }

    /// Record the split decision. Immutable once set for the session.
    pub fn set_decision(&mut self, decision: GenderSplitDecision) -> Result<()> {
        if self.decision.is_some() {
            return Err(MapError::SplitDecisionAlreadySet);
        }
        self.decision = Some(decision);
        Ok(())
    }

    /// Gate to the preview stage: requires at least one mapped column and,
    /// when a gender column was detected, an explicit split decision.
    pub fn proceed(&self) -> Result<MappingHandoff> {
        if self.mapping.mapped_count() == 0 {
            return Err(MapError::NoColumnsMapped);
        }
        let decision = match (&self.decision, self.detect_gender_column()) {
            (Some(decision), _) => decision.clone(),
            (None, Some(header)) => {
                return Err(MapError::SplitDecisionRequired(header.to_string()));
            }
            (None, None) => GenderSplitDecision::NotApplicable,
        };
        Ok(MappingHandoff {
            mapping: self.mapping.clone(),
            decision,
        })
    }
}
