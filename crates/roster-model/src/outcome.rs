//! Import run outcome types.

use serde::{Deserialize, Serialize};

/// A key assigned to a row that arrived without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedKey {
    /// 1-based data row number within the run.
    pub row_number: usize,
    pub key: i64,
}

/// A batch insert that failed. The run continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub first_row: usize,
    pub last_row: usize,
    pub message: String,
}

/// Final counters for one import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub total_rows: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub batch_errors: Vec<BatchFailure>,
    pub generated_keys: Vec<GeneratedKey>,
    pub dry_run: bool,
}

impl ImportOutcome {
    pub fn new(total_rows: usize, dry_run: bool) -> Self {
        Self {
            total_rows,
            succeeded: 0,
            failed: 0,
            batch_errors: Vec::new(),
            generated_keys: Vec::new(),
            dry_run,
        }
    }

    /// Rows accounted for so far.
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.processed() == self.total_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_sums_both_tallies() {
        let mut outcome = ImportOutcome::new(120, false);
        outcome.succeeded = 70;
        outcome.failed = 50;
        assert_eq!(outcome.processed(), 120);
        assert!(outcome.is_complete());
    }
}
