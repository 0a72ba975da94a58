//! Satisfaction run statistics

use serde::{Deserialize, Serialize};

/// Counters of one satisfaction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionStats {
    /// Constraints taken from the worklist
    pub steps: usize,

    /// Cell pairs compared
    pub type_checks: usize,

    /// Compatible pairs found
    pub matches: usize,

    /// Candidates removed
    pub eliminations: usize,

    /// Constraints put back on the worklist after a neighbour shrank
    pub requeued: usize,
}

impl SatisfactionStats {
    /// Constraints checked once at start plus requeues
    pub fn total_enqueued(&self, constraint_count: usize) -> usize {
        constraint_count + self.requeued
    }
}
