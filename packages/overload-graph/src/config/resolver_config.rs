//! Resolver configuration

use serde::{Deserialize, Serialize};

use crate::features::satisfaction::WorklistOrder;

/// What the resolver does with non-unique outcomes
///
/// Both default to `false`: empty and multi-candidate nodes are reported as
/// data on the resolution, not as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutcomePolicy {
    /// Fail when any call site ends with zero candidates
    pub reject_unsatisfiable: bool,

    /// Fail when the root call ends with more than one candidate
    pub reject_ambiguous: bool,
}

impl OutcomePolicy {
    /// Reject both unsatisfiable and ambiguous outcomes
    pub fn strict() -> Self {
        Self {
            reject_unsatisfiable: true,
            reject_ambiguous: true,
        }
    }
}

/// Settings for one [`TypeResolver`](crate::features::satisfaction::TypeResolver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Constraint processing order
    pub worklist_order: WorklistOrder,

    pub outcome_policy: OutcomePolicy,

    /// Mirror every engine event into `tracing`
    pub trace_events: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            worklist_order: WorklistOrder::default(),
            outcome_policy: OutcomePolicy::default(),
            trace_events: cfg!(feature = "trace"),
        }
    }
}

impl ResolverConfig {
    pub fn worklist_order(mut self, order: WorklistOrder) -> Self {
        self.worklist_order = order;
        self
    }

    pub fn outcome_policy(mut self, policy: OutcomePolicy) -> Self {
        self.outcome_policy = policy;
        self
    }

    pub fn trace_events(mut self, enabled: bool) -> Self {
        self.trace_events = enabled;
        self
    }
}
