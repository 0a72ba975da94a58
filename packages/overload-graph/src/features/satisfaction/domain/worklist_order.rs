//! Worklist processing order
//!
//! The fixpoint does not depend on the order constraints are processed in;
//! the order only changes how much work is done and what hooks observe.

use serde::{Deserialize, Serialize};

/// Order in which pending constraints are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum WorklistOrder {
    /// Oldest pending constraint first
    #[default]
    Fifo,

    /// Most recently enqueued constraint first
    Lifo,

    /// Fixed pseudo-random permutation derived from `seed`
    Seeded { seed: u64 },
}

impl WorklistOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Seeded { .. } => "seeded",
        }
    }
}

impl std::fmt::Display for WorklistOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seeded { seed } => write!(f, "seeded({})", seed),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
