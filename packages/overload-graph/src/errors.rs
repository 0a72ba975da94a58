//! Error types for overload-graph
//!
//! Construction failures abort graph building for one expression. Resolution
//! outcomes (empty or ambiguous candidate sets) are data, not errors; the
//! `Unsatisfiable`/`Ambiguous` variants only appear when a caller opts into a
//! strict [`OutcomePolicy`](crate::config::OutcomePolicy).

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::satisfaction::ports::HookError;

/// Main error type for overload-graph operations
#[derive(Debug, Error)]
pub enum OverloadError {
    /// A variable reference has no enclosing closure binding
    #[error("Variable '{name}' does not exist")]
    UnboundVariable { name: String },

    /// A closure body is itself a closure
    #[error("Closures are not supported as top-level expressions")]
    UnsupportedTopLevelClosure,

    /// The resolver was handed something other than a function call
    #[error("Only function calls are supported as top-level expression")]
    TopLevelNotCall,

    /// The same signature was declared twice in one scope
    #[error("Signature already exists: func {signature}")]
    DuplicateSignature { signature: String },

    /// A type declaration referenced an undeclared supertype
    #[error("Unknown type '{name}'")]
    UnknownType { name: String },

    /// A call site ended with zero candidates (strict policy only)
    #[error("Constraint graph can not be satisfied: no overload of '{call}' fits")]
    Unsatisfiable { call: String },

    /// The root call kept more than one candidate (strict policy only)
    #[error("Ambiguous call '{call}': {candidates} overloads remain")]
    Ambiguous { call: String, candidates: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An observation hook aborted satisfaction
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),
}

impl OverloadError {
    /// Create an unbound variable error
    pub fn unbound(name: impl Into<String>) -> Self {
        OverloadError::UnboundVariable { name: name.into() }
    }

    /// Whether the error was raised while building the constraint graph
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            OverloadError::UnboundVariable { .. }
                | OverloadError::UnsupportedTopLevelClosure
                | OverloadError::TopLevelNotCall
        )
    }
}

/// Result type alias for overload-graph operations
pub type Result<T> = std::result::Result<T, OverloadError>;
