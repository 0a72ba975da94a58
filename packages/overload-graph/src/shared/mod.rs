//! Shared module - Common types and utilities
//!
//! Types shared across all features: arena handles and the binding scope
//! stack used during graph construction.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::scope_stack::ScopeStack;
