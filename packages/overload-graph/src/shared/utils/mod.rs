//! Utility modules shared across features
//!
//! - `scope_stack`: lexical binding stack for closure parameters

pub mod scope_stack;

pub use scope_stack::ScopeStack;
