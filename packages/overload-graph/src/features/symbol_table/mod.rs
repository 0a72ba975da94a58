//! # Symbol Table
//!
//! Scoped lookup of function signatures and closure variables. Graph
//! construction depends only on the [`SymbolLookup`] port; [`SymbolTable`] is
//! the in-memory implementation used by the resolver and tests.

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{SymbolTable, SymbolTableBuilder};
pub use ports::{ClosureArity, SymbolLookup};
