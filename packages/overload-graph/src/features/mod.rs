//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains some of:
//! - domain/     - Pure data and rules (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - Implementations of the ports and algorithms
//!
//! Dependency order: type_lattice -> expression -> symbol_table ->
//! constraint_graph -> satisfaction.

pub mod type_lattice;

// Call/closure/variable tree consumed by graph construction
pub mod expression;

pub mod symbol_table;

pub mod constraint_graph;

// Arc-consistency engine, observation hooks, resolver use case
pub mod satisfaction;
