/*
 * Overload Graph - Constraint-Based Overload Resolution
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Arena handles, scope stack
 * - features/    : Vertical slices (type_lattice → expression → symbol_table
 *                  → constraint_graph → satisfaction)
 * - config/      : Resolver configuration (builder + versioned YAML)
 * - errors       : Crate-wide error type
 *
 * Pipeline:
 * - Build one constraint graph per top-level call (one node per call site,
 *   one position per typed slot, one constraint per type flow)
 * - Narrow every node's overload candidates to arc consistency
 * - Inspect the surviving candidates (resolved / ambiguous / unsatisfiable)
 */

// Crate-level lint configuration
#![allow(clippy::new_without_default)] // Builders with required inputs
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, OutcomePolicy, ResolverConfig};
pub use errors::{OverloadError, Result};
pub use features::constraint_graph::{
    build_graph, Constraint, Graph, GraphBuilder, GraphNode, Position, PositionKind,
};
pub use features::expression::{Closure, Expression, FunctionCall, Variable};
pub use features::satisfaction::{
    pending_eliminations, satisfy, satisfy_with, CallOutcome, HaltPolicy, HookError,
    MatrixCell, NoopHooks, RecordingHooks, Resolution, ResolutionReport, SatisfactionEvent,
    SatisfactionHooks, SatisfactionStats, StepController, SteppingHooks, TracingHooks,
    TypeResolver, WorklistOrder,
};
pub use features::symbol_table::{ClosureArity, SymbolLookup, SymbolTable, SymbolTableBuilder};
pub use features::type_lattice::{ConcreteType, FunctionSignature, FunctionType, Symbol, Type};
pub use shared::models::{ConstraintId, NodeId, PositionId};
