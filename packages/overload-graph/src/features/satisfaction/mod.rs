//! # Satisfaction Engine
//!
//! Arc-consistency narrowing of a constraint graph's candidate lists, with
//! observation hooks at every step and a resolver use case on top.
//!
//! ## Usage
//! ```text
//! use overload_graph::features::satisfaction::{satisfy, NoopHooks};
//!
//! let mut graph = build_graph(&call, &symbols)?;
//! let stats = satisfy(&mut graph, &mut NoopHooks)?;
//! for (_, node) in graph.nodes() {
//!     println!("{}: {} candidates", node.label, node.candidates.len());
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{CallOutcome, CallReport, Resolution, ResolutionReport, TypeResolver};
pub use domain::{SatisfactionStats, WorklistOrder};
pub use infrastructure::{
    pending_eliminations, satisfy, satisfy_with, ArcConsistencySolver, CellRecord, HaltPolicy,
    RecordingHooks, SatisfactionEvent, StepController, SteppingHooks, TracingHooks, Worklist,
};
pub use ports::{HookError, HookResult, MatrixCell, NoopHooks, SatisfactionHooks};
