//! Infrastructure layer for satisfaction
//!
//! - **arc_consistency**: the worklist fixpoint solver
//! - **worklist**: deduplicating constraint queue (FIFO / LIFO / seeded)
//! - Hook sinks: recording, tracing, stepping

pub mod arc_consistency;
pub mod recording_hooks;
pub mod stepping_hooks;
pub mod tracing_hooks;
pub mod worklist;

pub use arc_consistency::{pending_eliminations, satisfy, satisfy_with, ArcConsistencySolver};
pub use recording_hooks::{CellRecord, RecordingHooks, SatisfactionEvent};
pub use stepping_hooks::{HaltPolicy, StepController, SteppingHooks};
pub use tracing_hooks::TracingHooks;
pub use worklist::Worklist;
