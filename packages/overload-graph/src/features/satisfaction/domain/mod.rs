//! Domain models for satisfaction
//!
//! - SatisfactionStats: per-run counters
//! - WorklistOrder: constraint processing order

pub mod stats;
pub mod worklist_order;

pub use stats::SatisfactionStats;
pub use worklist_order::WorklistOrder;
