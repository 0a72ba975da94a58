//! Shared models

mod ids;

pub use ids::{ConstraintId, NodeId, PositionId};
