//! Directed type-flow constraints
//!
//! `tail` is the accepting slot and `head` the supplying slot: a constraint
//! holds for a pair of candidates when the tail's type is assignable from the
//! head's type.

use serde::{Deserialize, Serialize};

use crate::shared::models::PositionId;

/// A single constraint between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// Consumer slot (argument, closure image)
    pub tail: PositionId,

    /// Producer slot (call image, closure parameter)
    pub head: PositionId,
}

impl Constraint {
    #[inline]
    pub fn new(tail: PositionId, head: PositionId) -> Self {
        Self { tail, head }
    }

    /// Whether `position` is one of the two ends
    #[inline]
    pub fn touches(&self, position: PositionId) -> bool {
        self.tail == position || self.head == position
    }
}
