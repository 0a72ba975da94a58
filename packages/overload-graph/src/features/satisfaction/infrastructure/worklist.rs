//! Pending-constraint worklist
//!
//! A set, not a multiset: a constraint already pending is not enqueued twice.
//! Processing order follows [`WorklistOrder`].

use std::collections::{BTreeSet, VecDeque};
use std::hash::BuildHasher;

use ahash::RandomState;

use crate::features::satisfaction::domain::WorklistOrder;
use crate::shared::models::ConstraintId;

/// Worklist of constraints awaiting (re)checking
#[derive(Debug, Clone)]
pub struct Worklist {
    queue: VecDeque<ConstraintId>,
    ranked: BTreeSet<(u64, ConstraintId)>,
    pending: Vec<bool>,
    order: WorklistOrder,
    ranking: Option<RandomState>,
}

impl Worklist {
    /// Empty worklist for a graph with `capacity` constraints
    pub fn new(order: WorklistOrder, capacity: usize) -> Self {
        let ranking = match order {
            WorklistOrder::Seeded { seed } => Some(RandomState::with_seeds(
                seed,
                seed.rotate_left(17) ^ 0x9E37_79B9_7F4A_7C15,
                seed.rotate_left(31) ^ 0xC2B2_AE3D_27D4_EB4F,
                seed.rotate_left(47) ^ 0x1656_67B1_9E37_79F9,
            )),
            _ => None,
        };

        Self {
            queue: VecDeque::with_capacity(capacity),
            ranked: BTreeSet::new(),
            pending: vec![false; capacity],
            order,
            ranking,
        }
    }

    /// Enqueue `id`; false when it was already pending
    pub fn push(&mut self, id: ConstraintId) -> bool {
        if id.index() >= self.pending.len() {
            self.pending.resize(id.index() + 1, false);
        }
        if self.pending[id.index()] {
            return false;
        }
        self.pending[id.index()] = true;

        match &self.ranking {
            Some(ranking) => {
                self.ranked.insert((ranking.hash_one(id), id));
            }
            None => self.queue.push_back(id),
        }
        true
    }

    /// Take the next constraint according to the order
    pub fn pop(&mut self) -> Option<ConstraintId> {
        let next = match self.order {
            WorklistOrder::Fifo => self.queue.pop_front(),
            WorklistOrder::Lifo => self.queue.pop_back(),
            WorklistOrder::Seeded { .. } => self.ranked.pop_first().map(|(_, id)| id),
        }?;
        self.pending[next.index()] = false;
        Some(next)
    }

    pub fn len(&self) -> usize {
        self.queue.len() + self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: ConstraintId) -> bool {
        self.pending.get(id.index()).copied().unwrap_or(false)
    }

    /// Pending constraints in processing order
    pub fn snapshot(&self) -> Vec<ConstraintId> {
        match self.order {
            WorklistOrder::Fifo => self.queue.iter().copied().collect(),
            WorklistOrder::Lifo => self.queue.iter().rev().copied().collect(),
            WorklistOrder::Seeded { .. } => self.ranked.iter().map(|(_, id)| *id).collect(),
        }
    }
}
