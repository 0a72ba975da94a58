//! Arena handles
//!
//! Every node, position, and constraint of a constraint graph lives in one
//! arena and is referred to by a dense index. Handles are allocated once per
//! logical slot, so a position can be referenced before its owning node is
//! fully built.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Handle of a call-site node
    NodeId,
    "n"
);
arena_id!(
    /// Handle of a typed slot
    PositionId,
    "#"
);
arena_id!(
    /// Handle of a directed constraint
    ConstraintId,
    "c"
);
