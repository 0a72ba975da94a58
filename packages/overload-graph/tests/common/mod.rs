//! Common test utilities for overload-graph
//!
//! Symbol-table fixtures shared by the integration tests, plus proptest
//! strategies for random call trees over a small lattice.

#![allow(dead_code)]

mod fixtures;
mod strategies;

pub use fixtures::*;
pub use strategies::*;
