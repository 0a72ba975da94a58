//! # Expression Tree
//!
//! The call/closure/variable tree consumed by graph construction. Producing
//! it from source text is the job of an external parser.

pub mod domain;

pub use domain::{Closure, Expression, FunctionCall, Variable};
