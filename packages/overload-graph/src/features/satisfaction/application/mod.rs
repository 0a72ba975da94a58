//! Application layer for satisfaction
//!
//! - TypeResolver: build, satisfy, apply the outcome policy
//! - Resolution / ResolutionReport: what the caller inspects afterwards

pub mod resolution;
pub mod type_resolver;

pub use resolution::{CallOutcome, CallReport, Resolution, ResolutionReport};
pub use type_resolver::TypeResolver;
