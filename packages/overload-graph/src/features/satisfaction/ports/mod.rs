//! Ports of the satisfaction engine

pub mod hooks;

pub use hooks::{HookError, HookResult, MatrixCell, NoopHooks, SatisfactionHooks};
