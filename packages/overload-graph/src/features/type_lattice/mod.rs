//! # Type Lattice
//!
//! Nominal types with a precomputed subtype closure, the `Void`/`AnyObject`
//! sentinels, and structural function types. Everything the overload solver
//! decides reduces to [`Type::is_assignable_from`].

pub mod domain;

pub use domain::{ConcreteType, FunctionSignature, FunctionType, Symbol, Type};
