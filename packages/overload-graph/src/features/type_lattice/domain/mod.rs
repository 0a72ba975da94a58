pub mod symbol;
pub mod type_system;

pub use symbol::{FunctionSignature, Symbol};
pub use type_system::{ConcreteType, FunctionType, Type};
