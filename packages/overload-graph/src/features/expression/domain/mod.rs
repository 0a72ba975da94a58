pub mod expression;

pub use expression::{Closure, Expression, FunctionCall, Variable, SHORTHAND_PREFIX};
