//! Symbol lookup port
//!
//! Graph construction only needs one query: the overloads of a name that fit
//! a call's arity and closure shapes.

use crate::features::type_lattice::FunctionSignature;

/// Parameter count of a closure literal at a given argument index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosureArity {
    /// Index into the full argument list of the call
    pub argument_index: usize,
    pub parameter_count: usize,
}

impl ClosureArity {
    pub fn new(argument_index: usize, parameter_count: usize) -> Self {
        Self {
            argument_index,
            parameter_count,
        }
    }
}

/// Function signature lookup used by graph construction
pub trait SymbolLookup {
    /// All functions named `name` with exactly `arity` parameters whose
    /// parameter at every `closure_arities[i].argument_index` is a function
    /// type of exactly `closure_arities[i].parameter_count` parameters.
    ///
    /// Order is not significant.
    fn find_functions_by(
        &self,
        name: &str,
        arity: usize,
        closure_arities: &[ClosureArity],
    ) -> Vec<FunctionSignature>;
}

impl<T: SymbolLookup + ?Sized> SymbolLookup for &T {
    fn find_functions_by(
        &self,
        name: &str,
        arity: usize,
        closure_arities: &[ClosureArity],
    ) -> Vec<FunctionSignature> {
        (**self).find_functions_by(name, arity, closure_arities)
    }
}

impl<T: SymbolLookup + ?Sized> SymbolLookup for std::sync::Arc<T> {
    fn find_functions_by(
        &self,
        name: &str,
        arity: usize,
        closure_arities: &[ClosureArity],
    ) -> Vec<FunctionSignature> {
        (**self).find_functions_by(name, arity, closure_arities)
    }
}
