//! Symbols visible to call sites
//!
//! Functions are the overload candidates of a call site; variables only name
//! closure parameters and never take part in overload filtering.

use std::fmt;

use super::type_system::{FunctionType, Type};

/// Function signature (one overload candidate)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    pub name: String,
    pub image: Type,
    pub params: Vec<Type>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, params: Vec<Type>, image: Type) -> Self {
        Self {
            name: name.into(),
            image,
            params,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Structural type of this signature
    pub fn as_type(&self) -> FunctionType {
        FunctionType::new(self.params.clone(), self.image.clone())
    }

    /// Whether the parameter at `index` is a function type taking exactly
    /// `parameter_count` parameters
    pub fn accepts_closure_at(&self, index: usize, parameter_count: usize) -> bool {
        self.params
            .get(index)
            .and_then(Type::as_function)
            .map_or(false, |function| function.arity() == parameter_count)
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") -> {}", self.image)
    }
}

/// Symbol kinds held by a symbol table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Function(FunctionSignature),
    Variable(String),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Function(signature) => &signature.name,
            Symbol::Variable(name) => name,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSignature> {
        match self {
            Symbol::Function(signature) => Some(signature),
            Symbol::Variable(_) => None,
        }
    }
}

impl From<FunctionSignature> for Symbol {
    fn from(signature: FunctionSignature) -> Self {
        Symbol::Function(signature)
    }
}
