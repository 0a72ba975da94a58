//! Nominal type lattice
//!
//! Types form a small closed lattice:
//! - `Void`: assignable only from itself
//! - `AnyObject`: top of every non-void type
//! - `Concrete`: nominal type with multiple inheritance
//! - `Function`: structural, contravariant parameters / covariant image
//!
//! `is_assignable_from` is the single relation the overload solver runs on.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Type representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Unit of statements that produce nothing
    Void,
    /// Any non-void type
    AnyObject,
    /// Nominal type: Int, String, MutableString
    Concrete(ConcreteType),
    /// Function type: (Int, String) -> Bool
    Function(FunctionType),
}

/// Nominal type with its supertype closure
///
/// The closure is computed once in [`ConcreteType::new`] and always contains
/// the type itself. Two concrete types are equal when their names are.
#[derive(Debug, Clone)]
pub struct ConcreteType {
    name: Arc<str>,
    supertypes: Arc<BTreeSet<Arc<str>>>,
}

impl ConcreteType {
    /// Create a concrete type below the given direct supertypes
    pub fn new(name: impl Into<Arc<str>>, direct_supertypes: &[ConcreteType]) -> Self {
        let name = name.into();
        let mut supertypes: BTreeSet<Arc<str>> = direct_supertypes
            .iter()
            .flat_map(|parent| parent.supertypes.iter().cloned())
            .collect();
        supertypes.insert(name.clone());

        Self {
            name,
            supertypes: Arc::new(supertypes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of every supertype, self included
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.supertypes.iter().map(|s| s.as_ref())
    }

    /// `self <: other`
    pub fn is_subtype_of(&self, other: &ConcreteType) -> bool {
        self.supertypes.contains(&other.name)
    }
}

impl PartialEq for ConcreteType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ConcreteType {}

impl Hash for ConcreteType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Structural function type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub params: Vec<Type>,
    pub image: Box<Type>,
}

impl FunctionType {
    pub fn new(params: Vec<Type>, image: Type) -> Self {
        Self {
            params,
            image: Box::new(image),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Type {
    /// Create a concrete type
    pub fn concrete(name: impl Into<Arc<str>>, direct_supertypes: &[ConcreteType]) -> Self {
        Type::Concrete(ConcreteType::new(name, direct_supertypes))
    }

    /// Create a function type
    pub fn function(params: Vec<Type>, image: Type) -> Self {
        Type::Function(FunctionType::new(params, image))
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_concrete(&self) -> Option<&ConcreteType> {
        match self {
            Type::Concrete(concrete) => Some(concrete),
            _ => None,
        }
    }

    /// Whether a value of type `other` may flow into a slot of type `self`
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Void, other) => matches!(other, Type::Void),
            (Type::AnyObject, other) => !matches!(other, Type::Void),
            (Type::Concrete(expected), Type::Concrete(actual)) => actual.is_subtype_of(expected),
            (Type::Function(expected), Type::Function(actual)) => {
                expected.params.len() == actual.params.len()
                    // parameters are contravariant
                    && expected
                        .params
                        .iter()
                        .zip(&actual.params)
                        .all(|(expected_param, actual_param)| {
                            actual_param.is_assignable_from(expected_param)
                        })
                    && expected.image.is_assignable_from(&actual.image)
            }
            _ => false,
        }
    }
}

impl From<ConcreteType> for Type {
    fn from(concrete: ConcreteType) -> Self {
        Type::Concrete(concrete)
    }
}

impl From<FunctionType> for Type {
    fn from(function: FunctionType) -> Self {
        Type::Function(function)
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") -> {}", self.image)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "Void"),
            Type::AnyObject => write!(f, "AnyObject"),
            Type::Concrete(concrete) => write!(f, "{}", concrete),
            Type::Function(function) => write!(f, "{}", function),
        }
    }
}
