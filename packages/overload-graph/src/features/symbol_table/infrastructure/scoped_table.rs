//! Scoped symbol table
//!
//! A table holds its own symbols and declared types plus an optional outer
//! scope. Lookups walk inner to outer; function lookups collect overloads from
//! every scope, variable and type lookups return the innermost match.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{OverloadError, Result};
use crate::features::symbol_table::ports::{ClosureArity, SymbolLookup};
use crate::features::type_lattice::{ConcreteType, FunctionSignature, Symbol, Type};

/// Symbol table with lexical nesting
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    types: FxHashMap<String, ConcreteType>,
    outer: Option<Arc<SymbolTable>>,
}

impl SymbolTable {
    /// Start a new top-level table
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::new(None)
    }

    /// Start a table nested inside `outer`
    pub fn inner_scope(outer: &Arc<SymbolTable>) -> SymbolTableBuilder {
        SymbolTableBuilder::new(Some(Arc::clone(outer)))
    }

    /// Nested table holding exactly `symbols`
    pub fn inner_scope_with(outer: &Arc<SymbolTable>, symbols: Vec<Symbol>) -> SymbolTable {
        SymbolTable {
            symbols,
            types: FxHashMap::default(),
            outer: Some(Arc::clone(outer)),
        }
    }

    /// Symbols of this scope followed by every outer scope
    pub fn all_symbols(&self) -> impl Iterator<Item = &Symbol> {
        let mut scopes = Vec::new();
        let mut current = Some(self);
        while let Some(scope) = current {
            scopes.push(scope);
            current = scope.outer.as_deref();
        }
        scopes.into_iter().flat_map(|scope| scope.symbols.iter())
    }

    pub fn find_variable_by(&self, name: &str) -> Option<&str> {
        self.all_symbols().find_map(|symbol| match symbol {
            Symbol::Variable(variable) if variable == name => Some(variable.as_str()),
            _ => None,
        })
    }

    /// Declared concrete type, or one of the `Void` / `AnyObject` sentinels
    pub fn type_by_name(&self, name: &str) -> Option<Type> {
        match name {
            "Void" => return Some(Type::Void),
            "AnyObject" => return Some(Type::AnyObject),
            _ => {}
        }
        self.concrete_by_name(name).map(|concrete| Type::Concrete(concrete.clone()))
    }

    fn concrete_by_name(&self, name: &str) -> Option<&ConcreteType> {
        self.types
            .get(name)
            .or_else(|| self.outer.as_deref().and_then(|outer| outer.concrete_by_name(name)))
    }

    pub fn function_count(&self) -> usize {
        self.all_symbols()
            .filter(|symbol| matches!(symbol, Symbol::Function(_)))
            .count()
    }
}

impl SymbolLookup for SymbolTable {
    fn find_functions_by(
        &self,
        name: &str,
        arity: usize,
        closure_arities: &[ClosureArity],
    ) -> Vec<FunctionSignature> {
        self.all_symbols()
            .filter_map(Symbol::as_function)
            .filter(|signature| {
                signature.name == name
                    && signature.arity() == arity
                    && closure_arities.iter().all(|closure| {
                        signature.accepts_closure_at(closure.argument_index, closure.parameter_count)
                    })
            })
            .cloned()
            .collect()
    }
}

/// Builder for [`SymbolTable`]
#[derive(Debug)]
pub struct SymbolTableBuilder {
    symbols: Vec<Symbol>,
    signatures: FxHashSet<FunctionSignature>,
    types: FxHashMap<String, ConcreteType>,
    outer: Option<Arc<SymbolTable>>,
}

impl SymbolTableBuilder {
    fn new(outer: Option<Arc<SymbolTable>>) -> Self {
        Self {
            symbols: Vec::new(),
            signatures: FxHashSet::default(),
            types: FxHashMap::default(),
            outer,
        }
    }

    /// Declare a concrete type below already-declared supertypes
    pub fn declare_type(&mut self, name: &str, supertypes: &[&str]) -> Result<Type> {
        let parents = supertypes
            .iter()
            .map(|parent| {
                self.concrete_by_name(parent)
                    .cloned()
                    .ok_or_else(|| OverloadError::UnknownType {
                        name: parent.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let concrete = ConcreteType::new(name, &parents);
        self.types.insert(name.to_string(), concrete.clone());
        Ok(Type::Concrete(concrete))
    }

    /// Look up a type declared here or in an outer scope
    pub fn type_named(&self, name: &str) -> Result<Type> {
        match name {
            "Void" => Ok(Type::Void),
            "AnyObject" => Ok(Type::AnyObject),
            _ => self
                .concrete_by_name(name)
                .map(|concrete| Type::Concrete(concrete.clone()))
                .ok_or_else(|| OverloadError::UnknownType {
                    name: name.to_string(),
                }),
        }
    }

    fn concrete_by_name(&self, name: &str) -> Option<&ConcreteType> {
        self.types.get(name).or_else(|| {
            self.outer
                .as_deref()
                .and_then(|outer| outer.concrete_by_name(name))
        })
    }

    /// Declare `func name(params) -> image`
    pub fn func(&mut self, name: &str, params: Vec<Type>, image: Type) -> Result<&mut Self> {
        let signature = FunctionSignature::new(name, params, image);
        if !self.signatures.insert(signature.clone()) {
            return Err(OverloadError::DuplicateSignature {
                signature: signature.to_string(),
            });
        }
        self.symbols.push(Symbol::Function(signature));
        Ok(self)
    }

    /// Declare a free variable
    pub fn variable(&mut self, name: &str) -> &mut Self {
        self.symbols.push(Symbol::Variable(name.to_string()));
        self
    }

    pub fn build(self) -> SymbolTable {
        SymbolTable {
            symbols: self.symbols,
            types: self.types,
            outer: self.outer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        let mut builder = SymbolTable::builder();
        let int = builder.declare_type("Int", &[]).unwrap();
        let string = builder.declare_type("String", &[]).unwrap();
        builder
            .func("foo", vec![Type::function(vec![int.clone()], int.clone())], int.clone())
            .unwrap()
            .func(
                "foo",
                vec![Type::function(vec![string.clone(), string.clone()], string.clone())],
                string.clone(),
            )
            .unwrap()
            .func("foo", vec![int.clone()], int.clone())
            .unwrap()
            .func("bar", vec![], string)
            .unwrap()
            .variable("x");
        builder.build()
    }

    #[test]
    fn test_find_by_name_and_arity() {
        let table = table();
        assert_eq!(table.find_functions_by("foo", 1, &[]).len(), 3);
        assert_eq!(table.find_functions_by("bar", 0, &[]).len(), 1);
        assert!(table.find_functions_by("bar", 1, &[]).is_empty());
        assert!(table.find_functions_by("baz", 0, &[]).is_empty());
    }

    #[test]
    fn test_find_filters_by_closure_arity() {
        let table = table();
        let unary = table.find_functions_by("foo", 1, &[ClosureArity::new(0, 1)]);
        assert_eq!(unary.len(), 1);
        assert_eq!(unary[0].to_string(), "foo((Int) -> Int) -> Int");

        let binary = table.find_functions_by("foo", 1, &[ClosureArity::new(0, 2)]);
        assert_eq!(binary.len(), 1);
        assert_eq!(binary[0].image.to_string(), "String");

        assert!(table
            .find_functions_by("foo", 1, &[ClosureArity::new(0, 0)])
            .is_empty());
    }

    #[test]
    fn test_duplicate_signature_rejected() {
        let mut builder = SymbolTable::builder();
        let int = builder.declare_type("Int", &[]).unwrap();
        builder.func("foo", vec![int.clone()], Type::Void).unwrap();
        let err = builder.func("foo", vec![int], Type::Void).unwrap_err();
        assert_eq!(err.to_string(), "Signature already exists: func foo(Int) -> Void");
    }

    #[test]
    fn test_unknown_supertype_rejected() {
        let mut builder = SymbolTable::builder();
        let err = builder.declare_type("MutableString", &["String"]).unwrap_err();
        assert!(matches!(err, OverloadError::UnknownType { name } if name == "String"));
    }

    #[test]
    fn test_inner_scope_sees_outer_symbols_and_types() {
        let outer = Arc::new(table());
        let mut inner = SymbolTable::inner_scope(&outer);
        let string = inner.type_named("String").unwrap();
        let mutable = inner.declare_type("MutableString", &["String"]).unwrap();
        assert!(string.is_assignable_from(&mutable));
        inner.func("bar", vec![mutable.clone()], mutable).unwrap();
        let inner = inner.build();

        assert_eq!(inner.find_functions_by("foo", 1, &[]).len(), 3);
        assert_eq!(inner.find_functions_by("bar", 1, &[]).len(), 1);
        assert_eq!(inner.find_functions_by("bar", 0, &[]).len(), 1);
        assert_eq!(inner.find_variable_by("x"), Some("x"));
        assert!(inner.type_by_name("Int").is_some());
        assert_eq!(inner.function_count(), 5);
    }

    #[test]
    fn test_inner_scope_with_symbols() {
        let outer = Arc::new(table());
        let inner = SymbolTable::inner_scope_with(&outer, vec![Symbol::Variable("y".into())]);
        assert_eq!(inner.find_variable_by("y"), Some("y"));
        assert_eq!(inner.find_variable_by("x"), Some("x"));
        assert_eq!(inner.find_variable_by("z"), None);
    }

    #[test]
    fn test_sentinel_types() {
        let table = table();
        assert_eq!(table.type_by_name("Void"), Some(Type::Void));
        assert_eq!(table.type_by_name("AnyObject"), Some(Type::AnyObject));
        assert_eq!(table.type_by_name("Missing"), None);
    }
}
