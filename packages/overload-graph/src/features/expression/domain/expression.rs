//! Call-expression tree
//!
//! Only three expression shapes reach the overload solver: function calls,
//! closure literals passed as arguments, and variable references naming a
//! closure parameter.

use std::fmt;

/// Prefix of shorthand closure parameters (`$0`, `$1`, ...)
pub const SHORTHAND_PREFIX: char = '$';

/// Expression node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Call(FunctionCall),
    Closure(Closure),
    Variable(Variable),
}

/// `name(arg0, arg1, ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Expression>,
}

/// Variable reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
}

/// Closure literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Closure {
    /// `{ a, b -> body }` or `{ $0 + $1 }`
    Filled {
        body: Box<Expression>,
        parameters: Vec<Variable>,
    },
    /// `{}`: no declared behavior
    Empty,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Index of a shorthand parameter name like `$2`
    pub fn shorthand_index(&self) -> Option<usize> {
        let digits = self.name.strip_prefix(SHORTHAND_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl Closure {
    /// Build a filled closure
    ///
    /// With no explicit parameters, the closure takes `$0..=$N` where `$N` is
    /// the highest shorthand name used in the body. Shorthand names inside
    /// nested closures belong to those closures and are not counted.
    pub fn filled(body: Expression, parameters: Vec<Variable>) -> Self {
        let parameters = if parameters.is_empty() {
            match highest_shorthand(&body) {
                Some(highest) => (0..=highest)
                    .map(|i| Variable::new(format!("{}{}", SHORTHAND_PREFIX, i)))
                    .collect(),
                None => Vec::new(),
            }
        } else {
            parameters
        };

        Closure::Filled {
            body: Box::new(body),
            parameters,
        }
    }

    pub fn parameters(&self) -> &[Variable] {
        match self {
            Closure::Filled { parameters, .. } => parameters,
            Closure::Empty => &[],
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters().len()
    }
}

fn highest_shorthand(expression: &Expression) -> Option<usize> {
    match expression {
        Expression::Variable(variable) => variable.shorthand_index(),
        Expression::Call(call) => call.arguments.iter().filter_map(highest_shorthand).max(),
        Expression::Closure(_) => None,
    }
}

impl Expression {
    /// `name(arguments...)`
    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Call(FunctionCall::new(name, arguments))
    }

    /// Variable reference
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(Variable::new(name))
    }

    /// Closure with named parameters, or shorthand parameters when `parameters` is empty
    pub fn closure(body: Expression, parameters: &[&str]) -> Self {
        Expression::Closure(Closure::filled(
            body,
            parameters.iter().map(|name| Variable::new(*name)).collect(),
        ))
    }

    /// `{}`
    pub fn empty_closure() -> Self {
        Expression::Closure(Closure::Empty)
    }

    pub fn as_call(&self) -> Option<&FunctionCall> {
        match self {
            Expression::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Number of call expressions in this tree, closure bodies included
    pub fn call_count(&self) -> usize {
        match self {
            Expression::Call(call) => {
                1 + call.arguments.iter().map(Expression::call_count).sum::<usize>()
            }
            Expression::Closure(Closure::Filled { body, .. }) => body.call_count(),
            Expression::Closure(Closure::Empty) | Expression::Variable(_) => 0,
        }
    }
}

impl From<FunctionCall> for Expression {
    fn from(call: FunctionCall) -> Self {
        Expression::Call(call)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Closure::Empty => write!(f, "{{}}"),
            Closure::Filled { body, parameters } => {
                let explicit = parameters
                    .iter()
                    .any(|parameter| parameter.shorthand_index().is_none());
                if explicit {
                    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
                    write!(f, "{{ {} -> {} }}", names.join(", "), body)
                } else {
                    write!(f, "{{ {} }}", body)
                }
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Call(call) => write!(f, "{}", call),
            Expression::Closure(closure) => write!(f, "{}", closure),
            Expression::Variable(variable) => write!(f, "{}", variable.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_index() {
        assert_eq!(Variable::new("$0").shorthand_index(), Some(0));
        assert_eq!(Variable::new("$12").shorthand_index(), Some(12));
        assert_eq!(Variable::new("$").shorthand_index(), None);
        assert_eq!(Variable::new("$a").shorthand_index(), None);
        assert_eq!(Variable::new("a").shorthand_index(), None);
    }

    #[test]
    fn test_shorthand_parameters_are_inferred() {
        let closure = Closure::filled(
            Expression::call("+", vec![Expression::var("$0"), Expression::var("$2")]),
            vec![],
        );
        let names: Vec<&str> = closure.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["$0", "$1", "$2"]);
    }

    #[test]
    fn test_shorthand_in_nested_closure_is_not_counted() {
        let inner = Expression::closure(Expression::var("$3"), &[]);
        let closure = Closure::filled(
            Expression::call("foo", vec![Expression::var("$0"), inner]),
            vec![],
        );
        assert_eq!(closure.parameter_count(), 1);
    }

    #[test]
    fn test_body_without_shorthand_takes_no_parameters() {
        let closure = Closure::filled(Expression::call("bar", vec![]), vec![]);
        assert_eq!(closure.parameter_count(), 0);
        assert_eq!(Closure::Empty.parameter_count(), 0);
    }

    #[test]
    fn test_explicit_parameters_win() {
        let closure = Closure::filled(Expression::var("$0"), vec![Variable::new("a")]);
        assert_eq!(closure.parameters(), &[Variable::new("a")]);
    }

    #[test]
    fn test_display() {
        let expr = Expression::call(
            "foo",
            vec![
                Expression::call("bar", vec![]),
                Expression::closure(Expression::var("a"), &["a"]),
                Expression::closure(Expression::call("+", vec![Expression::var("$0")]), &[]),
                Expression::empty_closure(),
            ],
        );
        assert_eq!(expr.to_string(), "foo(bar(), { a -> a }, { +($0) }, {})");
    }

    #[test]
    fn test_call_count() {
        let expr = Expression::call(
            "foo",
            vec![Expression::closure(
                Expression::call("+", vec![Expression::var("$0"), Expression::call("bar", vec![])]),
                &[],
            )],
        );
        assert_eq!(expr.call_count(), 3);
    }
}
