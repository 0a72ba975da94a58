//! Proptest strategies for random call trees
//!
//! The lattice is `A`, `B: A`, `C: B`, and an unrelated `D`. Overloads cover
//! nullary calls, unary and binary calls, and closure-taking calls, so
//! random trees hit resolved, ambiguous, and unsatisfiable outcomes alike.

use std::sync::Arc;

use overload_graph::{Expression, SymbolTable, Type};
use proptest::prelude::*;

pub fn lattice_table() -> Arc<SymbolTable> {
    let mut builder = SymbolTable::builder();
    let a = builder.declare_type("A", &[]).unwrap();
    let b = builder.declare_type("B", &["A"]).unwrap();
    let c = builder.declare_type("C", &["B"]).unwrap();
    let d = builder.declare_type("D", &[]).unwrap();
    let func = |params: Vec<Type>, image: Type| Type::function(params, image);

    builder
        .func("f", vec![], a.clone())
        .unwrap()
        .func("f", vec![], c.clone())
        .unwrap()
        .func("f", vec![a.clone()], b.clone())
        .unwrap()
        .func("f", vec![b.clone()], d.clone())
        .unwrap()
        .func("f", vec![c.clone(), a.clone()], a.clone())
        .unwrap()
        .func("f", vec![d.clone(), d.clone()], c.clone())
        .unwrap()
        .func("g", vec![], d.clone())
        .unwrap()
        .func("g", vec![a.clone()], a.clone())
        .unwrap()
        .func("g", vec![d.clone()], b.clone())
        .unwrap()
        .func("g", vec![b.clone(), b.clone()], b.clone())
        .unwrap()
        .func("id", vec![a.clone()], a.clone())
        .unwrap()
        .func("id", vec![d.clone()], d.clone())
        .unwrap()
        .func("h", vec![func(vec![a.clone()], b.clone())], a.clone())
        .unwrap()
        .func("h", vec![func(vec![c.clone()], a.clone())], d.clone())
        .unwrap()
        .func("h", vec![func(vec![d.clone()], d.clone())], c.clone())
        .unwrap()
        .func("h", vec![func(vec![a.clone(), b.clone()], c)], b)
        .unwrap();
    Arc::new(builder.build())
}

fn leaf() -> impl Strategy<Value = Expression> {
    prop_oneof![Just("f"), Just("g")].prop_map(|name| Expression::call(name, vec![]))
}

/// Closure body over the shorthand parameter `$0`
fn closure_body(inner: BoxedStrategy<Expression>) -> impl Strategy<Value = Expression> {
    prop_oneof![
        Just(Expression::var("$0")),
        prop_oneof![Just("g"), Just("id"), Just("f")]
            .prop_map(|name| Expression::call(name, vec![Expression::var("$0")])),
        inner.prop_map(|other| Expression::call("f", vec![Expression::var("$0"), other])),
    ]
}

/// Random top-level call trees of bounded depth
pub fn call_tree() -> impl Strategy<Value = Expression> {
    leaf().prop_recursive(4, 24, 2, |inner| {
        let boxed = inner.boxed();
        prop_oneof![
            (
                prop_oneof![Just("f"), Just("g"), Just("id")],
                prop::collection::vec(boxed.clone(), 1..=2),
            )
                .prop_map(|(name, arguments)| Expression::call(name, arguments)),
            closure_body(boxed.clone())
                .prop_map(|body| Expression::call("h", vec![Expression::closure(body, &[])])),
        ]
    })
}
