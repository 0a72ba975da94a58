//! Symbol-table and expression fixtures

use std::sync::Arc;

use overload_graph::{Expression, Graph, SymbolTable, Type};

fn closure(params: Vec<Type>, image: Type) -> Type {
    Type::function(params, image)
}

/// `foo((Int) -> Int) -> Int`, `foo((String) -> String) -> String`,
/// `bar() -> MutableString` with `MutableString: String`, `+` over both
pub fn paper_table() -> Arc<SymbolTable> {
    let mut builder = SymbolTable::builder();
    let int = builder.declare_type("Int", &[]).unwrap();
    let text = builder.declare_type("String", &[]).unwrap();
    let mutable = builder.declare_type("MutableString", &["String"]).unwrap();

    builder
        .func("foo", vec![closure(vec![int.clone()], int.clone())], int.clone())
        .unwrap()
        .func("foo", vec![closure(vec![text.clone()], text.clone())], text.clone())
        .unwrap()
        .func("bar", vec![], mutable)
        .unwrap()
        .func("+", vec![int.clone(), int.clone()], int)
        .unwrap()
        .func("+", vec![text.clone(), text.clone()], text)
        .unwrap();
    Arc::new(builder.build())
}

/// `foo { $0 + bar() }`
pub fn paper_expression() -> Expression {
    Expression::call(
        "foo",
        vec![Expression::closure(
            Expression::call("+", vec![Expression::var("$0"), Expression::call("bar", vec![])]),
            &[],
        )],
    )
}

/// Unrelated `A` and `B`, `++` and `foo` over both, `bar(B) -> B`
pub fn nested_closure_table() -> Arc<SymbolTable> {
    let mut builder = SymbolTable::builder();
    let a = builder.declare_type("A", &[]).unwrap();
    let b = builder.declare_type("B", &[]).unwrap();

    builder
        .func("++", vec![a.clone(), a.clone()], a.clone())
        .unwrap()
        .func("++", vec![b.clone(), b.clone()], b.clone())
        .unwrap()
        .func("bar", vec![b.clone()], b.clone())
        .unwrap()
        .func("foo", vec![closure(vec![a.clone()], a.clone())], a)
        .unwrap()
        .func("foo", vec![closure(vec![b.clone()], b.clone())], b)
        .unwrap();
    Arc::new(builder.build())
}

/// `foo { a -> foo { b -> foo { c -> a ++ b ++ bar(c) } } }`
pub fn nested_closure_expression() -> Expression {
    let innermost = Expression::call(
        "++",
        vec![
            Expression::call("++", vec![Expression::var("a"), Expression::var("b")]),
            Expression::call("bar", vec![Expression::var("c")]),
        ],
    );
    let level3 = Expression::call("foo", vec![Expression::closure(innermost, &["c"])]);
    let level2 = Expression::call("foo", vec![Expression::closure(level3, &["b"])]);
    Expression::call("foo", vec![Expression::closure(level2, &["a"])])
}

/// `B: A`, `foo((A) -> B) -> A`, `foo((B) -> A) -> B`
pub fn returned_parameter_table() -> Arc<SymbolTable> {
    let mut builder = SymbolTable::builder();
    let a = builder.declare_type("A", &[]).unwrap();
    let b = builder.declare_type("B", &["A"]).unwrap();

    builder
        .func("foo", vec![closure(vec![a.clone()], b.clone())], a.clone())
        .unwrap()
        .func("foo", vec![closure(vec![b.clone()], a.clone())], b)
        .unwrap();
    Arc::new(builder.build())
}

/// Build the graph of a top-level call
pub fn graph_of(table: &SymbolTable, expression: &Expression) -> Graph {
    overload_graph::build_graph(expression.as_call().unwrap(), table).unwrap()
}

/// Candidate signatures of every node, in depth order
pub fn candidate_matrix(graph: &Graph) -> Vec<Vec<String>> {
    graph
        .sorted_nodes()
        .iter()
        .map(|id| {
            graph
                .candidates(*id)
                .iter()
                .map(|candidate| candidate.to_string())
                .collect()
        })
        .collect()
}

/// Rendered types of a position on every remaining candidate
pub fn rendered_types(graph: &Graph, position: overload_graph::PositionId) -> Vec<String> {
    graph
        .types_of(position)
        .into_iter()
        .map(|ty| ty.to_string())
        .collect()
}
