//! Resolve-expression use case
//!
//! Build the constraint graph for a top-level call, narrow it to arc
//! consistency, then apply the configured [`OutcomePolicy`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{OutcomePolicy, ResolverConfig};
use crate::errors::{OverloadError, Result};
use crate::features::constraint_graph::build_graph;
use crate::features::expression::Expression;
use crate::features::satisfaction::infrastructure::{satisfy_with, TracingHooks};
use crate::features::satisfaction::ports::SatisfactionHooks;
use crate::features::symbol_table::{SymbolLookup, SymbolTable};

use super::resolution::Resolution;

/// Overload resolver over one symbol scope
#[derive(Debug, Clone)]
pub struct TypeResolver<S = Arc<SymbolTable>> {
    symbols: S,
    config: ResolverConfig,
}

impl<S: SymbolLookup> TypeResolver<S> {
    pub fn new(symbols: S) -> Self {
        Self::with_config(symbols, ResolverConfig::default())
    }

    pub fn with_config(symbols: S, config: ResolverConfig) -> Self {
        Self { symbols, config }
    }

    pub fn symbols(&self) -> &S {
        &self.symbols
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every overloaded call in `expression`
    ///
    /// Fails on construction errors, on a hook error, and on outcomes the
    /// configured policy rejects. Otherwise empty and ambiguous candidate
    /// sets are reported on the returned [`Resolution`].
    pub fn resolve(
        &self,
        expression: &Expression,
        hooks: &mut dyn SatisfactionHooks,
    ) -> Result<Resolution> {
        let call = expression.as_call().ok_or(OverloadError::TopLevelNotCall)?;
        let mut graph = build_graph(call, &self.symbols)?;

        let order = self.config.worklist_order;
        let stats = if self.config.trace_events {
            satisfy_with(&mut graph, &mut TracingHooks::new(hooks), order)?
        } else {
            satisfy_with(&mut graph, hooks, order)?
        };

        let resolution = Resolution::new(graph, stats);
        debug!(
            root = %call,
            outcome = ?resolution.root_outcome(),
            steps = resolution.stats().steps,
            "Resolved expression"
        );

        check_outcome(&resolution, self.config.outcome_policy)?;
        Ok(resolution)
    }
}

fn check_outcome(resolution: &Resolution, policy: OutcomePolicy) -> Result<()> {
    let graph = resolution.graph();

    if policy.reject_unsatisfiable {
        if let Some(id) = resolution.unsatisfiable_nodes().first() {
            let call = graph.node(*id).call.to_string();
            warn!(call = %call, "No overload fits");
            return Err(OverloadError::Unsatisfiable { call });
        }
    }

    let root = graph.root_node();
    if policy.reject_ambiguous && root.is_ambiguous() {
        let call = root.call.to_string();
        warn!(call = %call, candidates = root.candidates.len(), "Ambiguous call");
        return Err(OverloadError::Ambiguous {
            call,
            candidates: root.candidates.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::satisfaction::domain::WorklistOrder;
    use crate::features::satisfaction::infrastructure::RecordingHooks;
    use crate::features::satisfaction::ports::NoopHooks;
    use crate::features::satisfaction::CallOutcome;
    use crate::features::type_lattice::Type;
    use pretty_assertions::assert_eq;

    /// Overloads of `foo` over Int and String closures, plus `+` and `bar`
    fn closure_table() -> Arc<SymbolTable> {
        let mut builder = SymbolTable::builder();
        let int = builder.declare_type("Int", &[]).unwrap();
        let text = builder.declare_type("String", &[]).unwrap();
        let mutable = builder.declare_type("MutableString", &["String"]).unwrap();
        builder
            .func(
                "foo",
                vec![Type::function(vec![int.clone()], int.clone())],
                int.clone(),
            )
            .unwrap()
            .func(
                "foo",
                vec![Type::function(vec![text.clone()], text.clone())],
                text.clone(),
            )
            .unwrap()
            .func("bar", vec![], mutable)
            .unwrap()
            .func("+", vec![int.clone(), int.clone()], int)
            .unwrap()
            .func("+", vec![text.clone(), text.clone()], text)
            .unwrap();
        Arc::new(builder.build())
    }

    fn sum_with_bar() -> Expression {
        Expression::call(
            "foo",
            vec![Expression::closure(
                Expression::call(
                    "+",
                    vec![Expression::var("$0"), Expression::call("bar", vec![])],
                ),
                &[],
            )],
        )
    }

    #[test]
    fn test_resolves_closure_through_operator() {
        let resolver = TypeResolver::new(closure_table());
        let resolution = resolver.resolve(&sum_with_bar(), &mut NoopHooks).unwrap();

        assert_eq!(resolution.root_outcome(), CallOutcome::Resolved);
        assert_eq!(
            resolution
                .root_image_types()
                .iter()
                .map(|ty| ty.to_string())
                .collect::<Vec<_>>(),
            vec!["String".to_string()]
        );
        assert!(resolution.is_resolved());
    }

    #[test]
    fn test_top_level_must_be_call() {
        let resolver = TypeResolver::new(closure_table());
        let err = resolver
            .resolve(&Expression::var("x"), &mut NoopHooks)
            .unwrap_err();
        assert!(matches!(err, OverloadError::TopLevelNotCall));
    }

    #[test]
    fn test_construction_error_propagates() {
        let resolver = TypeResolver::new(closure_table());
        let expr = Expression::call("bar", vec![Expression::var("ghost")]);
        let err = resolver.resolve(&expr, &mut NoopHooks).unwrap_err();
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_ambiguity_is_data_by_default() {
        let resolver = TypeResolver::new(closure_table());
        let expr = Expression::call("foo", vec![Expression::closure(Expression::var("$0"), &[])]);

        let resolution = resolver.resolve(&expr, &mut NoopHooks).unwrap();
        assert_eq!(resolution.root_outcome(), CallOutcome::Ambiguous(2));
        assert!(!resolution.is_resolved());
    }

    #[test]
    fn test_strict_policy_rejects_ambiguity() {
        let config = ResolverConfig::default().outcome_policy(OutcomePolicy::strict());
        let resolver = TypeResolver::with_config(closure_table(), config);
        let expr = Expression::call("foo", vec![Expression::closure(Expression::var("$0"), &[])]);

        let err = resolver.resolve(&expr, &mut NoopHooks).unwrap_err();
        assert!(matches!(err, OverloadError::Ambiguous { candidates: 2, .. }));
    }

    #[test]
    fn test_strict_policy_rejects_unsatisfiable() {
        let config = ResolverConfig::default().outcome_policy(OutcomePolicy {
            reject_unsatisfiable: true,
            reject_ambiguous: false,
        });
        let resolver = TypeResolver::with_config(closure_table(), config);
        // no overload of `+` takes zero arguments
        let expr = Expression::call(
            "+",
            vec![
                Expression::call("bar", vec![]),
                Expression::call("+", vec![]),
            ],
        );

        let err = resolver.resolve(&expr, &mut NoopHooks).unwrap_err();
        assert!(matches!(err, OverloadError::Unsatisfiable { .. }));
    }

    #[test]
    fn test_trace_events_still_reach_caller_hooks() {
        let config = ResolverConfig::default()
            .trace_events(true)
            .worklist_order(WorklistOrder::Lifo);
        let resolver = TypeResolver::with_config(closure_table(), config);

        let mut hooks = RecordingHooks::new();
        resolver.resolve(&sum_with_bar(), &mut hooks).unwrap();

        assert_eq!(hooks.count("start"), 1);
        assert_eq!(hooks.count("completion"), 1);
        assert!(hooks.count("elimination") > 0);
    }

    #[test]
    fn test_report_lists_every_call() {
        let resolver = TypeResolver::new(closure_table());
        let report = resolver
            .resolve(&sum_with_bar(), &mut NoopHooks)
            .unwrap()
            .report();

        assert_eq!(
            report.calls.iter().map(|c| c.label.as_str()).collect::<Vec<_>>(),
            vec!["foo", "+", "bar"]
        );
        assert_eq!(report.image_types, vec!["String".to_string()]);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"status\": \"resolved\""));
    }
}
