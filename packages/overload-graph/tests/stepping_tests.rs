//! Suspending hooks driven from another thread

mod common;

use std::sync::mpsc;
use std::thread;

use common::*;
use overload_graph::{
    satisfy, HaltPolicy, HookError, OverloadError, RecordingHooks, SteppingHooks, TypeResolver,
};

#[test]
fn test_stepped_run_matches_free_run() {
    let mut free = graph_of(&paper_table(), &paper_expression());
    let free_stats = satisfy(&mut free, &mut overload_graph::NoopHooks).unwrap();

    let mut stepped = graph_of(&paper_table(), &paper_expression());
    let (mut hooks, controller) = SteppingHooks::new(RecordingHooks::new(), HaltPolicy::default());
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let driver = thread::spawn(move || {
        let mut granted = 0usize;
        // one permit at a time until the engine reports completion
        while done_rx.try_recv().is_err() {
            if !controller.step() {
                break;
            }
            granted += 1;
            thread::yield_now();
        }
        granted
    });

    let stepped_stats = satisfy(&mut stepped, &mut hooks).unwrap();
    done_tx.send(()).unwrap();
    let granted = driver.join().unwrap();

    assert_eq!(stepped_stats, free_stats);
    assert_eq!(candidate_matrix(&stepped), candidate_matrix(&free));
    assert_eq!(hooks.halts(), stepped_stats.steps);
    assert!(granted >= stepped_stats.steps);
}

#[test]
fn test_cancellation_leaves_graph_inspectable() {
    let (mut hooks, controller) =
        SteppingHooks::new(RecordingHooks::new(), HaltPolicy::every_event());
    controller.step_n(3);
    drop(controller);

    let resolver = TypeResolver::new(paper_table());
    let err = resolver
        .resolve(&paper_expression(), &mut hooks)
        .unwrap_err();

    assert!(matches!(err, OverloadError::Hook(HookError::Cancelled)));
    let recorded = hooks.into_inner();
    // start, first constraint, first type check
    assert_eq!(recorded.events().len(), 3);
    assert_eq!(recorded.count("completion"), 0);
}
