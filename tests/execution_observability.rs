use std::sync::{Arc, Mutex};

use lazy_sequence::execution::{
    CompositeObserver, ExecutionEngine, ExecutionEvent, ExecutionObserver, ExecutionOptions,
    StdErrExecutionObserver,
};
use lazy_sequence::source::{iterate, of};
use lazy_sequence::{SequenceError, SequenceExt};

#[derive(Default)]
struct RecordingObserver {
    budget_hits: Mutex<Vec<(String, u64)>>,
    finished: Mutex<Vec<(String, u64)>>,
}

impl ExecutionObserver for RecordingObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::BudgetExceeded { node, limit } => {
                self.budget_hits.lock().unwrap().push((node.clone(), *limit));
            }
            ExecutionEvent::RunFinished { label, metrics, .. } => {
                self.finished
                    .lock()
                    .unwrap()
                    .push((label.clone(), metrics.elements_pulled));
            }
            _ => {}
        }
    }
}

#[test]
fn observer_receives_budget_alert_for_unbounded_distinct() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = ExecutionEngine::new(ExecutionOptions {
        max_elements: Some(100),
    })
    .with_observer(obs.clone());

    // Only two distinct values exist, so asking for three never terminates on its own.
    let parity = engine
        .meter("naturals", iterate(0u32, |n| n + 1))
        .map(|n| n % 2)
        .distinct()
        .limit(3);

    let err = engine.to_vec("three-parities", &parity).unwrap_err();
    assert!(matches!(err, SequenceError::ElementBudgetExceeded { limit: 100 }));
    assert_eq!(
        *obs.budget_hits.lock().unwrap(),
        vec![("naturals".to_string(), 100)]
    );
}

#[test]
fn observer_sees_pull_counts_for_short_circuited_runs() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = ExecutionEngine::new(ExecutionOptions::default()).with_observer(obs.clone());
    let source = engine.meter("letters", of(["a", "b", "c", "d", "e"]));

    assert!(engine.run("any-c", &source, |s| s.any_match(|v| *v == "c")).unwrap());
    assert_eq!(engine.run("first", &source, |s| s.find_first()).unwrap(), Some("a"));
    assert_eq!(engine.count("all", &source).unwrap(), 5);

    assert_eq!(
        *obs.finished.lock().unwrap(),
        vec![
            ("any-c".to_string(), 3),
            ("first".to_string(), 1),
            ("all".to_string(), 5)
        ]
    );
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![
        a.clone(),
        b.clone(),
        Arc::new(StdErrExecutionObserver),
    ]);
    let engine = ExecutionEngine::new(ExecutionOptions::default()).with_observer(Arc::new(composite));

    let seq = engine.meter("src", of([1, 2, 3]));
    assert_eq!(engine.to_vec("run", &seq).unwrap(), vec![1, 2, 3]);

    assert_eq!(a.finished.lock().unwrap().len(), 1);
    assert_eq!(b.finished.lock().unwrap().len(), 1);
}

#[test]
fn metrics_snapshot_serializes() {
    let engine = ExecutionEngine::new(ExecutionOptions::default());
    let seq = engine.meter("src", of([1, 2, 3]));
    engine.count("run", &seq).unwrap();

    let snap = engine.metrics().snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: lazy_sequence::execution::ExecutionMetricsSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert!(snap.to_string().contains("elements_pulled=3"));
}

#[test]
fn metered_sources_share_one_run_total() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = ExecutionEngine::new(ExecutionOptions {
        max_elements: Some(4),
    })
    .with_observer(obs.clone());

    let left = engine.meter("left", of([1, 2, 3]));
    let right = engine.meter("right", of([4, 5, 6]));
    let both = (&left).chain(&right);

    let err = engine.to_vec("both", &both).unwrap_err();
    assert!(matches!(err, SequenceError::ElementBudgetExceeded { limit: 4 }));
    assert_eq!(
        *obs.budget_hits.lock().unwrap(),
        vec![("right".to_string(), 4)]
    );
    assert_eq!(engine.metrics().snapshot().elements_pulled, 5);

    // Each source fits on its own.
    assert_eq!(engine.to_vec("left-only", &left).unwrap(), vec![1, 2, 3]);
    assert_eq!(engine.to_vec("right-only", &right).unwrap(), vec![4, 5, 6]);
}

#[test]
fn metered_sources_under_budget_report_combined_pulls() {
    let engine = ExecutionEngine::new(ExecutionOptions {
        max_elements: Some(6),
    });
    let left = engine.meter("left", of([1, 2, 3]));
    let right = engine.meter("right", of([4, 5, 6]));

    let total = engine
        .run("sum", &(&left).chain(&right), |s| s.reduce(0, |a, b| a + b))
        .unwrap();
    assert_eq!(total, 21);

    let snap = engine.metrics().snapshot();
    assert_eq!(snap.elements_pulled, 6);
    assert_eq!(snap.enumerations, 2);
    assert!(!snap.budget_exceeded);
}

#[test]
fn metered_source_enumerated_directly_twice() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = ExecutionEngine::new(ExecutionOptions {
        max_elements: Some(3),
    })
    .with_observer(obs.clone());
    let seq = engine.meter("src", of([1, 2, 3]));

    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    assert!(obs.budget_hits.lock().unwrap().is_empty());
    assert!(obs.finished.lock().unwrap().is_empty());
}
