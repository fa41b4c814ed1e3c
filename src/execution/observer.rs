use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Execution events emitted by the engine and its metered nodes.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    /// A labelled run began; always the first event of a run.
    RunStarted { label: String },
    /// A metered node started an enumeration pass inside the current run.
    EnumerationStarted { node: String },
    /// A metered node pulled past `limit`; emitted once per run.
    BudgetExceeded { node: String, limit: u64 },
    /// The terminal returned (or was cut short by the budget); always the last event of a run.
    RunFinished {
        label: String,
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        eprintln!("[sequence] {event:?}");
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ExecutionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ExecutionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ExecutionObserver for CompositeObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Real-time metrics for an execution run.
///
/// Metered nodes update these counters while elements flow; callers can snapshot them at any
/// time. Counters reset at the start of every [`super::ExecutionEngine::run`], and metered nodes
/// only touch them while a run is active.
pub struct ExecutionMetrics {
    in_run: AtomicBool,
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,
    enumerations: AtomicU64,
    elements_pulled: AtomicU64,
    budget_exceeded: AtomicBool,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            in_run: AtomicBool::new(false),
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            enumerations: AtomicU64::new(0),
            elements_pulled: AtomicU64::new(0),
            budget_exceeded: AtomicBool::new(false),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);
        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.enumerations.store(0, Ordering::SeqCst);
        self.elements_pulled.store(0, Ordering::SeqCst);
        self.budget_exceeded.store(false, Ordering::SeqCst);
        self.in_run.store(true, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.in_run.store(false, Ordering::SeqCst);
        self.elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    /// `true` between [`Self::begin_run`] and [`Self::end_run`].
    pub fn in_run(&self) -> bool {
        self.in_run.load(Ordering::SeqCst)
    }

    pub(crate) fn abort_run(&self) {
        self.in_run.store(false, Ordering::SeqCst);
    }

    pub fn on_enumeration(&self) {
        let _ = self.enumerations.fetch_add(1, Ordering::SeqCst);
    }

    /// Record one pulled element; returns the run's total so far.
    pub fn on_element_pulled(&self) -> u64 {
        self.elements_pulled.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Flag the budget as exceeded; returns `true` only for the first call in a run.
    pub fn on_budget_exceeded(&self) -> bool {
        !self.budget_exceeded.swap(true, Ordering::SeqCst)
    }

    pub fn budget_exceeded(&self) -> bool {
        self.budget_exceeded.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        ExecutionMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            enumerations: self.enumerations.load(Ordering::SeqCst),
            elements_pulled: self.elements_pulled.load(Ordering::SeqCst),
            budget_exceeded: self.budget_exceeded(),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub enumerations: u64,
    pub elements_pulled: u64,
    pub budget_exceeded: bool,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, enumerations={}, elements_pulled={}, budget_exceeded={}, elapsed={:?}",
            self.run_id, self.enumerations, self.elements_pulled, self.budget_exceeded, self.elapsed
        )
    }
}
