//! Execution engine for running terminal operators with metrics, logging, and pull budgets.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Labelled runs of any terminal operator, reported to an [`ExecutionObserver`]
//! - Metered probe nodes ([`ExecutionEngine::meter`]) counting the elements pulled through them
//! - An opt-in element budget ([`ExecutionOptions::max_elements`]) that turns an otherwise
//!   non-terminating chain (e.g. `sorted` over an infinite source) into an error
//!
//! The engine never changes operator semantics: an unmetered chain runs exactly as it would
//! when driven directly through [`crate::sequence::SequenceExt`].
//!
//! ```rust
//! use lazy_sequence::execution::{ExecutionEngine, ExecutionOptions};
//! use lazy_sequence::source::iterate;
//! use lazy_sequence::{SequenceError, SequenceExt};
//!
//! let engine = ExecutionEngine::new(ExecutionOptions {
//!     max_elements: Some(1_000),
//! });
//!
//! // Sorting an infinite source would never finish; the metered source stops it.
//! let naturals = engine.meter("naturals", iterate(0u64, |n| n + 1));
//! let err = engine.to_vec("sort-all", &(&naturals).sorted()).unwrap_err();
//! assert!(matches!(err, SequenceError::ElementBudgetExceeded { limit: 1_000 }));
//!
//! // Bounded upstream: fine.
//! let head = engine.to_vec("sort-head", &(&naturals).limit(3).sorted_by(|a, b| b.cmp(a)));
//! assert_eq!(head.unwrap(), vec![2, 1, 0]);
//! assert_eq!(engine.metrics().snapshot().elements_pulled, 3);
//! ```

mod observer;

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{SequenceError, SequenceResult};
use crate::sequence::{Sequence, SequenceExt};

pub use observer::{
    CompositeObserver, ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver,
    StdErrExecutionObserver,
};

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionOptions {
    /// Upper bound on elements pulled through metered nodes during one run.
    ///
    /// If `None`, runs are unbounded.
    pub max_elements: Option<u64>,
}

impl ExecutionOptions {
    /// Parse options from JSON, e.g. `{"max_elements": 10000}`. Missing fields use defaults.
    pub fn from_json_str(input: &str) -> SequenceResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Runs terminal operators over sequences, with observer hooks and real-time metrics.
pub struct ExecutionEngine {
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `max_elements == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> Self {
        if let Some(n) = opts.max_elements {
            assert!(n > 0, "max_elements must be > 0 when set");
        }

        Self {
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        }
    }

    /// Attach an observer for execution events (metrics/logging).
    ///
    /// Nodes created by [`Self::meter`] capture the observer at creation time, so attach it
    /// first.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Wrap `upstream` in a probe node that counts pulls and enforces the element budget.
    ///
    /// Place it where pulls should be counted, usually right after the source. The probe is only
    /// active while [`Self::run`] drives a terminal; enumerated directly it is a plain pass-through.
    pub fn meter<S>(&self, node: impl Into<String>, upstream: S) -> Metered<S>
    where
        S: Sequence,
    {
        Metered {
            upstream,
            probe: Probe {
                node: Rc::from(node.into()),
                metrics: Arc::clone(&self.metrics),
                observer: self.observer.clone(),
                max_elements: self.opts.max_elements,
            },
        }
    }

    /// Run `terminal` over `sequence` as one labelled, metered run.
    ///
    /// Returns [`SequenceError::ElementBudgetExceeded`] if a metered node hit the budget; the
    /// terminal's partial result is discarded in that case.
    pub fn run<S, R, F>(&self, label: &str, sequence: &S, terminal: F) -> SequenceResult<R>
    where
        S: Sequence + ?Sized,
        F: FnOnce(&S) -> R,
    {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            label: label.to_string(),
        });

        let guard = RunGuard(&self.metrics);
        let out = terminal(sequence);
        drop(guard);

        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            label: label.to_string(),
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });

        match self.opts.max_elements {
            Some(limit) if self.metrics.budget_exceeded() => {
                Err(SequenceError::ElementBudgetExceeded { limit })
            }
            _ => Ok(out),
        }
    }

    /// Collect `sequence` into a `Vec` as one run.
    pub fn to_vec<S>(&self, label: &str, sequence: &S) -> SequenceResult<Vec<S::Item>>
    where
        S: Sequence + ?Sized,
    {
        self.run(label, sequence, |s| s.to_vec())
    }

    /// Count the elements of `sequence` as one run.
    pub fn count<S>(&self, label: &str, sequence: &S) -> SequenceResult<usize>
    where
        S: Sequence + ?Sized,
    {
        self.run(label, sequence, |s| s.count())
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

impl fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("opts", &self.opts)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Closes the run if the terminal panics, so metered nodes go back to pass-through.
struct RunGuard<'a>(&'a ExecutionMetrics);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.abort_run();
    }
}

#[derive(Clone)]
struct Probe {
    node: Rc<str>,
    metrics: Arc<ExecutionMetrics>,
    observer: Option<Arc<dyn ExecutionObserver>>,
    max_elements: Option<u64>,
}

impl Probe {
    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

/// Probe node counting the elements pulled through it. Built by [`ExecutionEngine::meter`].
///
/// Pulls through every probe of one engine add up to a single per-run total. Once that total
/// exceeds the budget each probe reports exhaustion to everything downstream, and
/// [`ExecutionEngine::run`] turns the run into an error. Outside a run the node passes elements
/// through untouched: nothing is counted and no budget applies.
pub struct Metered<S> {
    upstream: S,
    probe: Probe,
}

impl<S> Sequence for Metered<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Enumerator = MeteredEnumerator<S::Enumerator>;

    fn enumerate(&self) -> Self::Enumerator {
        if self.probe.metrics.in_run() {
            self.probe.metrics.on_enumeration();
            self.probe.emit(ExecutionEvent::EnumerationStarted {
                node: self.probe.node.to_string(),
            });
        }
        MeteredEnumerator {
            upstream: self.upstream.enumerate(),
            probe: self.probe.clone(),
        }
    }
}

/// Enumerator for [`Metered`].
pub struct MeteredEnumerator<I> {
    upstream: I,
    probe: Probe,
}

impl<I> Iterator for MeteredEnumerator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.probe.metrics.in_run() {
            return self.upstream.next();
        }
        if self.probe.metrics.budget_exceeded() {
            return None;
        }
        let value = self.upstream.next()?;
        let pulled = self.probe.metrics.on_element_pulled();
        match self.probe.max_elements {
            Some(limit) if pulled > limit => {
                if self.probe.metrics.on_budget_exceeded() {
                    self.probe.emit(ExecutionEvent::BudgetExceeded {
                        node: self.probe.node.to_string(),
                        limit,
                    });
                }
                None
            }
            _ => Some(value),
        }
    }
}
