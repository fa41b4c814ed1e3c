use thiserror::Error;

/// Convenience result type for fallible sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Error type returned by fallible sources and by the [`crate::execution::ExecutionEngine`].
///
/// The operators themselves never produce errors: panics raised by caller-supplied functions
/// propagate unchanged to whoever drove the terminal operator.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Underlying I/O error while reading a record source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    /// A CSV record could not be read or deserialized (feature-gated behind `csv`).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// An NDJSON record could not be parsed or deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A strict one-shot source was enumerated a second time.
    #[error("sequence source already consumed")]
    AlreadyConsumed,

    /// A metered run pulled more elements than [`crate::execution::ExecutionOptions::max_elements`].
    #[error("element budget exceeded: more than {limit} elements pulled")]
    ElementBudgetExceeded { limit: u64 },
}
