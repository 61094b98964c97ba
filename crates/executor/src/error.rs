//! Execution error types.

use thiserror::Error;

/// Faults raised by a backend execution routine.
///
/// These never cross the `run` boundary: the connector converts them into
/// entries on its error list, so one bad report cannot take down a caller's
/// batch.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// A value could not be exposed to the script evaluator.
    #[error("failed to bind {name} for the script: {message}")]
    Bind { name: &'static str, message: String },
    /// The script failed to evaluate.
    #[error("script evaluation failed: {message}")]
    Script { message: String },
    /// The script appended sink entries that are not string-keyed records.
    #[error("{discarded} script row(s) were not string-keyed records and were discarded")]
    MalformedRows { discarded: usize },
}
