//! Core error types.

use thiserror::Error;

/// Parameter-set construction failures.
///
/// These surface while building or deserializing a definition, never during
/// report execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// Two parameters share a name within one set.
    #[error("duplicate parameter name: {0}")]
    DuplicateName(String),
}
