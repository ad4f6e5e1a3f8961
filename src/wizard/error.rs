// ABOUTME: Error types for converting external strings into wizard domain values

use thiserror::Error;

/// Errors raised when a string does not name a known wizard value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Upload kind not among the three document slots
    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    /// Industry value not in the fixed option list
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),
}
