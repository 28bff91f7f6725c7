//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation failure that blocks a submission before any network call.
///
/// Keep this focused on deterministic, pre-network failures. Transport and
/// server errors belong to the API client layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The draft has no client name after trimming whitespace.
    #[error("client name is required")]
    MissingClientName,

    /// Every row was filtered out as invalid (blank name, zero quantity or
    /// zero price), leaving nothing to submit.
    #[error("at least one item with a name, quantity and price is required")]
    NoValidItems,
}
