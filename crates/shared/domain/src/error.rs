//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Integer grade code outside the known range
    #[error("illegal position: {0}")]
    UnknownGradeCode(i32),

    /// Stored grade label the registry does not recognise
    #[error("unknown grade label in storage: {0}")]
    UnknownGradeLabel(String),

    /// Partial update without any field to change
    #[error("no fields to update")]
    EmptyPatch,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
