//! Error types for statement construction
//!
//! Construction-order faults are captured while the fluent builders run and
//! surfaced when the statement is finalized. Rendering itself is pure and
//! cannot fail.

use thiserror::Error;

/// Result type alias for statement construction
pub type BuildResult<T> = Result<T, QueryBuildError>;

/// Errors raised while assembling a select statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryBuildError {
    #[error("a \"from\" clause is required before any other clause in a select statement")]
    MissingFromClause,

    #[error("a select statement projection must name at least one column")]
    EmptyProjection,
}
