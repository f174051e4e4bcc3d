//! Error types for sequent

use thiserror::Error;

/// Main error type for sequent operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequentError {
    /// A terminal reduction with no seed received an empty sequence
    #[error("sequence contains no elements")]
    NoElements,

    /// A count or index parameter violates its documented domain
    #[error("argument out of range: {0}")]
    ArgumentOutOfRange(&'static str),

    /// Cumulative arithmetic exceeded the representable range
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

/// Result type alias for sequent operations
pub type Result<T> = std::result::Result<T, SequentError>;
