//! Core configuration, output types, and the library-wide error structure.

pub mod types;

pub use types::*;

/// Errors surfaced by the transform API.
///
/// Every public entry point either succeeds completely or returns one of these;
/// no partially filled outputs are produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Malformed sample arrays (length mismatch, non-increasing or non-positive x, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The transform produced non-finite values, usually from `nu` outside the stable range.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
    /// Parameters that leave no usable working array or window.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias used throughout the crate.
pub type TransformResult<T> = Result<T, TransformError>;
