//! Error types for the Fibonacci engine and cache store.
//!
//! Two failure families exist: the caller handed the engine an invalid
//! argument, or the cache store misbehaved. The arithmetic itself cannot
//! fail for valid non-negative indices. Store errors are never retried or
//! masked; they bubble to the request layer unchanged.

use thiserror::Error;

/// Errors that can occur when talking to the cache store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the operation failed mid-flight.
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    /// The key enumeration pattern was rejected by the store.
    #[error("invalid key pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl StoreError {
    /// Creates an `Unavailable` error from any displayable source.
    pub fn unavailable(source: impl std::fmt::Display) -> Self {
        Self::Unavailable(source.to_string())
    }
}

/// Errors produced by the Fibonacci engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Negative indices are rejected before any store access.
    #[error("fibonacci is not defined for negative numbers (got {0})")]
    InvalidArgument(i64),

    /// A cached value failed to parse as a decimal unsigned integer.
    ///
    /// Entries are written by the engine itself, so this only happens when
    /// something else wrote garbage under the `fib:` namespace.
    #[error("corrupt cache entry '{key}': {value:?}")]
    CorruptEntry { key: String, value: String },

    /// The cache store failed; propagated uncaught.
    #[error(transparent)]
    Store(#[from] StoreError),
}
