//! Error types for Caseway.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CasewayError`] - Top-level error type for all Caseway operations
//! - [`DispatchError`] - Precondition violations raised at dispatch time

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Caseway operations.
#[derive(Error, Debug)]
pub enum CasewayError {
    /// An error occurred during case dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during case dispatch.
///
/// All variants are plain precondition violations, raised at the dispatch
/// call that detects them and surfaced to the caller. There is no retry
/// model and no fallback handling.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The input carried no tags, or carried the empty/invalid sentinel.
    /// Raised before any registry lookup occurs.
    #[error("invalid input: empty or sentinel case tag")]
    InvalidInput,

    /// No plugin is registered under the input's key.
    #[error("no plugin registered for key: {0}")]
    NotRegistered(String),

    /// The plugin's action failed.
    #[error("plugin action failed")]
    Action(#[source] BoxError),
}

// Convenience conversions
impl From<BoxError> for CasewayError {
    fn from(err: BoxError) -> Self {
        CasewayError::Custom(err)
    }
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Action(err)
    }
}
