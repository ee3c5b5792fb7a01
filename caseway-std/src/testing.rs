//! Testing utilities for Caseway.
//!
//! This module provides plugins with inspectable state for asserting on
//! dispatch behavior:
//!
//! - [`RecordingCase`]: records every parameter bundle its action receives
//! - [`CountingCase`]: counts invocations
//! - [`FailingCase`]: always fails its action

use caseway_core::{BoxError, CaseInput, CaseKey, CasePlugin, Params, Tag};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Case
// ============================================================================

/// A plugin that records every parameter bundle its action receives.
///
/// Clones share the recorded state, so keep a clone outside the registry
/// to inspect invocations after dispatching.
///
/// # Example
///
/// ```rust,ignore
/// let case = RecordingCase::new("A");
/// let probe = case.clone();
///
/// registry.register(case)?;
/// registry.dispatch("A", 42).await?;
///
/// assert_eq!(probe.invocations(), vec![42]);
/// ```
pub struct RecordingCase<T: Tag, P> {
    target: CaseKey<T>,
    accept: bool,
    invocations: Arc<Mutex<Vec<P>>>,
}

impl<T: Tag, P> RecordingCase<T, P> {
    /// Create a recording plugin whose predicate accepts every input.
    pub fn new(target: impl Into<CaseKey<T>>) -> Self {
        Self {
            target: target.into(),
            accept: true,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a recording plugin whose predicate declines every input.
    ///
    /// Useful for asserting the found-but-declined silent no-op.
    pub fn declining(target: impl Into<CaseKey<T>>) -> Self {
        Self {
            target: target.into(),
            accept: false,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded parameter bundles.
    pub fn invocations(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.invocations.lock().unwrap().clone()
    }

    /// The number of recorded invocations.
    pub fn count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl<T: Tag, P> Clone for RecordingCase<T, P> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            accept: self.accept,
            invocations: self.invocations.clone(),
        }
    }
}

impl<T: Tag, P: Params> CasePlugin<T, P> for RecordingCase<T, P> {
    fn target(&self) -> CaseKey<T> {
        self.target.clone()
    }

    fn matches(&self, _input: &CaseInput<T>) -> bool {
        self.accept
    }

    async fn run(&self, params: P) -> Result<(), BoxError> {
        self.invocations.lock().unwrap().push(params);
        Ok(())
    }
}

// ============================================================================
// Counting Case
// ============================================================================

/// A plugin that counts invocations.
pub struct CountingCase<T: Tag> {
    target: CaseKey<T>,
    count: Arc<AtomicUsize>,
}

impl<T: Tag> CountingCase<T> {
    /// Create a counting plugin whose predicate accepts every input.
    pub fn new(target: impl Into<CaseKey<T>>) -> Self {
        Self {
            target: target.into(),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<T: Tag> Clone for CountingCase<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            count: self.count.clone(),
        }
    }
}

impl<T: Tag, P: Params> CasePlugin<T, P> for CountingCase<T> {
    fn target(&self) -> CaseKey<T> {
        self.target.clone()
    }

    fn matches(&self, _input: &CaseInput<T>) -> bool {
        true
    }

    async fn run(&self, _params: P) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Case
// ============================================================================

/// A plugin whose action always fails, for error-propagation tests.
pub struct FailingCase<T: Tag> {
    target: CaseKey<T>,
    message: &'static str,
}

impl<T: Tag> FailingCase<T> {
    /// Create a failing plugin with the given error message.
    pub fn new(target: impl Into<CaseKey<T>>, message: &'static str) -> Self {
        Self {
            target: target.into(),
            message,
        }
    }
}

impl<T: Tag, P: Params> CasePlugin<T, P> for FailingCase<T> {
    fn target(&self) -> CaseKey<T> {
        self.target.clone()
    }

    fn matches(&self, _input: &CaseInput<T>) -> bool {
        true
    }

    async fn run(&self, _params: P) -> Result<(), BoxError> {
        Err(self.message.into())
    }
}
