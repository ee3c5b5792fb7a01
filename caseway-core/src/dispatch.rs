//! # The Dispatch Seam
//!
//! Dispatch is the act of locating a plugin for an input and conditionally
//! invoking its action. This module defines the seam trait so wrappers
//! (tracing, instrumentation) can layer over any registry implementation.
//!
//! # Contract
//!
//! For any implementor, `dispatch(input, params)`:
//!
//! 1. rejects invalid input (`InvalidInput`) before any lookup;
//! 2. fails with `NotRegistered` when no plugin holds the input's key;
//! 3. returns [`DispatchOutcome::Skipped`] when the located plugin's
//!    predicate declines the input — an intentional silent no-op, not an
//!    error;
//! 4. otherwise awaits the action to completion and returns
//!    [`DispatchOutcome::Invoked`].
//!
//! At most one plugin runs per dispatch.

use crate::{error::DispatchError, input::CaseInput, plugin::Params, tag::Tag};
use std::{future::Future, pin::Pin};

/// Result of a dispatch call that did not error: whether the located
/// plugin actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The plugin's predicate held and its action ran to completion.
    Invoked,
    /// A plugin was found by key, but its predicate declined the input.
    Skipped,
}

impl DispatchOutcome {
    /// Whether an action ran.
    pub const fn invoked(self) -> bool {
        matches!(self, DispatchOutcome::Invoked)
    }

    /// Whether the located plugin declined the input.
    pub const fn skipped(self) -> bool {
        matches!(self, DispatchOutcome::Skipped)
    }
}

/// The locate-and-conditionally-invoke interface.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch cases tagged `{T}`",
    label = "missing `Dispatch` implementation",
    note = "Implement `Dispatch<{T}, {P}>` to route case inputs to plugins."
)]
pub trait Dispatch<T: Tag, P: Params>: Send + Sync {
    /// Dispatch the input to the plugin registered under its key.
    fn dispatch(
        &self,
        input: CaseInput<T>,
        params: P,
    ) -> impl Future<Output = Result<DispatchOutcome, DispatchError>> + Send;
}

/// Object-safe version of [`Dispatch`] for dynamic dispatch.
pub trait DynDispatch<T: Tag, P: Params>: Send + Sync {
    /// Dispatch the input to the plugin registered under its key
    /// (dynamic dispatch version).
    fn dispatch_dyn<'a>(
        &'a self,
        input: CaseInput<T>,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<DispatchOutcome, DispatchError>> + Send + 'a>>;
}

impl<T, P, D> DynDispatch<T, P> for D
where
    T: Tag,
    P: Params,
    D: Dispatch<T, P>,
{
    fn dispatch_dyn<'a>(
        &'a self,
        input: CaseInput<T>,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<DispatchOutcome, DispatchError>> + Send + 'a>> {
        Box::pin(self.dispatch(input, params))
    }
}
