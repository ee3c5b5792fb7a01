//! Dispatch observation.

use caseway_core::{CaseInput, Dispatch, DispatchError, DispatchOutcome, Params, Tag};

/// A wrapper that records every dispatch decision of the inner
/// [`Dispatch`] implementor before surfacing the result unchanged.
pub struct Traced<D> {
    inner: D,
}

impl<D> Traced<D> {
    /// Wrap a dispatcher.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// The wrapped dispatcher.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwrap the dispatcher.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<T, P, D> Dispatch<T, P> for Traced<D>
where
    T: Tag,
    P: Params,
    D: Dispatch<T, P>,
{
    async fn dispatch(
        &self,
        input: CaseInput<T>,
        params: P,
    ) -> Result<DispatchOutcome, DispatchError> {
        #[cfg(feature = "tracing")]
        let key = input.key();

        let result = self.inner.dispatch(input, params).await;

        #[cfg(feature = "tracing")]
        match &result {
            Ok(outcome) => tracing::debug!(%key, ?outcome, "case dispatched"),
            Err(error) => tracing::warn!(%key, %error, "case dispatch failed"),
        }

        result
    }
}
