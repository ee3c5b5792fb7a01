//! Confirmation-gated plugin wrapper.

use caseway_core::{BoxError, CaseInput, CaseKey, CasePlugin, Params, Tag};
use futures::future::BoxFuture;
use std::future::Future;

/// Wraps a plugin so its action runs only after an affirmative answer
/// from an async yes/no callback.
///
/// This models the blocking confirmation dialog of the source handlers
/// with the user-interaction dependency inverted into a callback: the
/// wrapper asks, and on a negative answer the action is skipped without
/// error.
pub struct Confirmed<C> {
    inner: C,
    confirm: Box<dyn Fn() -> BoxFuture<'static, bool> + Send + Sync>,
}

impl<C> Confirmed<C> {
    /// Wrap `inner` behind the given confirmation callback.
    pub fn new<F, Fut>(inner: C, confirm: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self {
            inner,
            confirm: Box::new(move || {
                let fut: BoxFuture<'static, bool> = Box::pin(confirm());
                fut
            }),
        }
    }

    /// The wrapped plugin.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap, discarding the callback.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, P, C> CasePlugin<T, P> for Confirmed<C>
where
    T: Tag,
    P: Params,
    C: CasePlugin<T, P>,
{
    fn target(&self) -> CaseKey<T> {
        self.inner.target()
    }

    fn matches(&self, input: &CaseInput<T>) -> bool {
        self.inner.matches(input)
    }

    async fn run(&self, params: P) -> Result<(), BoxError> {
        if (self.confirm)().await {
            self.inner.run(params).await
        } else {
            Ok(())
        }
    }
}
