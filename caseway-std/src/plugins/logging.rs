//! Warning-emitting plugin.

use caseway_core::{BoxError, CaseInput, CaseKey, CasePlugin, Params, Tag};

/// A plugin whose action emits a warning for the dispatched case.
///
/// Matches any input that intersects its target key, so it fits naturally
/// under compound keys.
pub struct WarnOnRun<T: Tag> {
    target: CaseKey<T>,
    message: String,
}

impl<T: Tag> WarnOnRun<T> {
    /// Create a warning plugin for the given target key.
    pub fn new(target: impl Into<CaseKey<T>>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            message: message.into(),
        }
    }
}

impl<T: Tag, P: Params> CasePlugin<T, P> for WarnOnRun<T> {
    fn target(&self) -> CaseKey<T> {
        self.target.clone()
    }

    fn matches(&self, input: &CaseInput<T>) -> bool {
        input.intersects(&self.target)
    }

    async fn run(&self, _params: P) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(key = %self.target, "{}", self.message);
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = &self.message; // Suppress unused warning
        }
        Ok(())
    }
}
