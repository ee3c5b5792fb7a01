//! Dynamic case registry with a register/dispatch/unregister lifecycle.

use caseway_core::{
    CaseInput, CaseKey, CasePlugin, Dispatch, DispatchError, DispatchOutcome, DynCasePlugin,
    Params, Tag,
};
use std::{collections::HashMap, future::Future, sync::Arc};
use thiserror::Error;

/// Errors that can occur while registering plugins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The plugin's target key is empty or contains the sentinel tag.
    /// The sentinel is never a legal registry key; registration fails fast.
    #[error("target key is empty or contains the sentinel tag")]
    SentinelKey,

    /// A key collision in a builder configured to deny overwrites.
    #[error("plugin already registered for key: {0}")]
    Duplicate(String),
}

/// A registry of case plugins, keyed by their canonical target keys.
///
/// The registry replaces chained conditionals: callers register plugins,
/// then dispatch inputs. Lookup finds at most one plugin (unique keys,
/// last registration wins), the plugin's own predicate gates execution,
/// and the action is awaited to completion before `dispatch` resolves.
///
/// The registry is a caller-owned value with an explicit lifetime:
/// construct, populate, use, discard. Mutation takes `&mut self`, so the
/// borrow checker rules out concurrent mutation against in-flight
/// dispatches.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = CaseRegistry::new();
/// registry.register(CaseFn::new(
///     "A",
///     |input: &CaseInput<&'static str>| input.tags() == ["A"],
///     |_params: ()| async { Ok(()) },
/// ))?;
///
/// registry.dispatch("A", ()).await?;
/// ```
pub struct CaseRegistry<T: Tag, P: Params> {
    plugins: HashMap<CaseKey<T>, Arc<dyn DynCasePlugin<T, P>>>,
}

impl<T: Tag, P: Params> CaseRegistry<T, P> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a plugin under its target key.
    ///
    /// Overwrites silently: the last registration under a given key wins.
    /// Fails only when the target key is illegal (empty or sentinel).
    pub fn register<C>(&mut self, plugin: C) -> Result<(), RegistryError>
    where
        C: CasePlugin<T, P>,
    {
        self.register_dyn(Arc::new(plugin))
    }

    /// Register an already type-erased plugin.
    pub fn register_dyn(
        &mut self,
        plugin: Arc<dyn DynCasePlugin<T, P>>,
    ) -> Result<(), RegistryError> {
        let key = plugin.target_dyn();
        if key.is_empty() || key.has_sentinel() {
            return Err(RegistryError::SentinelKey);
        }
        self.plugins.insert(key, plugin);
        Ok(())
    }

    /// Register each plugin in the given sequence, in order.
    ///
    /// Later entries win on key collision, same as repeated [`register`]
    /// calls.
    ///
    /// [`register`]: CaseRegistry::register
    pub fn register_all<I>(&mut self, plugins: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn DynCasePlugin<T, P>>>,
    {
        for plugin in plugins {
            self.register_dyn(plugin)?;
        }
        Ok(())
    }

    /// Dispatch an input to the plugin registered under its key.
    ///
    /// Invalid input fails with [`DispatchError::InvalidInput`] before any
    /// lookup. A missing key fails with [`DispatchError::NotRegistered`].
    /// A located plugin whose predicate declines the input is a silent
    /// no-op reported as [`DispatchOutcome::Skipped`]. Otherwise the
    /// action is awaited to completion and the call resolves to
    /// [`DispatchOutcome::Invoked`]. At most one plugin runs per call.
    pub async fn dispatch(
        &self,
        input: impl Into<CaseInput<T>>,
        params: P,
    ) -> Result<DispatchOutcome, DispatchError> {
        let input = input.into();
        if input.is_invalid() {
            return Err(DispatchError::InvalidInput);
        }

        let key = input.key();
        let Some(plugin) = self.plugins.get(&key) else {
            return Err(DispatchError::NotRegistered(key.to_string()));
        };

        if !plugin.matches_dyn(&input) {
            return Ok(DispatchOutcome::Skipped);
        }

        plugin.run_dyn(params).await.map_err(DispatchError::Action)?;
        Ok(DispatchOutcome::Invoked)
    }

    /// Remove the plugin registered under `key`, if any.
    ///
    /// Idempotent: removing an absent key is a no-op returning `None`.
    pub fn unregister(&mut self, key: &CaseKey<T>) -> Option<Arc<dyn DynCasePlugin<T, P>>> {
        self.plugins.remove(key)
    }

    /// Remove all plugins, returning the registry to its initial state.
    pub fn clear(&mut self) {
        self.plugins.clear();
    }

    /// Whether a plugin is registered under `key`.
    pub fn contains(&self, key: &CaseKey<T>) -> bool {
        self.plugins.contains_key(key)
    }

    /// The number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry holds no plugins.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// The keys currently registered, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &CaseKey<T>> {
        self.plugins.keys()
    }
}

impl<T: Tag, P: Params> Default for CaseRegistry<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tag, P: Params> Dispatch<T, P> for CaseRegistry<T, P> {
    fn dispatch(
        &self,
        input: CaseInput<T>,
        params: P,
    ) -> impl Future<Output = Result<DispatchOutcome, DispatchError>> + Send {
        CaseRegistry::dispatch(self, input, params)
    }
}

/// Builder for constructing a [`CaseRegistry`].
///
/// By default, key collisions follow registry semantics (later entries
/// win). [`deny_overwrite`] switches to registration-time detection for
/// callers that want collisions reported instead.
///
/// [`deny_overwrite`]: RegistryBuilder::deny_overwrite
pub struct RegistryBuilder<T: Tag, P: Params> {
    plugins: Vec<Arc<dyn DynCasePlugin<T, P>>>,
    deny_overwrite: bool,
}

impl<T: Tag, P: Params> Default for RegistryBuilder<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tag, P: Params> RegistryBuilder<T, P> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            deny_overwrite: false,
        }
    }

    /// Register a plugin.
    pub fn register<C: CasePlugin<T, P>>(mut self, plugin: C) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Register an already type-erased plugin.
    pub fn register_dyn(mut self, plugin: Arc<dyn DynCasePlugin<T, P>>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Fail `build` with [`RegistryError::Duplicate`] on key collision
    /// instead of letting later entries win.
    pub fn deny_overwrite(mut self) -> Self {
        self.deny_overwrite = true;
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<CaseRegistry<T, P>, RegistryError> {
        let mut registry = CaseRegistry::new();
        for plugin in self.plugins {
            if self.deny_overwrite {
                let key = plugin.target_dyn();
                if registry.contains(&key) {
                    return Err(RegistryError::Duplicate(key.to_string()));
                }
            }
            registry.register_dyn(plugin)?;
        }
        Ok(registry)
    }
}

/// Erase a plugin for storage in heterogeneous collections, e.g. the
/// sequence handed to [`CaseRegistry::register_all`].
pub fn erased<T, P, C>(plugin: C) -> Arc<dyn DynCasePlugin<T, P>>
where
    T: Tag,
    P: Params,
    C: CasePlugin<T, P>,
{
    Arc::new(plugin)
}

/// Construct a type-erased plugin sequence for
/// [`CaseRegistry::register_all`] from a list of plugins.
///
/// # Example
/// ```ignore
/// registry.register_all(case_set![plugin_a, plugin_bc, fallback])?;
/// ```
#[macro_export]
macro_rules! case_set {
    () => { ::std::vec::Vec::new() };
    ($($plugin:expr),+ $(,)?) => {
        ::std::vec![$($crate::registry::erased($plugin)),+]
    };
}
