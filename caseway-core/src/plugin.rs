//! # Case Plugins
//!
//! A plugin is a registered (key, predicate, action) bundle. The key is a
//! routing hint used for registry lookup; the predicate is the
//! authoritative gate, evaluated against the actual dispatch input. The two
//! are deliberately separate members: a plugin registered under a compound
//! key can be found by that key and still decline a call whose input does
//! not satisfy its own condition.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`CasePlugin`] uses native `async fn` for zero-cost static dispatch.
//! For dynamic dispatch (e.g., inside a registry), use [`DynCasePlugin`].

use crate::{
    error::BoxError,
    input::{CaseInput, CaseKey},
    tag::Tag,
};
use std::{future::Future, pin::Pin};

/// A marker trait for the parameter bundle handed to plugin actions.
pub trait Params: Send + 'static {}
impl<T: Send + 'static> Params for T {}

/// A registered case handler.
///
/// Plugins declare which input tags they target, a predicate over the
/// dispatch input, and an action to run on a match. Actions may ignore
/// their parameters.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `CasePlugin` for tag `{T}` and params `{P}`",
    label = "missing `CasePlugin` implementation",
    note = "Plugins must provide `target`, `matches`, and `run`."
)]
pub trait CasePlugin<T: Tag, P: Params>: Send + Sync + 'static {
    /// The key this plugin is registered under.
    fn target(&self) -> CaseKey<T>;

    /// The eligibility gate, evaluated against the actual dispatch input.
    ///
    /// Independent of [`target`]: a plugin located by key may still return
    /// `false` here, in which case dispatch is a silent no-op.
    ///
    /// [`target`]: CasePlugin::target
    fn matches(&self, input: &CaseInput<T>) -> bool;

    /// The side-effecting action, awaited to completion by dispatch.
    fn run(&self, params: P) -> impl Future<Output = Result<(), BoxError>> + Send;

    /// Narrows this plugin with an additional predicate.
    ///
    /// The gated plugin matches only when both the original predicate and
    /// the new one hold.
    fn gate<F>(self, predicate: F) -> Gated<Self, F>
    where
        Self: Sized,
        F: Fn(&CaseInput<T>) -> bool + Send + Sync + 'static,
    {
        Gated {
            plugin: self,
            predicate,
        }
    }
}

/// Dynamic object-safe version of [`CasePlugin`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a registry).
pub trait DynCasePlugin<T: Tag, P: Params>: Send + Sync + 'static {
    /// The key this plugin is registered under (dynamic dispatch version).
    fn target_dyn(&self) -> CaseKey<T>;

    /// The eligibility gate (dynamic dispatch version).
    fn matches_dyn(&self, input: &CaseInput<T>) -> bool;

    /// The side-effecting action (dynamic dispatch version).
    fn run_dyn<'a>(
        &'a self,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any type implementing CasePlugin implements
// DynCasePlugin automatically.
impl<T: Tag, P: Params, C: CasePlugin<T, P>> DynCasePlugin<T, P> for C {
    fn target_dyn(&self) -> CaseKey<T> {
        CasePlugin::target(self)
    }

    fn matches_dyn(&self, input: &CaseInput<T>) -> bool {
        CasePlugin::matches(self, input)
    }

    fn run_dyn<'a>(
        &'a self,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(CasePlugin::run(self, params))
    }
}

// Allow Box<dyn DynCasePlugin> to be used where CasePlugin is expected.
impl<T: Tag, P: Params> CasePlugin<T, P> for Box<dyn DynCasePlugin<T, P>> {
    fn target(&self) -> CaseKey<T> {
        (**self).target_dyn()
    }

    fn matches(&self, input: &CaseInput<T>) -> bool {
        (**self).matches_dyn(input)
    }

    async fn run(&self, params: P) -> Result<(), BoxError> {
        (**self).run_dyn(params).await
    }
}

/// A plugin assembled from a key and two plain closures.
///
/// This is the plain-data-record form of a case handler: the target key,
/// the match predicate, and the async action are three explicit fields,
/// never conflated.
///
/// # Example
///
/// ```rust,ignore
/// let plugin = CaseFn::new(
///     "A",
///     |input: &CaseInput<&'static str>| input.tags() == ["A"],
///     |_params: ()| async { Ok(()) },
/// );
/// ```
pub struct CaseFn<T: Tag, M, A> {
    target: CaseKey<T>,
    matches: M,
    action: A,
}

impl<T: Tag, M, A> CaseFn<T, M, A> {
    /// Create a plugin from a target key, a predicate, and an action.
    pub fn new(target: impl Into<CaseKey<T>>, matches: M, action: A) -> Self {
        Self {
            target: target.into(),
            matches,
            action,
        }
    }
}

impl<T, P, M, A, Fut> CasePlugin<T, P> for CaseFn<T, M, A>
where
    T: Tag,
    P: Params,
    M: Fn(&CaseInput<T>) -> bool + Send + Sync + 'static,
    A: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    fn target(&self) -> CaseKey<T> {
        self.target.clone()
    }

    fn matches(&self, input: &CaseInput<T>) -> bool {
        (self.matches)(input)
    }

    fn run(&self, params: P) -> impl Future<Output = Result<(), BoxError>> + Send {
        (self.action)(params)
    }
}

/// A plugin narrowed by an additional predicate. Built via
/// [`CasePlugin::gate`], or directly for plugins generic over their
/// parameter type.
pub struct Gated<C, F> {
    plugin: C,
    predicate: F,
}

impl<C, F> Gated<C, F> {
    /// Narrow `plugin` with `predicate`.
    pub fn new(plugin: C, predicate: F) -> Self {
        Self { plugin, predicate }
    }
}

impl<T, P, C, F> CasePlugin<T, P> for Gated<C, F>
where
    T: Tag,
    P: Params,
    C: CasePlugin<T, P>,
    F: Fn(&CaseInput<T>) -> bool + Send + Sync + 'static,
{
    fn target(&self) -> CaseKey<T> {
        self.plugin.target()
    }

    fn matches(&self, input: &CaseInput<T>) -> bool {
        self.plugin.matches(input) && (self.predicate)(input)
    }

    fn run(&self, params: P) -> impl Future<Output = Result<(), BoxError>> + Send {
        self.plugin.run(params)
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseFn, CaseInput, CaseKey, CasePlugin};
    use crate::error::BoxError;

    fn sample() -> impl CasePlugin<&'static str, ()> {
        CaseFn::new(
            ["b", "c"],
            |input: &CaseInput<&'static str>| input.intersects(&CaseKey::compound(["b", "c"])),
            |_params: ()| async { Ok::<(), BoxError>(()) },
        )
    }

    #[test]
    fn test_case_fn_target_is_canonical() {
        let plugin = sample();
        assert_eq!(plugin.target(), CaseKey::compound(["c", "b"]));
    }

    #[test]
    fn test_case_fn_predicate_sees_dispatch_input() {
        let plugin = sample();
        assert!(plugin.matches(&CaseInput::Single("b")));
        assert!(plugin.matches(&CaseInput::Set(vec!["a", "c"])));
        assert!(!plugin.matches(&CaseInput::Single("a")));
    }

    #[test]
    fn test_gated_narrows_predicate() {
        let plugin = sample().gate(|input| input.tags().len() == 1);
        assert!(plugin.matches(&CaseInput::Single("b")));
        assert!(!plugin.matches(&CaseInput::Set(vec!["b", "c"])));
    }
}
