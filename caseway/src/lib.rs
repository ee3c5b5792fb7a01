//! # caseway - Case Dispatch Registry
//!
//! `caseway` replaces chained conditionals with a keyed registry of case
//! plugins: each plugin declares which input tags it targets, a predicate
//! over the dispatch input, and an action to run on a match.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use caseway::prelude::*;
//!
//! let mut registry = CaseRegistry::new();
//! registry.register(CaseFn::new(
//!     "A",
//!     |input: &CaseInput<&'static str>| input.tags() == ["A"],
//!     |params: Payload| async move { handle_a(params).await },
//! ))?;
//!
//! registry.dispatch("A", payload).await?;
//! ```
//!
//! Registration key and match predicate are deliberately decoupled: the
//! key routes, the predicate decides. A plugin found by key that declines
//! the input is a silent no-op ([`DispatchOutcome::Skipped`]), not an
//! error. The two dispatch errors are [`DispatchError::InvalidInput`]
//! (sentinel/empty input, rejected before lookup) and
//! [`DispatchError::NotRegistered`] (no plugin under the key).

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use caseway_core::{
    // Errors
    BoxError,
    // Plugin
    CaseFn,
    // Tags, keys, inputs
    CaseInput,
    CaseKey,
    CasePlugin,
    CasewayError,
    // Dispatch
    Dispatch,
    DispatchError,
    DispatchOutcome,
    DynCasePlugin,
    DynDispatch,
    Gated,
    Params,
    Tag,
};

pub use caseway_std::{
    case_set,
    observe::Traced,
    registry::{CaseRegistry, RegistryBuilder, RegistryError, erased},
};

/// Stock plugins.
pub mod plugins {
    pub use caseway_std::plugins::{Confirmed, WarnOnRun};
}

/// Testing utilities.
pub mod testing {
    pub use caseway_std::testing::{CountingCase, FailingCase, RecordingCase};
}

/// Prelude module - common imports for Caseway.
///
/// # Usage
///
/// ```rust,ignore
/// use caseway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CaseFn, CaseInput, CaseKey, CasePlugin, CaseRegistry, Dispatch, DispatchError,
        DispatchOutcome, RegistryBuilder, RegistryError, Tag,
    };
}
