//! # caseway-core
//!
//! Core traits for the Caseway case-dispatch registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins and extensions that don't need the full `caseway-std`
//! implementation.
//!
//! # Three Contracts
//!
//! Caseway replaces chained conditionals with a keyed registry of case
//! plugins. The core crate defines the three contracts everything else is
//! built on:
//!
//! ## Tags and Keys ([`Tag`], [`CaseKey`], [`CaseInput`])
//!
//! A [`Tag`] is an opaque case label with a designated empty/invalid
//! sentinel value. A [`CaseKey`] is the canonical registry key built from
//! one or more tags: sorted and deduplicated, so structurally equal key
//! sets always collide, regardless of construction order. A [`CaseInput`]
//! is what callers dispatch on: a single tag or a set of tags.
//!
//! ## Plugins ([`CasePlugin`])
//!
//! A plugin bundles a target key, a match predicate, and an async action.
//! The target key is only a routing hint; the predicate is the
//! authoritative gate, evaluated against the actual dispatch input. A
//! plugin found by key may still decline to run. [`DynCasePlugin`] is the
//! object-safe dual used for storage in registries.
//!
//! ## Dispatch ([`Dispatch`])
//!
//! The locate-and-conditionally-invoke seam: look a plugin up by the
//! input's canonical key, consult its predicate, and await its action.
//! At most one plugin runs per dispatch. [`DispatchOutcome`] reports
//! whether the located plugin actually ran.
//!
//! # Error Types
//!
//! - [`CasewayError`] - Top-level error type
//! - [`DispatchError`] - Dispatch-time precondition violations

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod input;
mod plugin;
mod tag;

// Re-exports
pub use dispatch::{Dispatch, DispatchOutcome, DynDispatch};
pub use error::{BoxError, CasewayError, DispatchError};
pub use input::{CaseInput, CaseKey};
pub use plugin::{CaseFn, CasePlugin, DynCasePlugin, Gated, Params};
pub use tag::Tag;
