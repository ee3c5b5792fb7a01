//! # caseway-std
//!
//! Standard implementations for the Caseway case-dispatch registry.
//!
//! This crate provides:
//! - **The registry**: [`CaseRegistry`] with its
//!   register/dispatch/unregister/clear lifecycle, plus [`RegistryBuilder`]
//! - **Stock plugins**: [`WarnOnRun`], [`Confirmed`]
//! - **Observation**: [`Traced`]
//! - **Testing utilities**: [`RecordingCase`], [`CountingCase`],
//!   [`FailingCase`]
//!
//! [`CaseRegistry`]: registry::CaseRegistry
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`WarnOnRun`]: plugins::WarnOnRun
//! [`Confirmed`]: plugins::Confirmed
//! [`Traced`]: observe::Traced
//! [`RecordingCase`]: testing::RecordingCase
//! [`CountingCase`]: testing::CountingCase
//! [`FailingCase`]: testing::FailingCase

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use caseway_core;

// Modules
pub mod observe;
pub mod plugins;
pub mod registry;
pub mod testing;
