//! Stock plugins.
//!
//! The source material's handlers ended in two collaborators: a console
//! warning and a blocking confirmation dialog. These plugins model both
//! with the dependencies inverted — a `tracing` warning and an async
//! yes/no callback.

mod confirm;
mod logging;

pub use confirm::Confirmed;
pub use logging::WarnOnRun;
