//! Tag trait for case labels.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque label selecting a case/category of input.
///
/// Tags are compared by value, ordered so key sets can be canonicalized,
/// and carry a designated empty/invalid sentinel. The sentinel is never a
/// legal registry key and never a legal dispatch input; both surfaces
/// reject it eagerly.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// enum Label { A, B, None }
///
/// impl Tag for Label {
///     fn is_sentinel(&self) -> bool {
///         matches!(self, Label::None)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Tag",
    label = "must be `Clone + Eq + Ord + Hash + Debug + Send + Sync + 'static`",
    note = "Implement `Tag` and point `is_sentinel` at your empty/invalid value."
)]
pub trait Tag: Clone + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Whether this tag is the designated empty/invalid sentinel.
    fn is_sentinel(&self) -> bool;
}

// Common Tag implementations: the empty string is the sentinel.
impl Tag for String {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl Tag for &'static str {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl Tag for Box<str> {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl Tag for std::sync::Arc<str> {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}
