//! Canonical keys and dispatch inputs.
//!
//! Naive map structures key compound cases by whatever collection the
//! caller happened to build, which compares by construction order (or, in
//! looser languages, by reference). [`CaseKey`] fixes that by normalizing
//! to a sorted, deduplicated representation with structural equality, so a
//! freshly constructed key with the same elements always finds the same
//! registry slot.

use crate::tag::Tag;
use std::fmt;

/// The canonical registry key: one or more tags, sorted and deduplicated.
///
/// Two keys built from the same tag set compare and hash equal regardless
/// of element order or repetition:
///
/// ```rust,ignore
/// assert_eq!(
///     CaseKey::compound(["b", "c"]),
///     CaseKey::compound(["c", "b", "c"]),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseKey<T: Tag> {
    // Invariant: sorted ascending, no duplicates.
    tags: Vec<T>,
}

impl<T: Tag> CaseKey<T> {
    /// Create a key from a single tag.
    pub fn single(tag: T) -> Self {
        Self { tags: vec![tag] }
    }

    /// Create a key from a set of tags, normalizing order and duplicates.
    pub fn compound(tags: impl IntoIterator<Item = T>) -> Self {
        let mut tags: Vec<T> = tags.into_iter().collect();
        tags.sort();
        tags.dedup();
        Self { tags }
    }

    /// The tags of this key, in canonical order.
    pub fn tags(&self) -> &[T] {
        &self.tags
    }

    /// The number of distinct tags in this key.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether this key holds no tags at all.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Whether this key contains the given tag.
    pub fn contains(&self, tag: &T) -> bool {
        self.tags.binary_search(tag).is_ok()
    }

    /// Whether any of the given tags appears in this key.
    pub fn intersects(&self, tags: &[T]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    /// Whether any tag in this key is the empty/invalid sentinel.
    pub fn has_sentinel(&self) -> bool {
        self.tags.iter().any(Tag::is_sentinel)
    }
}

impl<T: Tag> From<T> for CaseKey<T> {
    fn from(tag: T) -> Self {
        Self::single(tag)
    }
}

impl<T: Tag> From<Vec<T>> for CaseKey<T> {
    fn from(tags: Vec<T>) -> Self {
        Self::compound(tags)
    }
}

impl<T: Tag, const N: usize> From<[T; N]> for CaseKey<T> {
    fn from(tags: [T; N]) -> Self {
        Self::compound(tags)
    }
}

impl<T: Tag> fmt::Display for CaseKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tag in &self.tags {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{tag:?}")?;
            first = false;
        }
        Ok(())
    }
}

/// What `dispatch` accepts: a single tag or a set of tags.
///
/// The match predicate of a plugin receives exactly the `CaseInput` that
/// was passed to dispatch, so a plugin registered under a compound key can
/// distinguish a scalar call from a set call without guessing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseInput<T: Tag> {
    /// A single case tag.
    Single(T),
    /// A set of case tags.
    Set(Vec<T>),
}

impl<T: Tag> CaseInput<T> {
    /// The tags carried by this input.
    pub fn tags(&self) -> &[T] {
        match self {
            CaseInput::Single(tag) => std::slice::from_ref(tag),
            CaseInput::Set(tags) => tags,
        }
    }

    /// The canonical lookup key for this input.
    pub fn key(&self) -> CaseKey<T> {
        match self {
            CaseInput::Single(tag) => CaseKey::single(tag.clone()),
            CaseInput::Set(tags) => CaseKey::compound(tags.iter().cloned()),
        }
    }

    /// Whether this input is illegal to dispatch on: it carries no tags,
    /// or carries the empty/invalid sentinel.
    pub fn is_invalid(&self) -> bool {
        let tags = self.tags();
        tags.is_empty() || tags.iter().any(Tag::is_sentinel)
    }

    /// Whether any tag of this input appears in the given key.
    pub fn intersects(&self, key: &CaseKey<T>) -> bool {
        key.intersects(self.tags())
    }
}

impl<T: Tag> From<T> for CaseInput<T> {
    fn from(tag: T) -> Self {
        CaseInput::Single(tag)
    }
}

impl<T: Tag> From<Vec<T>> for CaseInput<T> {
    fn from(tags: Vec<T>) -> Self {
        CaseInput::Set(tags)
    }
}

impl<T: Tag, const N: usize> From<[T; N]> for CaseInput<T> {
    fn from(tags: [T; N]) -> Self {
        CaseInput::Set(tags.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseInput, CaseKey};

    #[test]
    fn test_compound_key_is_canonical() {
        let a = CaseKey::compound(["b", "c"]);
        let b = CaseKey::compound(["c", "b"]);
        let c = CaseKey::compound(["b", "c", "b"]);

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.tags(), &["b", "c"]);
    }

    #[test]
    fn test_keys_hash_structurally() {
        let mut map = std::collections::HashMap::new();
        map.insert(CaseKey::compound(["b", "c"]), 1);
        map.insert(CaseKey::compound(["c", "b"]), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&CaseKey::compound(["b", "c"])), Some(&2));
    }

    #[test]
    fn test_key_contains_and_intersects() {
        let key = CaseKey::compound(["b", "n"]);

        assert!(key.contains(&"b"));
        assert!(!key.contains(&"a"));
        assert!(key.intersects(&["a", "n"]));
        assert!(!key.intersects(&["a", "c"]));
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(CaseKey::compound(["a", ""]).has_sentinel());
        assert!(!CaseKey::single("a").has_sentinel());
        assert!(CaseKey::<String>::compound([]).is_empty());
    }

    #[test]
    fn test_input_key_matches_registration_key() {
        let input = CaseInput::Set(vec!["c", "b"]);
        assert_eq!(input.key(), CaseKey::compound(["b", "c"]));

        let input = CaseInput::Single("a");
        assert_eq!(input.key(), CaseKey::single("a"));
    }

    #[test]
    fn test_input_validity() {
        assert!(CaseInput::Single("").is_invalid());
        assert!(CaseInput::Set(Vec::<&str>::new()).is_invalid());
        assert!(CaseInput::Set(vec!["a", ""]).is_invalid());
        assert!(!CaseInput::Single("a").is_invalid());
        assert!(!CaseInput::Set(vec!["a", "b"]).is_invalid());
    }

    #[test]
    fn test_key_display() {
        let key = CaseKey::compound(["c", "b"]);
        assert_eq!(key.to_string(), "\"b\"+\"c\"");
    }
}
