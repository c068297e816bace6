//! Immutable matcher registry
//!
//! A [`Registry`] maps check names to matchers. It is never mutated after
//! construction: [`Registry::extend`] merges new definitions into a fresh map
//! and leaves the original untouched, so any entry point holding the old
//! registry keeps its behaviour.
//!
//! The registry also keeps the fixed fallback set on the side. Those five
//! checks stay available for every value kind even when an extension shadows
//! one of their names with a narrower matcher.

use crate::matcher::Matcher;
use crate::matchers;
use std::collections::BTreeMap;
use std::sync::Arc;
use xpect_core_types::ValueKind;

/// Matcher definitions keyed by check name
///
/// This is what callers hand to [`Registry::extend`] and
/// [`Expect::extend`](crate::expect::Expect::extend).
#[derive(Debug, Clone, Default)]
pub struct Matchers {
    entries: BTreeMap<String, Matcher>,
}

impl Matchers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition; a later definition with the same name wins
    pub fn with(mut self, name: impl Into<String>, matcher: Matcher) -> Self {
        self.insert(name, matcher);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, matcher: Matcher) {
        self.entries.insert(name.into(), matcher);
    }

    /// Union with `other`; entries of `other` shadow same-named entries here
    pub fn merge(mut self, other: Matchers) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Matcher> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Matcher)> for Matchers {
    fn from_iter<I: IntoIterator<Item = (K, Matcher)>>(iter: I) -> Self {
        let mut matchers = Matchers::new();
        for (name, matcher) in iter {
            matchers.insert(name, matcher);
        }
        matchers
    }
}

/// How a check name resolves for a value kind
#[derive(Debug)]
pub enum Resolution<'r> {
    Bound(&'r Matcher),
    /// The name exists but neither its matcher nor a fallback accepts the kind
    Unsupported,
    Unknown,
}

/// Immutable name → matcher mapping plus the fallback set
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Arc<BTreeMap<String, Matcher>>,
    fallback: Arc<BTreeMap<String, Matcher>>,
}

impl Registry {
    /// Base set merged with `initial`; entries of `initial` shadow base entries
    pub fn new(initial: Matchers) -> Self {
        let fallback = matchers::fallback();
        let entries = matchers::numeric()
            .merge(matchers::boolean())
            .merge(matchers::sequence())
            .merge(matchers::deferred())
            .merge(fallback.clone())
            .merge(initial);
        Self {
            entries: Arc::new(entries.entries),
            fallback: Arc::new(fallback.entries),
        }
    }

    /// Registry holding exactly the base set
    pub fn base() -> Self {
        Self::new(Matchers::new())
    }

    /// New registry with `extra` merged in; `self` is left untouched
    pub fn extend(&self, extra: Matchers) -> Self {
        let mut entries = (*self.entries).clone();
        entries.extend(extra.entries);
        Self {
            entries: Arc::new(entries),
            fallback: Arc::clone(&self.fallback),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Matcher> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All check names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matcher)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` belongs to the always-available fallback set
    pub fn is_fallback(&self, name: &str) -> bool {
        self.fallback.contains_key(name)
    }

    /// Whether both registries share the same entry map
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Matcher to run for `name` on a value of `kind`
    ///
    /// A registered matcher that rejects the kind gives way to the fallback
    /// matcher of the same name, if there is one.
    pub fn resolve(&self, name: &str, kind: ValueKind) -> Resolution<'_> {
        match self.entries.get(name) {
            Some(matcher) if matcher.accepts().admits(kind) => Resolution::Bound(matcher),
            Some(_) => match self.fallback.get(name) {
                Some(fallback) => Resolution::Bound(fallback),
                None => Resolution::Unsupported,
            },
            None => Resolution::Unknown,
        }
    }

    /// Names resolvable for `kind`, sorted
    pub fn names_for(&self, kind: ValueKind) -> impl Iterator<Item = &str> {
        self.names()
            .filter(move |name| matches!(self.resolve(name, kind), Resolution::Bound(_)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::base()
    }
}
