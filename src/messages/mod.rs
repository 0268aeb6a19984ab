//! Message types for locale data.
//!
//! [`Messages`] is the read-only mapping of translation key to text produced
//! by a [`Loader`](crate::loader::Loader) and shared out of the resolver cache.
//! It has no mutating API: once a mapping is built it can only be read.

use std::collections::HashMap;

// ============================================================
// Message Types
// ============================================================

/// All translated texts of one (language, category) source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Messages {
    /// Create an empty mapping.
    ///
    /// Used for sources that exist but carry no translations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a text by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get all keys as an iterator.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, text)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    /// Pairs sorted by key, for stable output.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Messages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

// ============================================================
// Tests
// ============================================================
