//! Two-level translation cache: language code → category → messages.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::messages::Messages;

/// Append-only cache shared by every resolver of a registry.
///
/// A slot is written at most once. Racing writers for the same slot converge
/// on whichever value was stored first.
#[derive(Debug, Default)]
pub struct TranslationCache {
    languages: RwLock<HashMap<String, HashMap<String, Arc<Messages>>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, language: &str, category: &str) -> Option<Arc<Messages>> {
        self.languages
            .read()
            .get(language)
            .and_then(|categories| categories.get(category))
            .cloned()
    }

    pub fn contains(&self, language: &str, category: &str) -> bool {
        self.languages
            .read()
            .get(language)
            .is_some_and(|categories| categories.contains_key(category))
    }

    /// Store `messages` unless the slot is already taken, and return what the
    /// slot holds afterwards.
    pub(crate) fn insert(
        &self,
        language: &str,
        category: &str,
        messages: Messages,
    ) -> Arc<Messages> {
        let mut languages = self.languages.write();
        let slot = languages
            .entry(language.to_string())
            .or_default()
            .entry(category.to_string())
            .or_insert_with(|| Arc::new(messages));
        Arc::clone(slot)
    }

    /// Languages cached for `category`, sorted.
    pub fn languages(&self, category: &str) -> Vec<String> {
        let mut codes: Vec<String> = self
            .languages
            .read()
            .iter()
            .filter(|(_, categories)| categories.contains_key(category))
            .map(|(code, _)| code.clone())
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Number of populated (language, category) slots.
    pub fn len(&self) -> usize {
        self.languages.read().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
