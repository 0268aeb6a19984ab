use tracing::debug;

use super::Resolver;
use crate::error::{Error, Result};

/// Read accessor bound to one language code.
///
/// On top of the resolver's whole-category fallback, a view falls back per
/// key: a text missing from its own language's mapping is read from the
/// resolver's default language.
#[derive(Debug, Clone)]
pub struct LanguageView<'a> {
    resolver: &'a Resolver,
    code: String,
}

impl<'a> LanguageView<'a> {
    /// Bind to `code`, or to the resolver's default language as it is right
    /// now when no (or an empty) code is given.
    pub fn new(resolver: &'a Resolver, code: Option<&str>) -> Self {
        let code = match code {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => resolver.default_language(),
        };
        Self { resolver, code }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn resolver(&self) -> &'a Resolver {
        self.resolver
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.resolver
            .get(&self.code)
            .is_some_and(|messages| messages.contains_key(key))
    }

    /// Text for `key` in this language, else in the default language.
    pub fn get_text(&self, key: &str) -> Result<String> {
        if let Some(text) = self.lookup(&self.code, key) {
            return Ok(text);
        }

        let default = self.resolver.default_language();
        match self.lookup(&default, key) {
            Some(text) => {
                debug!(key, language = %self.code, default = %default, "using default language text");
                Ok(text)
            }
            None => Err(Error::missing_key(key, &self.code, default)),
        }
    }

    /// [`get_text`](Self::get_text) without the error.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_text(key).ok()
    }

    fn lookup(&self, code: &str, key: &str) -> Option<String> {
        self.resolver
            .get(code)
            .and_then(|messages| messages.get(key).map(str::to_string))
    }
}
