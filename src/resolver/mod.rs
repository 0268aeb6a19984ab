//! Category resolver: locates, loads and caches translation sources.
//!
//! A [`Resolver`] serves one category. Looking up a language tries the three
//! [`NamingStrategy`] locations in order and caches the first source found
//! under that language. When the language has no source at all the same
//! strategies are tried for the default language, and the result is cached
//! under the default language only. The requested code is never cached as a
//! miss, so asking again for an unavailable language repeats the existence
//! checks (they are cheap next to a load).
//!
//! ```no_run
//! use langfall::resolver::Resolver;
//!
//! let resolver = Resolver::new("default");
//! resolver.set_path("languages").set_default("en");
//!
//! let hu = resolver.language(Some("hu"));
//! let welcome = hu.get_text("welcome");
//! ```

mod cache;
mod strategy;
mod view;

pub use cache::TranslationCache;
pub use strategy::{BareSourcePolicy, DEFAULT_CATEGORY, NamingStrategy, normalize_root};
pub use view::LanguageView;

use std::{fmt, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    loader::{FileLoader, LoadError, Loader},
    messages::Messages,
};

/// Mutable configuration of a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_language: String,
    pub resource_root: String,
    pub variable_convention: String,
    pub bare_sources: BareSourcePolicy,
    pub fold_case: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            resource_root: "languages".to_string(),
            variable_convention: "lang".to_string(),
            bare_sources: BareSourcePolicy::default(),
            fold_case: false,
        }
    }
}

impl Settings {
    fn normalize_code(&self, code: &str) -> String {
        if self.fold_case {
            code.to_lowercase()
        } else {
            code.to_string()
        }
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Language the messages are cached under.
    pub language: String,
    /// Strategy that found the source, `None` when served from cache.
    pub strategy: Option<NamingStrategy>,
    /// True when the requested language had no source and the default served.
    pub fell_back: bool,
    pub messages: Arc<Messages>,
}

/// Translation resolver for one category.
pub struct Resolver {
    category: String,
    settings: RwLock<Settings>,
    cache: Arc<TranslationCache>,
    loader: Arc<dyn Loader>,
}

impl Resolver {
    /// Standalone resolver reading files through [`FileLoader`].
    pub fn new(category: impl Into<String>) -> Self {
        Self::with_loader(category, Arc::new(FileLoader::new()))
    }

    /// Standalone resolver with its own cache and the given loader.
    pub fn with_loader(category: impl Into<String>, loader: Arc<dyn Loader>) -> Self {
        Self::from_parts(
            category,
            Settings::default(),
            loader,
            Arc::new(TranslationCache::new()),
        )
    }

    pub(crate) fn from_parts(
        category: impl Into<String>,
        settings: Settings,
        loader: Arc<dyn Loader>,
        cache: Arc<TranslationCache>,
    ) -> Self {
        Self {
            category: category.into(),
            settings: RwLock::new(settings),
            cache,
            loader,
        }
    }

    // ============================================================
    // Configuration
    // ============================================================

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn default_language(&self) -> String {
        self.settings.read().default_language.clone()
    }

    pub fn set_default(&self, language: impl Into<String>) -> &Self {
        self.settings.write().default_language = language.into();
        self
    }

    pub fn resource_root(&self) -> String {
        self.settings.read().resource_root.clone()
    }

    /// Set the directory sources are resolved under. Trailing separators are
    /// normalized away when locations are built.
    pub fn set_path(&self, root: impl Into<String>) -> &Self {
        self.settings.write().resource_root = root.into();
        self
    }

    pub fn variable_convention(&self) -> String {
        self.settings.read().variable_convention.clone()
    }

    /// Set the name of the table inside a source that holds the texts.
    pub fn set_name_of_language_variable(&self, name: impl Into<String>) -> &Self {
        self.settings.write().variable_convention = name.into();
        self
    }

    pub fn bare_sources(&self) -> BareSourcePolicy {
        self.settings.read().bare_sources
    }

    pub fn set_bare_sources(&self, policy: BareSourcePolicy) -> &Self {
        self.settings.write().bare_sources = policy;
        self
    }

    pub fn fold_case(&self) -> bool {
        self.settings.read().fold_case
    }

    /// Lowercase language codes before lookup.
    pub fn set_fold_case(&self, fold_case: bool) -> &Self {
        self.settings.write().fold_case = fold_case;
        self
    }

    // ============================================================
    // Lookups
    // ============================================================

    /// Messages for `language_code`, falling back to the default language.
    pub fn get(&self, language_code: &str) -> Option<Arc<Messages>> {
        self.resolve(language_code)
            .map(|resolution| resolution.messages)
    }

    /// Like [`get`](Self::get), with absence reported as [`Error::NoSource`].
    pub fn require(&self, language_code: &str) -> Result<Arc<Messages>> {
        self.get(language_code)
            .ok_or_else(|| Error::no_source(language_code, &self.category))
    }

    /// Like [`get`](Self::get), also reporting where the messages came from.
    pub fn resolve(&self, language_code: &str) -> Option<Resolution> {
        let settings = self.settings();
        let code = settings.normalize_code(language_code);

        if let Some(messages) = self.cache.get(&code, &self.category) {
            debug!(language = %code, category = %self.category, "cache hit");
            return Some(Resolution {
                language: code,
                strategy: None,
                fell_back: false,
                messages,
            });
        }

        if let Some(resolution) = self.load_language(&settings, &code) {
            return Some(resolution);
        }

        let default = settings.normalize_code(&settings.default_language);
        if code == default {
            debug!(language = %code, category = %self.category, "no source found");
            return None;
        }

        if let Some(messages) = self.cache.get(&default, &self.category) {
            debug!(
                language = %code,
                default = %default,
                category = %self.category,
                "falling back to cached default language"
            );
            return Some(Resolution {
                language: default,
                strategy: None,
                fell_back: true,
                messages,
            });
        }

        debug!(
            language = %code,
            default = %default,
            category = %self.category,
            "falling back to default language"
        );
        let Some(mut resolution) = self.load_language(&settings, &default) else {
            debug!(language = %code, category = %self.category, "no source found");
            return None;
        };
        resolution.fell_back = true;
        Some(resolution)
    }

    /// True when `language_code` itself has a source. The default language
    /// is not consulted.
    pub fn exists(&self, language_code: &str) -> bool {
        let settings = self.settings();
        let code = settings.normalize_code(language_code);

        self.cache.contains(&code, &self.category)
            || self
                .candidates(&settings, &code)
                .any(|(_, location)| self.loader.exists(&location))
    }

    /// Messages already cached for `language_code`, without touching storage.
    pub fn cached(&self, language_code: &str) -> Option<Arc<Messages>> {
        let code = self.settings.read().normalize_code(language_code);
        self.cache.get(&code, &self.category)
    }

    /// Resolve several languages in parallel to warm the cache.
    ///
    /// Returns how many of them resolved to a mapping.
    pub fn preload<S>(&self, language_codes: &[S]) -> usize
    where
        S: AsRef<str> + Sync,
    {
        language_codes
            .par_iter()
            .filter(|code| self.get(code.as_ref()).is_some())
            .count()
    }

    /// View bound to `code`, or to the current default language.
    ///
    /// An empty code counts as no code.
    pub fn language(&self, code: Option<&str>) -> LanguageView<'_> {
        LanguageView::new(self, code)
    }

    /// Shorthand for `self.language(Some(language_code)).get_text(key)`.
    pub fn text(&self, language_code: &str, key: &str) -> Result<String> {
        self.language(Some(language_code)).get_text(key)
    }

    // ============================================================
    // Internals
    // ============================================================

    fn candidates<'a>(
        &'a self,
        settings: &'a Settings,
        code: &'a str,
    ) -> impl Iterator<Item = (NamingStrategy, PathBuf)> + 'a {
        let root = normalize_root(&settings.resource_root);
        NamingStrategy::ALL
            .into_iter()
            .filter(move |strategy| strategy.applies_to(&self.category, settings.bare_sources))
            .map(move |strategy| (strategy, strategy.location(&root, code, &self.category)))
    }

    /// Try every strategy for exactly `code` and cache the first hit.
    fn load_language(&self, settings: &Settings, code: &str) -> Option<Resolution> {
        for (strategy, location) in self.candidates(settings, code) {
            if !self.loader.exists(&location) {
                continue;
            }

            let messages = match self.loader.load(&location, &settings.variable_convention) {
                Ok(messages) => messages,
                Err(LoadError::NotFound(_)) => {
                    debug!(location = %location.display(), "source vanished before load");
                    continue;
                }
                Err(err @ LoadError::Malformed { .. }) => {
                    warn!(error = %err, "treating malformed source as empty");
                    Messages::new()
                }
            };

            debug!(
                language = %code,
                category = %self.category,
                strategy = %strategy,
                location = %location.display(),
                entries = messages.len(),
                "loaded translations"
            );
            let messages = self.cache.insert(code, &self.category, messages);
            return Some(Resolution {
                language: code.to_string(),
                strategy: Some(strategy),
                fell_back: false,
                messages,
            });
        }
        None
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("category", &self.category)
            .field("settings", &*self.settings.read())
            .finish()
    }
}
