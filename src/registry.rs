//! Per-category resolver registry.
//!
//! The host application owns a [`Registry`] and asks it for resolvers.
//! Asking twice for the same category yields the same [`Resolver`], and all
//! resolvers of one registry share a single [`TranslationCache`] in which
//! each category occupies its own slots.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    config::Config,
    loader::{FileLoader, Loader},
    resolver::{DEFAULT_CATEGORY, Resolver, Settings, TranslationCache},
};

pub struct Registry {
    /// Settings handed to resolvers created from now on.
    defaults: RwLock<Settings>,
    loader: Arc<dyn Loader>,
    cache: Arc<TranslationCache>,
    resolvers: RwLock<HashMap<String, Arc<Resolver>>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_loader(Arc::new(FileLoader::new()))
    }

    pub fn with_loader(loader: Arc<dyn Loader>) -> Self {
        Self::with_settings(Settings::default(), loader)
    }

    pub fn with_settings(settings: Settings, loader: Arc<dyn Loader>) -> Self {
        Self {
            defaults: RwLock::new(settings),
            loader,
            cache: Arc::new(TranslationCache::new()),
            resolvers: RwLock::new(HashMap::new()),
        }
    }

    /// Registry whose defaults come from a configuration file.
    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(config.settings(), Arc::new(FileLoader::new()))
    }

    /// The resolver for `category`, created on first request.
    pub fn resolver(&self, category: &str) -> Arc<Resolver> {
        if let Some(resolver) = self.resolvers.read().get(category) {
            return Arc::clone(resolver);
        }

        let mut resolvers = self.resolvers.write();
        let resolver = resolvers.entry(category.to_string()).or_insert_with(|| {
            debug!(category, "creating resolver");
            Arc::new(Resolver::from_parts(
                category,
                self.defaults.read().clone(),
                Arc::clone(&self.loader),
                Arc::clone(&self.cache),
            ))
        });
        Arc::clone(resolver)
    }

    pub fn default_resolver(&self) -> Arc<Resolver> {
        self.resolver(DEFAULT_CATEGORY)
    }

    // ============================================================
    // Registry-wide defaults
    // ============================================================
    //
    // These only affect resolvers created afterwards. Existing resolvers keep
    // their own settings and are reconfigured through their own setters.

    pub fn set_default_language(&self, language: impl Into<String>) -> &Self {
        self.defaults.write().default_language = language.into();
        self
    }

    pub fn set_resource_root(&self, root: impl Into<String>) -> &Self {
        self.defaults.write().resource_root = root.into();
        self
    }

    pub fn set_variable_convention(&self, name: impl Into<String>) -> &Self {
        self.defaults.write().variable_convention = name.into();
        self
    }

    // ============================================================
    // Introspection
    // ============================================================

    /// Categories that have a resolver, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.resolvers.read().keys().cloned().collect();
        categories.sort_unstable();
        categories
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}
