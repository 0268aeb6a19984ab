use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::{Context, Ok, Result};
use langfall::{FileLoader, LoadError, Loader, Messages, Registry, Resolver};
use tempfile::TempDir;

mod cache;

/// Translation tree in a temporary directory.
pub struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<&Self> {
        let file_path = self.root.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(self)
    }

    pub fn remove_file(&self, path: &str) -> Result<()> {
        let file_path = self.root.join(path);
        fs::remove_file(&file_path)
            .with_context(|| format!("Failed to remove file: {}", file_path.display()))
    }

    /// Write a JSON source holding `entries` under the `lang` convention.
    pub fn source(&self, path: &str, entries: &[(&str, &str)]) -> Result<&Self> {
        let table: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(key, text)| (key.to_string(), serde_json::Value::from(*text)))
            .collect();
        let content = serde_json::json!({ "lang": table }).to_string();
        self.write_file(&format!("{path}.json"), &content)
    }

    pub fn root_str(&self) -> String {
        self.root.to_string_lossy().to_string()
    }

    /// Resolver over this tree with `en` as default language.
    pub fn resolver(&self, category: &str) -> Resolver {
        let resolver = Resolver::new(category);
        resolver.set_path(self.root_str()).set_default("en");
        resolver
    }

    /// Resolver over this tree whose storage access is counted.
    pub fn counted_resolver(&self, category: &str) -> (Resolver, Arc<CountingLoader>) {
        let loader = Arc::new(CountingLoader::default());
        let resolver = Resolver::with_loader(category, loader.clone());
        resolver.set_path(self.root_str()).set_default("en");
        (resolver, loader)
    }

    /// Registry over this tree with `en` as default language.
    pub fn registry(&self) -> Registry {
        let registry = Registry::new();
        registry
            .set_resource_root(self.root_str())
            .set_default_language("en");
        registry
    }
}

/// File loader that counts existence checks and loads.
#[derive(Default)]
pub struct CountingLoader {
    inner: FileLoader,
    exists_calls: AtomicUsize,
    load_calls: AtomicUsize,
}

impl CountingLoader {
    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn storage_calls(&self) -> usize {
        self.exists_calls() + self.load_calls()
    }
}

impl Loader for CountingLoader {
    fn exists(&self, location: &Path) -> bool {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(location)
    }

    fn load(&self, location: &Path, convention: &str) -> std::result::Result<Messages, LoadError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.load(location, convention)
    }
}
