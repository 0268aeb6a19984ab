use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::resolver::{BareSourcePolicy, Settings};

pub const CONFIG_FILE_NAME: &str = ".langfallrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_resource_root", alias = "languageDir")]
    pub resource_root: String,
    #[serde(default = "default_variable_convention")]
    pub variable_convention: String,
    #[serde(default)]
    pub bare_sources: BareSourcePolicy,
    #[serde(default)]
    pub fold_case: bool,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_resource_root() -> String {
    "./languages".to_string()
}

fn default_variable_convention() -> String {
    "lang".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            resource_root: default_resource_root(),
            variable_convention: default_variable_convention(),
            bare_sources: BareSourcePolicy::default(),
            fold_case: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the default language or the variable convention
    /// is blank.
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            bail!("'defaultLanguage' must not be empty");
        }
        if self.variable_convention.trim().is_empty() {
            bail!("'variableConvention' must not be empty");
        }
        Ok(())
    }

    /// Resolver settings described by this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            default_language: self.default_language.clone(),
            resource_root: self.resource_root.clone(),
            variable_convention: self.variable_convention.clone(),
            bare_sources: self.bare_sources,
            fold_case: self.fold_case,
        }
    }

    /// Make a relative `resource_root` relative to `base` instead of the
    /// current directory.
    pub fn rebase_root(&mut self, base: &Path) {
        let root = Path::new(&self.resource_root);
        if root.is_absolute() {
            return;
        }

        let is_cur_dir = base.components().all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            return;
        }

        let rel = root.strip_prefix(Path::new(".")).unwrap_or(root);
        self.resource_root = base.join(rel).to_string_lossy().to_string();
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for a config file, stopping at the
/// directory holding `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    // A relative start like "." has no parents to pop
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` if using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
