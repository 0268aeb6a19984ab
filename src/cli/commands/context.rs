use std::{path::Path, sync::Arc};

use anyhow::Result;
use tracing::debug;

use super::super::args::LookupArgs;
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    registry::Registry,
    resolver::Resolver,
};

/// Everything a lookup command needs: the requested category and the registry
/// built from the merged configuration.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--default-language en`)
/// 2. `.langfallrc.json` config file
/// 3. Built-in defaults
///
/// A relative `resourceRoot` from the config file is taken relative to the
/// directory holding that file. A `--root` given on the command line is
/// taken as is.
pub struct LookupContext {
    pub category: String,
    registry: Registry,
}

impl LookupContext {
    pub fn new(args: &LookupArgs) -> Result<Self> {
        let common = &args.common;

        let config_result = load_config(&common.path)?;
        if !config_result.from_file() {
            debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let base = config_result
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| common.path.clone());

        let mut config = config_result.config;
        config.rebase_root(&base);

        if let Some(ref root) = common.root {
            config.resource_root = root.clone();
        }
        if let Some(ref default_language) = common.default_language {
            config.default_language = default_language.clone();
        }
        if let Some(ref convention) = common.convention {
            config.variable_convention = convention.clone();
        }
        config.validate()?;

        debug!(
            root = %config.resource_root,
            default = %config.default_language,
            convention = %config.variable_convention,
            category = %args.category,
            "lookup configuration"
        );

        let registry = Registry::from_config(&config);
        Ok(Self {
            category: args.category.clone(),
            registry,
        })
    }

    pub fn resolver(&self) -> Arc<Resolver> {
        self.registry.resolver(&self.category)
    }
}
