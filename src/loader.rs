//! The storage boundary of the resolver.
//!
//! A [`Loader`] answers two questions about an extension-less source
//! location: does something exist there, and what mapping does it hold under
//! a given variable convention. The resolver never touches storage any other
//! way.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    messages::Messages,
    parsers::{ParseError, SourceFormat},
};

/// Failure at the loader boundary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing backs the location.
    #[error("no source at {}", .0.display())]
    NotFound(PathBuf),

    /// Something exists but could not be turned into a mapping.
    #[error("malformed source {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Storage collaborator used by [`Resolver`](crate::resolver::Resolver).
///
/// Implementations must be deterministic for a given location: loading the
/// same location twice yields the same mapping. `exists` must not have side
/// effects.
pub trait Loader: Send + Sync {
    /// Whether a source backs `location`.
    fn exists(&self, location: &Path) -> bool;

    /// Read the mapping stored at `location` under `convention`.
    fn load(&self, location: &Path, convention: &str) -> Result<Messages, LoadError>;
}

/// Loads JSON and TOML files from disk.
///
/// A location `languages/en/news` is backed by the first regular file among
/// `languages/en/news.json` and `languages/en/news.toml`.
#[derive(Debug, Clone)]
pub struct FileLoader {
    formats: Vec<SourceFormat>,
}

impl Default for FileLoader {
    fn default() -> Self {
        Self {
            formats: SourceFormat::ALL.to_vec(),
        }
    }
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict (and order) the formats probed for each location.
    pub fn with_formats(formats: impl IntoIterator<Item = SourceFormat>) -> Self {
        Self {
            formats: formats.into_iter().collect(),
        }
    }

    /// First existing file backing `location`, with its format.
    pub fn source_file(&self, location: &Path) -> Option<(PathBuf, SourceFormat)> {
        self.formats.iter().find_map(|&format| {
            let path = with_extension(location, format.extension());
            path.is_file().then_some((path, format))
        })
    }
}

impl Loader for FileLoader {
    fn exists(&self, location: &Path) -> bool {
        self.source_file(location).is_some()
    }

    fn load(&self, location: &Path, convention: &str) -> Result<Messages, LoadError> {
        let Some((path, format)) = self.source_file(location) else {
            return Err(LoadError::NotFound(location.to_path_buf()));
        };

        let content = fs::read_to_string(&path).map_err(|e| LoadError::Malformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        format
            .parse(&content, convention)
            .map_err(|e: ParseError| LoadError::Malformed {
                path,
                reason: e.to_string(),
            })
    }
}

/// Append an extension without replacing anything after a dot that is part
/// of the language code or category.
fn with_extension(location: &Path, extension: &str) -> PathBuf {
    let mut file: OsString = location.as_os_str().to_owned();
    file.push(".");
    file.push(extension);
    PathBuf::from(file)
}
