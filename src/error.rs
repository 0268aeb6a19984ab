//! Error types for translation lookups.

use thiserror::Error;

/// Lookup failures surfaced to callers.
///
/// Both variants are local and recoverable: the caller decides whether a
/// missing text is fatal to its own operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The key is absent from the selected language and from the default.
    #[error("missing translation '{key}' for '{language}' (default '{default_language}')")]
    MissingKey {
        key: String,
        language: String,
        default_language: String,
    },

    /// No naming strategy found a source for the language or the default.
    #[error("no translation source for '{language}' in category '{category}'")]
    NoSource { language: String, category: String },
}

/// Convenient Result type alias for lookups.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing_key(
        key: impl Into<String>,
        language: impl Into<String>,
        default_language: impl Into<String>,
    ) -> Self {
        Error::MissingKey {
            key: key.into(),
            language: language.into(),
            default_language: default_language.into(),
        }
    }

    pub fn no_source(language: impl Into<String>, category: impl Into<String>) -> Self {
        Error::NoSource {
            language: language.into(),
            category: category.into(),
        }
    }
}
