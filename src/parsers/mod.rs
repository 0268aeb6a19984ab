//! Source parsers.
//!
//! Each parser turns the text of a translation source into [`Messages`],
//! reading only the top-level table named by the variable convention.

pub mod json;
pub mod toml;

use thiserror::Error;

use crate::messages::Messages;

/// Why a source could not be turned into a mapping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("top level is not a table")]
    NotATable,

    #[error("'{convention}' is not a table")]
    ConventionNotATable { convention: String },
}

/// Source formats understood by the file loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Default probing order.
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Json, SourceFormat::Toml];

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Toml => "toml",
        }
    }

    pub fn parse(self, content: &str, convention: &str) -> Result<Messages, ParseError> {
        match self {
            SourceFormat::Json => json::parse_json_source(content, convention),
            SourceFormat::Toml => self::toml::parse_toml_source(content, convention),
        }
    }
}
