//! Langfall - translation lookup with default-language fallback
//!
//! Langfall resolves a text key, given a language code and a category, to a
//! translated string. Sources are located through three naming conventions,
//! loaded once, cached per (language, category), and replaced by the default
//! language's texts when the requested language is missing, either as a
//! whole or key by key.
//!
//! ## Module Structure
//!
//! - `resolver`: Per-category resolver, naming strategies, cache, language views
//! - `registry`: Host-owned registry handing out one resolver per category
//! - `loader`: Storage boundary and the JSON/TOML file loader
//! - `parsers`: Source parsers flattening translation tables
//! - `messages`: Read-only key → text mapping
//! - `config`: Configuration file loading and parsing
//! - `error`: Lookup error types
//! - `cli`: Command-line interface layer
//!
//! ## Example
//!
//! ```no_run
//! use langfall::Registry;
//!
//! let registry = Registry::new();
//! let news = registry.resolver("news");
//! news.set_path("languages").set_default("en");
//!
//! let hu = news.language(Some("hu"));
//! match hu.get_text("welcome") {
//!     Ok(text) => println!("{text}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod messages;
pub mod parsers;
pub mod registry;
pub mod resolver;

pub use error::{Error, Result};
pub use loader::{FileLoader, LoadError, Loader};
pub use messages::Messages;
pub use registry::Registry;
pub use resolver::{
    BareSourcePolicy, DEFAULT_CATEGORY, LanguageView, NamingStrategy, Resolution, Resolver,
    Settings,
};
