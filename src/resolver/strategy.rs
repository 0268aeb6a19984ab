//! Naming strategies mapping (root, language, category) to a source location.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "default";

/// How a source is located on disk, tried in [`NamingStrategy::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingStrategy {
    /// `root/<code>/<category>`
    Subdirectory,
    /// `root/<code>-<category>`
    Suffix,
    /// `root/<code>`
    Bare,
}

/// Whether a bare `root/<code>` source may serve a non-default category.
///
/// `AnyCategory` takes whatever sits at `root/<code>` wholesale for the
/// current category, which is how single-category layouts have always been
/// read. `DefaultCategoryOnly` keeps bare sources for [`DEFAULT_CATEGORY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BareSourcePolicy {
    #[default]
    AnyCategory,
    DefaultCategoryOnly,
}

impl NamingStrategy {
    pub const ALL: [NamingStrategy; 3] = [
        NamingStrategy::Subdirectory,
        NamingStrategy::Suffix,
        NamingStrategy::Bare,
    ];

    /// Candidate location for `code` under an already normalized `root`.
    pub fn location(self, root: &str, code: &str, category: &str) -> PathBuf {
        let location = match self {
            NamingStrategy::Subdirectory => format!("{root}{code}/{category}"),
            NamingStrategy::Suffix => format!("{root}{code}-{category}"),
            NamingStrategy::Bare => format!("{root}{code}"),
        };
        PathBuf::from(location)
    }

    pub fn applies_to(self, category: &str, bare_sources: BareSourcePolicy) -> bool {
        match (self, bare_sources) {
            (NamingStrategy::Bare, BareSourcePolicy::DefaultCategoryOnly) => {
                category == DEFAULT_CATEGORY
            }
            _ => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NamingStrategy::Subdirectory => "subdirectory",
            NamingStrategy::Suffix => "suffix",
            NamingStrategy::Bare => "no-suffix",
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a resource root so it ends in exactly one separator.
///
/// A blank root means the current directory; a root made only of separators
/// is the filesystem root.
pub fn normalize_root(root: &str) -> String {
    if root.trim().is_empty() {
        return "./".to_string();
    }

    let stripped = root.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
    if stripped.is_empty() {
        return "/".to_string();
    }

    format!("{stripped}/")
}
