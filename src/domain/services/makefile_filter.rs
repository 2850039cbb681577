//! Product makefile filtering
//!
//! Kati parses far more makefiles than the product actually depends on. The
//! filter keeps only the ones that say something about which projects a
//! product needs.

use std::path::Path;

/// Prefix/suffix rules deciding which parsed makefiles count as product makefiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakefileFilter {
    banned_prefixes: Vec<String>,
    banned_suffixes: Vec<String>,
}

impl MakefileFilter {
    pub fn new(banned_prefixes: Vec<String>, banned_suffixes: Vec<String>) -> Self {
        Self {
            banned_prefixes,
            banned_suffixes,
        }
    }

    /// True if `makefile` matches no banned prefix and no banned suffix.
    pub fn is_product_makefile(&self, makefile: &str) -> bool {
        !self
            .banned_prefixes
            .iter()
            .any(|p| makefile.starts_with(p.as_str()))
            && !self
                .banned_suffixes
                .iter()
                .any(|s| makefile.ends_with(s.as_str()))
    }
}

/// Lexically normalize a `/`-separated path: drop empty and `.` segments and
/// fold `..` into its parent where one exists.
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Remove the first overlay root that prefixes `path`, component-wise.
pub fn strip_overlay<'a>(path: &'a Path, overlays: &[impl AsRef<Path>]) -> &'a Path {
    overlays
        .iter()
        .find_map(|overlay| path.strip_prefix(overlay.as_ref()).ok())
        .unwrap_or(path)
}
