//! Project entity and the immutable path index built from a project listing.

use std::collections::BTreeMap;

use crate::error::{SplitError, SplitResult};

/// A source-control project as referenced by the manifest.
///
/// Identity is the checkout path; `name` is what the manifest's
/// `<project name="...">` attribute carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Project {
    pub name: String,
    pub path: String,
}

/// Path → project table.
///
/// Built once from `repo list` style output and never mutated afterwards;
/// every resolution during the closure reads from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectIndex {
    by_path: BTreeMap<String, String>,
}

impl ProjectIndex {
    /// Build an index from `(path, name)` pairs. Later duplicates of a path win.
    pub fn from_pairs<I, P, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, N)>,
        P: Into<String>,
        N: Into<String>,
    {
        let by_path = pairs
            .into_iter()
            .map(|(path, name)| (path.into(), name.into()))
            .collect();
        Self { by_path }
    }

    /// Parse `repo list` output: one `path : name` entry per line.
    ///
    /// Blank lines are ignored; anything else without the ` : ` separator is rejected.
    pub fn parse_listing(listing: &str) -> SplitResult<Self> {
        let mut by_path = BTreeMap::new();
        for (idx, raw) in listing.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (path, name) =
                line.split_once(" : ")
                    .ok_or_else(|| SplitError::InvalidProjectListing {
                        line: idx + 1,
                        content: line.to_string(),
                    })?;
            by_path.insert(path.trim().to_string(), name.trim().to_string());
        }
        Ok(Self { by_path })
    }

    /// Project name for an exact project path.
    pub fn name_for_path(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    /// Look up the project checked out at exactly `path`.
    pub fn project_at(&self, path: &str) -> Option<Project> {
        self.by_path.get_key_value(path).map(|(path, name)| Project {
            name: name.clone(),
            path: path.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
