//! Manual add/remove overrides merged from one or more config documents.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Projects named by a single override document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideDocument {
    pub source: PathBuf,
    pub add: BTreeSet<String>,
    pub remove: BTreeSet<String>,
}

/// Add and remove sets, each project tagged with the documents naming it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    add: BTreeMap<String, Vec<PathBuf>>,
    remove: BTreeMap<String, Vec<PathBuf>>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge documents in order; provenance lists keep that order.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = OverrideDocument>,
    {
        let mut overrides = Self::new();
        for doc in documents {
            overrides.merge(doc);
        }
        overrides
    }

    pub fn merge(&mut self, doc: OverrideDocument) {
        for project in doc.add {
            self.add
                .entry(project)
                .or_default()
                .push(doc.source.clone());
        }
        for project in doc.remove {
            self.remove
                .entry(project)
                .or_default()
                .push(doc.source.clone());
        }
    }

    pub fn add_project(&mut self, project: impl Into<String>, source: &Path) {
        self.add
            .entry(project.into())
            .or_default()
            .push(source.to_path_buf());
    }

    pub fn remove_project(&mut self, project: impl Into<String>, source: &Path) {
        self.remove
            .entry(project.into())
            .or_default()
            .push(source.to_path_buf());
    }

    pub fn is_removed(&self, project: &str) -> bool {
        self.remove.contains_key(project)
    }

    pub fn added(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.add.iter().map(|(p, s)| (p.as_str(), s.as_slice()))
    }

    pub fn removed(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.remove.iter().map(|(p, s)| (p.as_str(), s.as_slice()))
    }

    pub fn remove_set(&self) -> BTreeSet<String> {
        self.remove.keys().cloned().collect()
    }
}
