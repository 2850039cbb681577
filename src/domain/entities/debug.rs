//! Per-project provenance collected while computing the closure.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Why a project ended up (or was named) in the split.
///
/// Records are created on first reference and only ever gain information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebugRecord {
    /// Reached from the requested targets' own build inputs.
    pub direct_input: bool,
    /// Reached from the inputs of a module in an already retained project.
    pub adjacent_input: bool,
    /// Pulled in as the owner of a header-library dependency.
    pub deps_input: bool,
    pub kati_makefiles: Vec<String>,
    pub manual_add_configs: Vec<PathBuf>,
    pub manual_remove_configs: Vec<PathBuf>,
}

/// Project name → provenance, serialized with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DebugReport {
    records: BTreeMap<String, DebugRecord>,
}

impl DebugReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `project`, created empty if this is the first reference.
    pub fn entry(&mut self, project: &str) -> &mut DebugRecord {
        self.records.entry(project.to_string()).or_default()
    }

    pub fn get(&self, project: &str) -> Option<&DebugRecord> {
        self.records.get(project)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
