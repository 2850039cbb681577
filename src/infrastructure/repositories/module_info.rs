//! module-info.json reader
//!
//! Each entry is checked for the fields the closure needs (`path`, `class`,
//! `dependencies`) as it is loaded, so a malformed file fails before any
//! external query runs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::ModuleRecord;
use crate::error::{SplitError, SplitResult};

#[derive(Debug, Deserialize)]
struct ModuleInfoEntry {
    path: Vec<String>,
    class: Vec<String>,
    dependencies: Vec<String>,
}

/// Read and validate every module in a module-info.json file.
pub fn load_module_info(path: &Path) -> SplitResult<Vec<ModuleRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_module_info(&content, path)
}

/// Parse module-info JSON; `file` is only used in error messages.
pub fn parse_module_info(content: &str, file: &Path) -> SplitResult<Vec<ModuleRecord>> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(content).map_err(|e| SplitError::InvalidModuleInfo {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    raw.into_iter()
        .map(|(name, value)| {
            let entry: ModuleInfoEntry =
                serde_json::from_value(value).map_err(|e| SplitError::InvalidModule {
                    module: name.clone(),
                    message: e.to_string(),
                })?;
            ModuleRecord::new(name, entry.path, entry.class, entry.dependencies)
        })
        .collect()
}
