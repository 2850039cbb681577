//! Settings loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SplitError, SplitResult};

use super::types::Settings;

/// Environment variable overriding `[tools] ninja`
pub const ENV_NINJA: &str = "MANIFEST_SPLIT_NINJA";
/// Environment variable overriding `[tools] stamp_dump`
pub const ENV_STAMP_DUMP: &str = "MANIFEST_SPLIT_STAMP_DUMP";

/// Non-fatal settings warning (unknown key) surfaced through the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown settings key '{}' in {}", self.key, self.file.display())
    }
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SplitResult<(Settings, Vec<SettingsWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SplitError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| SettingsWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((settings, warnings))
}

/// Apply environment variable overrides (MANIFEST_SPLIT_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_overrides_from(settings, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn with_overrides_from<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ninja) = lookup(ENV_NINJA).filter(|v| !v.is_empty()) {
        settings.tools.ninja = ninja;
    }
    if let Some(stamp_dump) = lookup(ENV_STAMP_DUMP).filter(|v| !v.is_empty()) {
        settings.tools.stamp_dump = stamp_dump;
    }
    settings
}
