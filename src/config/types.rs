//! Settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::MakefileFilter;
use crate::error::SplitResult;

use super::loader::{self, SettingsWarning};

/// External tool locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Build-graph query binary (`ninja`)
    pub ninja: String,
    /// Kati stamp dump binary
    pub stamp_dump: String,
    /// Binary run for `repo list` when no listing file is given
    pub repo: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ninja: "ninja".to_string(),
            stamp_dump: "prebuilts/build-tools/linux-x86/bin/ckati_stamp_dump".to_string(),
            repo: "repo".to_string(),
        }
    }
}

/// Build-graph input batching and noise filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Maximum modules passed to one build-graph query
    pub shard_limit: usize,
    /// Target name that makes test-mapping files count as real inputs
    pub test_mapping_target: String,
    /// File name suffix of test-mapping files
    pub test_mapping_marker: String,
    /// File name suffixes of license marker files, never treated as inputs
    pub license_markers: Vec<String>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            shard_limit: 20_000,
            test_mapping_target: "test_mapping".to_string(),
            test_mapping_marker: "TEST_MAPPING".to_string(),
            license_markers: vec!["MODULE_LICENSE_GPL".to_string()],
        }
    }
}

/// Product makefile selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakefileSettings {
    pub banned_prefixes: Vec<String>,
    pub banned_suffixes: Vec<String>,
}

impl Default for MakefileSettings {
    fn default() -> Self {
        Self {
            banned_prefixes: [
                "out/",
                // Reference boards shipped with the platform source.
                "device/amlogic",
                "device/generic",
                "device/google",
                "device/linaro",
                "device/sample",
            ]
            .map(String::from)
            .to_vec(),
            banned_suffixes: [
                // Every Android.mk in the tree is always parsed.
                "Android.mk",
                // The stamp file's first line is the kati binary itself.
                "bin/ckati",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl MakefileSettings {
    pub fn filter(&self) -> MakefileFilter {
        MakefileFilter::new(self.banned_prefixes.clone(), self.banned_suffixes.clone())
    }
}

/// Default override document merged ahead of `--config` files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideSettings {
    /// Merge a default document at all
    pub use_default: bool,
    /// Replaces the built-in document when set
    pub default_config: Option<PathBuf>,
}

impl Default for OverrideSettings {
    fn default() -> Self {
        Self {
            use_default: true,
            default_config: None,
        }
    }
}

/// Top-level settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tools: ToolSettings,
    pub inputs: InputSettings,
    pub makefiles: MakefileSettings,
    pub overrides: OverrideSettings,
}

impl Settings {
    /// Load settings from a TOML file, ignoring unknown keys.
    pub fn load(path: &Path) -> SplitResult<Self> {
        loader::load_with_warnings(path).map(|(settings, _)| settings)
    }

    /// Load settings and collect warnings for unknown keys.
    pub fn load_with_warnings(path: &Path) -> SplitResult<(Self, Vec<SettingsWarning>)> {
        loader::load_with_warnings(path)
    }
}
