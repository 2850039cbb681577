//! Settings for manifest-split
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MANIFEST_SPLIT_*)
//! 3. Settings file (`--settings path.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    with_env_overrides, with_overrides_from, SettingsWarning, ENV_NINJA, ENV_STAMP_DUMP,
};
pub use types::{InputSettings, MakefileSettings, OverrideSettings, Settings, ToolSettings};
