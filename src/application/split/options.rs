//! Split Options

use std::path::PathBuf;

/// Options for the split use case
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Targets that must remain buildable
    pub targets: Vec<String>,
    /// Manifest to split
    pub manifest: PathBuf,
    /// Where the split manifest is written
    pub split_manifest: PathBuf,
    /// Override XML files, merged in order
    pub config_files: Vec<PathBuf>,
    /// module-info.json describing every module
    pub module_info: PathBuf,
    /// Overlay roots searched after the primary tree
    pub overlays: Vec<PathBuf>,
    /// Optional debug JSON output
    pub debug_file: Option<PathBuf>,
}

impl SplitOptions {
    pub fn new(
        targets: Vec<String>,
        manifest: impl Into<PathBuf>,
        split_manifest: impl Into<PathBuf>,
        module_info: impl Into<PathBuf>,
    ) -> Self {
        Self {
            targets,
            manifest: manifest.into(),
            split_manifest: split_manifest.into(),
            module_info: module_info.into(),
            ..Self::default()
        }
    }

    pub fn with_config_files(mut self, files: Vec<PathBuf>) -> Self {
        self.config_files = files;
        self
    }

    pub fn with_overlays(mut self, overlays: Vec<PathBuf>) -> Self {
        self.overlays = overlays;
        self
    }

    pub fn with_debug_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_file = Some(path.into());
        self
    }
}
