//! Local Source Tree Implementation
//!
//! Implements the SourceTree port against a directory on local disk.

use std::path::{Path, PathBuf};

use crate::domain::ports::SourceTree;
use crate::error::SplitResult;

/// Source tree rooted at a local directory (normally the current directory).
#[derive(Debug, Clone)]
pub struct LocalSourceTree {
    root: PathBuf,
}

impl LocalSourceTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Tree rooted at the process working directory.
    pub fn current_dir() -> SplitResult<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl SourceTree for LocalSourceTree {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        self.root.join(path).is_symlink()
    }

    fn real_path(&self, path: &Path) -> SplitResult<PathBuf> {
        let real = std::fs::canonicalize(self.root.join(path))?;
        let root = std::fs::canonicalize(&self.root)?;
        Ok(match real.strip_prefix(&root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => real,
        })
    }
}
