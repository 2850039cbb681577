//! Source tree port
//!
//! Read-only probes against the checked-out tree (and its overlays), used to
//! locate makefiles and follow symlinks. Paths are relative to the tree root.

use std::path::{Path, PathBuf};

use crate::error::SplitResult;

pub trait SourceTree {
    /// Whether `path` names an existing file (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Fully resolved location of `path`, relative to the tree root where possible.
    fn real_path(&self, path: &Path) -> SplitResult<PathBuf>;
}

impl<T: SourceTree + ?Sized> SourceTree for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        (**self).is_symlink(path)
    }

    fn real_path(&self, path: &Path) -> SplitResult<PathBuf> {
        (**self).real_path(path)
    }
}
