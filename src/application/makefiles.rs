//! Product makefile resolver
//!
//! Turns the stamp dump's list of parsed makefiles into tree-relative paths
//! of the product makefiles, looking through overlays and following symlinks.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::{SourceTree, StampDump};
use crate::domain::services::{normalize_path, strip_overlay, MakefileFilter};
use crate::error::SplitResult;

pub struct MakefileResolver<D, T> {
    dump: D,
    tree: T,
    filter: MakefileFilter,
    overlays: Vec<PathBuf>,
    /// Overlays as given, then their resolved tree-relative forms.
    overlay_roots: Vec<PathBuf>,
}

impl<D: StampDump, T: SourceTree> MakefileResolver<D, T> {
    pub fn new(dump: D, tree: T, filter: MakefileFilter, overlays: Vec<PathBuf>) -> Self {
        let mut overlay_roots = overlays.clone();
        for overlay in &overlays {
            match tree.real_path(overlay) {
                Ok(real) if !overlay_roots.contains(&real) => overlay_roots.push(real),
                Ok(_) => {}
                Err(e) => debug!(overlay = %overlay.display(), error = %e, "overlay kept as given"),
            }
        }

        Self {
            dump,
            tree,
            filter,
            overlays,
            overlay_roots,
        }
    }

    /// Product makefile paths, plus the real location of every symlinked one.
    pub fn product_makefiles(&self) -> SplitResult<BTreeSet<String>> {
        let candidates: BTreeSet<String> = self
            .dump
            .parsed_makefiles()?
            .iter()
            .filter(|m| self.filter.is_product_makefile(m))
            .map(|m| normalize_path(m))
            .collect();
        debug!(makefiles = candidates.len(), "product makefiles from stamp");

        let mut resolved = BTreeSet::new();
        for makefile in &candidates {
            let Some(located) = self.locate(makefile) else {
                warn!(makefile = %makefile, "unknown kati makefile");
                continue;
            };

            resolved.insert(self.tree_relative(&located));

            // The link target may live in a different project than the link.
            if self.tree.is_symlink(&located) {
                match self.tree.real_path(&located) {
                    Ok(real) => {
                        resolved.insert(self.tree_relative(&real));
                    }
                    Err(e) => warn!(makefile = %makefile, error = %e, "cannot resolve makefile symlink"),
                }
            }
        }

        Ok(resolved)
    }

    /// First existing location of `makefile`: the primary tree, then each overlay in order.
    fn locate(&self, makefile: &str) -> Option<PathBuf> {
        std::iter::once(PathBuf::new())
            .chain(self.overlays.iter().cloned())
            .map(|root| root.join(makefile))
            .find(|candidate| self.tree.exists(candidate))
    }

    fn tree_relative(&self, path: &Path) -> String {
        strip_overlay(path, &self.overlay_roots)
            .to_string_lossy()
            .into_owned()
    }
}
