//! Split Result

use std::collections::BTreeSet;

use crate::domain::value_objects::ManifestDigest;

/// Summary of a finished split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Projects the targets need, removals applied
    pub retained: BTreeSet<String>,
    /// `<project>` elements written / dropped
    pub kept: usize,
    pub dropped: usize,
    /// Closure passes until convergence
    pub passes: usize,
    pub original: ManifestDigest,
    pub own: ManifestDigest,
}

impl SplitOutcome {
    pub fn retained_count(&self) -> usize {
        self.retained.len()
    }
}
