//! Build-graph ports
//!
//! `BuildGraph` is one raw invocation of the external graph query tool.
//! `InputQuery` is what the closure engine consumes: a batched, filtered
//! view over a `BuildGraph`.

use std::collections::BTreeSet;

use crate::error::SplitResult;

/// A single blocking query against the build graph.
pub trait BuildGraph {
    /// Every input file path reachable from `modules`, one per entry.
    ///
    /// Implementations may receive at most one batch worth of modules.
    fn query_inputs(&self, modules: &[String]) -> SplitResult<Vec<String>>;
}

/// Source input paths needed to build a list of modules.
pub trait InputQuery {
    fn inputs(&self, modules: &[String]) -> SplitResult<BTreeSet<String>>;
}

impl<T: BuildGraph + ?Sized> BuildGraph for &T {
    fn query_inputs(&self, modules: &[String]) -> SplitResult<Vec<String>> {
        (**self).query_inputs(modules)
    }
}
