//! Build-graph input resolver
//!
//! Splits module lists into batches the external tool can take on one
//! command line, unions the answers, and drops inputs that would otherwise
//! retain a project only for an incidental metadata file.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::InputSettings;
use crate::domain::ports::{BuildGraph, InputQuery};
use crate::error::SplitResult;

/// Drops noise inputs from build-graph answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFilter {
    keep_test_mapping: bool,
    test_mapping_marker: String,
    license_markers: Vec<String>,
}

impl InputFilter {
    /// Filter for a run building `targets`.
    ///
    /// Test-mapping files are real inputs only when the test-mapping target
    /// itself was requested.
    pub fn new(settings: &InputSettings, targets: &[String]) -> Self {
        Self {
            keep_test_mapping: targets.contains(&settings.test_mapping_target),
            test_mapping_marker: settings.test_mapping_marker.clone(),
            license_markers: settings.license_markers.clone(),
        }
    }

    pub fn allows(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        if !self.keep_test_mapping && path.ends_with(self.test_mapping_marker.as_str()) {
            return false;
        }
        !self
            .license_markers
            .iter()
            .any(|marker| path.ends_with(marker.as_str()))
    }
}

pub struct BuildGraphInputResolver<G> {
    graph: G,
    shard_limit: usize,
    filter: InputFilter,
}

impl<G: BuildGraph> BuildGraphInputResolver<G> {
    pub fn new(graph: G, shard_limit: usize, filter: InputFilter) -> Self {
        Self {
            graph,
            shard_limit: shard_limit.max(1),
            filter,
        }
    }
}

impl<G: BuildGraph> InputQuery for BuildGraphInputResolver<G> {
    fn inputs(&self, modules: &[String]) -> SplitResult<BTreeSet<String>> {
        let mut inputs = BTreeSet::new();
        for (batch, shard) in modules.chunks(self.shard_limit).enumerate() {
            debug!(batch, modules = shard.len(), "querying build graph");
            for raw in self.graph.query_inputs(shard)? {
                let path = raw.trim();
                if self.filter.allows(path) {
                    inputs.insert(path.to_string());
                }
            }
        }
        Ok(inputs)
    }
}
