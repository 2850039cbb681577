//! Split Use Case
//!
//! Orchestrates one split:
//! 1. Load overrides (default document first), the project listing and module metadata
//! 2. Resolve product makefiles from the stamp dump
//! 3. Run the closure engine over the build graph
//! 4. Rewrite the manifest and write it out
//! 5. Write the debug report, if asked for

use std::path::Path;

use tracing::info;

use crate::application::inputs::{BuildGraphInputResolver, InputFilter};
use crate::application::makefiles::MakefileResolver;
use crate::config::Settings;
use crate::domain::entities::{OverrideDocument, ProjectIndex};
use crate::domain::ports::{BuildGraph, ProjectLister, SourceTree, StampDump};
use crate::domain::services::{ClosureEngine, ModuleGraph};
use crate::error::SplitResult;
use crate::infrastructure::fs::atomic_write;
use crate::infrastructure::repositories::{
    builtin_overrides, load_module_info, load_override_document, load_overrides, split_manifest,
};

use super::options::SplitOptions;
use super::result::SplitOutcome;

/// Split use case, parameterized by the external tools it talks to.
pub struct SplitUseCase<L, G, D, T>
where
    L: ProjectLister,
    G: BuildGraph,
    D: StampDump,
    T: SourceTree,
{
    lister: L,
    graph: G,
    dump: D,
    tree: T,
    settings: Settings,
}

impl<L, G, D, T> SplitUseCase<L, G, D, T>
where
    L: ProjectLister,
    G: BuildGraph,
    D: StampDump,
    T: SourceTree,
{
    pub fn new(lister: L, graph: G, dump: D, tree: T, settings: Settings) -> Self {
        Self {
            lister,
            graph,
            dump,
            tree,
            settings,
        }
    }

    pub fn execute(&self, options: &SplitOptions) -> SplitResult<SplitOutcome> {
        let overrides = load_overrides(self.default_overrides()?, &options.config_files)?;

        let index = ProjectIndex::parse_listing(&self.lister.listing()?)?;
        info!(projects = index.len(), "loaded project listing");

        let graph = ModuleGraph::build(&index, load_module_info(&options.module_info)?)?;
        info!(modules = graph.placed_modules(), "loaded module info");

        let makefiles = MakefileResolver::new(
            &self.dump,
            &self.tree,
            self.settings.makefiles.filter(),
            options.overlays.clone(),
        )
        .product_makefiles()?;

        let inputs = BuildGraphInputResolver::new(
            &self.graph,
            self.settings.inputs.shard_limit,
            InputFilter::new(&self.settings.inputs, &options.targets),
        );
        let closure = ClosureEngine::new(&index, &graph, &inputs).run(
            &options.targets,
            &makefiles,
            &overrides,
        )?;

        let manifest = std::fs::read_to_string(&options.manifest)?;
        let split = split_manifest(
            &manifest,
            &options.manifest,
            &closure.retained,
            &overrides.remove_set(),
        )?;
        atomic_write(&options.split_manifest, split.content.as_bytes())?;
        info!(
            path = %options.split_manifest.display(),
            kept = split.kept,
            dropped = split.dropped,
            "wrote split manifest"
        );

        if let Some(debug_file) = &options.debug_file {
            write_debug_report(debug_file, &closure.report.to_json()?)?;
        }

        Ok(SplitOutcome {
            passes: closure.passes(),
            retained: closure.retained,
            kept: split.kept,
            dropped: split.dropped,
            original: split.original,
            own: split.own,
        })
    }

    fn default_overrides(&self) -> SplitResult<Option<OverrideDocument>> {
        let settings = &self.settings.overrides;
        if !settings.use_default {
            return Ok(None);
        }
        match &settings.default_config {
            Some(path) => load_override_document(path).map(Some),
            None => builtin_overrides().map(Some),
        }
    }
}

fn write_debug_report(path: &Path, json: &str) -> SplitResult<()> {
    atomic_write(path, format!("{json}\n").as_bytes())?;
    info!(path = %path.display(), "wrote debug report");
    Ok(())
}
