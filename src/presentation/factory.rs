//! Use Case Factory
//!
//! Creates the split use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::SplitUseCase;
use crate::config::Settings;
use crate::domain::ports::ProjectLister;
use crate::error::SplitResult;
use crate::infrastructure::{
    CkatiStampDump, LocalSourceTree, NinjaBuildGraph, ProjectListFile, RepoListCommand,
};

use super::cli::Invocation;

/// Type alias for the concrete SplitUseCase with all dependencies
pub type ConcreteSplitUseCase =
    SplitUseCase<Box<dyn ProjectLister>, NinjaBuildGraph, CkatiStampDump, LocalSourceTree>;

/// Create a split use case rooted at the current directory.
///
/// Binaries come from the command line first, then `settings`.
pub fn create_split_use_case(
    invocation: &Invocation,
    settings: Settings,
) -> SplitResult<ConcreteSplitUseCase> {
    let lister: Box<dyn ProjectLister> = match &invocation.repo_list {
        Some(path) => Box::new(ProjectListFile::new(path)),
        None => Box::new(RepoListCommand::new(&settings.tools.repo)),
    };
    let ninja_binary = invocation
        .ninja_binary
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.tools.ninja));
    let graph = NinjaBuildGraph::new(ninja_binary, &invocation.ninja_build);
    let dump = CkatiStampDump::new(&settings.tools.stamp_dump, &invocation.kati_stamp);
    let tree = LocalSourceTree::current_dir()?;

    Ok(SplitUseCase::new(lister, graph, dump, tree, settings))
}
