//! Closure engine
//!
//! Computes the fixed point of projects needed to build a set of targets:
//!
//! 1. Seed with projects owning the targets' build inputs, projects owning
//!    product makefiles, and manually added projects, minus removed ones.
//! 2. Repeatedly expand every not-yet-checked project: pull in the owners of
//!    header-library dependencies (invisible to the build graph) and the
//!    owners of its modules' build inputs.
//! 3. Stop once a pass adds nothing, then apply removals once more.
//!
//! Removal is only applied at seeding and at the end. A removed project that
//! is rediscovered mid-loop is still expanded and may pull in others.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::domain::entities::{DebugReport, Overrides, ProjectIndex};
use crate::domain::ports::InputQuery;
use crate::error::SplitResult;

use super::module_graph::ModuleGraph;
use super::path_resolver::input_projects;

/// Result of a closure computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    /// Final project names, removals applied.
    pub retained: BTreeSet<String>,
    /// Per-project provenance.
    pub report: DebugReport,
    /// Size of the retained set once seeding finished.
    pub seed_size: usize,
    /// Size of the retained set at the end of each pass, in order.
    pub pass_sizes: Vec<usize>,
}

impl Closure {
    pub fn passes(&self) -> usize {
        self.pass_sizes.len()
    }
}

pub struct ClosureEngine<'a> {
    index: &'a ProjectIndex,
    graph: &'a ModuleGraph,
    inputs: &'a dyn InputQuery,
}

impl<'a> ClosureEngine<'a> {
    pub fn new(index: &'a ProjectIndex, graph: &'a ModuleGraph, inputs: &'a dyn InputQuery) -> Self {
        Self {
            index,
            graph,
            inputs,
        }
    }

    /// Compute the closure for `targets`.
    ///
    /// `makefiles` are product makefile paths already resolved against the
    /// tree and its overlays.
    pub fn run(
        &self,
        targets: &[String],
        makefiles: &BTreeSet<String>,
        overrides: &Overrides,
    ) -> SplitResult<Closure> {
        let mut report = DebugReport::new();

        let direct = self.inputs.inputs(targets)?;
        let mut retained: BTreeSet<String> =
            input_projects(self.index, direct.iter().map(String::as_str))
                .into_keys()
                .collect();
        for project in &retained {
            report.entry(project).direct_input = true;
        }
        info!(
            projects = retained.len(),
            targets = %targets.join(" "),
            "projects needed for build-graph direct dependencies of targets"
        );

        let makefile_projects = input_projects(self.index, makefiles.iter().map(String::as_str));
        for (project, files) in makefile_projects {
            report.entry(&project).kati_makefiles = files;
            retained.insert(project);
        }
        info!(projects = retained.len(), "after including product makefile projects");

        for (project, sources) in overrides.added() {
            report.entry(project).manual_add_configs = sources.to_vec();
            retained.insert(project.to_string());
        }
        for (project, sources) in overrides.removed() {
            report.entry(project).manual_remove_configs = sources.to_vec();
        }
        info!(projects = retained.len(), "after including manual additions");

        // Removed projects never seed the iterative phase.
        retained.retain(|project| !overrides.is_removed(project));
        let seed_size = retained.len();

        let mut checked: BTreeSet<String> = BTreeSet::new();
        let mut pass_sizes = Vec::new();

        loop {
            let frontier: Vec<String> = retained.difference(&checked).cloned().collect();
            if frontier.is_empty() {
                break;
            }
            let pass = pass_sizes.len() + 1;
            checked.extend(frontier.iter().cloned());

            let mut modules: Vec<String> = Vec::new();
            let mut deps_additions: BTreeSet<String> = BTreeSet::new();
            for project in &frontier {
                for module in self.graph.modules_of(project) {
                    modules.push(module.to_string());
                    for dep in self.graph.header_library_deps(module) {
                        match self.graph.project_of(dep) {
                            Some(owner) if !retained.contains(owner) => {
                                deps_additions.insert(owner.to_string());
                            }
                            Some(_) => {}
                            None => debug!(module, dep, "header library has no owning project"),
                        }
                    }
                }
            }

            for project in &deps_additions {
                report.entry(project).deps_input = true;
            }
            retained.extend(deps_additions);
            info!(
                pass,
                projects = retained.len(),
                "after including HEADER_LIBRARIES dependencies"
            );

            let adjacent_inputs = self.inputs.inputs(&modules)?;
            let adjacent = input_projects(self.index, adjacent_inputs.iter().map(String::as_str));
            for project in adjacent.keys() {
                report.entry(project).adjacent_input = true;
            }
            retained.extend(adjacent.into_keys());
            info!(
                pass,
                modules = modules.len(),
                projects = retained.len(),
                "after including adjacent-module build-graph dependencies"
            );

            pass_sizes.push(retained.len());
        }

        retained.retain(|project| !overrides.is_removed(project));
        info!(projects = retained.len(), passes = pass_sizes.len(), "closure complete");

        Ok(Closure {
            retained,
            report,
            seed_size,
            pass_sizes,
        })
    }
}
