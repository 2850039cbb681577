//! Module graph
//!
//! Relates build modules to the projects that own them, their class tags and
//! their (normalized) dependencies.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{ModuleRecord, ProjectIndex};
use crate::error::{SplitError, SplitResult};

use super::dependency_name::normalize_dependency;
use super::path_resolver::{self, OUTPUT_ROOT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleGraph {
    project_modules: BTreeMap<String, BTreeSet<String>>,
    module_project: BTreeMap<String, String>,
    header_libraries: BTreeSet<String>,
    module_deps: BTreeMap<String, Vec<String>>,
}

impl ModuleGraph {
    /// Place every module in its project.
    ///
    /// Modules without a path, or generated under the output root, are not
    /// placed but still contribute class and dependency information. Any other
    /// module whose path lies outside every known project is an error.
    pub fn build<I>(index: &ProjectIndex, records: I) -> SplitResult<Self>
    where
        I: IntoIterator<Item = ModuleRecord>,
    {
        let mut graph = Self::default();

        for record in records {
            if let Some(path) = record.path.as_deref() {
                if !path.starts_with(OUTPUT_ROOT) {
                    let project = path_resolver::resolve(index, path).ok_or_else(|| {
                        SplitError::UnknownModulePath {
                            module: record.name.clone(),
                            path: path.to_string(),
                        }
                    })?;
                    graph
                        .project_modules
                        .entry(project.name.clone())
                        .or_default()
                        .insert(record.name.clone());
                    graph.module_project.insert(record.name.clone(), project.name);
                }
            }

            let deps = record
                .dependencies
                .iter()
                .map(|raw| normalize_dependency(raw).to_string())
                .collect();
            graph.module_deps.insert(record.name.clone(), deps);
            if record.is_header_library() {
                graph.header_libraries.insert(record.name.clone());
            }
        }

        Ok(graph)
    }

    /// Modules owned by `project`, in name order.
    pub fn modules_of<'a>(&'a self, project: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.project_modules
            .get(project)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn project_of(&self, module: &str) -> Option<&str> {
        self.module_project.get(module).map(String::as_str)
    }

    pub fn dependencies_of(&self, module: &str) -> &[String] {
        self.module_deps
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Dependencies of `module` whose class marks them as header-only libraries.
    pub fn header_library_deps<'a>(&'a self, module: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.dependencies_of(module)
            .iter()
            .map(String::as_str)
            .filter(|dep| self.header_libraries.contains(*dep))
    }

    /// Number of modules placed in some project.
    pub fn placed_modules(&self) -> usize {
        self.module_project.len()
    }
}
