//! Project path resolution
//!
//! Maps any file path in the source tree to the project that contains it by
//! longest-prefix match over the project index.

use std::collections::BTreeMap;

use crate::domain::entities::{Project, ProjectIndex};

/// Root of the build output tree; nothing below it is a project source.
pub const OUTPUT_ROOT: &str = "out/";

/// Whether `path` can belong to a project at all.
///
/// Build outputs and absolute paths (toolchains, host files) never do.
pub fn is_source_path(path: &str) -> bool {
    !path.starts_with(OUTPUT_ROOT) && !path.starts_with('/')
}

/// Find the innermost project containing `path`.
///
/// Prefixes are tried from the full path down to the first segment, so for
/// projects `a` and `a/b` the path `a/b/c/file` resolves to `a/b`.
pub fn resolve(index: &ProjectIndex, path: &str) -> Option<Project> {
    let mut candidate = path;
    loop {
        if let Some(project) = index.project_at(candidate) {
            return Some(project);
        }
        match candidate.rfind('/') {
            Some(cut) => candidate = &candidate[..cut],
            None => return None,
        }
    }
}

/// Group source paths by the name of the project owning them.
///
/// Output-root and absolute paths are skipped, as are paths outside every
/// known project.
pub fn input_projects<'p, I>(index: &ProjectIndex, paths: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'p str>,
{
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in paths {
        if !is_source_path(path) {
            continue;
        }
        if let Some(project) = resolve(index, path) {
            grouped.entry(project.name).or_default().push(path.to_string());
        }
    }
    grouped
}
