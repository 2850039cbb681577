//! Build module records from module-info metadata.

use crate::error::{SplitError, SplitResult};

/// Class tag of modules whose edges the build-graph query cannot see.
pub const HEADER_LIBRARIES: &str = "HEADER_LIBRARIES";

/// A validated module-info entry.
///
/// Construction checks that the entry carries a class; everything the
/// closure loop reads later is guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    pub name: String,
    /// First declared source path, if any.
    pub path: Option<String>,
    pub class: String,
    /// Raw dependency names as listed in module-info.
    pub dependencies: Vec<String>,
}

impl ModuleRecord {
    pub fn new(
        name: impl Into<String>,
        paths: Vec<String>,
        classes: Vec<String>,
        dependencies: Vec<String>,
    ) -> SplitResult<Self> {
        let name = name.into();
        let class = classes
            .into_iter()
            .next()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| SplitError::InvalidModule {
                module: name.clone(),
                message: "empty 'class' list".to_string(),
            })?;
        let path = paths.into_iter().find(|p| !p.is_empty());

        Ok(Self {
            name,
            path,
            class,
            dependencies,
        })
    }

    pub fn is_header_library(&self) -> bool {
        self.class == HEADER_LIBRARIES
    }
}
