//! Project listing read from a file holding pre-processed `repo list` output.

use std::path::PathBuf;

use crate::domain::ports::ProjectLister;
use crate::error::SplitResult;

#[derive(Debug, Clone)]
pub struct ProjectListFile {
    path: PathBuf,
}

impl ProjectListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectLister for ProjectListFile {
    fn listing(&self) -> SplitResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
