//! `repo list` adapter

use std::path::PathBuf;
use std::process::Command;

use crate::domain::ports::ProjectLister;
use crate::error::SplitResult;

use super::command::run_tool;

/// Lists projects by running `repo list` in the current checkout.
#[derive(Debug, Clone)]
pub struct RepoListCommand {
    binary: PathBuf,
}

impl RepoListCommand {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl ProjectLister for RepoListCommand {
    fn listing(&self) -> SplitResult<String> {
        run_tool("repo list", Command::new(&self.binary).arg("list"))
    }
}
