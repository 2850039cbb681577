//! Ninja build-graph adapter (`ninja -t inputs`)

use std::path::PathBuf;
use std::process::Command;

use crate::domain::ports::BuildGraph;
use crate::error::SplitResult;

use super::command::{output_lines, run_tool};

/// Queries a combined ninja file for the inputs of modules.
#[derive(Debug, Clone)]
pub struct NinjaBuildGraph {
    binary: PathBuf,
    build_file: PathBuf,
}

impl NinjaBuildGraph {
    pub fn new(binary: impl Into<PathBuf>, build_file: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            build_file: build_file.into(),
        }
    }

    fn command(&self, modules: &[String]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-f")
            .arg(&self.build_file)
            .arg("-t")
            .arg("inputs")
            .arg("-d")
            .args(modules);
        cmd
    }
}

impl BuildGraph for NinjaBuildGraph {
    fn query_inputs(&self, modules: &[String]) -> SplitResult<Vec<String>> {
        let stdout = run_tool("ninja", &mut self.command(modules))?;
        Ok(output_lines(&stdout))
    }
}
