//! Subprocess helper shared by the tool adapters.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{SplitError, SplitResult};

/// Run `cmd` to completion and return its stdout.
///
/// A spawn failure or non-zero exit is fatal; stderr is carried in the error.
pub fn run_tool(tool: &str, cmd: &mut Command) -> SplitResult<String> {
    debug!(tool, command = ?cmd, "running external tool");

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| SplitError::tool(tool, format!("could not run: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SplitError::tool(
            tool,
            format!("{} {}", output.status, stderr.trim()).trim_end(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Non-empty, trimmed lines of tool output.
pub fn output_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
