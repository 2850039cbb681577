//! External tool adapters
//!
//! Each adapter is one blocking subprocess invocation with no timeout.

mod command;
mod ninja;
mod repo;
mod stamp_dump;

pub use command::{output_lines, run_tool};
pub use ninja::NinjaBuildGraph;
pub use repo::RepoListCommand;
pub use stamp_dump::CkatiStampDump;
