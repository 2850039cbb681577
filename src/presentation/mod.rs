//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap) and default resolution
//! - Creating the use case with infrastructure dependencies
//! - Logging setup
//!
//! ## Structure
//!
//! - `cli` - Command line and environment defaults
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod factory;
pub mod logging;

pub use cli::{Cli, Invocation};
pub use factory::create_split_use_case;
