//! manifest-split - trims a repo manifest to what a build actually needs
//!
//! Given a set of build targets, manifest-split works out which source
//! projects the build reads (through the ninja build graph, the kati stamp
//! and module-info.json), then writes a copy of the manifest holding only
//! those projects.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{SplitOptions, SplitOutcome, SplitUseCase};
pub use config::Settings;
pub use domain::entities::{DebugReport, Overrides, ProjectIndex};
pub use domain::services::{Closure, ClosureEngine, ModuleGraph};
pub use error::{SplitError, SplitResult};
