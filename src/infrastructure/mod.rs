//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Source tree access and atomic writes
//! - `repositories/` - Readers and writers for manifests, overrides, module info and listings
//! - `tools/` - External tools (ninja, ckati_stamp_dump, repo)

pub mod fs;
pub mod repositories;
pub mod tools;

// Re-export for convenience
pub use fs::{atomic_write, LocalSourceTree};
pub use repositories::ProjectListFile;
pub use tools::{CkatiStampDump, NinjaBuildGraph, RepoListCommand};
