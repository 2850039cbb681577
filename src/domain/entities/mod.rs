//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Project` / `ProjectIndex` - manifest projects keyed by checkout path
//! - `ModuleRecord` - a validated module-info entry
//! - `Overrides` - manual add/remove sets with provenance
//! - `DebugReport` - per-project provenance for the debug file

mod debug;
mod module;
mod overrides;
mod project;

pub use debug::{DebugRecord, DebugReport};
pub use module::{ModuleRecord, HEADER_LIBRARIES};
pub use overrides::{OverrideDocument, Overrides};
pub use project::{Project, ProjectIndex};
