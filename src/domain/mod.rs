//! Domain Layer
//!
//! The project-closure logic, free of process and file I/O.
//!
//! ## Structure
//!
//! - `entities/` - Projects, module records, overrides, debug provenance
//! - `value_objects/` - Immutable value types (ManifestDigest)
//! - `services/` - Path resolution, module graph, closure engine
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns tools or touches the file system directly
//! 2. **Ports & Adapters** - The build graph, stamp dump and source tree sit behind traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
