//! Domain Services
//!
//! Stateless business logic operating on domain entities.
//! - `path_resolver` - longest-prefix path → project lookup
//! - `dependency_name` - synthetic dependency name normalization
//! - `module_graph` - module ↔ project, class and dependency maps
//! - `makefile_filter` - product makefile selection rules
//! - `closure` - the fixed-point project closure

pub mod closure;
pub mod dependency_name;
pub mod makefile_filter;
pub mod module_graph;
pub mod path_resolver;

pub use closure::{Closure, ClosureEngine};
pub use dependency_name::{normalize_dependency, SyntheticPattern, SYNTHETIC_PATTERNS};
pub use makefile_filter::{normalize_path, strip_overlay, MakefileFilter};
pub use module_graph::ModuleGraph;
pub use path_resolver::{input_projects, is_source_path, resolve, OUTPUT_ROOT};
