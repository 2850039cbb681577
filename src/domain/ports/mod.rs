//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_graph;
pub mod project_lister;
pub mod source_tree;
pub mod stamp_dump;

pub use build_graph::{BuildGraph, InputQuery};
pub use project_lister::ProjectLister;
pub use source_tree::SourceTree;
pub use stamp_dump::StampDump;
