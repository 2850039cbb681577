//! File System Implementations
//!
//! - `LocalSourceTree` - the checked-out tree, relative to a root directory
//! - `writer` - atomic output file writes

mod source_tree;
pub mod writer;

pub use source_tree::LocalSourceTree;
pub use writer::atomic_write;
