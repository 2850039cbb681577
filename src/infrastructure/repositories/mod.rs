//! Repository Implementations
//!
//! Readers and writers for the documents the split consumes and produces.

pub mod manifest;
pub mod module_info;
pub mod overrides;
pub mod project_list;
mod xml;

pub use manifest::{split_manifest, SplitManifest, DIGEST_ORIGINAL, DIGEST_SELF};
pub use module_info::{load_module_info, parse_module_info};
pub use overrides::{
    builtin_overrides, load_override_document, load_overrides, parse_override_document,
    BUILTIN_SOURCE,
};
pub use project_list::ProjectListFile;
