//! Override document reader
//!
//! ```xml
//! <config>
//!   <add_project name="vendor/my/needed/project" />
//!   <remove_project name="vendor/my/unused/project" />
//! </config>
//! ```

use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::entities::{OverrideDocument, Overrides};
use crate::error::{SplitError, SplitResult};

use super::xml::{element_name, required_attribute};

const ADD_PROJECT: &str = "add_project";
const REMOVE_PROJECT: &str = "remove_project";

/// Provenance recorded for entries of the built-in document.
pub const BUILTIN_SOURCE: &str = "<builtin>/default_config.xml";

const BUILTIN_DOCUMENT: &str = include_str!("default_config.xml");

/// The override document compiled into the binary.
pub fn builtin_overrides() -> SplitResult<OverrideDocument> {
    parse_override_document(BUILTIN_DOCUMENT, Path::new(BUILTIN_SOURCE))
}

/// Read and parse one override document from disk.
pub fn load_override_document(path: &Path) -> SplitResult<OverrideDocument> {
    let content = std::fs::read_to_string(path)?;
    parse_override_document(&content, path)
}

/// Merge `default` first, then every document in `paths` in the given order.
pub fn load_overrides(
    default: Option<OverrideDocument>,
    paths: &[PathBuf],
) -> SplitResult<Overrides> {
    let mut overrides = Overrides::new();
    if let Some(doc) = default {
        overrides.merge(doc);
    }
    for path in paths {
        overrides.merge(load_override_document(path)?);
    }
    Ok(overrides)
}

/// Extract the add/remove project names from one document.
///
/// Only direct children of the root element are considered.
pub fn parse_override_document(content: &str, source: &Path) -> SplitResult<OverrideDocument> {
    let mut reader = Reader::from_str(content);
    let mut doc = OverrideDocument {
        source: source.to_path_buf(),
        ..OverrideDocument::default()
    };
    let mut depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| SplitError::xml(source, e))?;
        let (element, opens) = match event {
            Event::Start(e) => (e, true),
            Event::Empty(e) => (e, false),
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        if depth == 1 {
            let tag = element_name(&element);
            if tag == ADD_PROJECT || tag == REMOVE_PROJECT {
                let name = required_attribute(&element, "name", source)?;
                if tag == ADD_PROJECT {
                    doc.add.insert(name);
                } else {
                    doc.remove.insert(name);
                }
            }
        }

        if opens {
            depth += 1;
        }
    }

    Ok(doc)
}
