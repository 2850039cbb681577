//! Manifest rewriter
//!
//! Drops every top-level `<project>` whose name is not kept and appends two
//! `<hash>` elements: the digest of the manifest as read (`original`) and the
//! digest of the split document carrying that first hash (`self`). Everything
//! else in the document passes through untouched.

use std::collections::BTreeSet;
use std::path::Path;

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::domain::value_objects::ManifestDigest;
use crate::error::{SplitError, SplitResult};

use super::xml::{element_name, required_attribute};

pub const DIGEST_ORIGINAL: &str = "original";
pub const DIGEST_SELF: &str = "self";

/// A rewritten manifest and the digests embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitManifest {
    pub content: String,
    pub original: ManifestDigest,
    pub own: ManifestDigest,
    /// Project elements kept / dropped.
    pub kept: usize,
    pub dropped: usize,
}

/// Split `manifest` down to the projects in `retained` and not in `remove`.
pub fn split_manifest(
    manifest: &str,
    file: &Path,
    retained: &BTreeSet<String>,
    remove: &BTreeSet<String>,
) -> SplitResult<SplitManifest> {
    let original = ManifestDigest::of(DIGEST_ORIGINAL, manifest.as_bytes());

    let keep: BTreeSet<String> = retained.difference(remove).cloned().collect();
    let filtered = filter_projects(manifest, file, &keep)?;
    let with_original = append_to_root(&filtered.content, file, &hash_element(&original))?;
    let own = ManifestDigest::of(DIGEST_SELF, with_original.as_bytes());
    let content = append_to_root(&with_original, file, &hash_element(&own))?;

    Ok(SplitManifest {
        content,
        original,
        own,
        kept: filtered.kept,
        dropped: filtered.dropped,
    })
}

fn hash_element(digest: &ManifestDigest) -> BytesStart<'static> {
    let mut element = BytesStart::new("hash");
    element.push_attribute(("name", digest.name()));
    element.push_attribute(("type", ManifestDigest::ALGORITHM));
    element.push_attribute(("value", digest.hex()));
    element
}

struct Filtered {
    content: String,
    kept: usize,
    dropped: usize,
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn finish(writer: Writer<Vec<u8>>, file: &Path) -> SplitResult<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| SplitError::xml(file, e))
}

fn filter_projects(manifest: &str, file: &Path, keep: &BTreeSet<String>) -> SplitResult<Filtered> {
    let mut reader = Reader::from_str(manifest);
    let mut writer = Writer::new(Vec::new());

    let mut depth = 0usize;
    let mut kept = 0usize;
    let mut dropped = 0usize;
    // Indentation before a top-level element is held back until we know
    // whether the element survives.
    let mut pending: Option<BytesText<'_>> = None;

    loop {
        let event = reader.read_event().map_err(|e| SplitError::xml(file, e))?;
        match event {
            Event::Eof => break,
            Event::Text(text) if depth == 1 && is_blank(&text) => {
                if let Some(prev) = pending.replace(text) {
                    writer
                        .write_event(Event::Text(prev))
                        .map_err(|e| SplitError::xml(file, e))?;
                }
                continue;
            }
            Event::Start(ref e) | Event::Empty(ref e)
                if depth == 1 && element_name(e) == "project" =>
            {
                let name = required_attribute(e, "name", file)?;
                if !keep.contains(&name) {
                    if let Event::Start(ref e) = event {
                        reader
                            .read_to_end(e.name())
                            .map_err(|err| SplitError::xml(file, err))?;
                    }
                    pending = None;
                    dropped += 1;
                    continue;
                }
                kept += 1;
            }
            _ => {}
        }

        if let Some(prev) = pending.take() {
            writer
                .write_event(Event::Text(prev))
                .map_err(|e| SplitError::xml(file, e))?;
        }
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        writer.write_event(event).map_err(|e| SplitError::xml(file, e))?;
    }

    Ok(Filtered {
        content: finish(writer, file)?,
        kept,
        dropped,
    })
}

/// Insert `element` as the last child of the root element.
fn append_to_root(manifest: &str, file: &Path, element: &BytesStart<'_>) -> SplitResult<String> {
    let mut reader = Reader::from_str(manifest);
    let mut writer = Writer::new(Vec::new());

    let mut depth = 0usize;
    let mut after_newline = false;
    let mut appended = false;

    loop {
        let event = reader.read_event().map_err(|e| SplitError::xml(file, e))?;
        match event {
            Event::Eof => break,
            Event::Empty(ref root) if depth == 0 && !appended => {
                writer
                    .write_event(Event::Start(root.borrow()))
                    .map_err(|e| SplitError::xml(file, e))?;
                writer
                    .write_event(Event::Empty(element.borrow()))
                    .map_err(|e| SplitError::xml(file, e))?;
                writer
                    .write_event(Event::End(root.to_end()))
                    .map_err(|e| SplitError::xml(file, e))?;
                appended = true;
                continue;
            }
            Event::End(_) if depth == 1 && !appended => {
                if after_newline {
                    writer
                        .write_event(Event::Text(BytesText::from_escaped("  ")))
                        .map_err(|e| SplitError::xml(file, e))?;
                }
                writer
                    .write_event(Event::Empty(element.borrow()))
                    .map_err(|e| SplitError::xml(file, e))?;
                if after_newline {
                    writer
                        .write_event(Event::Text(BytesText::from_escaped("\n")))
                        .map_err(|e| SplitError::xml(file, e))?;
                }
                appended = true;
            }
            _ => {}
        }

        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        after_newline = matches!(&event, Event::Text(t) if t.ends_with(b"\n"));
        writer.write_event(event).map_err(|e| SplitError::xml(file, e))?;
    }

    if !appended {
        return Err(SplitError::xml(file, "document has no root element"));
    }
    finish(writer, file)
}
