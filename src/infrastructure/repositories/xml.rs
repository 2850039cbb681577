//! Small quick-xml helpers shared by the manifest and override readers.

use std::path::Path;

use quick_xml::events::BytesStart;

use crate::error::{SplitError, SplitResult};

pub(crate) fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Unescaped value of attribute `key`, if present.
fn attribute(e: &BytesStart<'_>, key: &str, file: &Path) -> SplitResult<Option<String>> {
    match e.try_get_attribute(key) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|v| Some(v.into_owned()))
            .map_err(|err| SplitError::xml(file, err)),
        Ok(None) => Ok(None),
        Err(err) => Err(SplitError::xml(file, err)),
    }
}

/// Value of attribute `key`; its absence is an error naming the element.
pub(crate) fn required_attribute(e: &BytesStart<'_>, key: &str, file: &Path) -> SplitResult<String> {
    attribute(e, key, file)?.ok_or_else(|| SplitError::MissingAttribute {
        element: element_name(e),
        attribute: key.to_string(),
        file: file.to_path_buf(),
    })
}
