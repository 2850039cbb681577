//! Dependency name normalization
//!
//! module-info lists some dependencies by the path of a synthetic build
//! intermediate rather than by module name. Those are rewritten back to the
//! library they stand for so class and project lookups succeed.

/// A recognized synthetic-intermediate path shape: `{prefix}<library>{suffix}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticPattern {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// Every intermediate-path shape rewritten by [`normalize_dependency`].
pub const SYNTHETIC_PATTERNS: &[SyntheticPattern] = &[SyntheticPattern {
    prefix: "out/target/common/obj/JAVA_LIBRARIES/",
    suffix: "_intermediates/classes-header.jar",
}];

impl SyntheticPattern {
    /// Library name encoded in `raw`, if `raw` has this shape.
    pub fn library<'a>(&self, raw: &'a str) -> Option<&'a str> {
        raw.strip_prefix(self.prefix)?
            .strip_suffix(self.suffix)
            .filter(|lib| !lib.is_empty())
    }
}

/// Map a raw dependency name to the module name it refers to.
pub fn normalize_dependency(raw: &str) -> &str {
    normalize_with(SYNTHETIC_PATTERNS, raw)
}

/// [`normalize_dependency`] against an explicit pattern table.
pub fn normalize_with<'a>(patterns: &[SyntheticPattern], raw: &'a str) -> &'a str {
    patterns
        .iter()
        .find_map(|pattern| pattern.library(raw))
        .unwrap_or(raw)
}
