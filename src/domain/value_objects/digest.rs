//! Manifest Digest Value Object
//!
//! A named content digest attached to a split manifest so readers can tell
//! which original it came from and whether it was edited afterwards.

use std::fmt;

use sha2::{Digest, Sha256};

/// Named SHA-256 digest of a manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestDigest {
    name: String,
    hex: String,
}

impl ManifestDigest {
    /// Value of the `type` attribute on emitted `<hash>` elements
    pub const ALGORITHM: &'static str = "sha256";

    /// Compute the digest of `content` and label it `name`.
    pub fn of(name: impl Into<String>, content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        Self {
            name: name.into(),
            hex: format!("{:x}", hash),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase hex digest
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Check whether `content` hashes to this digest
    pub fn matches(&self, content: &[u8]) -> bool {
        Self::of(self.name.clone(), content).hex == self.hex
    }
}

impl fmt::Display for ManifestDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}:{}", self.name, Self::ALGORITHM, self.hex)
    }
}
