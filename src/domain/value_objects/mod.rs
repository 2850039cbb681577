//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod digest;

pub use digest::ManifestDigest;
