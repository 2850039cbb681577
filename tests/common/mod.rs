//! Common test utilities for manifest-split CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated source tree with fake build tools
//! - Fixtures: manifest, module-info and listing content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
