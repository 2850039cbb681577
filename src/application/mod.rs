//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SplitUseCase` - Orchestrates one manifest split (load, resolve, close, rewrite)
//!
//! ## Services
//!
//! - `BuildGraphInputResolver` - Batched, filtered build-graph input queries
//! - `MakefileResolver` - Product makefiles from the kati stamp

pub mod inputs;
pub mod makefiles;
pub mod split;

pub use inputs::{BuildGraphInputResolver, InputFilter};
pub use makefiles::MakefileResolver;
pub use split::{SplitOptions, SplitOutcome, SplitUseCase};
