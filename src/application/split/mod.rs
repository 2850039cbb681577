//! Split Module
//!
//! Orchestrates one manifest split.
//!
//! ## Structure
//!
//! - `options` - Paths and targets for a run (`SplitOptions`)
//! - `result` - Summary of a finished run (`SplitOutcome`)
//! - `use_case` - Core use case logic (`SplitUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use manifest_split::application::split::{SplitOptions, SplitUseCase};
//!
//! let use_case = SplitUseCase::new(lister, ninja, stamp_dump, tree, settings);
//! let outcome = use_case.execute(&options)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::SplitOptions;
pub use result::SplitOutcome;
pub use use_case::SplitUseCase;
