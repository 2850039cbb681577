//! Stamp dump port - abstraction over the build-log artifact reader

use crate::error::SplitResult;

/// Lists every makefile the product configuration step parsed.
pub trait StampDump {
    fn parsed_makefiles(&self) -> SplitResult<Vec<String>>;
}

impl<T: StampDump + ?Sized> StampDump for &T {
    fn parsed_makefiles(&self) -> SplitResult<Vec<String>> {
        (**self).parsed_makefiles()
    }
}
