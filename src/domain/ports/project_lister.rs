//! Project lister port - where the `path : name` project listing comes from

use crate::error::SplitResult;

pub trait ProjectLister {
    /// Raw listing text, one `path : name` pair per line.
    fn listing(&self) -> SplitResult<String>;
}

impl<T: ProjectLister + ?Sized> ProjectLister for Box<T> {
    fn listing(&self) -> SplitResult<String> {
        (**self).listing()
    }
}
