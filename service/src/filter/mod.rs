//! [`Filter`] definitions.

pub mod buyer;
pub mod property;

/// Predicate deciding whether an item passes.
pub trait Filter<T: ?Sized> {
    /// Tests whether the provided `item` passes this [`Filter`].
    fn test(&self, item: &T) -> bool;
}

impl<T: ?Sized, F: Filter<T> + ?Sized> Filter<T> for &F {
    fn test(&self, item: &T) -> bool {
        (**self).test(item)
    }
}

/// [`Filter`] passing every item.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Everything;

impl<T: ?Sized> Filter<T> for Everything {
    fn test(&self, _: &T) -> bool {
        true
    }
}
