use crate::{Slice, SliceMut};

/// Similar to `AsRef<Slice>`, but returns a value type rather than a
/// reference.
pub trait AsSlice {
    /// The type that the view contains.
    type Item;

    /// Returns a [`Slice`] containing the entire region.
    fn as_slice(&self) -> Slice<'_, Self::Item>;
}

/// Similar to `AsMut<Slice>`, but returns a value type rather than a mutable
/// reference.
pub trait AsMutSlice: AsSlice {
    /// Returns a [`SliceMut`] containing the entire region.
    fn as_mut_slice(&mut self) -> SliceMut<'_, Self::Item>;
}

impl<T> AsSlice for [T] {
    type Item = T;

    fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T> AsMutSlice for [T] {
    fn as_mut_slice(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

impl<T, const N: usize> AsSlice for [T; N] {
    type Item = T;

    fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T, const N: usize> AsMutSlice for [T; N] {
    fn as_mut_slice(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

impl<T> AsSlice for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T> AsMutSlice for Vec<T> {
    fn as_mut_slice(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}
