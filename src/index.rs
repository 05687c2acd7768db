use crate::{Slice, SliceMut};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A helper trait for indexing operations.
///
/// This powers [`Slice::get`] and [`SliceMut::get_mut`], which accept either
/// a single position or a range of positions.
pub trait SliceIndex<T> {
    /// The output type returned by non-`mut` methods.
    type Output<'a>
    where
        T: 'a;

    /// The output type returned by `mut` methods.
    type OutputMut<'a>
    where
        T: 'a;

    /// Returns the output at this location, if in bounds.
    fn get<'a>(self, slice: Slice<'a, T>) -> Option<Self::Output<'a>>;

    /// Returns the mutable output at this location, if in bounds.
    fn get_mut<'a, 'b>(self, slice: &'a mut SliceMut<'b, T>) -> Option<Self::OutputMut<'a>>;
}

impl<T> SliceIndex<T> for usize {
    type Output<'a>
        = &'a T
    where
        T: 'a;

    type OutputMut<'a>
        = &'a mut T
    where
        T: 'a;

    fn get<'a>(self, slice: Slice<'a, T>) -> Option<Self::Output<'a>> {
        slice.at(self).ok()
    }

    fn get_mut<'a, 'b>(self, slice: &'a mut SliceMut<'b, T>) -> Option<Self::OutputMut<'a>> {
        slice.at_mut(self).ok()
    }
}

impl<T> SliceIndex<T> for Range<usize> {
    type Output<'a>
        = Slice<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = SliceMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, slice: Slice<'a, T>) -> Option<Self::Output<'a>> {
        slice.slice_range(self.start, self.end).ok()
    }

    fn get_mut<'a, 'b>(self, slice: &'a mut SliceMut<'b, T>) -> Option<Self::OutputMut<'a>> {
        slice.slice_range_mut(self.start, self.end).ok()
    }
}

impl<T> SliceIndex<T> for RangeTo<usize> {
    type Output<'a>
        = Slice<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = SliceMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, slice: Slice<'a, T>) -> Option<Self::Output<'a>> {
        slice.prefix(self.end).ok()
    }

    fn get_mut<'a, 'b>(self, slice: &'a mut SliceMut<'b, T>) -> Option<Self::OutputMut<'a>> {
        slice.prefix_mut(self.end).ok()
    }
}

impl<T> SliceIndex<T> for RangeFrom<usize> {
    type Output<'a>
        = Slice<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = SliceMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, slice: Slice<'a, T>) -> Option<Self::Output<'a>> {
        slice.slice_range(self.start, slice.len()).ok()
    }

    fn get_mut<'a, 'b>(self, slice: &'a mut SliceMut<'b, T>) -> Option<Self::OutputMut<'a>> {
        let end = slice.len();
        slice.slice_range_mut(self.start, end).ok()
    }
}

impl<T> SliceIndex<T> for RangeFull {
    type Output<'a>
        = Slice<'a, T>
    where
        T: 'a;

    type OutputMut<'a>
        = SliceMut<'a, T>
    where
        T: 'a;

    fn get<'a>(self, slice: Slice<'a, T>) -> Option<Self::Output<'a>> {
        Some(slice)
    }

    fn get_mut<'a, 'b>(self, slice: &'a mut SliceMut<'b, T>) -> Option<Self::OutputMut<'a>> {
        Some(slice.as_mut_slice())
    }
}
