use crate::{
    Slice,
    iter_raw::{IterRaw, IterRawAdapter, iter_with_raw},
    raw::RawSlice,
};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

/// Immutable [`Slice`] iterator.
///
/// This struct is created by the [`iter`] method.
///
/// [`iter`]: Slice::iter
pub struct Iter<'a, T> {
    pub(crate) iter_raw: IterRaw<T, Self>,
    pub(crate) _marker: PhantomData<&'a T>,
}

unsafe impl<T> Send for Iter<'_, T> where T: Sync {}
unsafe impl<T> Sync for Iter<'_, T> where T: Sync {}

impl<'a, T> Iter<'a, T> {
    /// Returns a view of all elements that have not been yielded yet.
    pub fn as_slice(&self) -> Slice<'a, T> {
        // SAFETY: The view borrows the same region as the iterator for 'a
        unsafe { self.iter_raw.as_slice() }
    }
}

impl<T> Debug for Iter<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            iter_raw: IterRaw {
                raw: RawSlice::dangling(),
                adapter: PhantomData,
            },
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter_raw: self.iter_raw,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IterRawAdapter<T> for Iter<'a, T> {
    type Item = &'a T;

    unsafe fn item_from_raw(raw: RawSlice<T>) -> Self::Item {
        // SAFETY: The caller guarantees raw contains at least one element
        unsafe { raw.get(0) }
    }
}

iter_with_raw!(Iter<'a, T>, 'a);
