use crate::{
    Slice, SliceMut,
    iter_raw::{IterRaw, IterRawAdapter, iter_with_raw},
    raw::RawSlice,
};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

/// Mutable [`SliceMut`] iterator.
///
/// This struct is created by the [`iter_mut`] method.
///
/// [`iter_mut`]: SliceMut::iter_mut
pub struct IterMut<'a, T> {
    pub(crate) iter_raw: IterRaw<T, Self>,
    pub(crate) _marker: PhantomData<&'a mut T>,
}

unsafe impl<T> Send for IterMut<'_, T> where T: Send {}
unsafe impl<T> Sync for IterMut<'_, T> where T: Sync {}

impl<T> Debug for IterMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

impl<T> Default for IterMut<'_, T> {
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

impl<'a, T> IterRawAdapter<T> for IterMut<'a, T> {
    type Item = &'a mut T;

    unsafe fn item_from_raw(raw: RawSlice<T>) -> Self::Item {
        // SAFETY: The caller guarantees raw contains at least one element
        unsafe { raw.get_mut(0) }
    }
}

impl<'a, T> IterMut<'a, T> {
    /// Returns a view of all elements that have not been yielded yet.
    pub fn as_slice(&self) -> Slice<'_, T> {
        // SAFETY: The view borrows from self and cannot outlive it
        unsafe { self.iter_raw.as_slice() }
    }

    /// Returns a mutable view of all elements that have not been yielded yet.
    pub fn as_mut_slice(&mut self) -> SliceMut<'_, T> {
        // SAFETY: The view borrows from self and cannot outlive it
        unsafe { self.iter_raw.as_mut_slice() }
    }

    /// Returns a mutable view of all elements that have not been yielded yet.
    ///
    /// To avoid creating `&mut` references that alias, this is forced to
    /// consume the iterator.
    pub fn into_slice(self) -> SliceMut<'a, T> {
        SliceMut {
            raw: self.iter_raw.raw,
            marker: PhantomData,
        }
    }
}

iter_with_raw!(IterMut<'a, T>, 'a);
