use crate::{Slice, SliceMut, raw::RawSlice};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

/// Used by [`IterRaw`] to produce the first element of a [`RawSlice`] in
/// different forms.
pub trait IterRawAdapter<T> {
    /// The desired form of the first element, such as `&T` or `&mut T`.
    type Item;

    /// Produces the first element of `raw` in the desired form.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `raw` contains at least one element and
    /// that the produced reference respects the aliasing rules.
    unsafe fn item_from_raw(raw: RawSlice<T>) -> Self::Item;
}

/// The traversal engine shared by [`Iter`] and [`IterMut`].
///
/// Each step shrinks the recorded subrange from the front or the back, so an
/// exhausted iterator ends as an empty range. The adapter decides whether the
/// yielded element is shared or mutable.
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
pub struct IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    pub(crate) raw: RawSlice<T>,
    pub(crate) adapter: PhantomData<A>,
}

impl<T, A> IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    /// Returns the remaining subrange as a shared view.
    ///
    /// # Safety
    ///
    /// This function returns an unbounded lifetime to which the caller must
    /// apply a suitable bound that respects the aliasing rules.
    pub(crate) unsafe fn as_slice<'a>(&self) -> Slice<'a, T> {
        Slice {
            raw: self.raw,
            marker: PhantomData,
        }
    }

    /// Returns the remaining subrange as a mutable view.
    ///
    /// # Safety
    ///
    /// This function returns an unbounded lifetime to which the caller must
    /// apply a suitable bound that respects the aliasing rules.
    pub(crate) unsafe fn as_mut_slice<'a>(&mut self) -> SliceMut<'a, T> {
        SliceMut {
            raw: self.raw,
            marker: PhantomData,
        }
    }
}

impl<T, A> Clone for IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for IterRaw<T, A> where A: IterRawAdapter<T> {}

impl<T, A> Debug for IterRaw<T, A>
where
    T: Debug,
    A: IterRawAdapter<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // SAFETY: The slice does not outlive this call
        unsafe { self.as_slice() }.fmt(f)
    }
}

impl<T, A> Iterator for IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let len = self.raw.len();
        if len == 0 {
            None
        } else {
            // SAFETY: Our length is nonzero so raw points to a valid element
            let out = Some(unsafe { A::item_from_raw(self.raw) });
            // SAFETY: There is at least one element in raw
            self.raw = unsafe { self.raw.sub(1, len - 1) };
            out
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.raw.len();
        (len, Some(len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.raw.len()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let len = self.raw.len();
        if n >= len {
            // SAFETY: An empty prefix is always a valid subrange
            self.raw = unsafe { self.raw.sub(0, 0) };
            None
        } else {
            // SAFETY: n < len so the subrange stays within the region
            let rest = unsafe { self.raw.sub(n, len - n) };
            // SAFETY: rest is nonempty so it points to a valid element
            let out = Some(unsafe { A::item_from_raw(rest) });

            // nth(n) consumes item n so we need to advance one more
            // SAFETY: rest contains at least one element
            self.raw = unsafe { rest.sub(1, len - n - 1) };

            out
        }
    }

    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        let len = self.raw.len();
        if len == 0 {
            None
        } else {
            // SAFETY: The one-element subrange at len - 1 is the last item
            Some(unsafe { A::item_from_raw(self.raw.sub(len - 1, 1)) })
        }
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let len = self.raw.len();
        let mut acc = init;
        for i in 0..len {
            // SAFETY: i < len so the one-element subrange is within the region
            let item = unsafe { A::item_from_raw(self.raw.sub(i, 1)) };
            acc = f(acc, item);
        }
        acc
    }
}

impl<T, A> DoubleEndedIterator for IterRaw<T, A>
where
    A: IterRawAdapter<T>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let len = self.raw.len();
        if len == 0 {
            None
        } else {
            // SAFETY: The one-element subrange at len - 1 is the last item
            let out = Some(unsafe { A::item_from_raw(self.raw.sub(len - 1, 1)) });
            // SAFETY: Shrinking the range from the back stays within the region
            self.raw = unsafe { self.raw.sub(0, len - 1) };
            out
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let len = self.raw.len();
        if n >= len {
            // SAFETY: An empty prefix is always a valid subrange
            self.raw = unsafe { self.raw.sub(0, 0) };
            None
        } else {
            // SAFETY: n < len so len - n - 1 is a valid index
            let out = Some(unsafe { A::item_from_raw(self.raw.sub(len - n - 1, 1)) });
            // SAFETY: Shrinking the range from the back stays within the region
            self.raw = unsafe { self.raw.sub(0, len - n - 1) };
            out
        }
    }
}

impl<T, A> FusedIterator for IterRaw<T, A> where A: IterRawAdapter<T> {}

impl<T, A> ExactSizeIterator for IterRaw<T, A> where A: IterRawAdapter<T> {}

macro_rules! iter_with_raw {
    ($t:ty $(,$lifetime:tt)?) => {
        impl<$($lifetime,)? T> Iterator for $t {
            type Item = <$t as IterRawAdapter<T>>::Item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter_raw.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter_raw.size_hint()
            }

            fn count(self) -> usize
            where
                Self: Sized,
            {
                self.iter_raw.count()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.iter_raw.nth(n)
            }

            fn last(self) -> Option<Self::Item>
            where
                Self: Sized,
            {
                self.iter_raw.last()
            }

            fn fold<B, F>(self, init: B, f: F) -> B
            where
                Self: Sized,
                F: FnMut(B, Self::Item) -> B,
            {
                self.iter_raw.fold(init, f)
            }
        }

        impl<$($lifetime,)? T> DoubleEndedIterator for $t {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter_raw.next_back()
            }

            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.iter_raw.nth_back(n)
            }
        }

        impl<$($lifetime,)? T> FusedIterator for $t {}
        impl<$($lifetime,)? T> ExactSizeIterator for $t {}
    };
}

pub(crate) use iter_with_raw;
