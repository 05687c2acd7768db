use crate::{
    AsMutSlice, AsSlice, Iter, IterMut, OutOfRange, Slice, eq_impl, index::SliceIndex,
    iter_raw::IterRaw, raw::RawSlice,
};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ptr::NonNull,
};

/// A mutable view of a contiguous region of `T`s owned elsewhere.
///
/// A `SliceMut` applies the same borrowing rules as a mutable reference:
/// while it lives, it has exclusive access to the elements it views. It is
/// not `Copy`; shared re-borrows are made explicit with [`as_slice`].
///
/// # Examples
///
/// ```
/// # use memslice::SliceMut;
/// let mut values = [1, 2, 3];
/// let mut view = SliceMut::new(&mut values);
/// *view.at_mut(1)? = 42;
/// assert_eq!(view, [1, 42, 3]);
/// # Ok::<(), memslice::OutOfRange>(())
/// ```
///
/// [`as_slice`]: SliceMut::as_slice
pub struct SliceMut<'a, T> {
    pub(crate) raw: RawSlice<T>,
    pub(crate) marker: PhantomData<&'a mut T>,
}

unsafe impl<T> Send for SliceMut<'_, T> where T: Send {}
unsafe impl<T> Sync for SliceMut<'_, T> where T: Sync {}

impl<'a, T> SliceMut<'a, T> {
    /// Creates a mutable view of the given region.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            raw: RawSlice::from_mut_slice(slice),
            marker: PhantomData,
        }
    }

    /// Creates a mutable view of no elements.
    pub const fn empty() -> Self {
        Self {
            raw: RawSlice::dangling(),
            marker: PhantomData,
        }
    }

    /// Forms a mutable view from a base pointer and an element count.
    ///
    /// No checking is performed. The lifetime is chosen by the caller.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `ptr` points to `len` consecutive initialized elements,
    /// - the region stays allocated, unmoved, and unresized for `'a`,
    /// - the memory is not read or written through any other pointer for
    ///   `'a`.
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            // SAFETY: NonNull is already non-null
            raw: unsafe { RawSlice::from_raw_parts(ptr.as_ptr(), len) },
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the view.
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the view contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the base pointer of the viewed region.
    pub const fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    /// Returns the mutable base pointer of the viewed region.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut_ptr()
    }

    /// Re-borrows the view immutably.
    ///
    /// The result lives for the duration of the borrow of `self`. Use
    /// [`into_slice`] to give up mutable access for the full `'a` instead.
    ///
    /// [`into_slice`]: SliceMut::into_slice
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice {
            raw: self.raw,
            marker: PhantomData,
        }
    }

    /// Re-borrows the view mutably.
    pub fn as_mut_slice(&mut self) -> SliceMut<'_, T> {
        SliceMut {
            raw: self.raw,
            marker: PhantomData,
        }
    }

    /// Consumes the view, downgrading it to an immutable view of the same
    /// region for the full `'a`.
    pub fn into_slice(self) -> Slice<'a, T> {
        Slice {
            raw: self.raw,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The reference borrows `self`, unlike [`Slice::at`] where it borrows
    /// the region for all of `'a`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Index`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.as_slice().at(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Index`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::SliceMut;
    /// let mut values = [1, 2, 3];
    /// let mut view = SliceMut::new(&mut values);
    /// *view.at_mut(1)? = 42;
    /// assert_eq!(view, [1, 42, 3]);
    /// assert!(view.at_mut(3).is_err());
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index < self.len() {
            // SAFETY: index is within the region, which we borrow mutably
            Ok(unsafe { self.raw.get_mut(index) })
        } else {
            Err(OutOfRange::Index {
                index,
                len: self.len(),
            })
        }
    }

    /// Returns a reference to the first element, or `None` if the view is
    /// empty.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// view is empty.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0).ok()
    }

    /// Returns a reference to the last element, or `None` if the view is
    /// empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last element, or `None` if the
    /// view is empty.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.at_mut(self.len().checked_sub(1)?).ok()
    }

    /// Returns a reference to an element or a sub-view depending on the type
    /// of index. See [`Slice::get`].
    pub fn get<I>(&self, index: I) -> Option<I::Output<'_>>
    where
        I: SliceIndex<T>,
    {
        index.get(self.as_slice())
    }

    /// Returns a mutable reference to an element or a mutable sub-view
    /// depending on the type of index, or `None` if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::SliceMut;
    /// let mut values = [1, 2, 3];
    /// let mut view = SliceMut::new(&mut values);
    /// if let Some(elem) = view.get_mut(1) {
    ///     *elem = 42;
    /// }
    /// assert_eq!(view, [1, 42, 3]);
    /// ```
    pub fn get_mut<I>(&mut self, index: I) -> Option<I::OutputMut<'_>>
    where
        I: SliceIndex<T>,
    {
        index.get_mut(self)
    }

    /// Returns the sub-view over positions `start..end`.
    ///
    /// See [`Slice::slice_range`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Inverted`] if `start > end` and
    /// [`OutOfRange::End`] if `end > len`.
    pub fn slice_range(&self, start: usize, end: usize) -> Result<Slice<'_, T>, OutOfRange> {
        self.as_slice().slice_range(start, end)
    }

    /// Returns the mutable sub-view over positions `start..end`.
    ///
    /// The sub-view borrows `self` mutably, so the original view is
    /// inaccessible until the sub-view is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Inverted`] if `start > end` and
    /// [`OutOfRange::End`] if `end > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::SliceMut;
    /// let mut values = [10, 20, 30, 40, 50];
    /// let mut view = SliceMut::new(&mut values);
    /// let mut mid = view.slice_range_mut(1, 4)?;
    /// *mid.at_mut(0)? = 21;
    /// assert_eq!(view, [10, 21, 30, 40, 50]);
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn slice_range_mut(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<SliceMut<'_, T>, OutOfRange> {
        let sub = self.as_slice().slice_range(start, end)?;
        Ok(SliceMut {
            raw: sub.raw,
            marker: PhantomData,
        })
    }

    /// Returns the view of the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `count > len`.
    pub fn prefix(&self, count: usize) -> Result<Slice<'_, T>, OutOfRange> {
        self.as_slice().prefix(count)
    }

    /// Returns the mutable view of the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `count > len`.
    pub fn prefix_mut(&mut self, count: usize) -> Result<SliceMut<'_, T>, OutOfRange> {
        self.slice_range_mut(0, count)
    }

    /// Returns the view of the last `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `count > len`.
    pub fn suffix(&self, count: usize) -> Result<Slice<'_, T>, OutOfRange> {
        self.as_slice().suffix(count)
    }

    /// Returns the mutable view of the last `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `count > len`.
    pub fn suffix_mut(&mut self, count: usize) -> Result<SliceMut<'_, T>, OutOfRange> {
        let len = self.len();
        let start = len
            .checked_sub(count)
            .ok_or(OutOfRange::End { end: count, len })?;
        self.slice_range_mut(start, len)
    }

    /// Divides the view into the elements before `index` and the elements
    /// from `index` onward. See [`Slice::split_at`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `index > len`.
    pub fn split_at(&self, index: usize) -> Result<(Slice<'_, T>, Slice<'_, T>), OutOfRange> {
        self.as_slice().split_at(index)
    }

    /// Divides the view into two disjoint mutable halves, the elements
    /// before `index` and the elements from `index` onward.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::SliceMut;
    /// let mut values = [1, 2, 3, 4];
    /// let mut view = SliceMut::new(&mut values);
    /// let (mut head, mut tail) = view.split_at_mut(2)?;
    /// *head.at_mut(0)? = 10;
    /// *tail.at_mut(0)? = 30;
    /// assert_eq!(view, [10, 2, 30, 4]);
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn split_at_mut(
        &mut self,
        index: usize,
    ) -> Result<(SliceMut<'_, T>, SliceMut<'_, T>), OutOfRange> {
        let (head, tail) = self.as_slice().split_at(index)?;
        Ok((
            SliceMut {
                raw: head.raw,
                marker: PhantomData,
            },
            SliceMut {
                raw: tail.raw,
                marker: PhantomData,
            },
        ))
    }

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// Swapping a position with itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Index`] if either position is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::SliceMut;
    /// let mut values = [0, 1, 2, 3, 4];
    /// let mut view = SliceMut::new(&mut values);
    /// view.swap(2, 4)?;
    /// assert_eq!(view, [0, 1, 4, 3, 2]);
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), OutOfRange> {
        let len = self.len();
        if a >= len {
            return Err(OutOfRange::Index { index: a, len });
        }
        if b >= len {
            return Err(OutOfRange::Index { index: b, len });
        }
        // SAFETY: Both positions are within the region, which we borrow
        // mutably
        unsafe { self.raw.swap(a, b) };
        Ok(())
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over the elements that allows modifying each
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::SliceMut;
    /// let mut values = [1, 2, 4];
    /// let mut view = SliceMut::new(&mut values);
    /// for elem in view.iter_mut() {
    ///     *elem *= 2;
    /// }
    /// assert_eq!(view, [2, 4, 8]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            iter_raw: IterRaw {
                raw: self.raw,
                adapter: PhantomData,
            },
            _marker: PhantomData,
        }
    }
}

impl<T> AsSlice for SliceMut<'_, T> {
    type Item = T;

    fn as_slice(&self) -> Slice<'_, T> {
        SliceMut::as_slice(self)
    }
}

impl<T> AsMutSlice for SliceMut<'_, T> {
    fn as_mut_slice(&mut self) -> SliceMut<'_, T> {
        SliceMut::as_mut_slice(self)
    }
}

eq_impl::impl_for!(SliceMut<'_, T>);

impl<'b, T> PartialEq<SliceMut<'b, T>> for SliceMut<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &SliceMut<'b, T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'b, T> PartialEq<Slice<'b, T>> for SliceMut<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Slice<'b, T>) -> bool {
        self.as_slice() == *other
    }
}

impl<T> Debug for SliceMut<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T> PartialOrd for SliceMut<'_, T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(&other.as_slice())
    }
}

impl<T> Ord for SliceMut<'_, T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(&other.as_slice())
    }
}

impl<T> Default for SliceMut<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Hash for SliceMut<'_, T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'a, T> IntoIterator for SliceMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            iter_raw: IterRaw {
                raw: self.raw,
                adapter: PhantomData,
            },
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a SliceMut<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SliceMut<'_, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        Self::new(value)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SliceMut<'a, T> {
    fn from(value: &'a mut [T; N]) -> Self {
        Self::new(value)
    }
}
