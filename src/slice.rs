use crate::{
    AsSlice, OutOfRange, SliceMut, chunks_exact::ChunksExact, eq_impl, index::SliceIndex,
    iter::Iter, iter_raw::IterRaw, raw::RawSlice,
};
use std::{
    cmp::Ordering,
    fmt::{self, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ptr::NonNull,
};

/// An immutable view of a contiguous region of `T`s owned elsewhere.
///
/// The view records a base pointer and an element count and borrows the
/// region for `'a`. It never owns, allocates, or frees memory. Re-slicing
/// yields new views of the same region and leaves the original untouched.
///
/// # Examples
///
/// ```
/// # use memslice::Slice;
/// let values = [10, 20, 30, 40, 50];
/// let all = Slice::new(&values);
/// let mid = all.slice_range(1, 4)?;
/// assert_eq!(mid, [20, 30, 40]);
/// # Ok::<(), memslice::OutOfRange>(())
/// ```
pub struct Slice<'a, T> {
    pub(crate) raw: RawSlice<T>,
    pub(crate) marker: PhantomData<&'a T>,
}

unsafe impl<T> Send for Slice<'_, T> where T: Sync {}
unsafe impl<T> Sync for Slice<'_, T> where T: Sync {}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> Slice<'a, T> {
    /// Creates a view of the given region.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1, 2, 3];
    /// let view = Slice::new(&values);
    /// assert_eq!(view.len(), 3);
    /// ```
    pub const fn new(slice: &'a [T]) -> Self {
        Self {
            raw: RawSlice::from_slice(slice),
            marker: PhantomData,
        }
    }

    /// Creates a view of no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let view = Slice::<i32>::empty();
    /// assert!(view.is_empty());
    /// ```
    pub const fn empty() -> Self {
        Self {
            raw: RawSlice::dangling(),
            marker: PhantomData,
        }
    }

    /// Forms a view from a base pointer and an element count.
    ///
    /// No checking is performed. The lifetime is chosen by the caller.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `ptr` points to `len` consecutive initialized elements,
    /// - the region stays allocated, unmoved, and unresized for `'a`,
    /// - the memory is not written through any other pointer for `'a`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// # use std::ptr::NonNull;
    /// let values = [1, 2, 3];
    /// let ptr = NonNull::from(&values[0]);
    /// let view = unsafe { Slice::from_raw_parts(ptr, values.len()) };
    /// assert_eq!(view, [1, 2, 3]);
    /// ```
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
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1];
    /// let view = Slice::new(&values);
    /// assert!(!view.is_empty());
    /// assert!(view.prefix(0)?.is_empty());
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the base pointer of the viewed region.
    ///
    /// For an empty view created without a region, the pointer is dangling
    /// and must not be dereferenced.
    pub const fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Positions count from zero. The reference borrows the underlying
    /// region, not the view, so it remains valid for all of `'a`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Index`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::{OutOfRange, Slice};
    /// let values = [10, 20, 30];
    /// let view = Slice::new(&values);
    /// assert_eq!(view.at(1), Ok(&20));
    /// assert_eq!(view.at(3), Err(OutOfRange::Index { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&'a T, OutOfRange> {
        if index < self.len() {
            // SAFETY: index is within the region, which outlives 'a
            Ok(unsafe { self.raw.get(index) })
        } else {
            Err(OutOfRange::Index {
                index,
                len: self.len(),
            })
        }
    }

    /// Returns a reference to the first element, or `None` if the view is
    /// empty.
    pub fn first(&self) -> Option<&'a T> {
        self.at(0).ok()
    }

    /// Returns a reference to the last element, or `None` if the view is
    /// empty.
    pub fn last(&self) -> Option<&'a T> {
        self.at(self.len().checked_sub(1)?).ok()
    }

    /// Returns a reference to an element or a sub-view depending on the type
    /// of index.
    ///
    /// - If given a position, returns a reference to the element at that
    ///   position, or `None` if out of bounds.
    /// - If given a range, returns the sub-view corresponding to that range,
    ///   or `None` if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [10, 20, 30];
    /// let view = Slice::new(&values);
    /// assert_eq!(view.get(1), Some(&20));
    /// assert_eq!(view.get(1..3), view.slice_range(1, 3).ok());
    /// assert_eq!(view.get(4), None);
    /// ```
    pub fn get<I>(&self, index: I) -> Option<I::Output<'a>>
    where
        I: SliceIndex<T>,
    {
        index.get(*self)
    }

    /// Returns the sub-view over positions `start..end`.
    ///
    /// `start == end` is legal and yields an empty view, including at
    /// `len..len`. The sub-view borrows the same region as `self` and is
    /// independent of it.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Inverted`] if `start > end` and
    /// [`OutOfRange::End`] if `end > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [10, 20, 30, 40, 50];
    /// let view = Slice::new(&values);
    /// assert_eq!(view.slice_range(1, 4)?, [20, 30, 40]);
    /// assert!(view.slice_range(2, 2)?.is_empty());
    /// assert!(view.slice_range(3, 1).is_err());
    /// assert!(view.slice_range(1, 6).is_err());
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn slice_range(&self, start: usize, end: usize) -> Result<Slice<'a, T>, OutOfRange> {
        if start > end {
            Err(OutOfRange::Inverted { start, end })
        } else if end > self.len() {
            Err(OutOfRange::End {
                end,
                len: self.len(),
            })
        } else {
            // SAFETY: start <= end <= len keeps the subrange within the region
            Ok(Self {
                raw: unsafe { self.raw.sub(start, end - start) },
                marker: PhantomData,
            })
        }
    }

    /// Returns the view of the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `count > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1, 2, 3, 4];
    /// let view = Slice::new(&values);
    /// assert_eq!(view.prefix(2)?, [1, 2]);
    /// assert!(view.prefix(5).is_err());
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn prefix(&self, count: usize) -> Result<Slice<'a, T>, OutOfRange> {
        self.slice_range(0, count)
    }

    /// Returns the view of the last `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `count > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1, 2, 3, 4];
    /// let view = Slice::new(&values);
    /// assert_eq!(view.suffix(2)?, [3, 4]);
    /// assert!(view.suffix(5).is_err());
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn suffix(&self, count: usize) -> Result<Slice<'a, T>, OutOfRange> {
        let start = self.len().checked_sub(count).ok_or(OutOfRange::End {
            end: count,
            len: self.len(),
        })?;
        self.slice_range(start, self.len())
    }

    /// Divides the view into the elements before `index` and the elements
    /// from `index` onward.
    ///
    /// The halves are contiguous, disjoint, and together cover the original
    /// view exactly. `index` may equal `len`, leaving an empty second half.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::End`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1, 2, 3];
    /// let view = Slice::new(&values);
    /// let (head, tail) = view.split_at(1)?;
    /// assert_eq!(head, [1]);
    /// assert_eq!(tail, [2, 3]);
    ///
    /// let (head, tail) = view.split_at(0)?;
    /// assert!(head.is_empty());
    /// assert_eq!(tail, [1, 2, 3]);
    /// # Ok::<(), memslice::OutOfRange>(())
    /// ```
    pub fn split_at(&self, index: usize) -> Result<(Slice<'a, T>, Slice<'a, T>), OutOfRange> {
        let head = self.prefix(index)?;
        let tail = self.slice_range(index, self.len())?;
        Ok((head, tail))
    }

    /// Returns an iterator over the elements.
    ///
    /// The iterator yields all items from start to end. Each call returns a
    /// fresh iterator with independent state.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1, 2, 4];
    /// let view = Slice::new(&values);
    /// let mut iter = view.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&4));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            iter_raw: IterRaw {
                raw: self.raw,
                adapter: PhantomData,
            },
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over `chunk_size` elements of the view at a time.
    ///
    /// The chunks do not overlap. If `chunk_size` does not divide the length
    /// of the view, the last up to `chunk_size-1` elements are omitted and
    /// can be retrieved from the [`remainder`] function of the iterator.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use memslice::Slice;
    /// let values = [1, 2, 3, 4, 5];
    /// let view = Slice::new(&values);
    /// let mut chunks = view.chunks_exact(2);
    /// assert_eq!(chunks.next(), view.slice_range(0, 2).ok());
    /// assert_eq!(chunks.next(), view.slice_range(2, 4).ok());
    /// assert_eq!(chunks.next(), None);
    /// assert_eq!(chunks.remainder(), [5]);
    /// ```
    ///
    /// [`remainder`]: ChunksExact::remainder
    pub fn chunks_exact(&self, chunk_size: usize) -> ChunksExact<'a, T> {
        assert!(chunk_size != 0, "chunk size must be non-zero");
        ChunksExact {
            slice: *self,
            chunk_size,
        }
    }

    pub(crate) fn elements_eq(self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T> AsSlice for Slice<'_, T> {
    type Item = T;

    fn as_slice(&self) -> Slice<'_, T> {
        *self
    }
}

impl<T> fmt::Debug for Slice<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'b, T> PartialEq<Slice<'b, T>> for Slice<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Slice<'b, T>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<'b, T> PartialEq<SliceMut<'b, T>> for Slice<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &SliceMut<'b, T>) -> bool {
        *self == other.as_slice()
    }
}

eq_impl::impl_for!(Slice<'_, T>);

impl<T> PartialOrd for Slice<'_, T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.partial_cmp(b) {
                Some(Ordering::Equal) => {}
                ord => return ord,
            }
        }
        self.len().partial_cmp(&other.len())
    }
}

impl<T> Ord for Slice<'_, T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl<T> Default for Slice<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Hash for Slice<'_, T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Self::new(value)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Slice<'a, T> {
    fn from(value: &'a [T; N]) -> Self {
        Self::new(value)
    }
}

impl<'a, T> From<SliceMut<'a, T>> for Slice<'a, T> {
    fn from(value: SliceMut<'a, T>) -> Self {
        value.into_slice()
    }
}
