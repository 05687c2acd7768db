use std::ptr::NonNull;

/// The bounds representation shared by every view type: a base pointer and an
/// element count over a contiguous region.
///
/// Declared `pub` so it can appear in the signature of `IterRawAdapter`; the
/// module is private, so the type is never reachable outside the crate.
///
/// # Safety
///
/// `RawSlice` carries no lifetime and performs no checking of its own. Its use
/// must stay restricted to the crate's view types, which are responsible for
/// binding every access to a borrow of the backing region and for validating
/// ranges before deriving subranges.
pub struct RawSlice<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> RawSlice<T> {
    /// Creates an empty `RawSlice` with a dangling base pointer.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Creates a `RawSlice` over the region borrowed by `slice`.
    pub(crate) const fn from_slice(slice: &[T]) -> Self {
        // SAFETY: References are never null
        let ptr = unsafe { NonNull::new_unchecked(slice.as_ptr().cast_mut()) };
        Self {
            ptr,
            len: slice.len(),
        }
    }

    /// Creates a `RawSlice` over the region borrowed by `slice`.
    pub(crate) fn from_mut_slice(slice: &mut [T]) -> Self {
        // SAFETY: References are never null
        let ptr = unsafe { NonNull::new_unchecked(slice.as_mut_ptr()) };
        Self {
            ptr,
            len: slice.len(),
        }
    }

    /// Creates a `RawSlice` from a base pointer and an element count.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `ptr` is non-null and properly aligned
    /// - `ptr` points to `len` consecutive initialized elements of type `T`
    pub(crate) const unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        Self {
            // SAFETY: ptr is non-null per the caller's contract
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            len,
        }
    }

    pub(crate) const fn len(self) -> usize {
        self.len
    }

    pub(crate) const fn as_ptr(self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) const fn as_mut_ptr(self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// This function returns an unbounded lifetime to which the caller must
    /// apply a suitable bound that respects the aliasing rules. The caller
    /// must ensure that
    ///
    /// - `index < self.len()`
    /// - the region is valid for reads for the returned lifetime
    pub(crate) unsafe fn get<'a>(self, index: usize) -> &'a T {
        // SAFETY: index is within the region per the caller's contract
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// This function returns an unbounded lifetime to which the caller must
    /// apply a suitable bound that respects the aliasing rules. The caller
    /// must ensure that
    ///
    /// - `index < self.len()`
    /// - the region is valid for writes for the returned lifetime and no
    ///   other reference into it is live
    pub(crate) unsafe fn get_mut<'a>(self, index: usize) -> &'a mut T {
        // SAFETY: index is within the region per the caller's contract
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Returns the subrange of `len` elements starting at `start`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `start + len <= self.len()`
    pub(crate) unsafe fn sub(self, start: usize, len: usize) -> Self {
        Self {
            // SAFETY: start is at most one past the region per the contract
            ptr: unsafe { self.ptr.add(start) },
            len,
        }
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `a < self.len()` and `b < self.len()`
    /// - the region is valid for writes and no reference into it is live
    pub(crate) unsafe fn swap(self, a: usize, b: usize) {
        let ptr = self.ptr.as_ptr();
        // SAFETY: Both indices are within the region per the caller's contract
        unsafe { std::ptr::swap(ptr.add(a), ptr.add(b)) };
    }
}

impl<T> Clone for RawSlice<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawSlice<T> {}
