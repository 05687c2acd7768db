use crate::Slice;

/// An iterator over a [`Slice`] in (non-overlapping) chunks of `chunk_size`
/// elements.
///
/// When the view's length is not evenly divided by the chunk size, the last up
/// to `chunk_size-1` elements will be omitted but can be retrieved from the
/// [`remainder`] function from the iterator.
///
/// This struct is created by the [`chunks_exact`] method.
///
/// [`remainder`]: ChunksExact::remainder
/// [`chunks_exact`]: Slice::chunks_exact
pub struct ChunksExact<'a, T> {
    pub(crate) slice: Slice<'a, T>,
    pub(crate) chunk_size: usize,
}

impl<'a, T> ChunksExact<'a, T> {
    /// Returns the part of the original view that has not been yielded by the
    /// iterator.
    pub fn remainder(&self) -> Slice<'a, T> {
        self.slice
    }
}

impl<'a, T> Iterator for ChunksExact<'a, T> {
    type Item = Slice<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slice.len() < self.chunk_size {
            None
        } else {
            let (chunk, rest) = self.slice.split_at(self.chunk_size).ok()?;
            self.slice = rest;
            Some(chunk)
        }
    }
}
