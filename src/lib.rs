//! Non-owning, bounds-checked views over contiguous memory.
//!
//! A [`Slice`] is a lightweight view of a run of elements owned elsewhere:
//! a base pointer plus a length, borrowed for a lifetime. Code can pass it,
//! re-slice it, and iterate it without copying data or taking ownership,
//! and the borrow checker guarantees the view never outlives the region it
//! observes. [`SliceMut`] is the mutable counterpart with exclusive access.
//!
//! Every bounds-sensitive operation reports an out-of-bounds index or range
//! as an [`OutOfRange`] error rather than panicking or clamping.
//!
//! ```
//! use memslice::Slice;
//!
//! let values = [10, 20, 30, 40, 50];
//! let all = Slice::new(&values);
//! let mid = all.slice_range(1, 4)?;
//! assert_eq!(mid, [20, 30, 40]);
//!
//! let (head, tail) = mid.split_at(1)?;
//! assert_eq!(head, [20]);
//! assert_eq!(tail, [30, 40]);
//!
//! assert!(all.slice_range(3, 1).is_err());
//! # Ok::<(), memslice::OutOfRange>(())
//! ```

#![warn(missing_docs)]
#![deny(private_interfaces)]

mod as_slice;
mod chunks_exact;
mod eq_impl;
mod error;
mod index;
mod iter;
mod iter_mut;
mod iter_raw;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod slice;
mod slice_mut;

pub use as_slice::{AsMutSlice, AsSlice};
pub use chunks_exact::ChunksExact;
pub use error::OutOfRange;
pub use index::SliceIndex;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use slice::Slice;
pub use slice_mut::SliceMut;
