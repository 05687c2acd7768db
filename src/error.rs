use thiserror::Error;

/// The error produced when a requested index or range does not fit within a
/// view's bounds.
///
/// Every bounds violation in the crate is reported through this type rather
/// than by panicking or clamping. The offending numbers are carried as public
/// fields so callers can recover or report with full context. The rendered
/// messages follow the phrasing of the standard library's slice indexing
/// failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRange {
    /// A single-element access past the end of the view.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    Index {
        /// The requested element position.
        index: usize,
        /// The length of the view at the time of the request.
        len: usize,
    },

    /// A range whose end exceeds the length of the view.
    #[error("range end index {end} out of range for slice of length {len}")]
    End {
        /// The requested end of the range, exclusive.
        end: usize,
        /// The length of the view at the time of the request.
        len: usize,
    },

    /// A range whose start is greater than its end.
    #[error("slice index starts at {start} but ends at {end}")]
    Inverted {
        /// The requested start of the range.
        start: usize,
        /// The requested end of the range, exclusive.
        end: usize,
    },
}
