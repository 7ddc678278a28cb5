//! Errors that can be yielded by the restructuring primitives.

use derive_more::Display;

/// Type representing sequence errors.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display(fmt = "{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: Kind,
}

impl Error {
    /// Creates a new error from a kind.
    #[inline]
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        Self { kind }
    }
}

/// The kind of the error. Every variant is an index contract violation on the
/// caller's side: the primitives never clamp an index into range.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Kind {
    /// The index does not designate a valid position of the input sequence.
    #[display(fmt = "index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    /// The split point would leave one side of the split empty.
    #[display(fmt = "cannot split a sequence of length {len} at {index}")]
    InvalidSplit {
        index: usize,
        len: usize,
    },
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
