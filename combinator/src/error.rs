//! Errors that can be yielded by the combinator algebra.
//!
//! A caller-supplied function may fail in whatever way it likes; the wrapper
//! boundary normalises every such failure into [`Kind::Raised`], so code
//! consuming a pipeline only ever has to handle one error type. Panics are
//! the unchecked category and cross the wrappers unchanged.

use derive_more::Display;

/// Type representing combinator errors.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
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

    /// Normalises a failure raised inside a caller-supplied function.
    #[inline]
    #[must_use]
    pub fn raised(message: impl Into<String>) -> Self {
        Self::new(Kind::Raised(message.into()))
    }
}

/// The kind of the error.
#[non_exhaustive]
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Kind {
    /// A failure raised by a caller-supplied function, normalised at the
    /// wrapper boundary.
    #[display(fmt = "wrapped function failed: {_0}")]
    Raised(String),

    /// The good payload was requested from a bad outcome.
    #[display(fmt = "outcome holds a bad value, not a good one")]
    NotGood,

    /// The bad payload was requested from a good outcome.
    #[display(fmt = "outcome holds a good value, not a bad one")]
    NotBad,
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
