//! Boolean predicate algebra with sentinel-driven simplification.
//!
//! The two sentinels, ACCEPT and REJECT, are marker variants of the predicate
//! representation rather than wrapped closures. Every combinator first
//! simplifies against them — `and` with REJECT never builds anything, `or`
//! with ACCEPT never builds anything — and only falls back to a
//! short-circuiting combinator when both operands are genuine tests. Because
//! the sentinels are variants of a closed enumeration, the simplification
//! rules cannot be defeated by a lookalike instance.

use core::fmt;
use std::sync::Arc;

use crate::error::Result;

type Test<T> = Arc<dyn Fn(&T) -> Result<bool> + Send + Sync>;

/// A fallible predicate over `T`.
pub struct Pred<T> {
    repr: Repr<T>,
}

enum Repr<T> {
    /// The constant-true sentinel.
    Accept,
    /// The constant-false sentinel.
    Reject,
    Test(Test<T>),
}

impl<T: 'static> Pred<T> {
    /// The predicate accepting everything.
    #[must_use]
    pub const fn accept() -> Self {
        Self { repr: Repr::Accept }
    }

    /// The predicate rejecting everything.
    #[must_use]
    pub const fn reject() -> Self {
        Self { repr: Repr::Reject }
    }

    /// Wraps a fallible test.
    #[must_use]
    pub fn new(test: impl Fn(&T) -> Result<bool> + Send + Sync + 'static) -> Self {
        Self {
            repr: Repr::Test(Arc::new(test)),
        }
    }

    /// Wraps a test that cannot fail.
    #[must_use]
    pub fn wrap(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::new(move |value| Ok(test(value)))
    }

    /// Whether this is the accepting sentinel.
    #[inline]
    #[must_use]
    pub const fn is_accept(&self) -> bool {
        matches!(self.repr, Repr::Accept)
    }

    /// Whether this is the rejecting sentinel.
    #[inline]
    #[must_use]
    pub const fn is_reject(&self) -> bool {
        matches!(self.repr, Repr::Reject)
    }

    /// Tests a value. The sentinels answer without evaluating anything.
    #[inline]
    pub fn test(&self, value: &T) -> Result<bool> {
        match &self.repr {
            Repr::Accept => Ok(true),
            Repr::Reject => Ok(false),
            Repr::Test(test) => test(value),
        }
    }

    /// The conjunction of two predicates.
    ///
    /// Simplifies against the sentinels before building anything; otherwise
    /// returns a combinator evaluating `self` first and `rhs` only when
    /// `self` accepted. A failure of `self` suppresses `rhs` entirely.
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        if self.is_reject() || rhs.is_accept() {
            return self;
        }
        if self.is_accept() || rhs.is_reject() {
            return rhs;
        }

        Self::new(move |value| Ok(self.test(value)? && rhs.test(value)?))
    }

    /// The disjunction of two predicates.
    ///
    /// Dual of [`Pred::and`]: `self` is evaluated first, `rhs` only when
    /// `self` rejected.
    #[must_use]
    pub fn or(self, rhs: Self) -> Self {
        if self.is_accept() || rhs.is_reject() {
            return self;
        }
        if self.is_reject() || rhs.is_accept() {
            return rhs;
        }

        Self::new(move |value| Ok(self.test(value)? || rhs.test(value)?))
    }

    /// The complement of a predicate. Sentinels map onto each other.
    #[must_use]
    pub fn negate(self) -> Self {
        match self.repr {
            Repr::Accept => Self::reject(),
            Repr::Reject => Self::accept(),
            Repr::Test(test) => Self::new(move |value| Ok(!test(value)?)),
        }
    }

    /// The conjunction of every predicate of `preds`, in iteration order.
    ///
    /// Folds from ACCEPT and collapses to REJECT the moment a REJECT element
    /// is seen; ACCEPT elements dissolve into the fold. No predicates at all
    /// yields ACCEPT.
    #[must_use]
    pub fn all(preds: impl IntoIterator<Item = Self>) -> Self {
        let mut folded = Self::accept();

        for pred in preds {
            if pred.is_reject() {
                return Self::reject();
            }
            folded = folded.and(pred);
        }

        folded
    }

    /// The disjunction of every predicate of `preds`, in iteration order.
    ///
    /// Dual of [`Pred::all`]: folds from REJECT and collapses to ACCEPT on
    /// the first ACCEPT element. No predicates at all yields REJECT.
    #[must_use]
    pub fn any(preds: impl IntoIterator<Item = Self>) -> Self {
        let mut folded = Self::reject();

        for pred in preds {
            if pred.is_accept() {
                return Self::accept();
            }
            folded = folded.or(pred);
        }

        folded
    }
}

impl<T> Clone for Pred<T> {
    fn clone(&self) -> Self {
        match &self.repr {
            Repr::Accept => Self { repr: Repr::Accept },
            Repr::Reject => Self { repr: Repr::Reject },
            Repr::Test(test) => Self {
                repr: Repr::Test(Arc::clone(test)),
            },
        }
    }
}

/// Sentinels are equal to themselves; tests are equal when shared.
impl<T> PartialEq for Pred<T> {
    fn eq(&self, rhs: &Self) -> bool {
        match (&self.repr, &rhs.repr) {
            (Repr::Accept, Repr::Accept) | (Repr::Reject, Repr::Reject) => true,
            (Repr::Test(f), Repr::Test(g)) => Arc::ptr_eq(f, g),
            _ => false,
        }
    }
}

impl<T> Eq for Pred<T> {}

impl<T> fmt::Debug for Pred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Accept => f.write_str("Pred::Accept"),
            Repr::Reject => f.write_str("Pred::Reject"),
            Repr::Test(_) => f.write_str("Pred::Test"),
        }
    }
}
