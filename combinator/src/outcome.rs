//! A closed two-variant result type: a value, or an error value.
//!
//! Unlike `core::result::Result`, an [`Outcome`] carries no judgement about
//! control flow — `Bad` is data, not an early return — which is what the
//! pipeline layers want when a per-element failure must travel alongside the
//! successes instead of aborting the traversal. The crate's own [`Result`]
//! alias keeps reporting wrapper-level errors; an `Outcome` is a payload.

use derive_more::Display;

use crate::error::{Error, Kind, Result};

/// Exactly one of a good value or a bad one, never both.
///
/// Equality and hashing discriminate the variants: `Good(1)` is never equal
/// to `Bad(1)` and the derived hash covers the discriminant, so the two do
/// not alias as map keys either.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Outcome<G, B> {
    /// The success payload.
    #[display(fmt = "good({})", _0)]
    Good(G),

    /// The failure payload.
    #[display(fmt = "bad({})", _0)]
    Bad(B),
}

impl<G, B> Outcome<G, B> {
    /// Constructs a good outcome.
    #[inline]
    #[must_use]
    pub const fn good(value: G) -> Self {
        Self::Good(value)
    }

    /// Constructs a bad outcome.
    #[inline]
    #[must_use]
    pub const fn bad(value: B) -> Self {
        Self::Bad(value)
    }

    /// Whether this outcome holds a good value.
    #[inline]
    #[must_use]
    pub const fn is_good(&self) -> bool {
        matches!(self, Self::Good(_))
    }

    /// Whether this outcome holds a bad value.
    #[inline]
    #[must_use]
    pub const fn is_bad(&self) -> bool {
        matches!(self, Self::Bad(_))
    }

    /// Dispatches to exactly one handler and returns its result.
    ///
    /// This is the total eliminator of the type, and the accessor outer code
    /// should prefer: it extracts either payload without any possibility of
    /// a wrong-variant error.
    #[inline]
    pub fn fold<R>(self, on_good: impl FnOnce(G) -> R, on_bad: impl FnOnce(B) -> R) -> R {
        match self {
            Self::Good(value) => on_good(value),
            Self::Bad(value) => on_bad(value),
        }
    }

    /// Extracts the good payload, failing on a bad outcome.
    #[inline]
    pub fn into_good(self) -> Result<G> {
        match self {
            Self::Good(value) => Ok(value),
            Self::Bad(_) => Err(Error::new(Kind::NotGood)),
        }
    }

    /// Extracts the bad payload, failing on a good outcome.
    #[inline]
    pub fn into_bad(self) -> Result<B> {
        match self {
            Self::Good(_) => Err(Error::new(Kind::NotBad)),
            Self::Bad(value) => Ok(value),
        }
    }

    /// Borrows the good payload, failing on a bad outcome.
    #[inline]
    pub fn good_ref(&self) -> Result<&G> {
        match self {
            Self::Good(value) => Ok(value),
            Self::Bad(_) => Err(Error::new(Kind::NotGood)),
        }
    }

    /// Borrows the bad payload, failing on a good outcome.
    #[inline]
    pub fn bad_ref(&self) -> Result<&B> {
        match self {
            Self::Good(_) => Err(Error::new(Kind::NotBad)),
            Self::Bad(value) => Ok(value),
        }
    }

    /// Maps the good payload, leaving a bad outcome untouched.
    #[inline]
    pub fn map_good<H>(self, map: impl FnOnce(G) -> H) -> Outcome<H, B> {
        match self {
            Self::Good(value) => Outcome::Good(map(value)),
            Self::Bad(value) => Outcome::Bad(value),
        }
    }

    /// Maps the bad payload, leaving a good outcome untouched.
    #[inline]
    pub fn map_bad<C>(self, map: impl FnOnce(B) -> C) -> Outcome<G, C> {
        match self {
            Self::Good(value) => Outcome::Good(value),
            Self::Bad(value) => Outcome::Bad(map(value)),
        }
    }

    /// Reads this outcome back as an early-returnable `Result`.
    #[inline]
    pub fn into_result(self) -> core::result::Result<G, B> {
        self.fold(Ok, Err)
    }
}

impl<G, B> From<core::result::Result<G, B>> for Outcome<G, B> {
    #[inline]
    fn from(result: core::result::Result<G, B>) -> Self {
        result.map_or_else(Self::Bad, Self::Good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Kind};

    #[test]
    fn fold_dispatches_to_exactly_one_handler() {
        let good: Outcome<i32, &str> = Outcome::good(5);
        let bad: Outcome<i32, &str> = Outcome::bad("e");

        assert_eq!(good.fold(|n| n, |_| -1), 5);
        assert_eq!(bad.fold(|_| 0, |e| e.len() as i32), 1);
    }

    #[test]
    fn accessors_are_variant_checked() {
        let good: Outcome<i32, &str> = Outcome::good(5);
        let bad: Outcome<i32, &str> = Outcome::bad("e");

        assert!(good.is_good() && !good.is_bad());
        assert!(bad.is_bad() && !bad.is_good());

        assert_eq!(good.into_good(), Ok(5));
        assert_eq!(bad.into_bad(), Ok("e"));
        assert_eq!(good.into_bad(), Err(Error::new(Kind::NotBad)));
        assert_eq!(bad.into_good(), Err(Error::new(Kind::NotGood)));
    }

    #[test]
    fn equality_never_crosses_variants() {
        assert_ne!(Outcome::<i32, i32>::good(1), Outcome::bad(1));
        assert_eq!(Outcome::<i32, i32>::good(1), Outcome::good(1));
        assert_eq!(Outcome::<i32, i32>::bad(1), Outcome::bad(1));
    }

    #[test]
    fn variants_do_not_alias_as_map_keys() {
        use std::collections::HashMap;

        let mut seen: HashMap<Outcome<i32, i32>, &str> = HashMap::new();
        seen.insert(Outcome::good(1), "good");
        seen.insert(Outcome::bad(1), "bad");

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[&Outcome::good(1)], "good");
        assert_eq!(seen[&Outcome::bad(1)], "bad");
    }

    #[test]
    fn maps_touch_only_their_variant() {
        let good: Outcome<i32, &str> = Outcome::good(5);
        let bad: Outcome<i32, &str> = Outcome::bad("e");

        assert_eq!(good.map_good(|n| n * 2), Outcome::good(10));
        assert_eq!(good.map_bad(str::len), Outcome::good(5));
        assert_eq!(bad.map_good(|n| n * 2), Outcome::bad("e"));
        assert_eq!(bad.map_bad(str::len), Outcome::bad(1));
    }

    #[test]
    fn bridges_to_and_from_result() {
        let ok: core::result::Result<i32, &str> = Ok(3);
        let err: core::result::Result<i32, &str> = Err("e");

        assert_eq!(Outcome::from(ok), Outcome::good(3));
        assert_eq!(Outcome::from(err), Outcome::bad("e"));
        assert_eq!(Outcome::<i32, &str>::good(3).into_result(), Ok(3));
        assert_eq!(Outcome::<i32, &str>::bad("e").into_result(), Err("e"));
    }
}
