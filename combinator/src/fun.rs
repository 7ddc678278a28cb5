//! Exception-normalising function wrappers.
//!
//! A wrapper is a shared, clonable handle on a fallible closure. Cloning a
//! wrapper clones the handle, not the closure, and two wrappers compare equal
//! exactly when they share the same closure: as with interned values,
//! identity of the underlying allocation *is* equality here. The algebra
//! below relies on this: composing with the identity returns the other
//! operand itself, so callers can detect no-op chains with a plain `==`.
//!
//! Memoisation wraps a function in a per-wrapper cache. It is only sound for
//! argument types whose `Eq`/`Hash` are stable and for functions that are
//! pure in their arguments; neither precondition can be checked here.

use core::fmt;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;

type Call1<T, R> = Arc<dyn Fn(T) -> Result<R> + Send + Sync>;
type Call2<A, B, R> = Arc<dyn Fn(A, B) -> Result<R> + Send + Sync>;
type Call3<A, B, C, R> = Arc<dyn Fn(A, B, C) -> Result<R> + Send + Sync>;

/// A lock poisoned by a panicking caller still holds a coherent cache: every
/// entry was fully inserted before the lock was released. Recover the guard
/// instead of propagating the poison.
fn read_cache<K, V>(cache: &RwLock<HashMap<K, V>>) -> RwLockReadGuard<'_, HashMap<K, V>> {
    cache.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_cache<K, V>(cache: &RwLock<HashMap<K, V>>) -> RwLockWriteGuard<'_, HashMap<K, V>> {
    cache.write().unwrap_or_else(PoisonError::into_inner)
}

/// A fallible unary function from `T` to `R`.
pub struct Fn1<T, R> {
    call: Call1<T, R>,
}

impl<T: 'static, R: 'static> Fn1<T, R> {
    /// Wraps a fallible closure.
    #[must_use]
    pub fn new(call: impl Fn(T) -> Result<R> + Send + Sync + 'static) -> Self {
        Self { call: Arc::new(call) }
    }

    /// Wraps a closure that cannot fail.
    #[must_use]
    pub fn wrap(call: impl Fn(T) -> R + Send + Sync + 'static) -> Self {
        Self::new(move |argument| Ok(call(argument)))
    }

    /// The function ignoring its argument and returning a clone of `value`.
    #[must_use]
    pub fn constant(value: R) -> Self
    where
        R: Clone + Send + Sync,
    {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Applies the wrapped function.
    ///
    /// A failure inside the function surfaces here, on the triggering call;
    /// a panic is not caught and unwinds through.
    #[inline]
    pub fn invoke(&self, argument: T) -> Result<R> {
        (self.call)(argument)
    }

    /// Returns the function computing `self(before(x))`.
    #[must_use]
    pub fn compose<S: 'static>(self, before: Fn1<S, T>) -> Fn1<S, R> {
        Fn1::new(move |argument| self.invoke(before.invoke(argument)?))
    }

    /// Returns the function computing `after(self(x))`.
    #[must_use]
    pub fn then<S: 'static>(self, after: Fn1<R, S>) -> Fn1<T, S> {
        after.compose(self)
    }

    /// Returns a wrapper computing the same function through a cache.
    ///
    /// The first invocation for a given argument computes and stores the
    /// result; later invocations with an equal argument return the stored
    /// clone without recomputation. Concurrent first invocations may both
    /// compute, but exactly one result is installed and every reader sees
    /// it. Failures are never cached: an `Err` is handed back and the next
    /// call with that argument computes again. Entries are never evicted.
    #[must_use]
    pub fn memoize(self) -> Self
    where
        T: Clone + Eq + Hash + Send + Sync,
        R: Clone + Send + Sync,
    {
        let cache: RwLock<HashMap<T, R>> = RwLock::new(HashMap::new());

        Self::new(move |argument: T| {
            if let Some(hit) = read_cache(&cache).get(&argument) {
                return Ok(hit.clone());
            }

            let value = self.invoke(argument.clone())?;
            Ok(write_cache(&cache).entry(argument).or_insert(value).clone())
        })
    }
}

impl<T, R> Clone for Fn1<T, R> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

/// Two wrappers are equal when they share the same closure.
impl<T, R> PartialEq for Fn1<T, R> {
    fn eq(&self, rhs: &Self) -> bool {
        Arc::ptr_eq(&self.call, &rhs.call)
    }
}

impl<T, R> Eq for Fn1<T, R> {}

impl<T, R> fmt::Debug for Fn1<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fn1").finish_non_exhaustive()
    }
}

/// A fallible binary function from `(A, B)` to `R`.
pub struct Fn2<A, B, R> {
    call: Call2<A, B, R>,
}

impl<A: 'static, B: 'static, R: 'static> Fn2<A, B, R> {
    /// Wraps a fallible closure.
    #[must_use]
    pub fn new(call: impl Fn(A, B) -> Result<R> + Send + Sync + 'static) -> Self {
        Self { call: Arc::new(call) }
    }

    /// Wraps a closure that cannot fail.
    #[must_use]
    pub fn wrap(call: impl Fn(A, B) -> R + Send + Sync + 'static) -> Self {
        Self::new(move |a, b| Ok(call(a, b)))
    }

    /// Applies the wrapped function.
    #[inline]
    pub fn invoke(&self, a: A, b: B) -> Result<R> {
        (self.call)(a, b)
    }

    /// The unary view of this function, taking its arguments as a pair.
    #[must_use]
    pub fn tupled(self) -> Fn1<(A, B), R> {
        Fn1::new(move |(a, b)| self.invoke(a, b))
    }

    /// Returns a wrapper computing the same function through a cache keyed
    /// by the argument pair. Same policy as [`Fn1::memoize`].
    #[must_use]
    pub fn memoize(self) -> Self
    where
        A: Clone + Eq + Hash + Send + Sync,
        B: Clone + Eq + Hash + Send + Sync,
        R: Clone + Send + Sync,
    {
        let cache: RwLock<HashMap<(A, B), R>> = RwLock::new(HashMap::new());

        Self::new(move |a: A, b: B| {
            let key = (a, b);
            if let Some(hit) = read_cache(&cache).get(&key) {
                return Ok(hit.clone());
            }

            let value = self.invoke(key.0.clone(), key.1.clone())?;
            Ok(write_cache(&cache).entry(key).or_insert(value).clone())
        })
    }
}

impl<A, B, R> Clone for Fn2<A, B, R> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<A, B, R> PartialEq for Fn2<A, B, R> {
    fn eq(&self, rhs: &Self) -> bool {
        Arc::ptr_eq(&self.call, &rhs.call)
    }
}

impl<A, B, R> Eq for Fn2<A, B, R> {}

impl<A, B, R> fmt::Debug for Fn2<A, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fn2").finish_non_exhaustive()
    }
}

/// A fallible ternary function from `(A, B, C)` to `R`.
pub struct Fn3<A, B, C, R> {
    call: Call3<A, B, C, R>,
}

impl<A: 'static, B: 'static, C: 'static, R: 'static> Fn3<A, B, C, R> {
    /// Wraps a fallible closure.
    #[must_use]
    pub fn new(call: impl Fn(A, B, C) -> Result<R> + Send + Sync + 'static) -> Self {
        Self { call: Arc::new(call) }
    }

    /// Wraps a closure that cannot fail.
    #[must_use]
    pub fn wrap(call: impl Fn(A, B, C) -> R + Send + Sync + 'static) -> Self {
        Self::new(move |a, b, c| Ok(call(a, b, c)))
    }

    /// Applies the wrapped function.
    #[inline]
    pub fn invoke(&self, a: A, b: B, c: C) -> Result<R> {
        (self.call)(a, b, c)
    }

    /// The unary view of this function, taking its arguments as a triple.
    #[must_use]
    pub fn tupled(self) -> Fn1<(A, B, C), R> {
        Fn1::new(move |(a, b, c)| self.invoke(a, b, c))
    }

    /// Returns a wrapper computing the same function through a cache keyed
    /// by the argument triple. Same policy as [`Fn1::memoize`].
    #[must_use]
    pub fn memoize(self) -> Self
    where
        A: Clone + Eq + Hash + Send + Sync,
        B: Clone + Eq + Hash + Send + Sync,
        C: Clone + Eq + Hash + Send + Sync,
        R: Clone + Send + Sync,
    {
        let cache: RwLock<HashMap<(A, B, C), R>> = RwLock::new(HashMap::new());

        Self::new(move |a: A, b: B, c: C| {
            let key = (a, b, c);
            if let Some(hit) = read_cache(&cache).get(&key) {
                return Ok(hit.clone());
            }

            let value = self.invoke(key.0.clone(), key.1.clone(), key.2.clone())?;
            Ok(write_cache(&cache).entry(key).or_insert(value).clone())
        })
    }
}

impl<A, B, C, R> Clone for Fn3<A, B, C, R> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<A, B, C, R> PartialEq for Fn3<A, B, C, R> {
    fn eq(&self, rhs: &Self) -> bool {
        Arc::ptr_eq(&self.call, &rhs.call)
    }
}

impl<A, B, C, R> Eq for Fn3<A, B, C, R> {}

impl<A, B, C, R> fmt::Debug for Fn3<A, B, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fn3").finish_non_exhaustive()
    }
}

/// A fallible function from `T` to itself, with a distinguished identity.
///
/// The identity is a marker variant, not a wrapped closure, which is what
/// makes the composition shortcuts below reference-preserving: composing `f`
/// with the identity hands back `f` itself, never an equivalent fresh
/// wrapper.
pub struct Endo<T> {
    repr: Repr<T>,
}

enum Repr<T> {
    Identity,
    Call(Call1<T, T>),
}

impl<T: 'static> Endo<T> {
    /// The identity function.
    #[must_use]
    pub const fn identity() -> Self {
        Self { repr: Repr::Identity }
    }

    /// Wraps a fallible closure.
    #[must_use]
    pub fn new(call: impl Fn(T) -> Result<T> + Send + Sync + 'static) -> Self {
        Self {
            repr: Repr::Call(Arc::new(call)),
        }
    }

    /// Wraps a closure that cannot fail.
    #[must_use]
    pub fn wrap(call: impl Fn(T) -> T + Send + Sync + 'static) -> Self {
        Self::new(move |argument| Ok(call(argument)))
    }

    /// Whether this is the identity marker.
    #[inline]
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self.repr, Repr::Identity)
    }

    /// Applies the function. The identity returns its argument untouched.
    #[inline]
    pub fn invoke(&self, argument: T) -> Result<T> {
        match &self.repr {
            Repr::Identity => Ok(argument),
            Repr::Call(call) => call(argument),
        }
    }

    /// Returns the function computing `self(before(x))`.
    ///
    /// Composing with the identity on either side returns the other operand
    /// unchanged, same shared closure and all.
    #[must_use]
    pub fn compose(self, before: Self) -> Self {
        if before.is_identity() {
            return self;
        }
        if self.is_identity() {
            return before;
        }

        Self::new(move |argument| self.invoke(before.invoke(argument)?))
    }

    /// Composes every function of `steps`, threading the value through them
    /// in iteration order.
    ///
    /// Identity entries are skipped. No entries at all yields the identity;
    /// a single entry is returned directly, without a wrapping combinator.
    #[must_use]
    pub fn compose_all(steps: impl IntoIterator<Item = Self>) -> Self {
        steps
            .into_iter()
            .filter(|step| !step.is_identity())
            .fold(Self::identity(), |chain, step| step.compose(chain))
    }
}

impl<T: 'static> From<Endo<T>> for Fn1<T, T> {
    fn from(endo: Endo<T>) -> Self {
        match endo.repr {
            Repr::Identity => Self::wrap(|argument| argument),
            Repr::Call(call) => Self { call },
        }
    }
}

impl<T> Clone for Endo<T> {
    fn clone(&self) -> Self {
        match &self.repr {
            Repr::Identity => Self { repr: Repr::Identity },
            Repr::Call(call) => Self {
                repr: Repr::Call(Arc::clone(call)),
            },
        }
    }
}

/// Identities are all equal; wrapped closures are equal when shared.
impl<T> PartialEq for Endo<T> {
    fn eq(&self, rhs: &Self) -> bool {
        match (&self.repr, &rhs.repr) {
            (Repr::Identity, Repr::Identity) => true,
            (Repr::Call(f), Repr::Call(g)) => Arc::ptr_eq(f, g),
            _ => false,
        }
    }
}

impl<T> Eq for Endo<T> {}

impl<T> fmt::Debug for Endo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Identity => f.write_str("Endo::Identity"),
            Repr::Call(_) => f.write_str("Endo::Call"),
        }
    }
}
