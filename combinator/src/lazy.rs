//! A thread-safe, single-assignment, deferred-computation cell.
//!
//! A [`Lazy`] starts out holding a zero-argument producer and transitions,
//! exactly once, to holding the produced value. The transition is
//! irreversible and drops the producer, so whatever the producer captured
//! becomes reclaimable the moment the value exists.

use core::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::Result;

type Producer<T> = Box<dyn Fn() -> Result<T> + Send>;

/// A lazily initialised value.
///
/// `get` runs the producer on first access and hands out the stored value on
/// every later one; once the value is published, reads are lock-free. A
/// *failing* producer realises nothing: the error goes back to the caller,
/// the producer stays in place, and the next `get` runs it again — failure
/// is never cached.
///
/// The producer must not call `get` on its own cell, directly or indirectly;
/// such a cycle deadlocks rather than producing twice.
pub struct Lazy<T> {
    value: OnceLock<T>,
    producer: Mutex<Option<Producer<T>>>,
}

impl<T> Lazy<T> {
    /// Wraps a producer, deferring its execution to the first `get`.
    #[must_use]
    pub fn new(producer: impl Fn() -> Result<T> + Send + 'static) -> Self {
        Self {
            value: OnceLock::new(),
            producer: Mutex::new(Some(Box::new(producer))),
        }
    }

    /// A cell that is already realised; no producer is ever involved.
    #[must_use]
    pub fn ready(value: T) -> Self {
        let cell = OnceLock::new();
        // a fresh OnceLock accepts its first value
        let _ = cell.set(value);

        Self {
            value: cell,
            producer: Mutex::new(None),
        }
    }

    /// Whether the value has been produced. Never forces production.
    #[inline]
    #[must_use]
    pub fn is_realized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns the value, producing it first if no access has done so yet.
    ///
    /// Concurrent first accesses serialise on the producer slot: one caller
    /// runs the producer, every other blocks briefly and then reads the
    /// published value. The producer therefore runs at most once per
    /// realisation, and exactly once over the life of a cell that realises
    /// successfully.
    pub fn get(&self) -> Result<&T> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let mut slot = self.producer.lock().unwrap_or_else(PoisonError::into_inner);

        // the winner of the race published while this caller waited
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        match slot.as_ref() {
            Some(produce) => {
                let value = produce()?;
                let value = self.value.get_or_init(|| value);
                *slot = None;
                Ok(value)
            }
            // the producer is only released once the value is stored, and
            // the value was just checked under the lock
            None => unreachable!("unrealised cell without a producer"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;

    #[test]
    fn produces_on_first_access_only() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cell = {
            let calls = Arc::clone(&calls);
            Lazy::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(42)
            })
        };

        assert!(!cell.is_realized());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(cell.get(), Ok(&42));
        assert_eq!(cell.get(), Ok(&42));
        assert!(cell.is_realized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ready_cells_never_produce() {
        let cell = Lazy::ready("eager");

        assert!(cell.is_realized());
        assert_eq!(cell.get(), Ok(&"eager"));
    }

    #[test]
    fn a_failing_producer_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cell = {
            let calls = Arc::clone(&calls);
            Lazy::new(move || {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    return Err(Error::raised("first attempt"));
                }
                Ok(7)
            })
        };

        assert_eq!(cell.get(), Err(Error::raised("first attempt")));
        assert!(!cell.is_realized());

        assert_eq!(cell.get(), Ok(&7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_first_accesses_produce_once() {
        let calls = AtomicUsize::new(0);
        let cell = Lazy::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(calls.load(Ordering::SeqCst))
        });

        std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8).map(|_| scope.spawn(|| *cell.get().unwrap())).collect();

            for worker in workers {
                assert_eq!(worker.join().unwrap(), 1);
            }
        });
    }
}
