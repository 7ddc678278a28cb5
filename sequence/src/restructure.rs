//! Point edits on fixed-length sequences, performed by reallocation.
//!
//! All primitives share the same shape: validate the index contract, allocate
//! one buffer of the exact output length, then fill it with at most two
//! contiguous copies of the input (the region before the edit point and the
//! region after it). The input is only ever borrowed, so a sequence that has
//! already been handed to another owner is never observed mid-edit.

use crate::error::{Error, Kind, Result};

/// A fixed-length, zero-indexed sequence of `T`.
///
/// The length is fixed at construction and the primitives of this module are
/// the only producers: callers treat a `Sequence` as immutable once it has
/// been returned. A trie node holding optional children instantiates `T` with
/// `Option<Child>`, so an absent slot is simply a default element.
pub type Sequence<T> = Box<[T]>;

/// Returns a new sequence equal to `seq` with `item` inserted at position
/// `index`, shifting the suffix one slot to the right.
///
/// `index` may be anywhere from `0` (prepend) to `seq.len()` (append).
pub fn insert_at<T: Clone>(item: T, seq: &[T], index: usize) -> Result<Sequence<T>> {
    if index > seq.len() {
        return Err(Error::new(Kind::IndexOutOfRange { index, len: seq.len() }));
    }

    let mut result = Vec::with_capacity(seq.len() + 1);
    result.extend_from_slice(&seq[..index]);
    result.push(item);
    result.extend_from_slice(&seq[index..]);

    Ok(result.into_boxed_slice())
}

/// Returns a new sequence equal to `seq` with all of `items` inserted at
/// position `index`, in order.
///
/// This generalises [`insert_at`] to several items; prepending (`index = 0`)
/// and appending (`index = seq.len()`) are ordinary cases of the same copy
/// layout, not separate code paths.
pub fn splice_at<T: Clone>(items: &[T], seq: &[T], index: usize) -> Result<Sequence<T>> {
    if index > seq.len() {
        return Err(Error::new(Kind::IndexOutOfRange { index, len: seq.len() }));
    }

    let mut result = Vec::with_capacity(seq.len() + items.len());
    result.extend_from_slice(&seq[..index]);
    result.extend_from_slice(items);
    result.extend_from_slice(&seq[index..]);

    Ok(result.into_boxed_slice())
}

/// Returns a new sequence of the same length as `seq` with position `index`
/// holding `item` and every other position cloned unchanged.
pub fn replace_at<T: Clone>(item: T, seq: &[T], index: usize) -> Result<Sequence<T>> {
    if index >= seq.len() {
        return Err(Error::new(Kind::IndexOutOfRange { index, len: seq.len() }));
    }

    let mut result = seq.to_vec();
    result[index] = item;

    Ok(result.into_boxed_slice())
}

/// Returns a new sequence equal to `seq` without the element at position
/// `index`, shifting the suffix one slot to the left.
pub fn remove_at<T: Clone>(seq: &[T], index: usize) -> Result<Sequence<T>> {
    if index >= seq.len() {
        return Err(Error::new(Kind::IndexOutOfRange { index, len: seq.len() }));
    }

    let mut result = Vec::with_capacity(seq.len() - 1);
    result.extend_from_slice(&seq[..index]);
    result.extend_from_slice(&seq[index + 1..]);

    Ok(result.into_boxed_slice())
}

/// Splits `seq` at position `index` into the pair
/// `(seq[..index], seq[index..])`.
///
/// Both sides must be non-empty: `index` is required to satisfy
/// `0 < index < seq.len()`. A boundary split is a contract violation on the
/// caller's side and is reported as [`Kind::InvalidSplit`].
pub fn split_at<T: Clone>(seq: &[T], index: usize) -> Result<(Sequence<T>, Sequence<T>)> {
    if index == 0 || index >= seq.len() {
        return Err(Error::new(Kind::InvalidSplit { index, len: seq.len() }));
    }

    let (left, right) = seq.split_at(index);
    Ok((left.into(), right.into()))
}

/// Returns a sequence of exactly `new_len` slots, holding the first
/// `min(seq.len(), new_len)` elements of `seq` followed by default-valued
/// slots for any remainder.
///
/// With `T = Option<Child>` this is the node-growing (and node-shrinking)
/// primitive of a trie: fresh slots come out absent.
#[must_use]
pub fn copy_resized<T: Clone + Default>(seq: &[T], new_len: usize) -> Sequence<T> {
    let kept = seq.len().min(new_len);

    let mut result = Vec::with_capacity(new_len);
    result.extend_from_slice(&seq[..kept]);
    result.resize_with(new_len, T::default);

    result.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Kind};

    mod insert {
        use super::*;

        #[test]
        fn in_the_middle() {
            let seq = ['a', 'b', 'c', 'd'];

            assert_eq!(*insert_at('x', &seq, 2).unwrap(), ['a', 'b', 'x', 'c', 'd']);
        }

        #[test]
        fn at_both_ends() {
            let seq = [1, 2];

            assert_eq!(*insert_at(0, &seq, 0).unwrap(), [0, 1, 2]);
            assert_eq!(*insert_at(3, &seq, 2).unwrap(), [1, 2, 3]);
        }

        #[test]
        fn into_empty() {
            let seq: [u8; 0] = [];

            assert_eq!(*insert_at(7, &seq, 0).unwrap(), [7]);
        }

        #[test]
        fn leaves_input_untouched() {
            let seq = vec![1, 2, 3];
            let result = insert_at(9, &seq, 1).unwrap();

            assert_eq!(seq, [1, 2, 3]);
            assert_eq!(*result, [1, 9, 2, 3]);
        }

        #[test]
        fn removing_the_inserted_slot_reconstructs_the_input() {
            let seq = [10, 20, 30];

            for index in 0..=seq.len() {
                let grown = insert_at(99, &seq, index).unwrap();

                assert_eq!(grown.len(), seq.len() + 1);
                assert_eq!(*remove_at(&grown, index).unwrap(), seq);
            }
        }

        #[test]
        fn out_of_range() {
            let seq = [1, 2, 3];

            assert_eq!(
                insert_at(0, &seq, 4),
                Err(Error::new(Kind::IndexOutOfRange { index: 4, len: 3 }))
            );
        }
    }

    mod splice {
        use super::*;

        #[test]
        fn prepend_and_append_are_concatenations() {
            let seq = ['a', 'b'];
            let items = ['y', 'z'];

            assert_eq!(*splice_at(&items, &seq, 0).unwrap(), ['y', 'z', 'a', 'b']);
            assert_eq!(*splice_at(&items, &seq, 2).unwrap(), ['a', 'b', 'y', 'z']);
        }

        #[test]
        fn in_the_middle() {
            let seq = [1, 4];

            assert_eq!(*splice_at(&[2, 3], &seq, 1).unwrap(), [1, 2, 3, 4]);
        }

        #[test]
        fn empty_items_copies_the_input() {
            let seq = [1, 2, 3];

            assert_eq!(*splice_at(&[], &seq, 1).unwrap(), seq);
        }

        #[test]
        fn out_of_range() {
            let seq = [1];

            assert_eq!(
                splice_at(&[2], &seq, 2),
                Err(Error::new(Kind::IndexOutOfRange { index: 2, len: 1 }))
            );
        }
    }

    mod replace {
        use super::*;

        #[test]
        fn keeps_length_and_other_positions() {
            let seq = [1, 2, 3];
            let result = replace_at(9, &seq, 1).unwrap();

            assert_eq!(*result, [1, 9, 3]);
            assert_eq!(seq, [1, 2, 3]);
        }

        #[test]
        fn rejects_the_one_past_the_end_position() {
            let seq = [1, 2, 3];

            assert_eq!(
                replace_at(9, &seq, 3),
                Err(Error::new(Kind::IndexOutOfRange { index: 3, len: 3 }))
            );
        }
    }

    mod remove {
        use super::*;

        #[test]
        fn shifts_the_suffix() {
            let seq = [1, 2, 3, 4];

            assert_eq!(*remove_at(&seq, 0).unwrap(), [2, 3, 4]);
            assert_eq!(*remove_at(&seq, 2).unwrap(), [1, 2, 4]);
            assert_eq!(*remove_at(&seq, 3).unwrap(), [1, 2, 3]);
        }

        #[test]
        fn out_of_range() {
            let seq: [u8; 0] = [];

            assert_eq!(
                remove_at(&seq, 0),
                Err(Error::new(Kind::IndexOutOfRange { index: 0, len: 0 }))
            );
        }
    }

    mod split {
        use super::*;

        #[test]
        fn concatenation_reconstructs_the_input() {
            let seq = [1, 2, 3, 4, 5];

            for index in 1..seq.len() {
                let (left, right) = split_at(&seq, index).unwrap();

                assert_eq!(left.len(), index);
                assert_eq!(right.len(), seq.len() - index);

                let mut glued = left.to_vec();
                glued.extend_from_slice(&right);
                assert_eq!(glued, seq);
            }
        }

        #[test]
        fn boundary_splits_are_rejected() {
            let seq = [1, 2, 3];

            assert_eq!(
                split_at(&seq, 0),
                Err(Error::new(Kind::InvalidSplit { index: 0, len: 3 }))
            );
            assert_eq!(
                split_at(&seq, 3),
                Err(Error::new(Kind::InvalidSplit { index: 3, len: 3 }))
            );
        }
    }

    mod resize {
        use super::*;

        #[test]
        fn growing_fills_with_defaults() {
            let seq = [Some(1), Some(2)];

            assert_eq!(*copy_resized(&seq, 4), [Some(1), Some(2), None, None]);
        }

        #[test]
        fn shrinking_keeps_the_prefix() {
            let seq = [1, 2, 3, 4];

            assert_eq!(*copy_resized(&seq, 2), [1, 2]);
        }

        #[test]
        fn same_length_is_a_plain_copy() {
            let seq = [1, 2, 3];

            assert_eq!(*copy_resized(&seq, 3), seq);
        }
    }
}
