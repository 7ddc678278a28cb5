//! The restructuring primitives as a persistent structure would chain them.

use sequence::{insert_at, splice_at, split_at};

#[test]
fn edits_chain_without_touching_previous_versions() {
    let version_0 = ['a', 'b', 'c', 'd'];

    let version_1 = insert_at('x', &version_0, 2).unwrap();
    assert_eq!(*version_1, ['a', 'b', 'x', 'c', 'd']);

    let (left, right) = split_at(&version_1, 2).unwrap();
    assert_eq!(*left, ['a', 'b']);
    assert_eq!(*right, ['x', 'c', 'd']);

    let version_2 = splice_at(&['y', 'z'], &left, 2).unwrap();
    assert_eq!(*version_2, ['a', 'b', 'y', 'z']);

    // every earlier version is still intact
    assert_eq!(version_0, ['a', 'b', 'c', 'd']);
    assert_eq!(*version_1, ['a', 'b', 'x', 'c', 'd']);
}
