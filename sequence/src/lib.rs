//! Copy-on-write restructuring primitives for fixed-length sequences.
//!
//! This crate is the mutation substrate of the persistent collection types of
//! this project. A trie node never changes in place: producing a modified
//! version of a collection means reallocating the node arrays along the
//! modified path, while every untouched node keeps being shared with the
//! previous version. The primitives defined in [`restructure`] are the only
//! way those reallocations are performed.
//!
//! Every primitive borrows its input, allocates exactly one fresh backing
//! buffer and copies at most two contiguous regions of the input into it, so
//! the cost of an edit stays linear with a small constant. Index contract
//! violations are reported through [`error::Error`], never silently clamped.

#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::nursery,
    clippy::pedantic,
    clippy::perf,
    clippy::restriction,
    clippy::style,
    clippy::suspicious
)]
#![allow(
    clippy::arithmetic_side_effects,
    clippy::blanket_clippy_restriction_lints,
    clippy::else_if_without_else,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::implicit_return,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::missing_trait_methods,
    clippy::mod_module_files,
    clippy::panic_in_result_fn,
    clippy::pub_use,
    clippy::separated_literal_suffix,
    clippy::shadow_reuse,
    clippy::shadow_unrelated,
    clippy::unreachable,
    clippy::wildcard_enum_match_arm
)]
#![cfg_attr(
    test,
    allow(
        clippy::assertions_on_result_states,
        clippy::enum_glob_use,
        clippy::indexing_slicing,
        clippy::non_ascii_literal,
        clippy::too_many_lines,
        clippy::unwrap_used,
        clippy::wildcard_imports,
    )
)]

pub mod error;
pub mod restructure;

pub use restructure::{copy_resized, insert_at, remove_at, replace_at, splice_at, split_at, Sequence};
