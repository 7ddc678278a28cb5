//! Function and predicate algebra for persistent collection pipelines.
//!
//! The collection types of this project never call a user function directly:
//! everything a caller supplies — a mapping, a filter, a deferred
//! initialiser — is wrapped first, so that a failure anywhere inside a
//! pipeline always surfaces as the same [`error::Error`] at the call that
//! triggered it. This crate defines those wrappers and the algebra over them:
//!
//! - [`fun`] — shared, clonable unary/binary/ternary function wrappers with
//!   composition and memoisation, and the identity-aware [`fun::Endo`]
//!   specialisation;
//! - [`pred`] — boolean predicates with AND/OR/NOT combinators that simplify
//!   against the ACCEPT/REJECT sentinels before evaluating anything;
//! - [`outcome`] — the two-variant [`outcome::Outcome`] type propagating a
//!   value or an error value without unwinding;
//! - [`lazy`] — a thread-safe, single-assignment deferred-computation cell.
//!
//! Nothing here owns a thread or performs I/O; every component is plain
//! library code callable from any number of concurrent callers.

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
pub mod fun;
pub mod lazy;
pub mod outcome;
pub mod pred;

pub use error::{Error, Result};
pub use fun::{Endo, Fn1, Fn2, Fn3};
pub use lazy::Lazy;
pub use outcome::Outcome;
pub use pred::Pred;
