//! # u-seqkit
//!
//! In-memory sequence transformations for the U-Engine ecosystem.
//!
//! This crate provides keyed grouping, weighted pair generation, stable
//! insertion sorting, median selection, and sampling without replacement
//! over plain `Vec`s and slices. It knows nothing about storage, I/O, or
//! any consumer domain.
//!
//! ## Modules
//!
//! - [`grouping`] — Backward-scan keyed grouping (consuming, keeping, reducing, field-keyed)
//! - [`aggregate`] — Keys, values, and flatten projections of grouping results
//! - [`pairs`] — Weighted directed pairs over distinct transformed keys
//! - [`sort`] — Stable insertion sort and upper-median selection
//! - [`random`] — Seeded RNG and rejection-sampling shuffle
//! - [`seq`] — take, extract, grep, zip-with-index, min/max, flat-map
//! - [`collections`] — [`Groups`] and [`KeyedGroup`] result containers
//! - [`error`] — [`SeqError`] and the crate [`Result`] alias
//!
//! ## Ownership
//!
//! - **Consuming** operations take `Vec<T>` by value. The caller's binding
//!   is moved, and the operation may reuse its storage for the result.
//! - **Keeping** operations take `&[T]` and leave the input untouched.
//!
//! ## Design Philosophy
//!
//! - **Explicit failure**: empty inputs and unknown fields are errors, never
//!   silent defaults
//! - **Injectable randomness**: no global RNG state; callers pass a generator
//! - **Property-based testing**: grouping, pairing, and sampling laws
//!   verified via proptest

pub mod aggregate;
pub mod collections;
pub mod error;
pub mod grouping;
pub mod pairs;
pub mod random;
pub mod seq;
pub mod sort;

pub use collections::{Groups, KeyedGroup};
pub use error::{Result, SeqError};
pub use pairs::WeightedPair;
