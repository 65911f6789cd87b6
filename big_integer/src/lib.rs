//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers with the full arithmetic, comparison and
//!   bitwise operator set. Bitwise operations behave as if BigInt were represented in
//!   two's-complement notation.
//!
//! Magnitudes of up to two words are stored inline; larger ones live in a reference counted
//! block that clones share until one of them is written (copy-on-write). The reference count
//! is atomic, so `BigInt` is `Send + Sync`; [`BigInt::deep_clone`] gives a copy that shares
//! nothing.

#[macro_use]
mod big_int;
mod big_int_arith;
mod big_int_bits;
mod big_int_cmp;
mod big_int_string;
mod big_int_words;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;

#[cfg(test)]
mod proptest;

pub use big_int::BigInt;
pub use big_num_error::{BigIntError, Result};
