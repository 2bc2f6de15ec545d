//! # eratos-integers
//!
//! The integer abstraction every eratos algorithm is generic over.
//!
//! This crate provides:
//! - The [`PrimeInt`] trait: the minimal numeric surface (ring operations,
//!   division with remainder, ordering, small-literal conversion)
//! - An arbitrary precision [`Integer`] wrapping `dashu`
//! - Decimal digit helpers used by the digit-based prime families
//!
//! Machine integers (`u32`, `u64`, `u128`, `i64`, `usize`, ...) implement
//! [`PrimeInt`] through a blanket impl; overflow behavior is theirs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod integer;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use traits::{Digits, PrimeInt};
