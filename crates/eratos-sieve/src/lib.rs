//! # eratos-sieve
//!
//! Batch prime tables for the eratos prime engine.
//!
//! This crate provides:
//! - A packed [`BitVec`] storing 64 flags per machine word
//! - [`build_sieve`]: the sieve of Eratosthenes over odd factors,
//!   O(n log log n) time and n bits of memory
//! - Read-only [`Sieve`] queries: membership, prime counting, iteration
//!
//! A finished [`Sieve`] is immutable, `Send` and `Sync`; wrap it in an
//! `Arc` to share it between threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bitvec;
pub mod sieve;

#[cfg(test)]
mod proptests;

pub use bitvec::{BitVec, Ones};
pub use eratos_core::{PrimeError, Result};
pub use sieve::{build_sieve, primes_up_to, Sieve};
