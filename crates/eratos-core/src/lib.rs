//! # eratos-core
//!
//! The streaming half of the eratos prime engine.
//!
//! This crate provides:
//! - **Candidates**: lazy mod-6 wheel candidates (ascending, descending,
//!   closest to a pivot)
//! - **Primality**: deterministic 6k±1 trial division
//! - **Enumeration**: ordered prime streams that may test candidate
//!   batches in parallel
//!
//! ## Ordering
//!
//! Prime streams always yield primes in candidate order, even when a
//! batch is tested on the rayon pool. Every "consecutive primes"
//! classifier downstream relies on that.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod candidates;
pub mod enumerate;
pub mod error;
pub mod primality;

#[cfg(test)]
mod proptests;

pub use candidates::{
    ascending_candidates, closest_candidates, descending_candidates, Ascending, Closest,
    Descending,
};
pub use enumerate::{
    ascending_primes, ascending_primes_with, closest_primes, closest_primes_with,
    descending_primes, descending_primes_with, next_prime, nth_prime, previous_prime,
    primes_between, EnumeratorConfig, PrimeEnumerator,
};
pub use error::{ensure_non_negative, ensure_positive, to_index, PrimeError, Result};
pub use primality::{is_composite, is_prime};

pub use eratos_integers::{Integer, PrimeInt};
