//! # eratos-families
//!
//! Classifiers for the named families of primes.
//!
//! This crate provides:
//! - **Pairs**: twin, cousin and sexy primes, plus prime gaps
//! - **Constellations**: triplets, quadruplets, quintuplets, sextuplets
//! - **Super-primes**: primes at prime positions of the prime sequence
//! - **Predicates**: Sophie Germain, safe, Pythagorean, Gaussian,
//!   Eisenstein, additive, truncatable, emirp, palindromic, Mersenne
//!
//! ## Streams
//!
//! Every sequence classifier reads an ascending, gap-free prime stream
//! through a fixed-capacity [`Window`], evicting its oldest prime after
//! each classification. Memory stays constant however far the stream
//! runs. Feeding anything other than consecutive ascending primes gives
//! unspecified results.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod constellations;
pub mod pairs;
pub mod predicates;
pub mod super_primes;
pub mod window;

#[cfg(test)]
mod proptests;

pub use constellations::{
    consecutive_primes, prime_quadruplets, prime_quadruplets_from, prime_quintuplets,
    prime_quintuplets_from, prime_sextuplets, prime_sextuplets_from, prime_triplets,
    prime_triplets_from, Constellation, ConsecutivePrimes,
};
pub use pairs::{
    cousin_primes, cousin_primes_from, prime_gaps, prime_gaps_from, sexy_primes,
    sexy_primes_from, twin_primes, twin_primes_from, AscendingPrimes, GapPairs, PrimeGaps,
};
pub use predicates::{
    is_also_additive_prime, is_also_eisenstein_prime, is_also_emirp, is_also_gaussian_prime,
    is_also_left_truncatable_prime, is_also_mersenne_prime, is_also_palindromic_prime,
    is_also_pythagorean_prime, is_also_right_truncatable_prime, is_also_safe_prime,
    is_also_sophie_germain_prime,
};
pub use super_primes::{
    is_super_prime, is_super_prime_in, super_primes, super_primes_from, SuperPrimes,
};
pub use window::Window;

pub use eratos_core::{PrimeError, Result};
