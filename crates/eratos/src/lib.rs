//! # Eratos
//!
//! A prime-number engine generic over the integer type.
//!
//! Every algorithm runs on any [`PrimeInt`](integers::PrimeInt): the
//! fixed-width primitives (`u32`, `i64`, `u128`, ...) and the
//! arbitrary-precision [`Integer`](integers::Integer).
//!
//! ## Features
//!
//! - **Wheel Candidates**: lazy mod-6 candidate streams, ascending,
//!   descending or spiralling out from a pivot
//! - **Ordered Parallel Enumeration**: candidate batches fan out to the
//!   rayon pool and come back in candidate order
//! - **Bit-Packed Sieve**: one bit per integer, immutable once built
//! - **Factorization**: lazy wheel-30 trial division and the
//!   multiplicative functions built on it
//! - **Prime Families**: twin/cousin/sexy pairs, constellations,
//!   super-primes and single-value predicates
//!
//! ## Quick Start
//!
//! ```rust
//! use eratos::prelude::*;
//!
//! let first: Vec<u64> = ascending_primes(0u64).take(5).collect();
//! assert_eq!(first, vec![2, 3, 5, 7, 11]);
//!
//! let factors: Vec<u64> = prime_factors(360u64).unwrap().collect();
//! assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
//!
//! let sieve = build_sieve(&30u32).unwrap();
//! assert_eq!(sieve.count_primes(), 10);
//!
//! assert!(is_also_safe_prime(&11u32));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use eratos_core as core;
pub use eratos_factor as factor;
pub use eratos_families as families;
pub use eratos_integers as integers;
pub use eratos_sieve as sieve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use eratos_core::{
        ascending_primes, closest_primes, descending_primes, is_composite, is_prime, next_prime,
        nth_prime, previous_prime, primes_between, EnumeratorConfig, PrimeEnumerator, PrimeError,
        Result,
    };
    pub use eratos_factor::{factorize, prime_factors, Factorization};
    pub use eratos_families::{
        consecutive_primes, cousin_primes, is_also_additive_prime, is_also_eisenstein_prime,
        is_also_emirp, is_also_gaussian_prime, is_also_left_truncatable_prime,
        is_also_mersenne_prime, is_also_palindromic_prime, is_also_pythagorean_prime,
        is_also_right_truncatable_prime, is_also_safe_prime, is_also_sophie_germain_prime,
        is_super_prime, is_super_prime_in, prime_gaps, prime_quadruplets, prime_quintuplets,
        prime_sextuplets, prime_triplets, sexy_primes, super_primes, twin_primes,
    };
    pub use eratos_integers::{Integer, PrimeInt};
    pub use eratos_sieve::{build_sieve, primes_up_to, Sieve};
}

#[cfg(test)]
mod proptests;
