//! Integer factorization for the eratos prime engine.
//!
//! This crate provides:
//! - **Prime factors**: a lazy, ascending stream of prime factors with
//!   multiplicity, by trial division over a mod-30 wheel
//! - **Factorizations**: prime/exponent pairs and the arithmetic
//!   functions derived from them (totient, divisor count, squarefreeness)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arithmetic;
pub mod factors;

#[cfg(test)]
mod proptests;

pub use arithmetic::{
    distinct_prime_factors, divisor_count, euler_totient, factorize, is_squarefree,
    largest_prime_factor, Factorization,
};
pub use eratos_core::{PrimeError, Result};
pub use factors::{prime_factors, PrimeFactors};
