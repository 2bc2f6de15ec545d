//! Lazy prime factorization by wheel-30 trial division.
//!
//! 2, 3 and 5 are divided out first. After that only divisors coprime
//! to 30 can be prime, and starting from 7 the gaps between them repeat
//! with period eight: 4, 2, 4, 2, 4, 6, 2, 6 (7, 11, 13, 17, 19, 23, 29,
//! 31, 37, ...). Once the trial divisor squared exceeds what is left of
//! `n`, the remainder is either 1 or itself prime.

use std::iter::FusedIterator;

use eratos_core::{ensure_positive, Result};
use eratos_integers::PrimeInt;

/// Gaps between consecutive residues coprime to 30, starting at 7.
const WHEEL_30_GAPS: [u8; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Primes divided out before the wheel takes over.
const WHEEL_BASIS: [u8; 3] = [2, 3, 5];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Dividing by `WHEEL_BASIS[i]`.
    Basis(usize),
    /// Trial division by wheel divisors.
    Wheel,
}

/// Prime factors of an integer, ascending, with multiplicity.
#[derive(Clone, Debug)]
pub struct PrimeFactors<T> {
    remaining: T,
    divisor: T,
    gap: usize,
    phase: Phase,
}

/// Lazily factors `n`.
///
/// `prime_factors(1)` is empty; `prime_factors(360)` yields
/// 2, 2, 2, 3, 3, 5.
///
/// # Errors
///
/// Returns [`PrimeError::NotPositive`](eratos_core::PrimeError::NotPositive)
/// when `n < 1`, before any factor is produced.
pub fn prime_factors<T: PrimeInt>(n: T) -> Result<PrimeFactors<T>> {
    ensure_positive("n", &n)?;
    Ok(PrimeFactors {
        remaining: n,
        divisor: T::lit(7),
        gap: 0,
        phase: Phase::Basis(0),
    })
}

impl<T: PrimeInt> PrimeFactors<T> {
    /// The part of `n` not yet factored.
    pub fn remaining(&self) -> &T {
        &self.remaining
    }

    /// Divides `factor` out of the remaining quotient.
    fn take(&mut self, factor: T) -> T {
        self.remaining = self.remaining.clone() / factor.clone();
        tracing::trace!(factor = ?factor, remaining = ?self.remaining, "prime factor");
        factor
    }
}

impl<T: PrimeInt> Iterator for PrimeFactors<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if self.remaining.is_one() {
                return None;
            }

            match self.phase {
                Phase::Basis(i) if i < WHEEL_BASIS.len() => {
                    let p = T::lit(WHEEL_BASIS[i]);
                    if self.remaining.divisible_by(&p) {
                        return Some(self.take(p));
                    }
                    self.phase = Phase::Basis(i + 1);
                }
                Phase::Basis(_) => self.phase = Phase::Wheel,
                Phase::Wheel => {
                    let d = self.divisor.clone();
                    // d * d > remaining, without forming the square.
                    if d > self.remaining.clone() / d.clone() {
                        let last = std::mem::replace(&mut self.remaining, T::one());
                        tracing::trace!(factor = ?last, "prime cofactor");
                        return Some(last);
                    }
                    if self.remaining.divisible_by(&d) {
                        return Some(self.take(d));
                    }
                    self.divisor = d + T::lit(WHEEL_30_GAPS[self.gap]);
                    self.gap = (self.gap + 1) % WHEEL_30_GAPS.len();
                }
            }
        }
    }
}

impl<T: PrimeInt> FusedIterator for PrimeFactors<T> {}
