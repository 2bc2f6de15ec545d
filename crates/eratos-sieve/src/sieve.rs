//! The sieve of Eratosthenes.
//!
//! Odd positions start out set and 2 is fixed up by hand, so only odd
//! factors need striking. For each odd `f <= isqrt(max)` still marked
//! prime, the odd multiples `f*f, f*f + 2f, ...` are cleared. Each pass
//! relies on every earlier pass having already cleared the smaller
//! composites, so the passes run strictly in order on one thread.

use std::time::Instant;

use eratos_core::{to_index, PrimeError, Result};
use eratos_integers::PrimeInt;

use crate::bitvec::BitVec;

/// Every odd bit of a word set.
const ODD_POSITIONS: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// An immutable table of the primes in `0..=max_number`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sieve {
    bits: BitVec,
}

/// Builds the prime table for `0..=max_number`.
///
/// # Errors
///
/// Returns [`PrimeError::Negative`] when `max_number < 0` and
/// [`PrimeError::TooLarge`] when the table cannot be indexed by `usize`.
pub fn build_sieve<T: PrimeInt>(max_number: &T) -> Result<Sieve> {
    let max = to_index("max_number", max_number)?;
    if max == usize::MAX {
        return Err(PrimeError::too_large("max_number", max_number));
    }
    Ok(Sieve::new(max))
}

/// All primes in `0..=max_number`, ascending.
///
/// # Errors
///
/// Same as [`build_sieve`].
pub fn primes_up_to<T: PrimeInt>(max_number: &T) -> Result<Vec<T>> {
    let sieve = build_sieve(max_number)?;
    Ok(sieve.primes().filter_map(T::from_usize).collect())
}

impl Sieve {
    /// Sieves `0..=max_number`.
    #[must_use]
    pub fn new(max_number: usize) -> Self {
        let started = Instant::now();
        let len = max_number + 1;
        let mut bits = BitVec::from_word_pattern(len, ODD_POSITIONS);
        if len > 1 {
            bits.clear(1);
        }
        if len > 2 {
            bits.set(2);
        }

        let limit = max_number.floor_sqrt();
        let mut passes = 0usize;
        let mut factor = 3;
        while factor <= limit {
            if bits.get(factor) {
                let step = 2 * factor;
                let mut multiple = factor * factor;
                while multiple <= max_number {
                    bits.clear(multiple);
                    multiple += step;
                }
                passes += 1;
            }
            factor += 2;
        }

        let sieve = Self { bits };
        tracing::debug!(
            max_number,
            passes,
            primes = sieve.count_primes(),
            elapsed = ?started.elapsed(),
            "sieve built"
        );
        sieve
    }

    /// The largest number covered.
    #[must_use]
    pub fn max_number(&self) -> usize {
        self.bits.len() - 1
    }

    /// Number of entries, `max_number + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: a sieve covers at least 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns true if `n` is a prime within the table.
    ///
    /// Numbers beyond `max_number` read as false.
    #[inline]
    #[must_use]
    pub fn is_prime(&self, n: usize) -> bool {
        self.bits.get(n)
    }

    /// π(max_number), the number of primes in the table.
    #[must_use]
    pub fn count_primes(&self) -> usize {
        self.bits.count_ones()
    }

    /// π(n), the number of primes `<= n`, for `n` within the table.
    ///
    /// Values of `n` beyond the table count only the tabulated primes.
    #[must_use]
    pub fn prime_count_up_to(&self, n: usize) -> usize {
        self.bits.count_ones_before(n.saturating_add(1))
    }

    /// Primes in the table, ascending.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// The underlying bit vector; bit `i` is set iff `i` is prime.
    #[must_use]
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }
}
