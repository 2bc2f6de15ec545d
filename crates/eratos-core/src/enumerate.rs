//! Ordered prime streams.
//!
//! A [`PrimeEnumerator`] pulls wheel candidates in bounded batches, tags
//! each candidate with its position in the batch, tests the batch
//! (sequentially, or on the rayon pool once candidates are large enough
//! for the fan-out to pay off) and re-sorts the survivors by tag before
//! handing them out. Primes therefore always come out in candidate
//! order, whatever order the workers finish in.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use eratos_integers::PrimeInt;
use rayon::prelude::*;

use crate::candidates::{
    ascending_candidates, closest_candidates, descending_candidates, Ascending, Closest,
    Descending,
};
use crate::error::{ensure_positive, to_index, PrimeError, Result};
use crate::primality::is_prime;

/// Configuration for batched prime enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumeratorConfig {
    /// Candidates per sequential batch.
    pub batch_size: usize,
    /// Candidates per batch once batches fan out to the worker pool.
    pub parallel_batch_size: usize,
    /// Smallest leading candidate for which a batch fans out.
    pub parallel_threshold: u64,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 64,
            parallel_batch_size: 1024,
            parallel_threshold: 1 << 24,
        }
    }
}

impl EnumeratorConfig {
    /// A configuration that never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: u64::MAX,
            ..Self::default()
        }
    }

    /// Sets both batch sizes. Zero is treated as one.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self.parallel_batch_size = batch_size.max(1);
        self
    }

    /// Sets the candidate size at which batches fan out.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: u64) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Primes drawn from a candidate stream, in candidate order.
#[derive(Clone, Debug)]
pub struct PrimeEnumerator<T, I> {
    candidates: I,
    config: EnumeratorConfig,
    ready: VecDeque<T>,
    exhausted: bool,
}

impl<T, I> PrimeEnumerator<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    /// Filters an arbitrary candidate stream down to its primes.
    pub fn new(candidates: I, config: EnumeratorConfig) -> Self {
        Self {
            candidates,
            config,
            ready: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    /// Tests the next batch of candidates and queues the primes.
    fn refill(&mut self) {
        let Some(lead) = self.candidates.next() else {
            self.exhausted = true;
            return;
        };

        let fan_out = lead
            .to_u64()
            .map_or(true, |v| v >= self.config.parallel_threshold);
        let size = if fan_out {
            self.config.parallel_batch_size
        } else {
            self.config.batch_size
        }
        .max(1);

        let mut batch = Vec::with_capacity(size);
        batch.push((0, lead));
        batch.extend(
            self.candidates
                .by_ref()
                .take(size - 1)
                .enumerate()
                .map(|(i, c)| (i + 1, c)),
        );

        let mut survivors: Vec<(usize, T)> = if fan_out && batch.len() > 1 {
            tracing::debug!(
                batch = batch.len(),
                lead = ?batch[0].1,
                "testing candidate batch on the worker pool"
            );
            batch
                .into_par_iter()
                .filter(|(_, candidate)| is_prime(candidate))
                .collect()
        } else {
            batch
                .into_iter()
                .filter(|(_, candidate)| is_prime(candidate))
                .collect()
        };

        // Re-serialize by source position before anything is yielded.
        survivors.sort_unstable_by_key(|&(index, _)| index);
        self.ready
            .extend(survivors.into_iter().map(|(_, prime)| prime));
    }
}

impl<T, I> Iterator for PrimeEnumerator<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(prime) = self.ready.pop_front() {
                return Some(prime);
            }
            if self.exhausted {
                return None;
            }
            self.refill();
        }
    }
}

impl<T, I> FusedIterator for PrimeEnumerator<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
}

/// Primes `>= start_at` in ascending order.
///
/// Infinite for arbitrary-precision types; fixed-width types stop after
/// the largest prime they can hold.
///
/// Each call starts a fresh stream; two calls with the same `start_at`
/// yield the same sequence.
#[must_use]
pub fn ascending_primes<T: PrimeInt>(start_at: T) -> PrimeEnumerator<T, Ascending<T>> {
    ascending_primes_with(start_at, EnumeratorConfig::default())
}

/// [`ascending_primes`] with an explicit configuration.
#[must_use]
pub fn ascending_primes_with<T: PrimeInt>(
    start_at: T,
    config: EnumeratorConfig,
) -> PrimeEnumerator<T, Ascending<T>> {
    PrimeEnumerator::new(ascending_candidates(start_at), config)
}

/// Primes `<= start_at` in descending order, ending with 2.
#[must_use]
pub fn descending_primes<T: PrimeInt>(start_at: T) -> PrimeEnumerator<T, Descending<T>> {
    descending_primes_with(start_at, EnumeratorConfig::default())
}

/// [`descending_primes`] with an explicit configuration.
#[must_use]
pub fn descending_primes_with<T: PrimeInt>(
    start_at: T,
    config: EnumeratorConfig,
) -> PrimeEnumerator<T, Descending<T>> {
    PrimeEnumerator::new(descending_candidates(start_at), config)
}

/// Primes ordered by distance from `pivot`, lower first on ties.
#[must_use]
pub fn closest_primes<T: PrimeInt>(pivot: T) -> PrimeEnumerator<T, Closest<T>> {
    closest_primes_with(pivot, EnumeratorConfig::default())
}

/// [`closest_primes`] with an explicit configuration.
#[must_use]
pub fn closest_primes_with<T: PrimeInt>(
    pivot: T,
    config: EnumeratorConfig,
) -> PrimeEnumerator<T, Closest<T>> {
    PrimeEnumerator::new(closest_candidates(pivot), config)
}

/// The `order_n`-th prime, counting 2 as the first.
///
/// # Errors
///
/// Returns [`PrimeError::NotPositive`] when `order_n < 1` and
/// [`PrimeError::TooLarge`] when it does not fit a `usize`.
pub fn nth_prime<T: PrimeInt>(order_n: &T) -> Result<T> {
    ensure_positive("order_n", order_n)?;
    let index = to_index("order_n", order_n)?;
    ascending_primes(T::lit(2))
        .nth(index - 1)
        .ok_or_else(|| PrimeError::too_large("order_n", order_n))
}

/// Primes in the inclusive range `low..=high`, ascending.
pub fn primes_between<T: PrimeInt>(low: T, high: T) -> impl Iterator<Item = T> {
    ascending_primes(low).take_while(move |p| *p <= high)
}

/// The smallest prime strictly greater than `n`, or `None` when no such
/// prime fits the type.
#[must_use]
pub fn next_prime<T: PrimeInt>(n: &T) -> Option<T> {
    ascending_candidates(n.checked_add_lit(1)?).find(is_prime)
}

/// The largest prime strictly less than `n`, if any.
#[must_use]
pub fn previous_prime<T: PrimeInt>(n: &T) -> Option<T> {
    if *n <= T::lit(2) {
        return None;
    }
    descending_candidates(n.clone() - T::one()).find(is_prime)
}
