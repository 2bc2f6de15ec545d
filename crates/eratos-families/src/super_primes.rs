//! Super-primes: primes whose 1-based position in the prime sequence is
//! itself prime (3, 5, 11, 17, 31, 41, ...).

use std::iter::FusedIterator;
use std::marker::PhantomData;

use eratos_core::{ascending_primes, is_prime};
use eratos_integers::PrimeInt;
use eratos_sieve::Sieve;

use crate::pairs::AscendingPrimes;

/// Largest bound counted with a sieve; beyond it primes are enumerated.
const SIEVE_COUNT_LIMIT: usize = 1 << 26;

/// Primes at prime positions of the prime sequence.
#[derive(Clone, Debug)]
pub struct SuperPrimes<T, I> {
    primes: I,
    index: u64,
    _item: PhantomData<T>,
}

/// Super-primes of `primes`, which must be the full ascending prime
/// sequence from 2.
pub fn super_primes<T: PrimeInt, I: Iterator<Item = T>>(primes: I) -> SuperPrimes<T, I> {
    SuperPrimes {
        primes,
        index: 0,
        _item: PhantomData,
    }
}

/// Super-primes `>= start_at`.
///
/// Positions are counted from 2, not from `start_at`.
#[must_use]
pub fn super_primes_from<T: PrimeInt>(start_at: T) -> SuperPrimes<T, AscendingPrimes<T>> {
    let index = if start_at > T::lit(2) {
        prime_count_up_to(&(start_at.clone() - T::one()))
    } else {
        0
    };
    SuperPrimes {
        primes: ascending_primes(start_at),
        index,
        _item: PhantomData,
    }
}

/// Returns true if `p` is prime and π(p) is prime.
///
/// Each call counts the primes up to `p` from scratch: a fresh sieve of
/// `p` bits up to 2^26, prime enumeration beyond. Use
/// [`is_super_prime_in`] to test many values against one sieve.
pub fn is_super_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && is_prime(&prime_count_up_to(p))
}

/// Returns true if `n` is a super-prime according to a prebuilt sieve.
///
/// Numbers beyond `sieve.max_number()` read as false.
#[must_use]
pub fn is_super_prime_in(sieve: &Sieve, n: usize) -> bool {
    sieve.is_prime(n) && sieve.is_prime(sieve.prime_count_up_to(n))
}

/// π(n): how many primes are `<= n`.
fn prime_count_up_to<T: PrimeInt>(n: &T) -> u64 {
    if *n < T::lit(2) {
        return 0;
    }
    match n.to_usize() {
        Some(max) if max <= SIEVE_COUNT_LIMIT => {
            tracing::trace!(max, "counting primes with a sieve");
            Sieve::new(max).count_primes() as u64
        }
        _ => {
            tracing::debug!(n = ?n, "counting primes by enumeration");
            let mut count = 0u64;
            for _ in ascending_primes(T::lit(2)).take_while(|q| q <= n) {
                count += 1;
            }
            count
        }
    }
}

impl<T, I> Iterator for SuperPrimes<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let p = self.primes.next()?;
            self.index += 1;
            if is_prime(&self.index) {
                return Some(p);
            }
        }
    }
}

impl<T, I> FusedIterator for SuperPrimes<T, I>
where
    T: PrimeInt,
    I: FusedIterator<Item = T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use eratos_core::Integer;

    const FIRST_SUPER_PRIMES: [u32; 12] = [3, 5, 11, 17, 31, 41, 59, 67, 83, 109, 127, 157];

    #[test]
    fn test_sequence() {
        let got: Vec<u32> = super_primes(ascending_primes(2u32)).take(12).collect();
        assert_eq!(got, FIRST_SUPER_PRIMES);
        let got: Vec<u32> = super_primes_from(0u32).take(12).collect();
        assert_eq!(got, FIRST_SUPER_PRIMES);
    }

    #[test]
    fn test_from_keeps_global_positions() {
        let got: Vec<u32> = super_primes_from(40u32).take(4).collect();
        assert_eq!(got, vec![41, 59, 67, 83]);
        let got: Vec<u32> = super_primes_from(41u32).take(2).collect();
        assert_eq!(got, vec![41, 59]);
    }

    #[test]
    fn test_predicate_matches_sequence() {
        let from_predicate: Vec<u32> = (0..160).filter(is_super_prime).collect();
        assert_eq!(from_predicate, FIRST_SUPER_PRIMES);
        assert!(!is_super_prime(&-3i32));
        assert!(is_super_prime(&Integer::new(127)));
    }

    #[test]
    fn test_shared_sieve_agrees() {
        let sieve = Sieve::new(1_000);
        for n in 0..1_000u32 {
            assert_eq!(
                is_super_prime_in(&sieve, n as usize),
                is_super_prime(&n),
                "n = {n}"
            );
        }
        assert!(is_super_prime_in(&sieve, 991));
        assert!(!is_super_prime_in(&sieve, 1_009));
    }

    #[test]
    fn test_prime_count() {
        assert_eq!(prime_count_up_to(&1u32), 0);
        assert_eq!(prime_count_up_to(&2u32), 1);
        assert_eq!(prime_count_up_to(&100u32), 25);
        assert_eq!(prime_count_up_to(&Integer::new(1_000)), 168);
    }
}
