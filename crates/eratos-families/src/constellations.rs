//! Prime constellations: runs of consecutive primes with a fixed shape.
//!
//! A constellation of size `N` is `N` consecutive primes whose offsets
//! from the first one match an admissible pattern. The classifier slides
//! a window of `N` primes along the stream, checks the offsets of the
//! window against each pattern, then evicts the oldest prime.

use std::iter::FusedIterator;

use eratos_core::{ascending_primes, ensure_positive, to_index, Result};
use eratos_integers::PrimeInt;

use crate::pairs::AscendingPrimes;
use crate::window::Window;

const TRIPLETS: &[[u8; 3]] = &[[0, 2, 6], [0, 4, 6]];
const QUADRUPLETS: &[[u8; 4]] = &[[0, 2, 6, 8]];
const QUINTUPLETS: &[[u8; 5]] = &[[0, 2, 6, 8, 12], [0, 4, 6, 10, 12]];
const SEXTUPLETS: &[[u8; 6]] = &[[0, 4, 6, 10, 12, 16]];

/// Windows of `N` consecutive primes matching one of a set of offset patterns.
#[derive(Clone, Debug)]
pub struct Constellation<T, I, const N: usize> {
    primes: I,
    window: Window<T>,
    patterns: &'static [[u8; N]],
}

impl<T, I, const N: usize> Constellation<T, I, N>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    fn new(primes: I, patterns: &'static [[u8; N]]) -> Self {
        Self {
            primes,
            window: Window::new(N),
            patterns,
        }
    }

    /// The offset patterns this classifier accepts.
    #[must_use]
    pub fn patterns(&self) -> &'static [[u8; N]] {
        self.patterns
    }

    fn matching_pattern(&self, first: &T) -> Option<&'static [u8; N]> {
        self.patterns.iter().find(|pattern| {
            pattern
                .iter()
                .zip(self.window.iter())
                .all(|(&offset, q)| first.checked_add_lit(offset).as_ref() == Some(q))
        })
    }
}

impl<T, I, const N: usize> Iterator for Constellation<T, I, N>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    type Item = [T; N];

    fn next(&mut self) -> Option<[T; N]> {
        loop {
            while !self.window.is_full() {
                let p = self.primes.next()?;
                self.window.push(p);
            }

            let first = self.window.oldest()?.clone();
            let found = self
                .matching_pattern(&first)
                .map(|pattern| std::array::from_fn(|i| first.clone() + T::lit(pattern[i])));
            self.window.pop_oldest();
            if found.is_some() {
                return found;
            }
        }
    }
}

impl<T, I, const N: usize> FusedIterator for Constellation<T, I, N>
where
    T: PrimeInt,
    I: FusedIterator<Item = T>,
{
}

/// Prime triplets `(p, p+2, p+6)` and `(p, p+4, p+6)`.
pub fn prime_triplets<T: PrimeInt, I: Iterator<Item = T>>(primes: I) -> Constellation<T, I, 3> {
    Constellation::new(primes, TRIPLETS)
}

/// Prime quadruplets `(p, p+2, p+6, p+8)`.
pub fn prime_quadruplets<T: PrimeInt, I: Iterator<Item = T>>(
    primes: I,
) -> Constellation<T, I, 4> {
    Constellation::new(primes, QUADRUPLETS)
}

/// Prime quintuplets `(p, p+2, p+6, p+8, p+12)` and `(p, p+4, p+6, p+10, p+12)`.
pub fn prime_quintuplets<T: PrimeInt, I: Iterator<Item = T>>(
    primes: I,
) -> Constellation<T, I, 5> {
    Constellation::new(primes, QUINTUPLETS)
}

/// Prime sextuplets `(p, p+4, p+6, p+10, p+12, p+16)`.
pub fn prime_sextuplets<T: PrimeInt, I: Iterator<Item = T>>(
    primes: I,
) -> Constellation<T, I, 6> {
    Constellation::new(primes, SEXTUPLETS)
}

/// Prime triplets starting at or after `start_at`.
#[must_use]
pub fn prime_triplets_from<T: PrimeInt>(start_at: T) -> Constellation<T, AscendingPrimes<T>, 3> {
    prime_triplets(ascending_primes(start_at))
}

/// Prime quadruplets starting at or after `start_at`.
#[must_use]
pub fn prime_quadruplets_from<T: PrimeInt>(
    start_at: T,
) -> Constellation<T, AscendingPrimes<T>, 4> {
    prime_quadruplets(ascending_primes(start_at))
}

/// Prime quintuplets starting at or after `start_at`.
#[must_use]
pub fn prime_quintuplets_from<T: PrimeInt>(
    start_at: T,
) -> Constellation<T, AscendingPrimes<T>, 5> {
    prime_quintuplets(ascending_primes(start_at))
}

/// Prime sextuplets starting at or after `start_at`.
#[must_use]
pub fn prime_sextuplets_from<T: PrimeInt>(
    start_at: T,
) -> Constellation<T, AscendingPrimes<T>, 6> {
    prime_sextuplets(ascending_primes(start_at))
}

/// Every run of `k` consecutive primes, oldest first.
#[derive(Clone, Debug)]
pub struct ConsecutivePrimes<T, I> {
    primes: I,
    window: Window<T>,
}

/// Slides a window of `size_k` consecutive primes along `primes`.
///
/// # Errors
///
/// Returns [`PrimeError::NotPositive`](eratos_core::PrimeError::NotPositive)
/// when `size_k < 1` and
/// [`PrimeError::TooLarge`](eratos_core::PrimeError::TooLarge) when it
/// does not fit a `usize`.
pub fn consecutive_primes<T, I, K>(primes: I, size_k: &K) -> Result<ConsecutivePrimes<T, I>>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
    K: PrimeInt,
{
    ensure_positive("size_k", size_k)?;
    let size = to_index("size_k", size_k)?;
    Ok(ConsecutivePrimes {
        primes,
        window: Window::new(size),
    })
}

impl<T, I> Iterator for ConsecutivePrimes<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        while !self.window.is_full() {
            let p = self.primes.next()?;
            self.window.push(p);
        }
        let run = self.window.iter().cloned().collect();
        self.window.pop_oldest();
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eratos_core::PrimeError;

    #[test]
    fn test_triplets() {
        let got: Vec<[u32; 3]> = prime_triplets_from(0u32).take(6).collect();
        assert_eq!(
            got,
            vec![
                [5, 7, 11],
                [7, 11, 13],
                [11, 13, 17],
                [13, 17, 19],
                [17, 19, 23],
                [37, 41, 43]
            ]
        );
    }

    #[test]
    fn test_quadruplets() {
        let got: Vec<[u64; 4]> = prime_quadruplets_from(0u64).take(5).collect();
        assert_eq!(
            got,
            vec![
                [5, 7, 11, 13],
                [11, 13, 17, 19],
                [101, 103, 107, 109],
                [191, 193, 197, 199],
                [821, 823, 827, 829]
            ]
        );
    }

    #[test]
    fn test_quintuplets() {
        let got: Vec<[u64; 5]> = prime_quintuplets_from(0u64).take(4).collect();
        assert_eq!(
            got,
            vec![
                [5, 7, 11, 13, 17],
                [7, 11, 13, 17, 19],
                [11, 13, 17, 19, 23],
                [97, 101, 103, 107, 109]
            ]
        );
    }

    #[test]
    fn test_sextuplets() {
        let got: Vec<[u64; 6]> = prime_sextuplets_from(0u64).take(3).collect();
        assert_eq!(
            got,
            vec![
                [7, 11, 13, 17, 19, 23],
                [97, 101, 103, 107, 109, 113],
                [16_057, 16_061, 16_063, 16_067, 16_069, 16_073]
            ]
        );
    }

    #[test]
    fn test_consecutive_primes() {
        let runs: Vec<Vec<u32>> = consecutive_primes(ascending_primes(0u32), &3u8)
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(runs, vec![vec![2, 3, 5], vec![3, 5, 7], vec![5, 7, 11]]);

        assert!(matches!(
            consecutive_primes(ascending_primes(0u32), &0i32),
            Err(PrimeError::NotPositive { .. })
        ));
        assert!(matches!(
            consecutive_primes(ascending_primes(0u32), &-2i32),
            Err(PrimeError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_stream_ends_at_type_maximum() {
        let got: Vec<[u8; 3]> = prime_triplets_from(220u8).collect();
        assert_eq!(got, vec![[223, 227, 229], [227, 229, 233]]);
        assert_eq!(prime_sextuplets_from(200u8).count(), 0);
    }

    #[test]
    fn test_finite_input() {
        let primes = [2u32, 3, 5, 7, 11, 13];
        assert_eq!(prime_quadruplets(primes.into_iter()).count(), 1);
        assert_eq!(prime_sextuplets(primes.into_iter()).count(), 0);
    }
}
