//! Prime pairs at a fixed distance, and the gaps between consecutive primes.
//!
//! For a gap of 2, 4 or 6 the partner `p + gap` is always among the
//! next two primes after `p`: a third prime strictly between them would
//! need `p`, `p + 2` and `p + 4` all prime, which only happens for
//! 3, 5, 7 and then `3 + 6 = 9` is not prime. A window of three
//! consecutive primes therefore finds every pair.

use std::iter::FusedIterator;

use eratos_core::{ascending_primes, Ascending, PrimeEnumerator};
use eratos_integers::PrimeInt;

use crate::window::Window;

/// The ascending prime stream the `*_from` helpers read from.
pub type AscendingPrimes<T> = PrimeEnumerator<T, Ascending<T>>;

const PAIR_WINDOW: usize = 3;

/// Pairs `(p, p + gap)` of primes from an ascending prime stream.
#[derive(Clone, Debug)]
pub struct GapPairs<T, I> {
    primes: I,
    window: Window<T>,
    gap: T,
}

impl<T, I> GapPairs<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    fn new(primes: I, gap: u8) -> Self {
        Self {
            primes,
            window: Window::new(PAIR_WINDOW),
            gap: T::lit(gap),
        }
    }
}

impl<T, I> Iterator for GapPairs<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        loop {
            while !self.window.is_full() {
                match self.primes.next() {
                    Some(p) => {
                        self.window.push(p);
                    }
                    None => break,
                }
            }

            let p = self.window.pop_oldest()?;
            let Some(partner) = p.checked_add(&self.gap) else {
                continue;
            };
            if self.window.iter().any(|q| *q == partner) {
                return Some((p, partner));
            }
        }
    }
}

impl<T, I> FusedIterator for GapPairs<T, I>
where
    T: PrimeInt,
    I: FusedIterator<Item = T>,
{
}

/// Twin primes `(p, p + 2)`.
pub fn twin_primes<T: PrimeInt, I: Iterator<Item = T>>(primes: I) -> GapPairs<T, I> {
    GapPairs::new(primes, 2)
}

/// Cousin primes `(p, p + 4)`, including `(3, 7)`.
pub fn cousin_primes<T: PrimeInt, I: Iterator<Item = T>>(primes: I) -> GapPairs<T, I> {
    GapPairs::new(primes, 4)
}

/// Sexy primes `(p, p + 6)`.
pub fn sexy_primes<T: PrimeInt, I: Iterator<Item = T>>(primes: I) -> GapPairs<T, I> {
    GapPairs::new(primes, 6)
}

/// Twin primes whose smaller member is `>= start_at`.
#[must_use]
pub fn twin_primes_from<T: PrimeInt>(start_at: T) -> GapPairs<T, AscendingPrimes<T>> {
    twin_primes(ascending_primes(start_at))
}

/// Cousin primes whose smaller member is `>= start_at`.
#[must_use]
pub fn cousin_primes_from<T: PrimeInt>(start_at: T) -> GapPairs<T, AscendingPrimes<T>> {
    cousin_primes(ascending_primes(start_at))
}

/// Sexy primes whose smaller member is `>= start_at`.
#[must_use]
pub fn sexy_primes_from<T: PrimeInt>(start_at: T) -> GapPairs<T, AscendingPrimes<T>> {
    sexy_primes(ascending_primes(start_at))
}

/// Each prime with the distance to the next one.
#[derive(Clone, Debug)]
pub struct PrimeGaps<T, I> {
    primes: I,
    window: Window<T>,
}

/// `(p, q - p)` for consecutive primes `p < q`.
pub fn prime_gaps<T: PrimeInt, I: Iterator<Item = T>>(primes: I) -> PrimeGaps<T, I> {
    PrimeGaps {
        primes,
        window: Window::new(2),
    }
}

/// Prime gaps starting from the first prime `>= start_at`.
#[must_use]
pub fn prime_gaps_from<T: PrimeInt>(start_at: T) -> PrimeGaps<T, AscendingPrimes<T>> {
    prime_gaps(ascending_primes(start_at))
}

impl<T, I> Iterator for PrimeGaps<T, I>
where
    T: PrimeInt,
    I: Iterator<Item = T>,
{
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        while !self.window.is_full() {
            let p = self.primes.next()?;
            self.window.push(p);
        }
        let p = self.window.pop_oldest()?;
        let q = self.window.oldest()?.clone();
        let gap = q - p.clone();
        Some((p, gap))
    }
}
