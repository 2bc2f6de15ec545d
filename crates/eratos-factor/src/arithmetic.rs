//! Factorizations as prime/exponent pairs, and the multiplicative
//! functions that fall out of them.

use std::fmt;

use eratos_core::Result;
use eratos_integers::PrimeInt;
use smallvec::SmallVec;

use crate::factors::prime_factors;

/// A factorization `p1^e1 * p2^e2 * ...` with `p1 < p2 < ...`.
///
/// The factorization of 1 has no pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization<T> {
    pairs: SmallVec<[(T, u32); 8]>,
}

impl<T: PrimeInt> Factorization<T> {
    /// The (prime, exponent) pairs, primes ascending.
    #[must_use]
    pub fn pairs(&self) -> &[(T, u32)] {
        &self.pairs
    }

    /// Distinct primes, ascending.
    pub fn primes(&self) -> impl Iterator<Item = &T> + '_ {
        self.pairs.iter().map(|(p, _)| p)
    }

    /// Returns true for the factorization of 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Multiplies the factorization back out.
    #[must_use]
    pub fn product(&self) -> T {
        self.pairs.iter().fold(T::one(), |acc, (p, e)| {
            (0..*e).fold(acc, |acc, _| acc * p.clone())
        })
    }
}

impl<T: PrimeInt> IntoIterator for Factorization<T> {
    type Item = (T, u32);
    type IntoIter = smallvec::IntoIter<[(T, u32); 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<T: PrimeInt + fmt::Display> fmt::Display for Factorization<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "1");
        }
        for (i, (p, e)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            if *e == 1 {
                write!(f, "{p}")?;
            } else {
                write!(f, "{p}^{e}")?;
            }
        }
        Ok(())
    }
}

/// Factors `n` into (prime, exponent) pairs.
///
/// # Errors
///
/// Returns [`PrimeError::NotPositive`](eratos_core::PrimeError::NotPositive)
/// when `n < 1`.
pub fn factorize<T: PrimeInt>(n: T) -> Result<Factorization<T>> {
    let mut pairs: SmallVec<[(T, u32); 8]> = SmallVec::new();
    for p in prime_factors(n)? {
        if let Some((last, e)) = pairs.last_mut() {
            if *last == p {
                *e += 1;
                continue;
            }
        }
        pairs.push((p, 1));
    }
    Ok(Factorization { pairs })
}

/// Distinct prime factors of `n`, ascending.
///
/// # Errors
///
/// Same as [`factorize`].
pub fn distinct_prime_factors<T: PrimeInt>(n: T) -> Result<Vec<T>> {
    Ok(factorize(n)?.into_iter().map(|(p, _)| p).collect())
}

/// The largest prime factor of `n`, or `None` for 1.
///
/// # Errors
///
/// Same as [`factorize`].
pub fn largest_prime_factor<T: PrimeInt>(n: T) -> Result<Option<T>> {
    Ok(prime_factors(n)?.last())
}

/// Euler's φ(n): how many of `1..=n` are coprime to `n`.
///
/// # Errors
///
/// Same as [`factorize`].
pub fn euler_totient<T: PrimeInt>(n: T) -> Result<T> {
    let factorization = factorize(n)?;
    Ok(factorization.into_iter().fold(T::one(), |acc, (p, e)| {
        let unit = p.clone() - T::one();
        (1..e).fold(acc * unit, |acc, _| acc * p.clone())
    }))
}

/// Number of positive divisors of `n`.
///
/// # Errors
///
/// Same as [`factorize`].
pub fn divisor_count<T: PrimeInt>(n: T) -> Result<u64> {
    let factorization = factorize(n)?;
    Ok(factorization
        .pairs()
        .iter()
        .map(|(_, e)| u64::from(*e) + 1)
        .product())
}

/// Returns true if no prime divides `n` twice.
///
/// Stops at the first repeated factor.
///
/// # Errors
///
/// Same as [`factorize`].
pub fn is_squarefree<T: PrimeInt>(n: T) -> Result<bool> {
    let mut previous: Option<T> = None;
    for p in prime_factors(n)? {
        if previous.as_ref() == Some(&p) {
            return Ok(false);
        }
        previous = Some(p);
    }
    Ok(true)
}
