//! Membership tests for the named prime families.
//!
//! Every predicate first checks that `p` itself is prime, so composites
//! and values below 2 always answer false. Predicates that look at a
//! derived value such as `2p + 1` compute it in `T`; pick a type wide
//! enough for that value.

use eratos_core::is_prime;
use eratos_integers::PrimeInt;

/// `p` and `2p + 1` are both prime.
pub fn is_also_sophie_germain_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && is_prime(&(p.clone() * T::lit(2) + T::one()))
}

/// `p` and `(p - 1) / 2` are both prime.
pub fn is_also_safe_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && !p.is_even() && is_prime(&((p.clone() - T::one()) / T::lit(2)))
}

/// `p` is prime and `p ≡ 1 (mod 4)`: a sum of two squares.
pub fn is_also_pythagorean_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && (p.clone() % T::lit(4)).is_one()
}

/// `p` is prime and `p ≡ 3 (mod 4)`: still prime in the Gaussian integers.
pub fn is_also_gaussian_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && p.clone() % T::lit(4) == T::lit(3)
}

/// `p` is prime and `p ≡ 2 (mod 3)`: still prime in the Eisenstein integers.
pub fn is_also_eisenstein_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && p.clone() % T::lit(3) == T::lit(2)
}

/// `p` and the sum of its decimal digits are both prime.
pub fn is_also_additive_prime<T: PrimeInt>(p: &T) -> bool {
    is_prime(p) && is_prime(&p.digit_sum())
}

/// `p` has no zero digit and stays prime as leading digits are removed.
///
/// 3797 qualifies: 3797, 797, 97 and 7 are all prime.
pub fn is_also_left_truncatable_prime<T: PrimeInt>(p: &T) -> bool {
    if !is_prime(p) {
        return false;
    }
    let digits = p.digits();
    !digits.contains(&0) && (1..digits.len()).all(|i| is_prime(&T::from_digits(&digits[i..])))
}

/// `p` stays prime as trailing digits are removed.
///
/// 7393 qualifies: 7393, 739, 73 and 7 are all prime.
pub fn is_also_right_truncatable_prime<T: PrimeInt>(p: &T) -> bool {
    if !is_prime(p) {
        return false;
    }
    let digits = p.digits();
    (1..digits.len()).all(|end| is_prime(&T::from_digits(&digits[..end])))
}

/// `p` reversed is a different prime.
pub fn is_also_emirp<T: PrimeInt>(p: &T) -> bool {
    if !is_prime(p) {
        return false;
    }
    let mut digits = p.digits();
    digits.reverse();
    let reversed = T::from_digits(&digits);
    reversed != *p && is_prime(&reversed)
}

/// `p` is prime and reads the same in both directions.
pub fn is_also_palindromic_prime<T: PrimeInt>(p: &T) -> bool {
    if !is_prime(p) {
        return false;
    }
    let digits = p.digits();
    digits.iter().eq(digits.iter().rev())
}

/// `p` is prime and `p + 1` is a power of two.
pub fn is_also_mersenne_prime<T: PrimeInt>(p: &T) -> bool {
    if !is_prime(p) {
        return false;
    }
    let two = T::lit(2);
    let mut m = p.clone() + T::one();
    while m.is_even() {
        m = m / two.clone();
    }
    m.is_one()
}
