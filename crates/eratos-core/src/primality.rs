//! Deterministic primality by 6k±1 trial division.

use eratos_integers::PrimeInt;

/// Returns true if `n` is prime.
///
/// Trial-divides by 2, 3 and then by `k` and `k + 2` for
/// `k = 5, 11, 17, ...` while `k * k <= n`. The bound is evaluated as
/// `k <= n / k` so fixed-width types never overflow the square.
pub fn is_prime<T: PrimeInt>(n: &T) -> bool {
    let two = T::lit(2);
    let three = T::lit(3);
    if *n < two {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if n.divisible_by(&two) || n.divisible_by(&three) {
        return false;
    }

    let six = T::lit(6);
    let mut k = T::lit(5);
    while k <= n.clone() / k.clone() {
        if n.divisible_by(&k) || n.divisible_by(&(k.clone() + two.clone())) {
            return false;
        }
        k = k + six.clone();
    }
    true
}

/// Returns true if `n` has a divisor other than 1 and itself.
///
/// 0, 1 and negative values are neither prime nor composite.
pub fn is_composite<T: PrimeInt>(n: &T) -> bool {
    *n >= T::lit(4) && !is_prime(n)
}
