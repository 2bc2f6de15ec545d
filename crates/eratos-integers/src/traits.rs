//! The numeric trait the prime algorithms are generic over.
//!
//! Every algorithm in eratos only needs the operations of a Euclidean
//! ring over the integers: add, sub, mul, div, rem, ordering, zero/one
//! and a checked way to build small literals such as 2, 3, 6 or 30.

use std::fmt::Debug;

use num_traits::{CheckedAdd, FromPrimitive, Num, ToPrimitive};
use smallvec::SmallVec;

/// Decimal digits, most significant first.
///
/// 64 inline digits cover every `u128` (39 digits) without spilling to
/// the heap.
pub type Digits = SmallVec<[u8; 64]>;

/// A binary integer usable by the prime engine.
///
/// # Laws
///
/// - `+`, `-`, `*` behave as integer ring operations within the range
///   of the type
/// - For non-negative `a` and positive `b`, `a / b` truncates and
///   `a % b` is in `0..b`
/// - `lit(v)` is the integer with value `v`
/// - `checked_add` returns `None` instead of leaving the range of the
///   type; arbitrary-precision types always return `Some`
pub trait PrimeInt:
    Num + Ord + Clone + Debug + CheckedAdd + FromPrimitive + ToPrimitive + Send + Sync
{
    /// Converts a small literal into this type.
    ///
    /// # Panics
    ///
    /// Panics if the type cannot hold `value`. Every algorithm in eratos
    /// only asks for literals up to 30.
    #[must_use]
    fn lit(value: u8) -> Self {
        Self::from_u8(value).expect("PrimeInt types must represent small literals")
    }

    /// `self + value`, or `None` when the sum does not fit the type.
    fn checked_add_lit(&self, value: u8) -> Option<Self> {
        self.checked_add(&Self::lit(value))
    }

    /// Returns true if `divisor` divides `self` exactly.
    fn divisible_by(&self, divisor: &Self) -> bool {
        (self.clone() % divisor.clone()).is_zero()
    }

    /// Returns true if `self` is divisible by two.
    fn is_even(&self) -> bool {
        self.divisible_by(&Self::lit(2))
    }

    /// Floor of the square root, by Newton iteration.
    ///
    /// Returns `self` unchanged for values below 2 (including negatives).
    #[must_use]
    fn floor_sqrt(&self) -> Self {
        let two = Self::lit(2);
        if *self < two {
            return self.clone();
        }

        // n / 2 + 1 is never below sqrt(n) and never overflows.
        let mut x = self.clone() / two.clone() + Self::one();
        let mut y = (x.clone() + self.clone() / x.clone()) / two.clone();
        while y < x {
            x = y;
            y = (x.clone() + self.clone() / x.clone()) / two.clone();
        }
        x
    }

    /// Decimal digits of `|self|`, most significant first.
    ///
    /// Zero has the single digit `0`.
    fn digits(&self) -> Digits {
        let ten = Self::lit(10);
        let mut rest = if *self < Self::zero() {
            Self::zero() - self.clone()
        } else {
            self.clone()
        };

        let mut digits = Digits::new();
        if rest.is_zero() {
            digits.push(0);
            return digits;
        }
        while !rest.is_zero() {
            let digit = rest.clone() % ten.clone();
            digits.push(digit.to_u8().expect("decimal digit fits in u8"));
            rest = rest / ten.clone();
        }
        digits.reverse();
        digits
    }

    /// Rebuilds an integer from decimal digits, most significant first.
    #[must_use]
    fn from_digits(digits: &[u8]) -> Self {
        let ten = Self::lit(10);
        digits
            .iter()
            .fold(Self::zero(), |acc, &d| acc * ten.clone() + Self::lit(d))
    }

    /// Sum of the decimal digits of `|self|`.
    #[must_use]
    fn digit_sum(&self) -> Self {
        self.digits()
            .iter()
            .fold(Self::zero(), |acc, &d| acc + Self::lit(d))
    }
}

impl<T> PrimeInt for T where
    T: Num + Ord + Clone + Debug + CheckedAdd + FromPrimitive + ToPrimitive + Send + Sync
{
}
