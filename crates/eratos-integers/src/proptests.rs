//! Property-based tests for the integer abstraction.

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;
    use proptest::prelude::*;

    use crate::{Integer, PrimeInt};

    proptest! {
        // Arbitrary precision agrees with u64 on the operations the
        // prime algorithms use.

        #[test]
        fn integer_div_rem_matches_u64(a in 0u64..1_000_000_000, b in 1u64..100_000) {
            let big_a = Integer::from(a);
            let big_b = Integer::from(b);
            prop_assert_eq!((big_a.clone() / big_b.clone()).to_u64(), Some(a / b));
            prop_assert_eq!((big_a % big_b).to_u64(), Some(a % b));
        }

        #[test]
        fn floor_sqrt_matches_u64(n in 0u64..u64::MAX) {
            let r = n.floor_sqrt();
            prop_assert!(u128::from(r) * u128::from(r) <= u128::from(n));
            prop_assert!(u128::from(r + 1) * u128::from(r + 1) > u128::from(n));
            prop_assert_eq!(Integer::from(n).floor_sqrt().to_u64(), Some(r));
        }

        #[test]
        fn digits_round_trip(n in 0u64..u64::MAX) {
            let digits = n.digits();
            prop_assert!(digits.len() == 1 || digits[0] != 0);
            prop_assert_eq!(u64::from_digits(&digits), n);
            prop_assert_eq!(digits, Integer::from(n).digits());
        }

        #[test]
        fn digit_sum_is_congruent_mod_nine(n in 0u64..u64::MAX) {
            prop_assert_eq!(n.digit_sum() % 9, n % 9);
        }
    }
}
