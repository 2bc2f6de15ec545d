//! Property-based tests for the family classifiers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        consecutive_primes, cousin_primes_from, is_also_emirp, is_also_left_truncatable_prime,
        is_also_palindromic_prime, is_also_safe_prime, is_also_sophie_germain_prime,
        prime_gaps_from, prime_triplets_from, twin_primes_from,
    };
    use eratos_core::{ascending_primes, is_prime, next_prime};
    use eratos_integers::PrimeInt;

    proptest! {
        #[test]
        fn twin_pairs_are_prime_and_consecutive(start in 0u64..1_000_000) {
            for (p, q) in twin_primes_from(start).take(3) {
                prop_assert!(p >= start);
                prop_assert_eq!(q, p + 2);
                prop_assert!(is_prime(&p) && is_prime(&q));
            }
        }

        #[test]
        fn first_twin_is_the_first_after_start(start in 0u64..100_000) {
            let (p, _) = twin_primes_from(start).next().unwrap();
            let skipped = (start..p).any(|n| is_prime(&n) && is_prime(&(n + 2)));
            prop_assert!(!skipped);
        }

        #[test]
        fn cousin_pairs_have_gap_four(start in 0u64..1_000_000) {
            for (p, q) in cousin_primes_from(start).take(3) {
                prop_assert_eq!(q, p + 4);
                prop_assert!(is_prime(&p) && is_prime(&q));
            }
        }

        #[test]
        fn gaps_step_to_the_next_prime(start in 0u64..10_000_000) {
            for (p, gap) in prime_gaps_from(start).take(5) {
                prop_assert_eq!(next_prime(&p), Some(p + gap));
            }
        }

        #[test]
        fn triplets_span_six(start in 0u64..1_000_000) {
            let [a, b, c] = prime_triplets_from(start).next().unwrap();
            prop_assert!(a >= start);
            prop_assert_eq!(c, a + 6);
            prop_assert!(b == a + 2 || b == a + 4);
        }

        #[test]
        fn consecutive_windows_overlap(start in 0u64..1_000_000, k in 1u8..6) {
            let runs: Vec<Vec<u64>> = consecutive_primes(ascending_primes(start), &k)
                .unwrap()
                .take(3)
                .collect();
            for run in &runs {
                prop_assert_eq!(run.len(), usize::from(k));
            }
            prop_assert_eq!(&runs[0][1..], &runs[1][..usize::from(k) - 1]);
        }

        #[test]
        fn sophie_germain_pairs_with_safe(p in 2u64..10_000_000) {
            if is_also_sophie_germain_prime(&p) {
                prop_assert!(is_also_safe_prime(&(2 * p + 1)));
            }
        }

        #[test]
        fn emirp_reversal_is_an_emirp(p in 2u64..10_000_000) {
            if is_also_emirp(&p) {
                let mut digits = p.digits();
                digits.reverse();
                let reversed = u64::from_digits(&digits);
                prop_assert!(is_also_emirp(&reversed));
                prop_assert!(!is_also_palindromic_prime(&p));
            }
        }

        #[test]
        fn left_truncations_stay_truncatable(p in 2u64..10_000_000) {
            if is_also_left_truncatable_prime(&p) {
                let digits = p.digits();
                let tail = u64::from_digits(&digits[1..]);
                prop_assert!(digits.len() == 1 || is_also_left_truncatable_prime(&tail));
            }
        }
    }
}
