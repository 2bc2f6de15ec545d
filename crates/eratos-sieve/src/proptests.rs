//! Property-based tests for the sieve.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BitVec, Sieve};
    use eratos_core::is_prime;

    proptest! {
        #[test]
        fn sieve_matches_trial_division(max in 0usize..5_000) {
            let sieve = Sieve::new(max);
            prop_assert_eq!(sieve.max_number(), max);
            for n in 0..=max {
                prop_assert_eq!(sieve.is_prime(n), is_prime(&n));
            }
        }

        #[test]
        fn prime_count_is_monotone(max in 2usize..20_000, n in 0usize..20_000) {
            let sieve = Sieve::new(max);
            let below = sieve.prime_count_up_to(n);
            let at = sieve.prime_count_up_to(n + 1);
            prop_assert!(at == below || at == below + 1);
            prop_assert!(below <= sieve.count_primes());
        }

        #[test]
        fn ones_match_get(len in 0usize..600, pattern in any::<u64>()) {
            let bits = BitVec::from_word_pattern(len, pattern);
            let ones: Vec<usize> = bits.ones().collect();
            let expected: Vec<usize> = (0..len).filter(|&i| bits.get(i)).collect();
            prop_assert_eq!(bits.count_ones(), expected.len());
            prop_assert_eq!(ones, expected);
        }
    }
}
