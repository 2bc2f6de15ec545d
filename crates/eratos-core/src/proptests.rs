//! Property-based tests for candidates, primality and enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        ascending_candidates, ascending_primes, ascending_primes_with, closest_primes,
        descending_primes, is_prime, next_prime, previous_prime, EnumeratorConfig, Integer,
    };

    proptest! {
        #[test]
        fn candidates_never_skip_a_prime(start in 0u64..1_000_000) {
            let window: Vec<u64> = ascending_candidates(start).take(64).collect();
            let last = *window.last().unwrap();
            for n in start..=last {
                if is_prime(&n) {
                    prop_assert!(window.contains(&n), "{} missing", n);
                }
            }
        }

        #[test]
        fn u64_and_integer_agree(n in 0u64..5_000_000) {
            prop_assert_eq!(is_prime(&n), is_prime(&Integer::from(n)));
        }

        #[test]
        fn ascending_is_next_prime_chain(start in 0u64..10_000_000) {
            let primes: Vec<u64> = ascending_primes(start).take(16).collect();
            prop_assert_eq!(Some(primes[0]), next_prime(&start.saturating_sub(1)));
            for w in primes.windows(2) {
                prop_assert_eq!(next_prime(&w[0]), Some(w[1]));
                prop_assert_eq!(previous_prime(&w[1]), Some(w[0]));
            }
        }

        #[test]
        fn u16_stream_ends_at_the_last_prime(start in 0u16..=u16::MAX) {
            let primes: Vec<u16> = ascending_primes(start).collect();
            let expected: Vec<u16> = (start..=u16::MAX).filter(is_prime).collect();
            prop_assert_eq!(primes, expected);
        }

        #[test]
        fn parallel_and_sequential_agree(start in 0u64..100_000_000, batch in 1usize..200) {
            let parallel = EnumeratorConfig::default()
                .with_batch_size(batch)
                .with_parallel_threshold(0);
            let a: Vec<u64> = ascending_primes_with(start, parallel).take(40).collect();
            let b: Vec<u64> = ascending_primes_with(start, EnumeratorConfig::sequential())
                .take(40)
                .collect();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn descending_mirrors_ascending(start in 2u64..20_000) {
            let mut down: Vec<u64> = descending_primes(start).collect();
            down.reverse();
            let up: Vec<u64> = ascending_primes(0u64).take_while(|&p| p <= start).collect();
            prop_assert_eq!(down, up);
        }

        #[test]
        fn closest_distances_are_monotone(pivot in 0i64..1_000_000) {
            let primes: Vec<i64> = closest_primes(pivot).take(20).collect();
            for w in primes.windows(2) {
                prop_assert!((w[0] - pivot).abs() <= (w[1] - pivot).abs());
            }
        }
    }
}
