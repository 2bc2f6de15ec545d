//! Property-based tests spanning the sieve, the enumerator, factorization
//! and the family predicates.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn sieve_and_enumerator_agree(low in 0u32..50_000, span in 0u32..2_000) {
            let high = low + span;
            let sieve = build_sieve(&high).unwrap();
            let sieved: Vec<u32> = sieve
                .primes()
                .filter(|&p| p >= low as usize)
                .map(|p| p as u32)
                .collect();
            let streamed: Vec<u32> = primes_between(low, high).collect();
            prop_assert_eq!(sieved, streamed);
        }

        #[test]
        fn factorization_rebuilds_its_input(n in 1u64..10_000_000) {
            let factorization = factorize(n).unwrap();
            prop_assert_eq!(factorization.product(), n);
            for p in factorization.primes() {
                prop_assert!(is_prime(p), "{} is not prime", p);
            }
            let flat: u64 = prime_factors(n).unwrap().product();
            prop_assert_eq!(flat, n);
        }

        #[test]
        fn sophie_germain_yields_safe_prime(p in 0u64..1_000_000) {
            if is_also_sophie_germain_prime(&p) {
                prop_assert!(is_also_safe_prime(&(2 * p + 1)));
            }
        }

        #[test]
        fn super_prime_predicates_agree(n in 0u32..20_000) {
            let sieve = build_sieve(&20_000u32).unwrap();
            prop_assert_eq!(is_super_prime_in(&sieve, n as usize), is_super_prime(&n));
        }

        #[test]
        fn integer_stream_matches_u64(start in 0u64..1_000_000) {
            let fixed: Vec<Integer> = ascending_primes(start).take(8).map(Integer::from).collect();
            let big: Vec<Integer> = ascending_primes(Integer::from(start)).take(8).collect();
            prop_assert_eq!(fixed, big);
        }
    }
}
