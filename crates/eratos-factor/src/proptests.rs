//! Property-based tests for factorization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{divisor_count, euler_totient, factorize, prime_factors};
    use eratos_core::{is_prime, Integer};

    proptest! {
        #[test]
        fn factors_multiply_back(n in 1u64..1_000_000_000_000) {
            let factors: Vec<u64> = prime_factors(n).unwrap().collect();
            prop_assert_eq!(factors.iter().product::<u64>(), n);
            prop_assert!(factors.iter().all(is_prime));
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn u64_and_integer_agree(n in 1u64..100_000_000) {
            let small: Vec<String> = prime_factors(n).unwrap().map(|f| f.to_string()).collect();
            let big: Vec<String> = prime_factors(Integer::from(n))
                .unwrap()
                .map(|f| f.to_string())
                .collect();
            prop_assert_eq!(small, big);
        }

        #[test]
        fn totient_is_multiplicative_on_coprimes(a in 1u64..5_000, b in 1u64..5_000) {
            let fa = factorize(a).unwrap();
            let fb = factorize(b).unwrap();
            let coprime = fa.primes().all(|p| fb.primes().all(|q| p != q));
            if coprime {
                prop_assert_eq!(
                    euler_totient(a * b).unwrap(),
                    euler_totient(a).unwrap() * euler_totient(b).unwrap()
                );
                prop_assert_eq!(
                    divisor_count(a * b).unwrap(),
                    divisor_count(a).unwrap() * divisor_count(b).unwrap()
                );
            }
        }
    }
}
