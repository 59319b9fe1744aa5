//! Miller-Rabin probabilistic primality testing.

use crate::arith::Modulus;
use rand_core::RngCore;

/// Probabilistic primality test.
///
/// Returns `false` for `n ≤ 2` and for even `n`. Otherwise `n - 1` is written as
/// `2^s · d` with `d` odd and `rounds` random bases `a ∈ [2, n - 2]` are drawn
/// from `rng`. A base witnesses compositeness unless `a^d ≡ 1` or
/// `a^(2^j · d) ≡ -1 (mod n)` for some `j < s`; a single witness rejects `n`.
///
/// A composite passes one round with probability at most `1/4`, so the chance
/// of a false positive is below `4^-rounds`.
pub fn is_probably_prime<R: RngCore + ?Sized>(n: u128, rounds: usize, rng: &mut R) -> bool {
    if n <= 2 || n & 1 == 0 {
        return false;
    }

    // no bases in [2, n - 2]
    if n == 3 {
        return true;
    }

    let Some(m) = Modulus::new(n) else {
        return false;
    };

    let n_minus_one = n - 1;
    let s = n_minus_one.trailing_zeros();
    let d = n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = 2 + random_below(rng, n - 3);
        let mut x = m.pow(a, d);

        if x == 1 || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = m.mul(x, x);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Draw an integer in `0..bound` from `rng`.
///
/// Uses a full 128-bit draw reduced modulo `bound`; the resulting bias is
/// irrelevant for witness selection.
pub(crate) fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: u128) -> u128 {
    debug_assert!(bound > 0);
    let wide = (u128::from(rng.next_u64()) << 64) | u128::from(rng.next_u64());
    wide % bound
}

#[cfg(test)]
mod tests {
    use super::{is_probably_prime, random_below};
    use crate::MILLER_RABIN_ROUNDS;
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn classifies_fixtures() {
        let mut rng = rng();

        for n in [11u128, 79, 104729, 1319] {
            assert!(is_probably_prime(n, MILLER_RABIN_ROUNDS, &mut rng), "{n}");
        }

        for n in [2u128, 10, 20, 40124014202, 12419082402] {
            assert!(!is_probably_prime(n, MILLER_RABIN_ROUNDS, &mut rng), "{n}");
        }
    }

    #[test]
    fn small_numbers() {
        let mut rng = rng();
        assert!(!is_probably_prime(0, 10, &mut rng));
        assert!(!is_probably_prime(1, 10, &mut rng));
        assert!(is_probably_prime(3, 10, &mut rng));
        assert!(is_probably_prime(5, 10, &mut rng));
        assert!(is_probably_prime(7, 10, &mut rng));
        assert!(!is_probably_prime(9, 10, &mut rng));
    }

    #[test]
    fn matches_trial_division_below_2000() {
        let mut rng = rng();

        for n in 3u128..2000 {
            let expected = n % 2 == 1 && (3..).step_by(2).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(is_probably_prime(n, 20, &mut rng), expected, "{n}");
        }
    }

    #[test]
    fn carmichael_numbers_are_composite() {
        let mut rng = rng();
        for n in [561u128, 1105, 1729, 2465, 2821, 6601, 8911, 41041, 825265] {
            assert!(!is_probably_prime(n, MILLER_RABIN_ROUNDS, &mut rng), "{n}");
        }
    }

    #[test]
    fn wide_primes() {
        let mut rng = rng();

        // 2^127 - 1, 2^128 - 159, and the Goldilocks prime 2^64 - 2^32 + 1
        for p in [u128::MAX >> 1, u128::MAX - 158, 0xffff_ffff_0000_0001] {
            assert!(is_probably_prime(p, MILLER_RABIN_ROUNDS, &mut rng));
        }

        // products of two 64-bit primes
        let q = 0xffff_ffff_ffff_ffc5u128;
        assert!(is_probably_prime(q, MILLER_RABIN_ROUNDS, &mut rng));
        assert!(!is_probably_prime(q * 0xffff_ffff_0000_0001, MILLER_RABIN_ROUNDS, &mut rng));
        assert!(!is_probably_prime((u128::MAX >> 1) - 2, MILLER_RABIN_ROUNDS, &mut rng));
    }

    #[test]
    fn random_below_in_range() {
        let mut rng = rng();
        for bound in [1u128, 2, 3, 1000, u128::MAX] {
            for _ in 0..32 {
                assert!(random_below(&mut rng, bound) < bound);
            }
        }
    }
}
