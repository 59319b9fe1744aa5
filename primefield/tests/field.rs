//! Field arithmetic tests over primes from each square root class.

use primefield::Field;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

fn field(p: u128) -> Field {
    Field::new(p, &mut ChaCha8Rng::seed_from_u64(p as u64)).unwrap()
}

/// `2^128 - 159 ≡ 1 (mod 8)`
mod p128 {
    use super::*;

    primefield::test_field_axioms!(field(u128::MAX - 158));
    primefield::test_field_invert!(field(u128::MAX - 158));
    primefield::test_field_sqrt!(field(u128::MAX - 158), ChaCha8Rng::seed_from_u64(128));
}

/// `2^127 - 1 ≡ 3 (mod 4)`
mod p127 {
    use super::*;

    primefield::test_field_sqrt!(field(u128::MAX >> 1), ChaCha8Rng::seed_from_u64(127));
}

/// `2^64 - 59 ≡ 5 (mod 8)`
mod p64 {
    use super::*;

    primefield::test_field_axioms!(field(0xffff_ffff_ffff_ffc5));
    primefield::test_field_invert!(field(0xffff_ffff_ffff_ffc5));
    primefield::test_field_sqrt!(field(0xffff_ffff_ffff_ffc5), ChaCha8Rng::seed_from_u64(64));
}

/// `9973 ≡ 5 (mod 8)`
mod p9973 {
    use super::*;

    primefield::test_field_sqrt!(field(9973), ChaCha8Rng::seed_from_u64(9973));
}

/// `113 ≡ 1 (mod 8)`
mod p113 {
    use super::*;

    primefield::test_field_axioms!(field(113));
    primefield::test_field_sqrt!(field(113), ChaCha8Rng::seed_from_u64(113));
}
