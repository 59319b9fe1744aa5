//! Modular square roots, choosing the algorithm from the residue class of the
//! field prime.

use super::FieldElement;
use crate::{
    error::{Error, Result},
    primality::random_below,
};
use rand_core::RngCore;

/// Random candidates tried before scanning upward for a non-residue.
const NON_RESIDUE_DRAWS: usize = 64;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// `p = 2`: every element is its own square root.
    Trivial,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Atkin algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Tonelli-Shanks algorithm for `p ≡ 1 (mod 8)`.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the algorithm to use with a particular prime.
    const fn for_prime(p: u128) -> Self {
        if p == 2 {
            Self::Trivial
        } else if p % 4 == 3 {
            Self::Shanks
        } else if p % 8 == 5 {
            Self::Atkin
        } else {
            Self::TonelliShanks
        }
    }
}

/// The two square roots `{r, -r}` of a quadratic residue.
///
/// Equality ignores order. Both roots coincide when `p = 2`.
#[derive(Clone, Copy, Debug)]
pub struct RootPair {
    first: FieldElement,
    second: FieldElement,
}

impl RootPair {
    fn new(root: FieldElement) -> Self {
        Self {
            first: root,
            second: -root,
        }
    }

    /// Root found by the algorithm.
    pub const fn first(&self) -> FieldElement {
        self.first
    }

    /// Its negation.
    pub const fn second(&self) -> FieldElement {
        self.second
    }

    /// Both roots, in the order found.
    pub const fn to_tuple(&self) -> (FieldElement, FieldElement) {
        (self.first, self.second)
    }

    /// Is `x` one of the two roots?
    pub fn contains(&self, x: &FieldElement) -> bool {
        *x == self.first || *x == self.second
    }
}

impl PartialEq for RootPair {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for RootPair {}

impl FieldElement {
    /// Returns both square roots of `self`.
    ///
    /// Fails with [`Error::NotQuadraticResidue`] unless `self` is a nonzero
    /// square. `rng` is only consulted for primes `p ≡ 1 (mod 8)`, where a
    /// random non-residue seeds the Tonelli-Shanks iteration.
    pub fn sqrt<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<RootPair> {
        if !self.is_quadratic_residue() {
            return Err(Error::NotQuadraticResidue);
        }

        let root = match Algorithm::for_prime(self.prime()) {
            Algorithm::Trivial => *self,
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::Atkin => self.sqrt_atkin(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(rng)?,
        };

        debug_assert_eq!(root.square(), *self);
        Ok(RootPair::new(root))
    }

    /// Shanks algorithm for `p ≡ 3 (mod 4)`: `self^((p + 1) / 4)`.
    fn sqrt_shanks(&self) -> Self {
        debug_assert_eq!(self.prime() % 4, 3);
        self.pow((self.prime() >> 2) + 1)
    }

    /// Atkin algorithm for `p ≡ 5 (mod 8)`.
    ///
    /// With `v = (2a)^((p - 5) / 8)` and `i = 2a·v²` (a square root of `-1`),
    /// the root is `a·v·(i - 1)`.
    fn sqrt_atkin(&self) -> Self {
        debug_assert_eq!(self.prime() % 8, 5);

        let two_a = self.double();
        let v = two_a.pow(self.prime() >> 3);
        let i = two_a.mul_inner(&v.square());
        let i_minus_one = i.sub_inner(&self.field.one());
        self.mul_inner(&v).mul_inner(&i_minus_one)
    }

    /// Tonelli-Shanks algorithm for `p ≡ 1 (mod 8)`.
    ///
    /// Write `p - 1 = 2^e·q` with `q` odd. Starting from `y = c^q` for a random
    /// non-residue `c`, `v = a^((q + 1) / 2)` and `w = a^q`, each step finds the
    /// order `2^k` of `w` and multiplies in a `2^(r - k)`-th root of unity so
    /// that the order of `w` strictly decreases while
    /// `v² = a·w` is preserved. The loop ends when `w = 1`.
    fn sqrt_tonelli_shanks<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        let p = self.prime();
        let e = (p - 1).trailing_zeros();
        let q = (p - 1) >> e;

        let mut y = self.non_residue(rng)?.pow(q);
        let mut r = e;
        let x = self.pow((q - 1) >> 1);
        let mut v = self.mul_inner(&x);
        let mut w = v.mul_inner(&x);

        while !w.is_one() {
            // least k with w^(2^k) = 1
            let mut k = 0;
            let mut t = w;
            while !t.is_one() {
                t = t.square();
                k += 1;
                if k == r {
                    return Err(Error::NotQuadraticResidue);
                }
            }

            let d = y.sqn(r - k - 1);
            y = d.square();
            r = k;
            v = d.mul_inner(&v);
            w = w.mul_inner(&y);
        }

        Ok(v)
    }

    /// A quadratic non-residue of the field, for odd `p > 3`.
    ///
    /// Half of all nonzero elements are non-residues, so one of the
    /// [`NON_RESIDUE_DRAWS`] random candidates almost always qualifies. Should
    /// every draw fail, the least non-residue is found by counting up from 2.
    fn non_residue<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        let p = self.prime();
        let drawn = (0..NON_RESIDUE_DRAWS).map(|_| 2 + random_below(rng, p - 2));

        drawn
            .chain(2..p)
            .map(|c| self.field.reduce(c))
            .find(|c| !c.is_quadratic_residue())
            .ok_or(Error::NotQuadraticResidue)
    }
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, RootPair};
    use crate::{Error, Field, FieldElement};
    use rand_chacha::{
        ChaCha8Rng,
        rand_core::{RngCore, SeedableRng},
    };

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x7153)
    }

    /// Generator stuck at zero: every random candidate is 2.
    struct StuckRng;

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn field(p: u128) -> Field {
        Field::new(p, &mut rng()).unwrap()
    }

    /// Take the square root of every nonzero square in `F_p`.
    fn sqrt_exhaustive(p: u128, expected: Algorithm) {
        assert_eq!(Algorithm::for_prime(p), expected);

        let f = field(p);
        let mut rng = rng();

        for x in 1..p {
            let a = f.element(x).unwrap().square();
            let roots = a.sqrt(&mut rng).unwrap();
            assert!(roots.contains(&f.element(x).unwrap()), "p = {p}, x = {x}");
            assert_eq!(roots.first().square(), a);
            assert_eq!(roots.second().square(), a);
            assert!(roots.first().add(&roots.second()).unwrap().is_zero());
        }
    }

    #[test]
    fn fixture_p101() {
        let mut rng = rng();
        let a = FieldElement::new(58, 101, &mut rng).unwrap();
        let (r1, r2) = a.sqrt(&mut rng).unwrap().to_tuple();

        let mut roots = [r1.value(), r2.value()];
        roots.sort_unstable();
        assert_eq!(roots, [19, 82]);
    }

    #[test]
    fn fixture_p113() {
        let mut rng = rng();
        let a = FieldElement::new(111, 113, &mut rng).unwrap();
        let f = a.field();

        let expected = RootPair {
            first: f.element(26).unwrap(),
            second: f.element(87).unwrap(),
        };
        assert_eq!(a.sqrt(&mut rng).unwrap(), expected);
    }

    #[test]
    fn trivial() {
        let f = field(2);
        let one = f.one();
        let roots = one.sqrt(&mut rng()).unwrap();
        assert_eq!(roots.first(), one);
        assert_eq!(roots.second(), one);
    }

    #[test]
    fn shanks() {
        for p in [3, 7, 11, 103, 1019] {
            sqrt_exhaustive(p, Algorithm::Shanks);
        }
    }

    #[test]
    fn atkin() {
        for p in [5, 13, 29, 101, 9973] {
            sqrt_exhaustive(p, Algorithm::Atkin);
        }
    }

    #[test]
    fn tonelli_shanks() {
        for p in [17, 41, 97, 113, 257, 7681, 65537] {
            sqrt_exhaustive(p, Algorithm::TonelliShanks);
        }
    }

    #[test]
    fn non_residues_are_rejected() {
        let mut rng = rng();

        for p in [101, 103, 113] {
            let f = field(p);
            for x in 1..p {
                let a = f.element(x).unwrap();
                if !a.is_quadratic_residue() {
                    assert_eq!(a.sqrt(&mut rng), Err(Error::NotQuadraticResidue));
                }
            }
        }
    }

    #[test]
    fn zero_is_rejected() {
        let f = field(113);
        assert_eq!(f.zero().sqrt(&mut rng()), Err(Error::NotQuadraticResidue));
    }

    #[test]
    fn wide_tonelli_shanks() {
        // Goldilocks: p - 1 = 2^32 · (2^32 - 1)
        let f = field(0xffff_ffff_0000_0001);
        let mut rng = rng();

        for x in [2u128, 3, 0xdead_beef, 0xffff_ffff_0000_0000] {
            let x = f.element(x).unwrap();
            let roots = x.square().sqrt(&mut rng).unwrap();
            assert!(roots.contains(&x));
        }
    }

    #[test]
    fn non_residue_search_terminates() {
        // 2 is a square modulo primes p ≡ ±1 (mod 8), so the draws all fail
        // and the scan finds the least non-residue
        for (p, least) in [(97, 5), (113, 3), (7681, 13)] {
            let f = field(p);
            assert_eq!(f.one().non_residue(&mut StuckRng).unwrap().value(), least);

            let x = f.element(26).unwrap();
            assert!(x.square().sqrt(&mut StuckRng).unwrap().contains(&x));
        }
    }
}
