//! BN curve search.

use crate::{
    Error, Exhausted, Result,
    params::{BnPolynomials, CurveParameters, bn_polynomials},
};
use primefield::{Field, MILLER_RABIN_ROUNDS, is_probably_prime};
use rand_core::RngCore;
use tracing::{debug, instrument, trace, warn};
use weierstrass::{AffinePoint, Curve};

/// Default bound on the number of candidates each search phase examines.
pub const DEFAULT_MAX_ITERATIONS: usize = 1 << 16;

/// `a` coefficient of every generated curve: BN curves are `y² = x³ + b`.
const A: u128 = 0;

/// Configurable BN curve search.
///
/// ```
/// use bnkit::Generator;
/// use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let params = Generator::new()
///     .max_iterations(64)
///     .generate(16, &mut rng)
///     .unwrap();
///
/// let g = params.generator().unwrap();
/// assert!(g.mul(params.n()).unwrap().is_identity());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Generator {
    max_iterations: usize,
    primality_rounds: usize,
    start_z: Option<i128>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Search with [`DEFAULT_MAX_ITERATIONS`] and [`MILLER_RABIN_ROUNDS`].
    pub const fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            primality_rounds: MILLER_RABIN_ROUNDS,
            start_z: None,
        }
    }

    /// Bound each search phase to `max_iterations` candidates.
    pub const fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Number of Miller-Rabin rounds applied to each candidate prime.
    ///
    /// At least one round is always applied.
    pub const fn primality_rounds(mut self, rounds: usize) -> Self {
        self.primality_rounds = if rounds == 0 { 1 } else { rounds };
        self
    }

    /// Start the prime search at `z` instead of `2^(target_bits / 4)`.
    ///
    /// Use `last_z + 1` from [`Exhausted::PrimePair`] to resume a search.
    pub const fn start_z(mut self, z: i128) -> Self {
        self.start_z = Some(z);
        self
    }

    /// Find BN curve parameters with a field prime of roughly `target_bits`
    /// bits.
    #[instrument(skip_all, fields(target_bits = target_bits))]
    pub fn generate<R: RngCore + ?Sized>(
        &self,
        target_bits: u32,
        rng: &mut R,
    ) -> Result<CurveParameters> {
        let start = match self.start_z {
            Some(z) => z,
            None => initial_z(target_bits)?,
        };

        let (z, polys) = self.find_prime_pair(start, target_bits, rng)?;
        let field = Field::with_rounds(polys.p, self.primality_rounds, rng)?;
        let (curve, y) = self.find_coefficient(field, polys.n, rng)?;

        debug!(z, p = polys.p, n = polys.n, b = curve.b().value(), "found BN curve");
        Ok(CurveParameters::new(z, polys.n, y, curve))
    }

    /// Walk `z` upward from `start`, testing `-z` before `z`, until `p(z)` and
    /// `n(z)` are both prime.
    #[instrument(skip_all, fields(start = start))]
    fn find_prime_pair<R: RngCore + ?Sized>(
        &self,
        start: i128,
        target_bits: u32,
        rng: &mut R,
    ) -> Result<(i128, BnPolynomials)> {
        let mut z = start;

        for _ in 0..self.max_iterations {
            let neg_z = z.checked_neg().ok_or(Error::TargetTooLarge { target_bits })?;

            for candidate in [neg_z, z] {
                let polys =
                    bn_polynomials(candidate).ok_or(Error::TargetTooLarge { target_bits })?;

                if self.is_prime(polys.p, rng) && self.is_prime(polys.n, rng) {
                    debug!(z = candidate, p = polys.p, n = polys.n, "found prime pair");
                    return Ok((candidate, polys));
                }
            }

            trace!(z, "rejected");
            z = z.checked_add(1).ok_or(Error::TargetTooLarge { target_bits })?;
        }

        let last_z = z.wrapping_sub(1);
        warn!(last_z, "prime pair search exhausted");
        Err(Error::SearchExhausted(Exhausted::PrimePair { last_z }))
    }

    /// Find the least `b ≥ 1` such that `b + 1` is a square and
    /// `G = (1, √(b + 1))` on `y² = x³ + b` has order `n`.
    ///
    /// Candidates stop at `b = p - 2`: `b = p - 1` makes `b + 1` zero and
    /// larger values repeat earlier curves.
    #[instrument(skip_all, fields(p = field.prime()))]
    fn find_coefficient<R: RngCore + ?Sized>(
        &self,
        field: Field,
        n: u128,
        rng: &mut R,
    ) -> Result<(Curve, u128)> {
        let one = field.one();
        let mut b = 0;

        for _ in 0..self.max_iterations {
            if b + 2 >= field.prime() {
                break;
            }
            b += 1;

            let rhs = field.reduce(b).add(&one)?;
            if !rhs.is_quadratic_residue() {
                trace!(b, "b + 1 is not a square");
                continue;
            }

            let curve = match Curve::from_coefficients(field, A, b) {
                Ok(curve) => curve,
                Err(weierstrass::Error::SingularCurve) => {
                    trace!(b, "singular");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let y = rhs.sqrt(rng)?.first();
            let g = AffinePoint::new(one, y, false, &curve)?;

            if g.mul(n)?.is_identity() {
                debug!(b, y = y.value(), "found generator");
                return Ok((curve, y.value()));
            }

            trace!(b, "generator order is not n");
        }

        warn!(last_b = b, "coefficient search exhausted");
        Err(Error::SearchExhausted(Exhausted::Coefficient { last_b: b }))
    }

    fn is_prime<R: RngCore + ?Sized>(&self, n: u128, rng: &mut R) -> bool {
        is_probably_prime(n, self.primality_rounds, rng)
    }
}

/// `2^(target_bits / 4)`, the BN parameter giving a prime of about
/// `target_bits` bits.
fn initial_z(target_bits: u32) -> Result<i128> {
    1i128
        .checked_shl(target_bits / 4)
        .filter(|z| *z > 0)
        .ok_or(Error::TargetTooLarge { target_bits })
}

/// Find BN curve parameters with a field prime of roughly `target_bits` bits,
/// bounding each search phase by `max_iterations` candidates.
pub fn generate_bn_curve<R: RngCore + ?Sized>(
    target_bits: u32,
    max_iterations: usize,
    rng: &mut R,
) -> Result<CurveParameters> {
    Generator::new()
        .max_iterations(max_iterations)
        .generate(target_bits, rng)
}
