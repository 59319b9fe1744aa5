//! BN curve parameters.

use crate::Result;
use weierstrass::{AffinePoint, Curve};

/// Values of the BN polynomials at a given `z`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BnPolynomials {
    /// Field prime candidate `p(z) = 36z⁴ + 36z³ + 24z² + 6z + 1`.
    pub p: u128,

    /// Trace of Frobenius `t(z) = 6z² + 1`.
    pub t: u128,

    /// Group order candidate `n(z) = p(z) + 1 - t(z)`.
    pub n: u128,
}

/// Evaluate the BN polynomials at `z`.
///
/// Returns `None` if `p(z)` does not fit in 127 bits.
pub fn bn_polynomials(z: i128) -> Option<BnPolynomials> {
    let z2 = z.checked_mul(z)?;
    let z3 = z2.checked_mul(z)?;
    let z4 = z3.checked_mul(z)?;

    let p = 36i128
        .checked_mul(z4)?
        .checked_add(36i128.checked_mul(z3)?)?
        .checked_add(24i128.checked_mul(z2)?)?
        .checked_add(6i128.checked_mul(z)?)?
        .checked_add(1)?;
    let t = 6i128.checked_mul(z2)?.checked_add(1)?;
    let n = p.checked_add(1)?.checked_sub(t)?;

    Some(BnPolynomials {
        p: u128::try_from(p).ok()?,
        t: u128::try_from(t).ok()?,
        n: u128::try_from(n).ok()?,
    })
}

/// Parameters of a BN curve `y² = x³ + a·x + b` over `F_p` with a generator
/// `G = (1, y)` of prime order `n`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    z: i128,
    n: u128,
    y: u128,
    curve: Curve,
}

impl CurveParameters {
    /// Bundle parameters found by a search.
    pub(crate) const fn new(z: i128, n: u128, y: u128, curve: Curve) -> Self {
        Self { z, n, y, curve }
    }

    /// BN parameter `z`.
    pub const fn z(&self) -> i128 {
        self.z
    }

    /// Field prime `p`.
    pub const fn p(&self) -> u128 {
        self.curve.field().prime()
    }

    /// Prime group order `n`.
    pub const fn n(&self) -> u128 {
        self.n
    }

    /// Trace of Frobenius `t = p + 1 - n`.
    pub const fn t(&self) -> u128 {
        self.p() + 1 - self.n
    }

    /// Curve coefficient `a`.
    pub const fn a(&self) -> u128 {
        self.curve.a().value()
    }

    /// Curve coefficient `b`.
    pub const fn b(&self) -> u128 {
        self.curve.b().value()
    }

    /// y-coordinate of the generator `(1, y)`.
    pub const fn y(&self) -> u128 {
        self.y
    }

    /// The curve.
    pub const fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The generator point `G = (1, y)`.
    pub fn generator(&self) -> Result<AffinePoint<'_>> {
        Ok(self.curve.point(1, self.y)?)
    }
}
