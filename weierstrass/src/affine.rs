//! Affine curve points.

use crate::{Curve, Error, Result};
use core::{fmt, ops::Neg};
use primefield::FieldElement;

/// Point on a Weierstrass curve in affine coordinates.
///
/// The point at infinity carries zero coordinates and is flagged by
/// `infinity`; every finite point satisfies the curve equation.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<'c> {
    /// x-coordinate
    x: FieldElement,

    /// y-coordinate
    y: FieldElement,

    /// Is this point the point at infinity?
    infinity: bool,

    curve: &'c Curve,
}

impl<'c> AffinePoint<'c> {
    /// Construct a point on `curve`.
    ///
    /// With `is_infinity` set the coordinates are ignored and the identity is
    /// returned. Otherwise fails with [`Error::OutOfField`] if a coordinate
    /// belongs to another field and [`Error::NotOnCurve`] if
    /// `y² ≠ x³ + a·x + b`.
    pub fn new(
        x: FieldElement,
        y: FieldElement,
        is_infinity: bool,
        curve: &'c Curve,
    ) -> Result<Self> {
        if is_infinity {
            return Ok(Self::identity(curve));
        }

        if x.field() != curve.field() || y.field() != curve.field() {
            return Err(Error::OutOfField);
        }

        if !curve.contains(&x, &y) {
            return Err(Error::NotOnCurve);
        }

        Ok(Self {
            x,
            y,
            infinity: false,
            curve,
        })
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(curve: &'c Curve) -> Self {
        let zero = curve.field().zero();
        Self {
            x: zero,
            y: zero,
            infinity: true,
            curve,
        }
    }

    /// Is this point the point at infinity?
    pub const fn is_identity(&self) -> bool {
        self.infinity
    }

    /// x-coordinate; zero for the identity.
    pub const fn x(&self) -> FieldElement {
        self.x
    }

    /// y-coordinate; zero for the identity.
    pub const fn y(&self) -> FieldElement {
        self.y
    }

    /// The curve this point lies on.
    pub const fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Finite point with coordinates already known to satisfy the equation.
    fn from_coordinates(x: FieldElement, y: FieldElement, curve: &'c Curve) -> Self {
        debug_assert!(curve.contains(&x, &y));
        Self {
            x,
            y,
            infinity: false,
            curve,
        }
    }

    fn check_curve(&self, other: &Self) -> Result<()> {
        if core::ptr::eq(self.curve, other.curve) || self.curve == other.curve {
            Ok(())
        } else {
            Err(Error::MismatchedCurve)
        }
    }

    /// Returns `self + other`.
    ///
    /// Inverse pairs (including a point of order two added to itself) sum to
    /// the identity, the identity is neutral, equal points are doubled along
    /// the tangent and any other pair uses the chord through both points.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_curve(other)?;

        if *other == -self {
            return Ok(Self::identity(self.curve));
        }
        if self.infinity {
            return Ok(*other);
        }
        if other.infinity {
            return Ok(*self);
        }

        let lambda = if self == other {
            // (3x² + a) / 2y
            let numerator = self.x.square().scalar_mul(3).add(&self.curve.a())?;
            numerator.divide(&self.y.double())?
        } else {
            // (y1 - y2) / (x1 - x2)
            let numerator = self.y.sub(&other.y)?;
            numerator.divide(&self.x.sub(&other.x)?)?
        };

        let x = lambda.square().sub(&self.x)?.sub(&other.x)?;
        let y = lambda.multiply(&self.x.sub(&x)?)?.sub(&self.y)?;
        Ok(Self::from_coordinates(x, y, self.curve))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&-other)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Returns `-self`: `(x, -y)`, with the identity mapping to itself.
    #[must_use]
    pub fn neg(&self) -> Self {
        if self.infinity {
            return *self;
        }

        Self {
            y: -self.y,
            ..*self
        }
    }

    /// Returns `scalar · self`.
    ///
    /// Double-and-add over the bits of `scalar`, least significant first.
    ///
    /// **This operation is variable time with respect to the scalar.**
    pub fn mul(&self, scalar: u128) -> Result<Self> {
        let mut acc = Self::identity(self.curve);
        let mut base = *self;
        let mut k = scalar;

        while k > 0 {
            if k & 1 == 1 {
                acc = acc.add(&base)?;
            }
            k >>= 1;
            if k > 0 {
                base = base.double()?;
            }
        }

        Ok(acc)
    }
}

impl PartialEq for AffinePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for AffinePoint<'_> {}

impl<'c> Neg for AffinePoint<'c> {
    type Output = AffinePoint<'c>;

    fn neg(self) -> AffinePoint<'c> {
        AffinePoint::neg(&self)
    }
}

impl<'c> Neg for &AffinePoint<'c> {
    type Output = AffinePoint<'c>;

    fn neg(self) -> AffinePoint<'c> {
        AffinePoint::neg(self)
    }
}

impl fmt::Display for AffinePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            f.write_str("infinity")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
