//! Curve equations.

use crate::{AffinePoint, Error, Result};
use primefield::{Field, FieldElement};
use rand_core::RngCore;

/// Random x-coordinates tried before scanning upward for a point.
const RANDOM_POINT_DRAWS: usize = 64;

/// Short Weierstrass curve `y² = x³ + a·x + b` over a prime field.
///
/// Points borrow the curve they belong to, so a `Curve` must outlive them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    /// Curve with the coefficients `a` and `b`.
    ///
    /// Both coefficients must come from the same field and the curve must be
    /// non-singular: `4a³ + 27b² ≠ 0`.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self> {
        if a.field() != b.field() {
            return Err(Error::OutOfField);
        }

        let discriminant = a
            .square()
            .multiply(&a)?
            .scalar_mul(4)
            .add(&b.square().scalar_mul(27))?;

        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        Ok(Self { a, b })
    }

    /// Curve over `field` with coefficients given as integers, reduced
    /// modulo the field prime.
    pub fn from_coefficients(field: Field, a: u128, b: u128) -> Result<Self> {
        Self::new(field.reduce(a), field.reduce(b))
    }

    /// The field the curve is defined over.
    pub const fn field(&self) -> Field {
        self.a.field()
    }

    /// The `a` coefficient.
    pub const fn a(&self) -> FieldElement {
        self.a
    }

    /// The `b` coefficient.
    pub const fn b(&self) -> FieldElement {
        self.b
    }

    /// Right-hand side of the curve equation, `x³ + a·x + b`.
    pub fn rhs(&self, x: &FieldElement) -> Result<FieldElement> {
        let x3 = x.square().multiply(x)?;
        Ok(x3.add(&self.a.multiply(x)?)?.add(&self.b)?)
    }

    /// Do `(x, y)` satisfy the curve equation?
    ///
    /// Coordinates from another field are never on the curve.
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> bool {
        match self.rhs(x) {
            Ok(rhs) => matches!(y.square().equals(&rhs), Ok(true)),
            Err(_) => false,
        }
    }

    /// The point at infinity.
    pub fn identity(&self) -> AffinePoint<'_> {
        AffinePoint::identity(self)
    }

    /// Finite point with the given integer coordinates.
    ///
    /// Fails with [`Error::Field`] if a coordinate is not reduced and
    /// [`Error::NotOnCurve`] if the equation does not hold.
    pub fn point(&self, x: u128, y: u128) -> Result<AffinePoint<'_>> {
        let field = self.field();
        AffinePoint::new(field.element(x)?, field.element(y)?, false, self)
    }

    /// Recover a point from its x-coordinate.
    ///
    /// `y_is_odd` selects which of the two square roots becomes the
    /// y-coordinate. Fails with [`Error::NotOnCurve`] if `x³ + a·x + b` is not
    /// a square.
    pub fn lift_x<R: RngCore + ?Sized>(
        &self,
        x: &FieldElement,
        y_is_odd: bool,
        rng: &mut R,
    ) -> Result<AffinePoint<'_>> {
        let alpha = self.rhs(x)?;

        let y = if alpha.is_zero() {
            alpha
        } else {
            let roots = alpha.sqrt(rng).map_err(|_| Error::NotOnCurve)?;
            let (r1, r2) = roots.to_tuple();
            if (r1.value() & 1 == 1) == y_is_odd { r1 } else { r2 }
        };

        AffinePoint::new(*x, y, false, self)
    }

    /// Finite point with a random x-coordinate.
    ///
    /// Roughly half of all x-coordinates lie on the curve, so the expected
    /// number of draws is two. After [`RANDOM_POINT_DRAWS`] misses the point
    /// with the least x-coordinate and even `y` is returned instead. Fails
    /// with [`Error::NotOnCurve`] if the curve has no finite points.
    pub fn random_point<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<AffinePoint<'_>> {
        let field = self.field();

        for _ in 0..RANDOM_POINT_DRAWS {
            let x = field.random(rng);
            let y_is_odd = rng.next_u32() & 1 == 1;

            if let Ok(point) = self.lift_x(&x, y_is_odd, rng) {
                return Ok(point);
            }
        }

        (0..field.prime())
            .find_map(|x| self.lift_x(&field.reduce(x), false, rng).ok())
            .ok_or(Error::NotOnCurve)
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::Error;
    use primefield::Field;
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
    use rand_core::RngCore;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(97)
    }

    /// Generator stuck at zero.
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

    #[test]
    fn singular_curves_are_rejected() {
        let f = field(97);
        assert_eq!(Curve::from_coefficients(f, 0, 0), Err(Error::SingularCurve));

        // 4·(-3)³ + 27·2² = 0
        assert_eq!(Curve::from_coefficients(f, 94, 2), Err(Error::SingularCurve));
        assert!(Curve::from_coefficients(f, 2, 3).is_ok());
    }

    #[test]
    fn coefficients_share_a_field() {
        let a = field(97).element(2).unwrap();
        let b = field(101).element(3).unwrap();
        assert_eq!(Curve::new(a, b), Err(Error::OutOfField));
    }

    #[test]
    fn membership() {
        let f = field(97);
        let curve = Curve::from_coefficients(f, 2, 3).unwrap();

        let x = f.element(0).unwrap();
        assert!(curve.contains(&x, &f.element(10).unwrap()));
        assert!(curve.contains(&x, &f.element(87).unwrap()));
        assert!(!curve.contains(&x, &f.element(11).unwrap()));

        let y = field(101).element(10).unwrap();
        assert!(!curve.contains(&x, &y));
    }

    #[test]
    fn point_construction() {
        let curve = Curve::from_coefficients(field(97), 2, 3).unwrap();

        assert!(curve.point(1, 43).is_ok());
        assert_eq!(curve.point(1, 44).err(), Some(Error::NotOnCurve));
        assert_eq!(
            curve.point(97, 0).err(),
            Some(Error::Field(primefield::Error::OutOfRange))
        );
    }

    #[test]
    fn lift_x_selects_parity() {
        let f = field(97);
        let curve = Curve::from_coefficients(f, 2, 3).unwrap();
        let mut rng = rng();

        let x = f.element(1).unwrap();
        let odd = curve.lift_x(&x, true, &mut rng).unwrap();
        let even = curve.lift_x(&x, false, &mut rng).unwrap();
        assert_eq!(odd.y().value(), 43);
        assert_eq!(even.y().value(), 54);

        // order-two point
        let x = f.element(30).unwrap();
        assert!(curve.lift_x(&x, true, &mut rng).unwrap().y().is_zero());
    }

    #[test]
    fn random_points_are_on_the_curve() {
        let curve = Curve::from_coefficients(field(97), 2, 3).unwrap();
        let mut rng = rng();

        for _ in 0..64 {
            let point = curve.random_point(&mut rng).unwrap();
            assert!(curve.contains(&point.x(), &point.y()));
        }
    }

    #[test]
    fn random_point_falls_back_to_a_scan() {
        // x = 0 gives x³ + 2x + 5 = 5, a non-residue modulo 97
        let curve = Curve::from_coefficients(field(97), 2, 5).unwrap();
        let point = curve.random_point(&mut StuckRng).unwrap();
        assert_eq!((point.x().value(), point.y().value()), (1, 28));
    }
}
