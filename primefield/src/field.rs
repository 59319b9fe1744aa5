//! Prime fields selected at runtime and their elements.

mod sqrt;

pub use self::sqrt::RootPair;

use crate::{
    MILLER_RABIN_ROUNDS,
    arith::{Modulus, extended_gcd, reduce_signed},
    error::{Error, Result},
    primality::{is_probably_prime, random_below},
};
use core::{fmt, ops::Neg};
use rand_core::RngCore;

/// Prime field `F_p` for a prime `p < 2^128` chosen at runtime.
///
/// The primality of `p` is checked once, on construction; elements then carry
/// a copy of the field so binary operations can reject mismatched operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    modulus: Modulus,
}

impl Field {
    /// Validate `prime` with [`MILLER_RABIN_ROUNDS`] rounds of Miller-Rabin.
    pub fn new<R: RngCore + ?Sized>(prime: u128, rng: &mut R) -> Result<Self> {
        Self::with_rounds(prime, MILLER_RABIN_ROUNDS, rng)
    }

    /// Validate `prime` with the given number of Miller-Rabin rounds.
    ///
    /// `2` is accepted as well: it is prime, but the Miller-Rabin tester only
    /// handles odd candidates. Zero rounds validate nothing, so every prime is
    /// rejected with [`Error::NotPrime`].
    pub fn with_rounds<R: RngCore + ?Sized>(
        prime: u128,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if rounds == 0 {
            return Err(Error::NotPrime);
        }

        if prime != 2 && !is_probably_prime(prime, rounds, rng) {
            return Err(Error::NotPrime);
        }

        let modulus = Modulus::new(prime).ok_or(Error::NotPrime)?;
        Ok(Self { modulus })
    }

    /// The field prime `p`.
    pub const fn prime(&self) -> u128 {
        self.modulus.get()
    }

    /// Additive identity.
    pub const fn zero(&self) -> FieldElement {
        FieldElement {
            value: 0,
            field: *self,
        }
    }

    /// Multiplicative identity.
    pub const fn one(&self) -> FieldElement {
        FieldElement {
            value: 1,
            field: *self,
        }
    }

    /// Element with the given canonical value.
    ///
    /// Fails with [`Error::OutOfRange`] unless `value < p`.
    pub fn element(&self, value: u128) -> Result<FieldElement> {
        if value >= self.prime() {
            return Err(Error::OutOfRange);
        }

        Ok(FieldElement {
            value,
            field: *self,
        })
    }

    /// Element congruent to `value`, reducing it modulo `p`.
    pub const fn reduce(&self, value: u128) -> FieldElement {
        FieldElement {
            value: self.modulus.reduce(value),
            field: *self,
        }
    }

    /// Element congruent to a signed integer.
    pub fn reduce_signed(&self, value: i128) -> FieldElement {
        FieldElement {
            value: reduce_signed(value, &self.modulus),
            field: *self,
        }
    }

    /// Element drawn from `rng`, uniformly up to a negligible bias.
    pub fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement {
            value: random_below(rng, self.prime()),
            field: *self,
        }
    }
}

/// Element of a [`Field`].
///
/// Immutable value type: arithmetic returns new elements of the same field.
/// Operations combining two elements fail with [`Error::MismatchedField`] when
/// the primes differ.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldElement {
    value: u128,
    field: Field,
}

impl FieldElement {
    /// Construct `value mod prime`, validating both the prime and the range of
    /// `value`.
    pub fn new<R: RngCore + ?Sized>(value: u128, prime: u128, rng: &mut R) -> Result<Self> {
        Field::new(prime, rng)?.element(value)
    }

    /// Canonical value in `0..p`.
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// The field prime `p`.
    pub const fn prime(&self) -> u128 {
        self.field.prime()
    }

    /// The field this element belongs to.
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Is this element zero?
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Is this element one?
    pub const fn is_one(&self) -> bool {
        self.value == 1
    }

    fn with_value(&self, value: u128) -> Self {
        Self {
            value,
            field: self.field,
        }
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.field == rhs.field {
            Ok(())
        } else {
            Err(Error::MismatchedField)
        }
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value(self.field.modulus.add(self.value, rhs.value)))
    }

    /// Subtract elements.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.sub_inner(rhs))
    }

    /// Subtraction for operands already known to share a field.
    pub(crate) fn sub_inner(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.field, rhs.field);
        self.with_value(self.field.modulus.sub(self.value, rhs.value))
    }

    /// Negate element: `p - self`, with `-0 = 0`.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.with_value(self.field.modulus.neg(self.value))
    }

    /// Double element (add it to itself).
    #[must_use]
    pub fn double(&self) -> Self {
        self.with_value(self.field.modulus.add(self.value, self.value))
    }

    /// Multiply elements.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.mul_inner(rhs))
    }

    /// Multiplication for operands already known to share a field.
    pub(crate) fn mul_inner(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.field, rhs.field);
        self.with_value(self.field.modulus.mul(self.value, rhs.value))
    }

    /// Multiply by an integer: `k · self`.
    #[must_use]
    pub fn scalar_mul(&self, k: u128) -> Self {
        let m = &self.field.modulus;
        self.with_value(m.mul(m.reduce(k), self.value))
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        self.with_value(self.field.modulus.mul(self.value, self.value))
    }

    /// Returns `self^exp`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    #[must_use]
    pub fn pow(&self, exp: u128) -> Self {
        self.with_value(self.field.modulus.pow(self.value, exp))
    }

    /// Returns `self^(2^n)`.
    #[must_use]
    pub fn sqn(&self, n: u32) -> Self {
        (0..n).fold(*self, |x, _| x.square())
    }

    /// Compute field inversion: `1 / self`, via the extended Euclidean
    /// algorithm.
    ///
    /// Fails with [`Error::ZeroInverse`] for zero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ZeroInverse);
        }

        let bezout = extended_gcd(self.value, self.prime());
        debug_assert_eq!(bezout.gcd, 1);
        Ok(self.with_value(reduce_signed(bezout.u, &self.field.modulus)))
    }

    /// Divide elements: `self / rhs`.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        self.multiply(&rhs.invert()?)
    }

    /// Compare elements, failing with [`Error::MismatchedField`] when they
    /// belong to different fields.
    ///
    /// [`PartialEq`] instead treats elements of different fields as unequal.
    pub fn equals(&self, rhs: &Self) -> Result<bool> {
        self.check_field(rhs)?;
        Ok(self.value == rhs.value)
    }

    /// Euler's criterion: is this element a nonzero square?
    ///
    /// Zero is not considered a quadratic residue.
    pub fn is_quadratic_residue(&self) -> bool {
        if self.is_zero() {
            return false;
        }

        self.pow((self.prime() - 1) >> 1).is_one()
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl From<FieldElement> for u128 {
    fn from(fe: FieldElement) -> u128 {
        fe.value
    }
}
