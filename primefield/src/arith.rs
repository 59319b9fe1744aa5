//! Integer arithmetic underlying the field: reduction helpers, exponentiation
//! and the Euclidean algorithms.

use bigint::{NonZero, U128, Word};

/// Nonzero modulus prepared for overflow-free modular arithmetic.
///
/// Values are `u128`, but products are formed as 256-bit intermediates by
/// `crypto-bigint` and only then reduced, so no bits are lost for moduli up to
/// `2^128 - 1`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Modulus {
    value: u128,
    wide: NonZero<U128>,
}

impl Modulus {
    /// Prepare `value` as a modulus. Returns `None` if it is zero.
    pub(crate) fn new(value: u128) -> Option<Self> {
        let wide = Option::<NonZero<U128>>::from(NonZero::new(U128::from_u128(value)))?;
        Some(Self { value, wide })
    }

    /// The modulus as a plain integer.
    pub(crate) const fn get(&self) -> u128 {
        self.value
    }

    /// Reduce an arbitrary integer.
    pub(crate) const fn reduce(&self, a: u128) -> u128 {
        a % self.value
    }

    /// `a + b mod m` for reduced `a`, `b`.
    pub(crate) const fn add(&self, a: u128, b: u128) -> u128 {
        // a + b may not fit in 128 bits, so compare against m - b instead
        let headroom = self.value - b;
        if a >= headroom { a - headroom } else { a + b }
    }

    /// `a - b mod m` for reduced `a`, `b`.
    pub(crate) const fn sub(&self, a: u128, b: u128) -> u128 {
        if a >= b { a - b } else { self.value - (b - a) }
    }

    /// `-a mod m` for reduced `a`.
    pub(crate) const fn neg(&self, a: u128) -> u128 {
        if a == 0 { 0 } else { self.value - a }
    }

    /// `a * b mod m`.
    pub(crate) fn mul(&self, a: u128, b: u128) -> u128 {
        let product = U128::from_u128(a).mul_mod_vartime(&U128::from_u128(b), &self.wide);
        to_u128(&product)
    }

    /// `base^exp mod m` by right-to-left square-and-multiply.
    pub(crate) fn pow(&self, base: u128, mut exp: u128) -> u128 {
        let mut res = 1;
        let mut acc = self.reduce(base);

        while exp > 0 {
            if exp & 1 == 1 {
                res = self.mul(res, acc);
            }
            acc = self.mul(acc, acc);
            exp >>= 1;
        }

        res
    }
}

impl PartialEq for Modulus {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Modulus {}

/// Collapse a 128-bit `crypto-bigint` integer into a native `u128`.
fn to_u128(n: &U128) -> u128 {
    n.as_words()
        .iter()
        .rev()
        .fold(0, |acc, &w| (acc << Word::BITS) | u128::from(w))
}

/// Compute `base^exp mod modulus` with binary square-and-multiply, scanning the
/// exponent from its least significant bit.
///
/// An exponent of zero always yields `1`.
///
/// A `modulus` of zero disables reduction and returns the plain power, which
/// wraps at `2^128`. This form is meant for small combinatorial quantities such
/// as `2^k`, not for field values.
pub fn modexp(base: u128, exp: u128, modulus: u128) -> u128 {
    if exp == 0 {
        return 1;
    }

    match Modulus::new(modulus) {
        Some(m) => m.pow(base, exp),
        None => {
            let mut exp = exp;
            let mut res: u128 = 1;
            let mut acc = base;

            while exp > 0 {
                if exp & 1 == 1 {
                    res = res.wrapping_mul(acc);
                }
                acc = acc.wrapping_mul(acc);
                exp >>= 1;
            }

            res
        }
    }
}

/// Greatest common divisor by Euclid's algorithm. `gcd(a, 0) = a`.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Output of the extended Euclidean algorithm: `a·u + b·v = gcd`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bezout {
    /// `gcd(a, b)`
    pub gcd: u128,

    /// Coefficient of `a`.
    pub u: i128,

    /// Coefficient of `b`.
    pub v: i128,
}

/// Extended Euclidean algorithm: compute `gcd(a, b)` together with Bézout
/// coefficients `u`, `v` such that `a·u + b·v = gcd(a, b)`.
///
/// The coefficient recurrence runs in wrapping `i128` arithmetic. The final
/// coefficients are bounded by `|u| ≤ b / 2g` and `|v| ≤ a / 2g`, so the
/// results are exact even though intermediate products may wrap.
pub fn extended_gcd(a: u128, b: u128) -> Bezout {
    let (mut r_prev, mut r_curr) = (a, b);
    let (mut u_prev, mut u_curr) = (1i128, 0i128);
    let (mut v_prev, mut v_curr) = (0i128, 1i128);

    while r_curr != 0 {
        let q = r_prev / r_curr;
        let r_next = r_prev % r_curr;

        // q may exceed i128::MAX; the cast wraps consistently with the
        // wrapping updates below
        let q = q as i128;
        let u_next = u_prev.wrapping_sub(q.wrapping_mul(u_curr));
        let v_next = v_prev.wrapping_sub(q.wrapping_mul(v_curr));

        (r_prev, r_curr) = (r_curr, r_next);
        (u_prev, u_curr) = (u_curr, u_next);
        (v_prev, v_curr) = (v_curr, v_next);
    }

    Bezout {
        gcd: r_prev,
        u: u_prev,
        v: v_prev,
    }
}

/// Map a signed integer into `0..m`.
pub(crate) fn reduce_signed(x: i128, m: &Modulus) -> u128 {
    let r = m.reduce(x.unsigned_abs());
    if x < 0 { m.neg(r) } else { r }
}
