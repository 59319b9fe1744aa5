//! Bilinear pairing.

use crate::{Error, Result};
use weierstrass::AffinePoint;

/// Bilinear pairing `e(P, Q)`.
///
/// Not implemented: the target group `F_p¹²` is not modelled, and the call
/// always fails with [`Error::NotImplemented`].
pub fn pairing(_p: &AffinePoint<'_>, _q: &AffinePoint<'_>) -> Result<()> {
    Err(Error::NotImplemented)
}
