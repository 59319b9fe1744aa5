//! Error types.

use core::fmt;

/// Field errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Modulus failed the primality test.
    NotPrime,

    /// Value is not in the range `0..p`.
    OutOfRange,

    /// Operands belong to fields with different primes.
    MismatchedField,

    /// Zero has no multiplicative inverse.
    ZeroInverse,

    /// Square root requested for a quadratic non-residue.
    NotQuadraticResidue,
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Rejected input when constructing a value.
    Validation,

    /// Operation is undefined for its operands.
    Domain,
}

impl Error {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPrime | Self::OutOfRange => ErrorKind::Validation,
            Self::MismatchedField | Self::ZeroInverse | Self::NotQuadraticResidue => {
                ErrorKind::Domain
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPrime => f.write_str("modulus is not prime"),
            Self::OutOfRange => f.write_str("value is not reduced modulo the field prime"),
            Self::MismatchedField => f.write_str("operands belong to different fields"),
            Self::ZeroInverse => f.write_str("zero has no inverse"),
            Self::NotQuadraticResidue => f.write_str("value is not a quadratic residue"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
