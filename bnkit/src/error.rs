//! Error types.

use core::fmt;

/// Errors raised while generating or using curve parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Field arithmetic failed.
    Field(primefield::Error),

    /// Curve arithmetic failed.
    Curve(weierstrass::Error),

    /// A bounded search ran out of iterations.
    SearchExhausted(Exhausted),

    /// The BN polynomials overflow 128 bits at the requested size.
    TargetTooLarge {
        /// Requested bit length.
        target_bits: u32,
    },

    /// The operation is declared but has no implementation.
    NotImplemented,
}

/// Which search ran out of iterations, and where it stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Exhausted {
    /// No `z` yielded prime `p(z)` and `n(z)`. A new search can resume at
    /// `last_z + 1`.
    PrimePair {
        /// Last BN parameter examined.
        last_z: i128,
    },

    /// No coefficient `b` yielded a generator of order `n`.
    Coefficient {
        /// Last coefficient examined.
        last_b: u128,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(err) => write!(f, "field arithmetic error: {err}"),
            Self::Curve(err) => write!(f, "curve arithmetic error: {err}"),
            Self::SearchExhausted(Exhausted::PrimePair { last_z }) => {
                write!(f, "no BN prime pair found up to z = {last_z}")
            }
            Self::SearchExhausted(Exhausted::Coefficient { last_b }) => {
                write!(f, "no curve coefficient found up to b = {last_b}")
            }
            Self::TargetTooLarge { target_bits } => {
                write!(f, "{target_bits}-bit BN parameters do not fit in 128 bits")
            }
            Self::NotImplemented => f.write_str("operation not implemented"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::Curve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Error {
        Error::Field(err)
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Error {
        match err {
            weierstrass::Error::Field(err) => Error::Field(err),
            err => Error::Curve(err),
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
