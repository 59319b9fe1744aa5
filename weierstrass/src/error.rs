//! Error types.

use core::fmt;

/// Curve errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Underlying field arithmetic failed.
    Field(primefield::Error),

    /// Coordinate or coefficient does not belong to the curve's field.
    OutOfField,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Discriminant `4a³ + 27b²` vanishes.
    SingularCurve,

    /// Points belong to different curves.
    MismatchedCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(err) => write!(f, "field arithmetic error: {err}"),
            Self::OutOfField => f.write_str("value is not an element of the curve's field"),
            Self::NotOnCurve => f.write_str("point is not on the curve"),
            Self::SingularCurve => f.write_str("curve is singular"),
            Self::MismatchedCurve => f.write_str("points belong to different curves"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Error {
        Error::Field(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
