#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod error;
mod generator;
mod pairing;
mod params;

pub use crate::{
    error::{Error, Exhausted, Result},
    generator::{DEFAULT_MAX_ITERATIONS, Generator, generate_bn_curve},
    pairing::pairing,
    params::{BnPolynomials, CurveParameters, bn_polynomials},
};
pub use primefield::{self, Field, FieldElement};
pub use weierstrass::{self, AffinePoint, Curve};
