#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

mod arith;
mod dev;
mod error;
mod field;
mod primality;

pub use crate::{
    arith::{Bezout, extended_gcd, gcd, modexp},
    error::{Error, ErrorKind, Result},
    field::{Field, FieldElement, RootPair},
    primality::is_probably_prime,
};
pub use bigint;
pub use rand_core;

/// Number of Miller-Rabin rounds used when validating a field modulus.
///
/// A composite survives a single round with probability at most `1/4`, so the
/// false-positive rate is bounded by `4^-100`.
pub const MILLER_RABIN_ROUNDS: usize = 100;
