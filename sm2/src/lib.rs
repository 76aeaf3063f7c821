#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod arithmetic;
mod curve;
mod error;
mod params;
mod public_key;
mod secret_key;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, JacobianPoint},
    curve::Curve,
    error::{Error, Result},
    params::{CurveParams, sm2p256},
    public_key::PublicKey,
    secret_key::{PrivateKey, random_scalar},
};
pub use num_bigint::{self, BigUint};
pub use rand_core;
