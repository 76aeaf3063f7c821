//! Pure Rust implementation of group operations on the SM2 elliptic curve.
//!
//! Points are added and doubled in Jacobian coordinates `(X, Y, Z)`, which
//! represent the affine point `(X/Z², Y/Z³)`, so that a single inversion is
//! needed per scalar multiplication.
//!
//! Curve parameters can be found in [draft-shen-sm2-ecdsa Appendix D]:
//! Recommended Parameters.
//!
//! [draft-shen-sm2-ecdsa Appendix D]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#appendix-D

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod jacobian;
pub(crate) mod mul;
pub(crate) mod point_arithmetic;

pub use self::{affine::AffinePoint, field::FieldElement, jacobian::JacobianPoint};
