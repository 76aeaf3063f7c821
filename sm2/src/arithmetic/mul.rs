//! Scalar multiplication.

use super::point_arithmetic::{add, double};
use crate::{AffinePoint, CurveParams, JacobianPoint};

/// Returns `k * point`, where `k` is a big endian integer of any length.
///
/// Left-to-right binary double-and-add. Runs in time dependent on `k`.
/// No reduction modulo the group order is applied, and an empty or all-zero
/// `k` yields the identity.
pub(crate) fn mul_vartime(curve: &CurveParams, point: &AffinePoint, k: &[u8]) -> AffinePoint {
    let base = JacobianPoint::from(point);
    let mut acc = JacobianPoint::identity();

    for byte in k {
        for i in (0..8).rev() {
            acc = double(curve, &acc);

            if (byte >> i) & 1 == 1 {
                acc = add(curve, &base, &acc);
            }
        }
    }

    acc.to_affine()
}
