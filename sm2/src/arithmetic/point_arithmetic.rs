//! Point addition and doubling in Jacobian coordinates.
//!
//! Formulas follow GM/T 0003.1-2012 Annex A.1.2.3.2, where the
//! intermediate values are named λ1 through λ9.

use crate::{CurveParams, JacobianPoint};

/// Returns `lhs + rhs`.
///
/// Adding the identity returns the other operand unchanged. The formula is
/// not complete: when both operands represent the same point it yields
/// `Z3 = 0`, so that case is routed to [`double`].
pub(crate) fn add(
    curve: &CurveParams,
    lhs: &JacobianPoint,
    rhs: &JacobianPoint,
) -> JacobianPoint {
    if lhs.is_identity() {
        return rhs.clone();
    }
    if rhs.is_identity() {
        return lhs.clone();
    }

    let z1z1 = lhs.z.square();
    let z2z2 = rhs.z.square();

    let lambda1 = &lhs.x * &z2z2;
    let lambda2 = &rhs.x * &z1z1;
    let lambda3 = &lambda1 - &lambda2;
    let lambda4 = &lhs.y * &(&z2z2 * &rhs.z);
    let lambda5 = &rhs.y * &(&z1z1 * &lhs.z);
    let lambda6 = &lambda4 - &lambda5;

    if lambda3.is_zero() && lambda6.is_zero() {
        return double(curve, lhs);
    }

    let lambda3_sq = lambda3.square();
    let lambda7 = &lambda1 + &lambda2;
    let lambda8 = &lambda4 + &lambda5;
    let lambda7_lambda3_sq = &lambda7 * &lambda3_sq;

    let x3 = &lambda6.square() - &lambda7_lambda3_sq;
    let lambda9 = &lambda7_lambda3_sq - &x3.double();
    let y3 = (&lambda9 * &lambda6 - &lambda8 * &(&lambda3_sq * &lambda3)).half();
    let z3 = &(&lhs.z * &rhs.z) * &lambda3;

    JacobianPoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Returns `point + point`.
///
/// The identity doubles to itself since `Z = 0` propagates to the result.
pub(crate) fn double(curve: &CurveParams, point: &JacobianPoint) -> JacobianPoint {
    let z2 = point.z.square();
    let z4 = z2.square();
    let x2 = point.x.square();
    let y2 = point.y.square();

    let lambda1 = &(&x2.double() + &x2) + &(curve.a() * &z4);
    let lambda2 = &point.x.double().double() * &y2;
    let lambda3 = y2.square().double().double().double();

    let x3 = &lambda1.square() - &lambda2.double();
    let y3 = &(&lambda1 * &(&lambda2 - &x3)) - &lambda3;
    let z3 = (&point.y * &point.z).double();

    JacobianPoint {
        x: x3,
        y: y3,
        z: z3,
    }
}
