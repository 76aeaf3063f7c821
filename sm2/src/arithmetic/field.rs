//! Field arithmetic modulo p = 0xfffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff
//!
//! Elements are stored as canonical big integers in `[0, p)` and every
//! operation reduces its result before returning, so intermediate values
//! never escape the field.

use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// Size of a serialized field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Modulus serialized as big endian bytes.
const MODULUS_BYTES: [u8; FIELD_BYTES] =
    hex!("fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff");

static MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&MODULUS_BYTES));

/// The field modulus `p`.
pub(crate) fn modulus() -> &'static BigUint {
    &MODULUS
}

/// `p - 2`, exponent for inversion by Fermat's little theorem.
static MODULUS_MINUS_TWO: Lazy<BigUint> = Lazy::new(|| MODULUS.clone() - 2u32);

/// Element in the SM2 finite field modulo `p`.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Additive identity.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// Create a field element from a small integer.
    pub fn from_u64(w: u64) -> Self {
        Self::reduce(&BigUint::from(w))
    }

    /// Create a field element from a canonical integer.
    ///
    /// Returns `None` if `uint` is not in the range `[0, p)`.
    pub fn from_uint(uint: BigUint) -> Option<Self> {
        if uint < *MODULUS {
            Some(Self(uint))
        } else {
            None
        }
    }

    /// Reduce an integer of any size modulo `p`.
    pub fn reduce(uint: &BigUint) -> Self {
        Self(uint % &*MODULUS)
    }

    /// Parse a big endian field element.
    ///
    /// Returns `None` if the bytes encode a value which is not in `[0, p)`.
    pub fn from_be_bytes(bytes: &[u8; FIELD_BYTES]) -> Option<Self> {
        Self::from_uint(BigUint::from_bytes_be(bytes))
    }

    /// Serialize as a fixed-width big endian byte array.
    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        let bytes = self.0.to_bytes_be();
        let mut out = [0u8; FIELD_BYTES];
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Borrow the canonical integer representation.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Canonical integer representation.
    pub fn to_uint(&self) -> BigUint {
        self.0.clone()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self::add_mod(self, self)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self::mul_mod(self, self)
    }

    /// Returns `self * 2⁻¹`.
    ///
    /// `p` is odd, so an odd value is made even by adding `p` before
    /// shifting.
    pub fn half(&self) -> Self {
        if self.0.bit(0) {
            Self((&self.0 + &*MODULUS) >> 1u32)
        } else {
            Self(&self.0 >> 1u32)
        }
    }

    /// Returns the multiplicative inverse of `self`, or `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        Some(Self(self.0.modpow(&MODULUS_MINUS_TWO, &MODULUS)))
    }

    fn add_mod(lhs: &Self, rhs: &Self) -> Self {
        let sum = &lhs.0 + &rhs.0;

        if sum >= *MODULUS {
            Self(sum - &*MODULUS)
        } else {
            Self(sum)
        }
    }

    fn sub_mod(lhs: &Self, rhs: &Self) -> Self {
        if lhs.0 >= rhs.0 {
            Self(&lhs.0 - &rhs.0)
        } else {
            Self(&lhs.0 + &*MODULUS - &rhs.0)
        }
    }

    fn mul_mod(lhs: &Self, rhs: &Self) -> Self {
        Self(&lhs.0 * &rhs.0 % &*MODULUS)
    }

    fn neg_mod(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self(&*MODULUS - &self.0)
        }
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $impl_fn:ident) => {
        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$impl_fn(self, rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$impl_fn(&self, rhs)
            }
        }

        impl $op<FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: FieldElement) -> FieldElement {
                FieldElement::$impl_fn(&self, &rhs)
            }
        }
    };
}

impl_field_op!(Add, add, add_mod);
impl_field_op!(Sub, sub, sub_mod);
impl_field_op!(Mul, mul, mul_mod);

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.neg_mod()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.neg_mod()
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", self)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl From<FieldElement> for BigUint {
    fn from(fe: FieldElement) -> BigUint {
        fe.0
    }
}
