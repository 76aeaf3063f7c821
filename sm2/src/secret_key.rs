//! SM2 secret keys.

use crate::{CurveParams, Error, PublicKey, Result, arithmetic::field::FIELD_BYTES, sm2p256};
use core::fmt;
use num_bigint::BigUint;
use num_traits::One;
use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

/// Bytes drawn from the random source in excess of the field size, making
/// the bias of the final reduction negligible.
const EXTRA_RANDOM_BYTES: usize = 8;

/// Generate a uniformly distributed secret scalar in `[1, n - 1]`.
///
/// Reads `bit_size / 8 + 8` bytes from `rng`, interprets them as a big endian
/// integer, reduces it modulo `n - 1` and adds one. Any failure of the
/// random source is returned unchanged.
pub fn random_scalar<R: TryCryptoRng + ?Sized>(
    curve: &CurveParams,
    rng: &mut R,
) -> core::result::Result<BigUint, R::Error> {
    let mut bytes = Zeroizing::new(vec![0u8; curve.bit_size() / 8 + EXTRA_RANDOM_BYTES]);
    rng.try_fill_bytes(&mut bytes)?;

    let n_minus_one = curve.n().clone() - 1u32;
    Ok(BigUint::from_bytes_be(&bytes) % n_minus_one + 1u32)
}

/// SM2 private key: a secret scalar `d` together with its public point `d * G`.
#[derive(Clone)]
pub struct PrivateKey {
    d: BigUint,
    public_key: PublicKey,
}

impl PrivateKey {
    /// Generate a random [`PrivateKey`].
    ///
    /// Errors of the random source are returned unchanged; no retry is
    /// attempted on them. Scalars are drawn until one yields a public point
    /// other than the identity, which any scalar in `[1, n - 1]` does.
    pub fn try_from_rng<R: TryCryptoRng + ?Sized>(
        rng: &mut R,
    ) -> core::result::Result<Self, R::Error> {
        let curve = sm2p256();

        loop {
            let d = random_scalar(curve, rng)?;

            if let Ok(key) = Self::from_scalar_unchecked(curve, d) {
                return Ok(key);
            }
        }
    }

    /// Create a [`PrivateKey`] from a secret scalar.
    ///
    /// `d` must satisfy `1 < d < n`, otherwise [`Error::InvalidScalar`] is
    /// returned.
    pub fn from_scalar(d: BigUint) -> Result<Self> {
        let curve = sm2p256();

        if d <= BigUint::one() || d >= *curve.n() {
            return Err(Error::InvalidScalar);
        }

        Self::from_scalar_unchecked(curve, d)
    }

    /// Deserialize a [`PrivateKey`] from a big endian secret scalar.
    ///
    /// Leading zero bytes are permitted.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_scalar(BigUint::from_bytes_be(bytes))
    }

    fn from_scalar_unchecked(curve: &'static CurveParams, d: BigUint) -> Result<Self> {
        let public_key = PublicKey::from_secret_scalar(curve, &d)?;
        Ok(Self { d, public_key })
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn secret_scalar(&self) -> &BigUint {
        &self.d
    }

    /// Serialize the secret scalar as a 32-byte big endian integer.
    pub fn to_be_bytes(&self) -> Zeroizing<[u8; FIELD_BYTES]> {
        let bytes = Zeroizing::new(self.d.to_bytes_be());
        let mut out = Zeroizing::new([0u8; FIELD_BYTES]);
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Get the [`PublicKey`] which corresponds to this private key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static CurveParams {
        self.public_key.curve()
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private_key: &PrivateKey) -> PublicKey {
        private_key.public_key.clone()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
