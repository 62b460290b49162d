//! Fixed-size uncompressed point and scalar codecs.
//!
//! Wire layout is big-endian 32-byte limbs throughout:
//! - G1: `BE(x) || BE(y)` (64 bytes)
//! - G2: `BE(x.c1) || BE(x.c0) || BE(y.c1) || BE(y.c0)` (128 bytes) —
//!   imaginary limb first within each coordinate, the order the
//!   pairing syscall reads
//! - scalar: 32 bytes big-endian, left zero-padded
//!
//! Encoding is a pure function of the value; decoding is its exact
//! inverse and rejects wrong lengths, non-canonical limbs, and
//! off-curve results.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalDeserialize;
use lazy_static::lazy_static;
use num_bigint::BigUint;

use crate::constants::{BN254_FQ_MOD_BE, BN254_FR_MOD_BE, FIELD_BYTES, G1_BYTES, G2_BYTES};
use crate::error::{Result, WireError};

lazy_static! {
    pub(crate) static ref FQ_MODULUS: BigUint = BigUint::from_bytes_be(&BN254_FQ_MOD_BE);
    pub(crate) static ref FR_MODULUS: BigUint = BigUint::from_bytes_be(&BN254_FR_MOD_BE);
}

// -------------------- field element limbs --------------------

pub(crate) fn fq_to_bytes_be(f: &Fq) -> [u8; FIELD_BYTES] {
    let mut out = [0u8; FIELD_BYTES];
    out.copy_from_slice(&f.into_bigint().to_bytes_be());
    out
}

pub(crate) fn fq_to_bytes_le(f: &Fq) -> [u8; FIELD_BYTES] {
    let mut out = [0u8; FIELD_BYTES];
    out.copy_from_slice(&f.into_bigint().to_bytes_le());
    out
}

/// Canonical decode of one big-endian limb; `None` if the value is
/// not reduced mod q.
pub(crate) fn fq_from_bytes_be(bytes: &[u8]) -> Option<Fq> {
    let mut le = [0u8; FIELD_BYTES];
    for (i, b) in bytes.iter().enumerate() {
        le[FIELD_BYTES - 1 - i] = *b;
    }
    Fq::deserialize_uncompressed(&le[..]).ok()
}

pub(crate) fn fq_from_bytes_le(bytes: &[u8]) -> Option<Fq> {
    Fq::deserialize_uncompressed(bytes).ok()
}

// -------------------- PointCodec --------------------

/// 64-byte uncompressed G1 encoding, `BE(x) || BE(y)`.
pub fn encode_g1(p: &G1Affine) -> [u8; G1_BYTES] {
    let mut out = [0u8; G1_BYTES];
    out[..FIELD_BYTES].copy_from_slice(&fq_to_bytes_be(&p.x));
    out[FIELD_BYTES..].copy_from_slice(&fq_to_bytes_be(&p.y));
    out
}

/// 128-byte uncompressed G2 encoding, imaginary limb first per
/// coordinate.
pub fn encode_g2(p: &G2Affine) -> [u8; G2_BYTES] {
    let mut out = [0u8; G2_BYTES];
    out[0..32].copy_from_slice(&fq_to_bytes_be(&p.x.c1));
    out[32..64].copy_from_slice(&fq_to_bytes_be(&p.x.c0));
    out[64..96].copy_from_slice(&fq_to_bytes_be(&p.y.c1));
    out[96..128].copy_from_slice(&fq_to_bytes_be(&p.y.c0));
    out
}

/// Inverse of [`encode_g1`]. Rejects wrong lengths, limbs >= q, and
/// anything that is not a point in the G1 group.
pub fn decode_g1(bytes: &[u8]) -> Result<G1Affine> {
    if bytes.len() != G1_BYTES {
        return Err(WireError::MalformedPoint(format!(
            "G1 encoding must be {} bytes, got {}",
            G1_BYTES,
            bytes.len()
        )));
    }
    let x = fq_from_bytes_be(&bytes[..FIELD_BYTES])
        .ok_or_else(|| WireError::MalformedPoint("G1 x limb not a canonical Fq".into()))?;
    let y = fq_from_bytes_be(&bytes[FIELD_BYTES..])
        .ok_or_else(|| WireError::MalformedPoint("G1 y limb not a canonical Fq".into()))?;
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(WireError::MalformedPoint(format!(
            "decoded G1 point is not on the curve: {}",
            hex::encode(bytes)
        )));
    }
    Ok(p)
}

/// Inverse of [`encode_g2`].
pub fn decode_g2(bytes: &[u8]) -> Result<G2Affine> {
    if bytes.len() != G2_BYTES {
        return Err(WireError::MalformedPoint(format!(
            "G2 encoding must be {} bytes, got {}",
            G2_BYTES,
            bytes.len()
        )));
    }
    let limb = |range: std::ops::Range<usize>| {
        fq_from_bytes_be(&bytes[range])
            .ok_or_else(|| WireError::MalformedPoint("G2 limb not a canonical Fq".into()))
    };
    let x = Fq2::new(limb(32..64)?, limb(0..32)?);
    let y = Fq2::new(limb(96..128)?, limb(64..96)?);
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(WireError::MalformedPoint(format!(
            "decoded G2 point is not on the twist: {}",
            hex::encode(bytes)
        )));
    }
    Ok(p)
}

// -------------------- ScalarCodec --------------------

/// 32-byte big-endian encoding of a public signal, left zero-padded.
/// Anything >= the scalar field modulus r is rejected: signals come
/// from an external producer and must not be reduced silently.
pub fn encode_scalar(value: &BigUint) -> Result<[u8; FIELD_BYTES]> {
    if *value >= *FR_MODULUS {
        return Err(WireError::OutOfRange);
    }
    let raw = value.to_bytes_be();
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}
