//! pi_a normalization.
//!
//! The verifier folds every term of the pairing equation into one
//! multi-pairing check with identity as the expected result, which
//! requires pi_a to arrive negated. The off-chain backend also encodes
//! field elements little-endian while the wire is big-endian, so the
//! negation is wrapped in a full-buffer endianness flip on each side.
//!
//! pi_b and pi_c are NEVER normalized. The asymmetry is dictated by
//! the verifier's pairing-equation layout and is a pinned protocol
//! constant, not a configurable policy.

use ark_bn254::G1Affine;

use crate::codec::{self, fq_from_bytes_le, fq_to_bytes_le};
use crate::constants::{FIELD_BYTES, G1_BYTES};
use crate::curve::CurveContext;
use crate::error::{Result, WireError};

/// Produces the wire bytes for pi_a: the 64-byte uncompressed encoding
/// of the *negated* point, in wire (big-endian) order.
///
/// The transform runs as one atomic sequence:
/// 1. encode pi_a uncompressed (big-endian `x || y`);
/// 2. reverse the entire 64-byte buffer — this leaves the coordinates
///    little-endian and swapped, `y || x`, the backend-native limb
///    encoding;
/// 3. reinterpret that buffer as a point, negate it via the curve
///    context;
/// 4. re-serialize in the same intermediate layout and reverse the
///    whole buffer again, restoring wire order.
///
/// The intermediate buffer is not a valid encoding in either
/// convention and never escapes this function.
pub fn normalize_pi_a(ctx: &CurveContext, pi_a: &G1Affine) -> Result<[u8; G1_BYTES]> {
    let mut buf = codec::encode_g1(pi_a);
    buf.reverse();

    // After the flip the first limb is y, the second x, both
    // little-endian.
    let y = fq_from_bytes_le(&buf[..FIELD_BYTES])
        .ok_or_else(|| WireError::InvalidPoint("pi_a limb not a canonical Fq".into()))?;
    let x = fq_from_bytes_le(&buf[FIELD_BYTES..])
        .ok_or_else(|| WireError::InvalidPoint("pi_a limb not a canonical Fq".into()))?;
    let point = ctx.g1_from_coordinates(x, y)?;
    let negated = ctx.negate_g1(point);

    let mut out = [0u8; G1_BYTES];
    out[..FIELD_BYTES].copy_from_slice(&fq_to_bytes_le(&negated.y));
    out[FIELD_BYTES..].copy_from_slice(&fq_to_bytes_le(&negated.x));
    out.reverse();
    Ok(out)
}
