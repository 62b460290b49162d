//! Final wire assembly: `pi_a || pi_b || pi_c || signal_0 || ...`,
//! no separators, no length prefixes. The consumer finds every field
//! at a fixed offset.

use ark_ec::AffineRepr;

use crate::codec;
use crate::constants::{wire_len, FIELD_BYTES, G1_BYTES, G2_BYTES, PROOF_BYTES_LEN};
use crate::curve::CurveContext;
use crate::error::{Result, WireError};
use crate::normalize;
use crate::proof::{Proof, PublicSignals};

/// Serializes a proof and its public signals into the verifier's wire
/// buffer. `expected_signals` is the circuit's public-input arity;
/// supplying any other count is a caller-contract violation.
///
/// Output is always exactly `256 + 32 * n` bytes. Pure apart from the
/// allocation; safe to call concurrently.
pub fn assemble(
    ctx: &CurveContext,
    proof: &Proof,
    signals: &PublicSignals,
    expected_signals: usize,
) -> Result<Vec<u8>> {
    if proof.a.is_zero() || proof.b.is_zero() || proof.c.is_zero() {
        return Err(WireError::InvalidProof);
    }
    if signals.len() != expected_signals {
        return Err(WireError::SignalCountMismatch {
            expected: expected_signals,
            got: signals.len(),
        });
    }

    let mut out = Vec::with_capacity(wire_len(signals.len()));
    out.extend_from_slice(&normalize::normalize_pi_a(ctx, &proof.a)?);
    out.extend_from_slice(&codec::encode_g2(&proof.b));
    out.extend_from_slice(&codec::encode_g1(&proof.c));
    for signal in signals.iter() {
        out.extend_from_slice(&codec::encode_scalar(signal)?);
    }

    tracing::debug!(
        signals = signals.len(),
        bytes = out.len(),
        "assembled proof wire buffer"
    );
    tracing::trace!(wire = %hex::encode(&out), "wire bytes");
    Ok(out)
}

/// Slices an assembled buffer back into its fixed-offset parts,
/// `(pi_a, pi_b, pi_c, signals)` — the same offsets the on-chain
/// program reads (`[0..64]`, `[64..192]`, `[192..256]`, 32B each
/// after). Useful for callers building instruction data and for tests.
pub fn split_wire(
    wire: &[u8],
) -> Result<(
    &[u8; G1_BYTES],
    &[u8; G2_BYTES],
    &[u8; G1_BYTES],
    Vec<[u8; FIELD_BYTES]>,
)> {
    if wire.len() < PROOF_BYTES_LEN || (wire.len() - PROOF_BYTES_LEN) % FIELD_BYTES != 0 {
        return Err(WireError::MalformedPoint(format!(
            "wire buffer length {} is not 256 + 32*n",
            wire.len()
        )));
    }
    let a = wire[0..G1_BYTES]
        .try_into()
        .map_err(|_| WireError::MalformedPoint("bad 64B slice".into()))?;
    let b = wire[G1_BYTES..G1_BYTES + G2_BYTES]
        .try_into()
        .map_err(|_| WireError::MalformedPoint("bad 128B slice".into()))?;
    let c = wire[G1_BYTES + G2_BYTES..PROOF_BYTES_LEN]
        .try_into()
        .map_err(|_| WireError::MalformedPoint("bad 64B slice".into()))?;

    let mut signals = Vec::with_capacity((wire.len() - PROOF_BYTES_LEN) / FIELD_BYTES);
    for chunk in wire[PROOF_BYTES_LEN..].chunks_exact(FIELD_BYTES) {
        signals.push(
            chunk
                .try_into()
                .map_err(|_| WireError::MalformedPoint("bad 32B slice".into()))?,
        );
    }
    Ok((a, b, c, signals))
}
