//! groth16-wire: convert a Groth16 proof over BN254, as produced by an
//! off-chain prover (snarkjs or arkworks), into the exact byte buffer
//! a `groth16-solana`-style on-chain verifier consumes:
//!
//! ```text
//! pi_a (64B) || pi_b (128B) || pi_c (64B) || signal_0 (32B) || ...
//! ```
//!
//! Big-endian 32-byte limbs throughout, pi_a pre-negated. The verifier
//! parses this with zero tolerance for deviation: wrong endianness,
//! wrong limb order, or an unnegated pi_a makes verification fail with
//! no diagnostic, so every transform here is pinned and tested against
//! known vectors.
//!
//! Witness generation, proof construction, and transaction submission
//! are out of scope; this crate starts at a finished proof and ends at
//! a byte buffer.

pub mod assemble;
pub mod codec;
pub mod constants;
pub mod curve;
pub mod error;
pub mod normalize;
pub mod proof;

pub use assemble::{assemble, split_wire};
pub use curve::CurveContext;
pub use error::{Result, WireError};
pub use proof::{Proof, PublicSignals, SnarkjsProof};

/// One-call conversion from a snarkjs proof to wire bytes.
/// `expected_signals` is the circuit's public-input arity.
pub fn proof_to_wire(
    proof: &SnarkjsProof,
    signals: &PublicSignals,
    expected_signals: usize,
) -> Result<Vec<u8>> {
    let ctx = CurveContext::initialize()?;
    let proof = Proof::from_snarkjs(ctx, proof)?;
    assemble(ctx, &proof, signals, expected_signals)
}
