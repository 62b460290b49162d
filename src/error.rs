//! src/error.rs
use thiserror::Error;

/// Everything the conversion pipeline can fail with. Each variant is a
/// distinct failure class so callers can tell "bad input shape" apart
/// from "curve inconsistency" apart from "environment setup failure".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    // ========== Environment ==========
    /// The curve backend failed its one-time setup self-check. Fatal;
    /// retrying without fixing the environment is pointless.
    #[error("curve backend initialization failed: {0}")]
    Initialization(String),

    // ========== Point / proof errors ==========
    /// A coordinate pair is not a valid point on the expected curve
    /// (off-curve, wrong subgroup, or an unparseable coordinate).
    #[error("invalid curve point: {0}")]
    InvalidPoint(String),

    /// A byte buffer cannot be decoded back into a valid point:
    /// wrong length, non-canonical field bytes, or off-curve result.
    #[error("malformed point encoding: {0}")]
    MalformedPoint(String),

    /// The proof contains a point at infinity. The protocol never
    /// encodes infinity; this signals upstream corruption.
    #[error("proof component is the point at infinity")]
    InvalidProof,

    // ========== Public signal errors ==========
    /// Caller supplied the wrong number of public signals for the
    /// circuit. A contract violation, not a cryptographic failure.
    #[error("expected {expected} public signals, got {got}")]
    SignalCountMismatch { expected: usize, got: usize },

    /// A public signal is a well-formed integer but >= the scalar
    /// field modulus. Defensive check against untrusted producers.
    #[error("public signal out of field range")]
    OutOfRange,

    /// A public signal string does not parse as an integer at all.
    #[error("malformed public signal: {0}")]
    MalformedSignal(String),
}

pub type Result<T> = std::result::Result<T, WireError>;
