//! Crate-wide byte-size and field constants

// ==================================
// Groth16 / BN254 byte-size helpers
// ==================================

/// Field element size in bytes (one 32-byte limb on the wire).
pub const FIELD_BYTES: usize = 32;
/// G1 point = (x, y) = 2 * 32
pub const G1_BYTES: usize = 64;
/// G2 point = (x.c1, x.c0, y.c1, y.c0) = 4 * 32
pub const G2_BYTES: usize = 128;
/// Groth16 proof bytes = A(G1) + B(G2) + C(G1)
pub const PROOF_BYTES_LEN: usize = G1_BYTES + G2_BYTES + G1_BYTES; // 256

// =========================================
// BN254 field moduli, big-endian 32B limbs
// =========================================

/// BN254 base field modulus q. Point coordinates must be below this.
pub const BN254_FQ_MOD_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
    0x5d, 0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c,
    0xfd, 0x47,
];

/// BN254 scalar field modulus r. Public signals must be below this.
pub const BN254_FR_MOD_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
    0x5d, 0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00,
    0x00, 0x01,
];

/// Wire length of an assembled proof with `n` public signals.
#[inline]
pub const fn wire_len(n_signals: usize) -> usize {
    PROOF_BYTES_LEN + FIELD_BYTES * n_signals
}
