//! Ingestion tests: snarkjs JSON parsing, coordinate validation, and
//! the arkworks-native proof path.

use ark_bn254::{Bn254, Fr, G1Projective, G2Projective};
use ark_ec::{CurveGroup, Group};
use num_bigint::BigUint;

use groth16_wire::constants::PROOF_BYTES_LEN;
use groth16_wire::{proof_to_wire, CurveContext, Proof, PublicSignals, SnarkjsProof, WireError};

// BN254 G2 generator, the coordinates snarkjs prints for bn128.
const G2_X_C0: &str =
    "10857046999023057135944570762232829481370756359578518086990519993285655852781";
const G2_X_C1: &str =
    "11559732032986387107991004021392285783925812861821192530917403151452391805634";
const G2_Y_C0: &str =
    "8495653923123431417604973247489272438418190587263600148770280649306958101930";
const G2_Y_C1: &str =
    "4082367875863433681332203403145435568316851327593401208105741076214120093531";

fn fixture_json() -> String {
    format!(
        r#"{{
            "pi_a": ["1", "2", "1"],
            "pi_b": [["{}", "{}"], ["{}", "{}"], ["1", "0"]],
            "pi_c": ["1", "2", "1"],
            "protocol": "groth16",
            "curve": "bn128"
        }}"#,
        G2_X_C0, G2_X_C1, G2_Y_C0, G2_Y_C1
    )
}

#[test]
fn parses_snarkjs_fixture() {
    let ctx = CurveContext::initialize().unwrap();
    let raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    let proof = Proof::from_snarkjs(ctx, &raw).unwrap();

    assert_eq!(proof.a, G1Projective::generator().into_affine());
    assert_eq!(proof.b, G2Projective::generator().into_affine());
    assert_eq!(proof.c, G1Projective::generator().into_affine());
}

#[test]
fn full_conversion_from_snarkjs_json() {
    let raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    let signals = PublicSignals::from_json(r#"["12"]"#).unwrap();
    let wire = proof_to_wire(&raw, &signals, 1).unwrap();

    assert_eq!(wire.len(), PROOF_BYTES_LEN + 32);
    // Signal 12, big-endian, left zero-padded.
    assert_eq!(wire[PROOF_BYTES_LEN..287], [0u8; 31]);
    assert_eq!(wire[287], 12);
}

#[test]
fn hex_and_decimal_coordinates_are_equivalent() {
    let ctx = CurveContext::initialize().unwrap();
    let mut raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    raw.pi_a = vec!["0x1".into(), "0x2".into(), "1".into()];
    let proof = Proof::from_snarkjs(ctx, &raw).unwrap();
    assert_eq!(proof.a, G1Projective::generator().into_affine());
}

#[test]
fn hex_and_decimal_signals_are_equivalent() {
    let dec = PublicSignals::from_strings(&["12", "255"]).unwrap();
    let hex = PublicSignals::from_strings(&["0x0c", "0xff"]).unwrap();
    assert_eq!(dec, hex);
}

#[test]
fn rejects_off_curve_coordinates() {
    let ctx = CurveContext::initialize().unwrap();
    let mut raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    raw.pi_a = vec!["1".into(), "3".into(), "1".into()];
    assert!(matches!(
        Proof::from_snarkjs(ctx, &raw),
        Err(WireError::InvalidPoint(_))
    ));
}

#[test]
fn rejects_coordinate_above_field_modulus() {
    let ctx = CurveContext::initialize().unwrap();
    let mut raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    // q itself, one past the largest valid coordinate.
    raw.pi_c = vec![
        "21888242871839275222246405745257275088696311157297823662689037894645226208583".into(),
        "2".into(),
        "1".into(),
    ];
    assert!(matches!(
        Proof::from_snarkjs(ctx, &raw),
        Err(WireError::InvalidPoint(_))
    ));
}

#[test]
fn rejects_non_affine_projective_tail() {
    let ctx = CurveContext::initialize().unwrap();

    let mut raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    raw.pi_a[2] = "2".into();
    assert!(matches!(
        Proof::from_snarkjs(ctx, &raw),
        Err(WireError::InvalidPoint(_))
    ));

    let mut raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    raw.pi_b[2] = vec!["1".into(), "1".into()];
    assert!(matches!(
        Proof::from_snarkjs(ctx, &raw),
        Err(WireError::InvalidPoint(_))
    ));
}

#[test]
fn rejects_truncated_point_arrays() {
    let ctx = CurveContext::initialize().unwrap();
    let mut raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    raw.pi_a = vec!["1".into()];
    assert!(matches!(
        Proof::from_snarkjs(ctx, &raw),
        Err(WireError::InvalidPoint(_))
    ));
}

#[test]
fn rejects_garbage_signal_strings() {
    assert!(matches!(
        PublicSignals::from_strings(&["12", "not-a-number"]),
        Err(WireError::MalformedSignal(_))
    ));
    assert!(matches!(
        PublicSignals::from_json(r#"{"oops": 1}"#),
        Err(WireError::MalformedSignal(_))
    ));
}

#[test]
fn wrong_signal_count_from_json_is_a_contract_violation() {
    let raw = SnarkjsProof::from_json(&fixture_json()).unwrap();
    let signals = PublicSignals::from_json(r#"["1", "2"]"#).unwrap();
    assert_eq!(
        proof_to_wire(&raw, &signals, 1),
        Err(WireError::SignalCountMismatch {
            expected: 1,
            got: 2
        })
    );
}

#[test]
fn accepts_native_arkworks_proof() {
    let ctx = CurveContext::initialize().unwrap();
    let ark_proof = ark_groth16::Proof::<Bn254> {
        a: (G1Projective::generator() * Fr::from(5u64)).into_affine(),
        b: (G2Projective::generator() * Fr::from(7u64)).into_affine(),
        c: (G1Projective::generator() * Fr::from(11u64)).into_affine(),
    };
    let proof = Proof::from(ark_proof);
    let signals = PublicSignals::from(vec![BigUint::from(1u8)]);
    let wire = groth16_wire::assemble(ctx, &proof, &signals, 1).unwrap();
    assert_eq!(wire.len(), PROOF_BYTES_LEN + 32);
}
