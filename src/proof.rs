//! Proof and public-signal data model, plus ingestion from the
//! representations an external prover hands over: snarkjs JSON
//! (decimal or 0x-hex coordinate strings) or a native arkworks proof.

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use num_bigint::BigUint;
use serde::Deserialize;

use crate::codec::FQ_MODULUS;
use crate::curve::CurveContext;
use crate::error::{Result, WireError};

/// A Groth16 proof: two G1 points and one G2 point, all validated
/// on-curve at construction. Owned by the caller, read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

impl From<ark_groth16::Proof<Bn254>> for Proof {
    fn from(p: ark_groth16::Proof<Bn254>) -> Self {
        Self {
            a: p.a,
            b: p.b,
            c: p.c,
        }
    }
}

/// `proof.json` as snarkjs emits it for bn128:
/// `pi_a = [x, y, "1"]`,
/// `pi_b = [[x.c0, x.c1], [y.c0, y.c1], ["1", "0"]]`,
/// `pi_c = [x, y, "1"]`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnarkjsProof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
}

impl SnarkjsProof {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Proof {
    /// Materializes a snarkjs proof into validated curve points.
    /// Fails with `InvalidPoint` on unparseable coordinates, off-curve
    /// points, or a non-affine projective tail.
    pub fn from_snarkjs(ctx: &CurveContext, proof: &SnarkjsProof) -> Result<Self> {
        let a = g1_from_strings(ctx, &proof.pi_a, "pi_a")?;
        let b = g2_from_strings(ctx, &proof.pi_b, "pi_b")?;
        let c = g1_from_strings(ctx, &proof.pi_c, "pi_c")?;
        Ok(Self { a, b, c })
    }
}

/// The ordered public signals of one proof. Order is semantically
/// significant and preserved exactly as ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicSignals(Vec<BigUint>);

impl PublicSignals {
    /// Parses decimal or 0x-hex signal strings, in order. Values are
    /// range-checked later, at encoding time.
    pub fn from_strings<S: AsRef<str>>(signals: &[S]) -> Result<Self> {
        signals
            .iter()
            .map(|s| {
                parse_uint(s.as_ref())
                    .ok_or_else(|| WireError::MalformedSignal(s.as_ref().to_owned()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Parses a snarkjs `public.json` (a JSON array of decimal
    /// strings).
    pub fn from_json(json: &str) -> Result<Self> {
        let strings: Vec<String> = serde_json::from_str(json)
            .map_err(|e| WireError::MalformedSignal(e.to_string()))?;
        Self::from_strings(&strings)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BigUint> {
        self.0.iter()
    }
}

impl From<Vec<BigUint>> for PublicSignals {
    fn from(signals: Vec<BigUint>) -> Self {
        Self(signals)
    }
}

// -------------------- string parsing --------------------

fn parse_uint(s: &str) -> Option<BigUint> {
    let t = s.trim();
    match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(h) => BigUint::parse_bytes(h.as_bytes(), 16),
        None => BigUint::parse_bytes(t.as_bytes(), 10),
    }
}

fn parse_fq(s: &str, which: &str) -> Result<Fq> {
    let v = parse_uint(s)
        .ok_or_else(|| WireError::InvalidPoint(format!("{which}: unparseable coordinate {s:?}")))?;
    if v >= *FQ_MODULUS {
        return Err(WireError::InvalidPoint(format!(
            "{which}: coordinate exceeds the base field modulus"
        )));
    }
    Ok(Fq::from(v))
}

fn is_one(s: &str) -> bool {
    parse_uint(s).is_some_and(|v| v == BigUint::from(1u8))
}

fn is_zero(s: &str) -> bool {
    parse_uint(s).is_some_and(|v| v == BigUint::from(0u8))
}

fn g1_from_strings(ctx: &CurveContext, coords: &[String], which: &str) -> Result<G1Affine> {
    if coords.len() < 2 {
        return Err(WireError::InvalidPoint(format!(
            "{which}: expected [x, y], got {} coordinates",
            coords.len()
        )));
    }
    // snarkjs always emits affine points with a trailing projective 1.
    if coords.len() >= 3 && !is_one(&coords[2]) {
        return Err(WireError::InvalidPoint(format!(
            "{which}: non-affine projective tail"
        )));
    }
    let x = parse_fq(&coords[0], which)?;
    let y = parse_fq(&coords[1], which)?;
    ctx.g1_from_coordinates(x, y)
}

fn g2_from_strings(ctx: &CurveContext, coords: &[Vec<String>], which: &str) -> Result<G2Affine> {
    if coords.len() < 2 || coords[0].len() < 2 || coords[1].len() < 2 {
        return Err(WireError::InvalidPoint(format!(
            "{which}: expected [[x.c0, x.c1], [y.c0, y.c1]]"
        )));
    }
    if coords.len() >= 3 {
        let z = &coords[2];
        if z.len() < 2 || !is_one(&z[0]) || !is_zero(&z[1]) {
            return Err(WireError::InvalidPoint(format!(
                "{which}: non-affine projective tail"
            )));
        }
    }
    let x = Fq2::new(
        parse_fq(&coords[0][0], which)?,
        parse_fq(&coords[0][1], which)?,
    );
    let y = Fq2::new(
        parse_fq(&coords[1][0], which)?,
        parse_fq(&coords[1][1], which)?,
    );
    ctx.g2_from_coordinates(x, y)
}
