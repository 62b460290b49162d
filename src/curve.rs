//! BN254 backend handle: one-time setup, checked point construction,
//! and G1 negation. All operations after setup are pure and read-only,
//! so a single shared context is safe to use from any number of
//! threads.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use lazy_static::lazy_static;

use crate::error::{Result, WireError};

lazy_static! {
    static ref CONTEXT: Result<CurveContext> = CurveContext::new();
}

/// Handle to the BN254 field and group arithmetic. Obtained once per
/// process via [`CurveContext::initialize`]; holds no proof-specific
/// state.
pub struct CurveContext {
    _private: (),
}

impl CurveContext {
    fn new() -> Result<Self> {
        // Sanity-check the backend before handing out a context. If the
        // generators fail their own curve equations something is deeply
        // wrong with the arithmetic underneath us.
        let g1 = G1Affine::generator();
        if !g1.is_on_curve() || !g1.is_in_correct_subgroup_assuming_on_curve() {
            return Err(WireError::Initialization(
                "G1 generator failed on-curve self-check".into(),
            ));
        }
        let g2 = G2Affine::generator();
        if !g2.is_on_curve() || !g2.is_in_correct_subgroup_assuming_on_curve() {
            return Err(WireError::Initialization(
                "G2 generator failed on-curve self-check".into(),
            ));
        }
        Ok(Self { _private: () })
    }

    /// Returns the process-wide context, running the backend self-check
    /// on first call. Subsequent calls are cheap and always yield the
    /// same handle.
    pub fn initialize() -> Result<&'static CurveContext> {
        CONTEXT.as_ref().map_err(Clone::clone)
    }

    /// Builds a G1 point from affine coordinates, rejecting anything
    /// off-curve or outside the prime-order subgroup.
    pub fn g1_from_coordinates(&self, x: Fq, y: Fq) -> Result<G1Affine> {
        let p = G1Affine::new_unchecked(x, y);
        if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
            return Err(WireError::InvalidPoint(format!(
                "({}, {}) is not on the G1 curve",
                x, y
            )));
        }
        Ok(p)
    }

    /// Builds a G2 point from affine Fq2 coordinates. The subgroup
    /// check matters here: BN254's twist has a large cofactor.
    pub fn g2_from_coordinates(&self, x: Fq2, y: Fq2) -> Result<G2Affine> {
        let p = G2Affine::new_unchecked(x, y);
        if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
            return Err(WireError::InvalidPoint(
                "coordinates are not on the G2 twist".into(),
            ));
        }
        Ok(p)
    }

    /// Negation of (x, y) is (x, -y mod q). Pure and total.
    pub fn negate_g1(&self, p: G1Affine) -> G1Affine {
        -p
    }
}
