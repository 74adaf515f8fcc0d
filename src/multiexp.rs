use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};

use crate::errors::KzgError;

/// Computes `Σ scalars[i] * points[i]` as a single G1 point.
///
/// The lists must have the same length. An empty input yields the identity;
/// commitments in this scheme never hit that path, but it is well defined.
pub fn multi_exp(scalars: &[Fr], points: &[G1Affine]) -> Result<G1Affine, KzgError> {
    if scalars.len() != points.len() {
        return Err(KzgError::LengthMismatch {
            left: scalars.len(),
            right: points.len(),
        });
    }

    if scalars.is_empty() {
        return Ok(G1Affine::identity());
    }

    let lincomb = G1Projective::msm(points, scalars)
        .map_err(|len| KzgError::MsmError(format!("msm failed on input of length {}", len)))?;
    Ok(lincomb.into_affine())
}
