use std::io::Read;

use ark_bls12_381::{G1Affine, G2Affine};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    domain::Domain,
    errors::KzgError,
    multiexp,
    polynomial::PolynomialEvalForm,
    serialization::{self, to_fixed_bytes},
};

/// A trusted setup as published by the ceremony: hex encoded compressed
/// points without a `0x` prefix.
///
/// Loading this does not check that the points are in the right subgroup,
/// nor that `setup_g1_lagrange` is the lagrange form of `setup_g1`. Use
/// [check_trusted_setup_well_formed] for that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonTrustedSetup {
    /// `[τ^i]G1` for `i` in `0..n`, monomial basis.
    #[serde(rename = "setup_G1")]
    pub setup_g1: Vec<String>,
    /// `[τ^i]G2`, monomial basis, at least two points.
    #[serde(rename = "setup_G2")]
    pub setup_g2: Vec<String>,
    /// `[L_i(τ)]G1` for the domain of size `n`, lagrange basis.
    #[serde(rename = "setup_G1_lagrange")]
    pub setup_g1_lagrange: Vec<String>,
}

impl JsonTrustedSetup {
    pub fn from_json_str(json: &str) -> Result<Self, KzgError> {
        serde_json::from_str(json).map_err(|e| KzgError::SerializationError(e.to_string()))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, KzgError> {
        serde_json::from_reader(reader).map_err(|e| KzgError::SerializationError(e.to_string()))
    }
}

/// Group elements of a parsed trusted setup. Read only once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedSetup {
    generator_g1: G1Affine,
    lagrange_g1: Vec<G1Affine>,
    g2: Vec<G2Affine>,
}

impl TrustedSetup {
    /// The first monomial G1 point, `[1]G1`.
    pub fn generator_g1(&self) -> &G1Affine {
        &self.generator_g1
    }

    pub fn lagrange_g1(&self) -> &[G1Affine] {
        &self.lagrange_g1
    }

    pub fn g2(&self) -> &[G2Affine] {
        &self.g2
    }

    /// Commits to a polynomial in lagrange form: `Σ poly[i] * [L_i(τ)]G1`.
    pub fn commit(&self, poly: &PolynomialEvalForm) -> Result<G1Affine, KzgError> {
        multiexp::multi_exp(poly.evaluations(), &self.lagrange_g1)
    }
}

/// Parses the trusted setup into group elements.
///
/// The points are assumed to be trusted: no subgroup checks are done, and
/// the lagrange points are not compared against the monomial ones. Points are
/// decoded in parallel; if any of them is malformed the whole parse fails
/// with the error of the lowest failing index.
pub fn parse_trusted_setup(trusted_setup: &JsonTrustedSetup) -> Result<TrustedSetup, KzgError> {
    // the generator is the first element of the monomial setup
    let first = trusted_setup.setup_g1.first().ok_or(KzgError::MinSrsSize)?;
    let generator_g1 = parse_g1_point_unchecked(first)?;

    let lagrange_g1 = parse_points(&trusted_setup.setup_g1_lagrange, parse_g1_point_unchecked)?;
    let g2 = parse_points(&trusted_setup.setup_g2, parse_g2_point_unchecked)?;

    debug!(
        num_g1_lagrange = lagrange_g1.len(),
        num_g2 = g2.len(),
        "parsed trusted setup"
    );

    Ok(TrustedSetup {
        generator_g1,
        lagrange_g1,
        g2,
    })
}

/// Checks whether the trusted setup is well-formed:
///
/// - the monomial and lagrange G1 lists have the same length,
/// - every monomial G1 point decodes and lies in the prime order subgroup,
/// - the lagrange G1 points are exactly the inverse FFT of the monomial ones
///   (see section 3.1 of <https://eprint.iacr.org/2017/602.pdf>),
/// - every G2 point decodes and lies in the prime order subgroup.
///
/// This is expensive and meant to run once, not per request.
pub fn check_trusted_setup_well_formed(trusted_setup: &JsonTrustedSetup) -> Result<(), KzgError> {
    let num_g1 = trusted_setup.setup_g1.len();
    if num_g1 != trusted_setup.setup_g1_lagrange.len() {
        return Err(KzgError::SetupLengthMismatch {
            monomial: num_g1,
            lagrange: trusted_setup.setup_g1_lagrange.len(),
        });
    }
    if num_g1 == 0 {
        return Err(KzgError::MinSrsSize);
    }

    info!(num_g1, "checking trusted setup");

    let setup_g1 = parse_points(&trusted_setup.setup_g1, parse_g1_point)?;

    let domain = Domain::new(num_g1 as u64)?;
    let expected_lagrange = domain.ifft_g1(&setup_g1)?;

    for (index, (point, supplied)) in expected_lagrange
        .iter()
        .zip(&trusted_setup.setup_g1_lagrange)
        .enumerate()
    {
        let encoded = hex::encode(serialization::serialize_g1_point(point)?);
        if encoded != *supplied {
            warn!(index, "lagrange setup does not match monomial setup");
            return Err(KzgError::UnexpectedLagrangeSetup { index });
        }
    }

    parse_points(&trusted_setup.setup_g2, parse_g2_point)?;

    info!("trusted setup is well formed");
    Ok(())
}

/// Parses every hex string with `parse`, one rayon task per point. Results
/// land at their input index whatever order the tasks finish in, and the
/// first error by index is the one returned.
fn parse_points<T, F>(hex_strings: &[String], parse: F) -> Result<Vec<T>, KzgError>
where
    T: Send,
    F: Fn(&str) -> Result<T, KzgError> + Sync,
{
    let results: Vec<Result<T, KzgError>> =
        hex_strings.par_iter().map(|hex_str| parse(hex_str.as_str())).collect();
    results.into_iter().collect()
}

fn parse_g1_point(hex_str: &str) -> Result<G1Affine, KzgError> {
    let bytes = to_fixed_bytes(&hex::decode(hex_str)?)?;
    serialization::deserialize_g1_point(&bytes)
}

fn parse_g1_point_unchecked(hex_str: &str) -> Result<G1Affine, KzgError> {
    let bytes = to_fixed_bytes(&hex::decode(hex_str)?)?;
    serialization::deserialize_g1_point_unchecked(&bytes)
}

fn parse_g2_point(hex_str: &str) -> Result<G2Affine, KzgError> {
    let bytes = to_fixed_bytes(&hex::decode(hex_str)?)?;
    serialization::deserialize_g2_point(&bytes)
}

fn parse_g2_point_unchecked(hex_str: &str) -> Result<G2Affine, KzgError> {
    let bytes = to_fixed_bytes(&hex::decode(hex_str)?)?;
    serialization::deserialize_g2_point_unchecked(&bytes)
}
