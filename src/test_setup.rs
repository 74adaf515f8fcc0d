//! A deterministic trusted setup for tests and benches.
//!
//! The secret is public, so anyone can forge openings against this setup.
//! It is never used implicitly: callers have to ask for it by name through
//! [insecure_test_setup] or [insecure_setup_from_secret].

use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{batch_inversion, Field};
use ark_std::{One, Zero};
use lazy_static::lazy_static;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    consts::{FIELD_ELEMENTS_PER_BLOB, SETUP_G2_LENGTH},
    domain::Domain,
    errors::KzgError,
    helpers,
    serialization,
    trusted_setup::JsonTrustedSetup,
};

/// Secret of the test setup. Do not use this setup in production.
pub const INSECURE_TEST_SECRET: u64 = 1337;

lazy_static! {
    static ref INSECURE_TEST_SETUP: Result<JsonTrustedSetup, KzgError> = insecure_setup_from_secret(
        &Fr::from(INSECURE_TEST_SECRET),
        FIELD_ELEMENTS_PER_BLOB,
        SETUP_G2_LENGTH,
    );
}

/// The process wide test setup of [FIELD_ELEMENTS_PER_BLOB] G1 points,
/// built on first use from [INSECURE_TEST_SECRET].
pub fn insecure_test_setup() -> Result<&'static JsonTrustedSetup, KzgError> {
    INSECURE_TEST_SETUP.as_ref().map_err(Clone::clone)
}

/// Builds a setup for the secret `tau`, with `num_g1` G1 points in both bases
/// and `num_g2` monomial G2 points.
///
/// The lagrange points are computed from the lagrange basis values
/// `L_i(tau)` directly, not by an inverse FFT of the monomial points, so the
/// result is an independent reference for [crate::trusted_setup::check_trusted_setup_well_formed].
pub fn insecure_setup_from_secret(
    tau: &Fr,
    num_g1: usize,
    num_g2: usize,
) -> Result<JsonTrustedSetup, KzgError> {
    let domain = Domain::new(num_g1 as u64)?;
    if domain.cardinality() != num_g1 as u64 {
        return Err(KzgError::PolynomialDomainSizeMismatch {
            polynomial_len: num_g1,
            domain_size: domain.cardinality(),
        });
    }

    let monomial_g1 = scalar_mul_g1(&helpers::compute_powers(tau, num_g1));
    let lagrange_g1 = scalar_mul_g1(&lagrange_basis_at(&domain, tau));
    let monomial_g2 = scalar_mul_g2(&helpers::compute_powers(tau, num_g2));

    debug!(num_g1, num_g2, "built insecure test setup");

    Ok(JsonTrustedSetup {
        setup_g1: encode_g1(&monomial_g1)?,
        setup_g2: monomial_g2
            .iter()
            .map(|p| serialization::serialize_g2_point(p).map(hex::encode))
            .collect::<Result<_, _>>()?,
        setup_g1_lagrange: encode_g1(&lagrange_g1)?,
    })
}

/// `L_i(tau) = (tau^n - 1) / n * ω^i / (tau - ω^i)`, or the indicator of
/// `tau`'s position when `tau` is itself a root.
fn lagrange_basis_at(domain: &Domain, tau: &Fr) -> Vec<Fr> {
    let n = domain.roots().len();
    if let Some(index) = domain.find_root_index(tau) {
        let mut basis = vec![Fr::zero(); n];
        basis[index] = Fr::one();
        return basis;
    }

    let mut inv_denominators: Vec<Fr> = domain.roots().iter().map(|root| *tau - root).collect();
    batch_inversion(&mut inv_denominators);

    let scale = (tau.pow([domain.cardinality()]) - Fr::one()) * domain.cardinality_inv();
    domain
        .roots()
        .iter()
        .zip(&inv_denominators)
        .map(|(root, inv)| scale * root * inv)
        .collect()
}

fn scalar_mul_g1(scalars: &[Fr]) -> Vec<G1Affine> {
    let points: Vec<G1Projective> = scalars
        .par_iter()
        .map(|s| G1Affine::generator() * s)
        .collect();
    G1Projective::normalize_batch(&points)
}

fn scalar_mul_g2(scalars: &[Fr]) -> Vec<G2Affine> {
    let points: Vec<G2Projective> = scalars
        .par_iter()
        .map(|s| G2Affine::generator() * s)
        .collect();
    G2Projective::normalize_batch(&points)
}

fn encode_g1(points: &[G1Affine]) -> Result<Vec<String>, KzgError> {
    points
        .iter()
        .map(|p| serialization::serialize_g1_point(p).map(hex::encode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trusted_setup::check_trusted_setup_well_formed;

    #[test]
    fn test_small_insecure_setup_is_well_formed() {
        let setup = insecure_setup_from_secret(&Fr::from(42u64), 16, 2).unwrap();
        assert_eq!(setup.setup_g1.len(), 16);
        assert_eq!(setup.setup_g1_lagrange.len(), 16);
        assert_eq!(setup.setup_g2.len(), 2);
        check_trusted_setup_well_formed(&setup).unwrap();
    }

    #[test]
    fn test_secret_in_domain() {
        // tau = 1 is the first root of every domain
        let setup = insecure_setup_from_secret(&Fr::one(), 8, 2).unwrap();
        check_trusted_setup_well_formed(&setup).unwrap();
    }

    #[test]
    fn test_non_power_of_two_is_rejected() {
        assert!(matches!(
            insecure_setup_from_secret(&Fr::from(42u64), 12, 2),
            Err(KzgError::PolynomialDomainSizeMismatch { .. })
        ));
    }
}
