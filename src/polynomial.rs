use ark_bls12_381::Fr;
use ark_std::Zero;

use crate::{domain::Domain, errors::KzgError};

/// A polynomial in Lagrange basis: `evaluations[i]` is its value at the
/// `i`-th root of the [Domain] it is used with. Unlike the coefficient form,
/// no padding is applied; the length must match the domain exactly when the
/// polynomial is evaluated or committed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialEvalForm {
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    pub fn new(evaluations: Vec<Fr>) -> Self {
        Self { evaluations }
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn into_evaluations(self) -> Vec<Fr> {
        self.evaluations
    }

    /// Returns the number of evaluations in the polynomial.
    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }

    /// Evaluates the polynomial at `z` over `domain`.
    /// See [Domain::evaluate_lagrange_polynomial].
    pub fn evaluate(&self, domain: &Domain, z: &Fr) -> Result<Fr, KzgError> {
        domain.evaluate_lagrange_polynomial(&self.evaluations, z)
    }

    /// Converts the polynomial to coefficient form by an inverse FFT over
    /// `domain`. The domain roots must be in natural order for the result to
    /// line up with the evaluations.
    pub fn to_coeff_form(&self, domain: &Domain) -> Result<PolynomialCoeffForm, KzgError> {
        let coeffs = domain.ifft(&self.evaluations)?;
        Ok(PolynomialCoeffForm::new(coeffs))
    }
}

impl AsRef<[Fr]> for PolynomialEvalForm {
    fn as_ref(&self) -> &[Fr] {
        &self.evaluations
    }
}

impl From<Vec<Fr>> for PolynomialEvalForm {
    fn from(evaluations: Vec<Fr>) -> Self {
        Self::new(evaluations)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialCoeffForm {
    /// coeffs[i] is the coefficient of x^i.
    coeffs: Vec<Fr>,
}

impl PolynomialCoeffForm {
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn eval(&self, point: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * point + coeff)
    }

    /// Converts the polynomial to evaluation form by an FFT over `domain`.
    pub fn to_eval_form(&self, domain: &Domain) -> Result<PolynomialEvalForm, KzgError> {
        let evals = domain.fft(&self.coeffs)?;
        Ok(PolynomialEvalForm::new(evals))
    }
}
