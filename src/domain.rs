use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{batch_inversion, Field};
use ark_std::{
    ops::{Add, Mul, Sub},
    One, Zero,
};
use num_traits::ToPrimitive;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    consts::{MAX_ORDER_ROOT, ROOT_OF_UNITY_2_32},
    errors::KzgError,
    helpers,
};

/// Anything an FFT over [Fr] can act on: scalars themselves, or group
/// elements with `Fr` as their scalar field.
pub trait FftElement:
    Copy + Send + Sync + Add<Output = Self> + Sub<Output = Self> + Mul<Fr, Output = Self>
{
}

impl<T> FftElement for T where
    T: Copy + Send + Sync + Add<Output = T> + Sub<Output = T> + Mul<Fr, Output = T>
{
}

/// A multiplicative subgroup of Fr of power-of-two order, together with the
/// precomputed data needed to evaluate polynomials in Lagrange form over it.
///
/// A domain is built once per blob size and never changes afterwards, except
/// for an optional [Domain::reverse_roots]. It is `Send + Sync` and may be
/// shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    /// Size of the domain.
    cardinality: u64,
    /// 1 / cardinality, used to normalise inverse FFTs and the barycentric formula.
    cardinality_inv: Fr,
    /// Generator of the subgroup (not of the whole field); its order is
    /// exactly `cardinality`.
    generator: Fr,
    generator_inv: Fr,
    /// `roots[i] = generator^i`, unless the roots were bit-reversed.
    roots: Vec<Fr>,
    /// `inverse_roots[i] = 1 / roots[i]`
    inverse_roots: Vec<Fr>,
}

impl Domain {
    /// Creates the domain of the smallest power of two greater than or equal
    /// to `size`. Sizes 0 and 1 both give the trivial domain `{1}`.
    ///
    /// Fails with [KzgError::DomainTooLarge] above 2^32 elements, since Fr
    /// has no root of unity of larger two-power order.
    pub fn new(size: u64) -> Result<Self, KzgError> {
        let cardinality = size
            .checked_next_power_of_two()
            .ok_or(KzgError::DomainTooLarge { size })?;

        let log_cardinality = cardinality.trailing_zeros();
        if log_cardinality > MAX_ORDER_ROOT {
            return Err(KzgError::DomainTooLarge { size });
        }
        let len = cardinality
            .to_usize()
            .ok_or(KzgError::DomainTooLarge { size })?;

        // ROOT_OF_UNITY_2_32 has order 2^32, raising it to 2^(32 - k) leaves order 2^k
        let exponent = 1u64 << (MAX_ORDER_ROOT - log_cardinality);
        let generator = ROOT_OF_UNITY_2_32.pow([exponent]);
        let cardinality_inv = Fr::from(cardinality)
            .inverse()
            .ok_or(KzgError::InvalidDenominator)?;

        let roots = helpers::compute_powers(&generator, len);
        // g^-i = g^(n - i)
        let inverse_roots: Vec<Fr> = (0..len).map(|i| roots[(len - i) % len]).collect();
        let generator_inv = inverse_roots[1 % len];

        debug!(size, cardinality, "constructed evaluation domain");

        Ok(Self {
            cardinality,
            cardinality_inv,
            generator,
            generator_inv,
            roots,
            inverse_roots,
        })
    }

    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    pub fn cardinality_inv(&self) -> &Fr {
        &self.cardinality_inv
    }

    pub fn generator(&self) -> &Fr {
        &self.generator
    }

    pub fn generator_inv(&self) -> &Fr {
        &self.generator_inv
    }

    pub fn roots(&self) -> &[Fr] {
        &self.roots
    }

    pub fn inverse_roots(&self) -> &[Fr] {
        &self.inverse_roots
    }

    /// Applies the bit-reversal permutation to the roots and their inverses.
    ///
    /// Lagrange evaluation pairs `poly[i]` with `roots[i]`, so after calling
    /// this the domain expects polynomials in bit-reversed order. The FFTs
    /// are unaffected since they only use the generator.
    pub fn reverse_roots(&mut self) -> Result<(), KzgError> {
        helpers::bit_reverse(&mut self.roots)?;
        helpers::bit_reverse(&mut self.inverse_roots)
    }

    /// Returns the position of `point` among the roots, if it is one.
    pub fn find_root_index(&self, point: &Fr) -> Option<usize> {
        self.roots.iter().position(|root| root == point)
    }

    pub fn is_in_domain(&self, point: &Fr) -> bool {
        self.find_root_index(point).is_some()
    }

    fn check_len(&self, len: usize) -> Result<(), KzgError> {
        if len as u64 != self.cardinality {
            return Err(KzgError::PolynomialDomainSizeMismatch {
                polynomial_len: len,
                domain_size: self.cardinality,
            });
        }
        Ok(())
    }

    /// Evaluates a polynomial in Lagrange form at an arbitrary point `z`.
    ///
    /// If `z` is a root, the value is read off directly. Otherwise the
    /// barycentric formula for roots of unity is used:
    ///
    /// ```text
    /// f(z) = (z^n - 1) / n * Σ f_i * ω^i / (z - ω^i)
    /// ```
    ///
    /// with all `n` denominators inverted in a single batch.
    pub fn evaluate_lagrange_polynomial(&self, poly: &[Fr], z: &Fr) -> Result<Fr, KzgError> {
        self.check_len(poly.len())?;

        if let Some(index) = self.find_root_index(z) {
            return Ok(poly[index]);
        }

        let mut inv_denominators: Vec<Fr> = self.roots.iter().map(|root| *z - root).collect();
        batch_inversion(&mut inv_denominators);

        Ok(self.barycentric(poly, z, &inv_denominators))
    }

    /// Evaluates many Lagrange form polynomials, `polys[i]` at `points[i]`.
    ///
    /// Produces the same results as calling
    /// [Domain::evaluate_lagrange_polynomial] for every pair, but shares one
    /// batch inversion between all points that are not in the domain.
    pub fn evaluate_lagrange_polynomials<P>(
        &self,
        polys: &[P],
        points: &[Fr],
    ) -> Result<Vec<Fr>, KzgError>
    where
        P: AsRef<[Fr]> + Sync,
    {
        if polys.len() != points.len() {
            return Err(KzgError::LengthMismatch {
                left: polys.len(),
                right: points.len(),
            });
        }
        for poly in polys {
            self.check_len(poly.as_ref().len())?;
        }

        let indices_in_domain: Vec<Option<usize>> =
            points.iter().map(|z| self.find_root_index(z)).collect();
        let num_inversions = indices_in_domain.iter().filter(|i| i.is_none()).count();

        // one block of `n` denominators per point outside the domain
        let n = self.roots.len();
        let mut inv_denominators = Vec::with_capacity(n * num_inversions);
        for (z, index) in points.iter().zip(&indices_in_domain) {
            if index.is_none() {
                inv_denominators.extend(self.roots.iter().map(|root| *z - root));
            }
        }
        batch_inversion(&mut inv_denominators);

        debug!(
            num_polys = polys.len(),
            num_inversions, "batch evaluating lagrange polynomials"
        );

        let mut block = 0;
        let evaluations = polys
            .iter()
            .zip(points)
            .zip(&indices_in_domain)
            .map(|((poly, z), index)| match index {
                Some(index) => poly.as_ref()[*index],
                None => {
                    let start = block * n;
                    block += 1;
                    self.barycentric(poly.as_ref(), z, &inv_denominators[start..start + n])
                },
            })
            .collect();

        Ok(evaluations)
    }

    fn barycentric(&self, poly: &[Fr], z: &Fr, inv_denominators: &[Fr]) -> Fr {
        let sum = poly
            .par_iter()
            .zip(self.roots.par_iter())
            .zip(inv_denominators.par_iter())
            .map(|((f_i, root), inv)| *f_i * root * inv)
            .reduce(Fr::zero, |acc, term| acc + term);

        // (z^n - 1) / n
        let scale = (z.pow([self.cardinality]) - Fr::one()) * self.cardinality_inv;
        sum * scale
    }

    /// Evaluates the polynomial with coefficients `coeffs` on every domain
    /// element, in natural order: `out[i] = f(generator^i)`.
    pub fn fft<T: FftElement>(&self, coeffs: &[T]) -> Result<Vec<T>, KzgError> {
        self.check_len(coeffs.len())?;
        let mut values = coeffs.to_vec();
        fft_in_place(&mut values, &self.generator)?;
        Ok(values)
    }

    /// Inverse of [Domain::fft]: interpolates values given in natural domain
    /// order back to coefficients.
    pub fn ifft<T: FftElement>(&self, evals: &[T]) -> Result<Vec<T>, KzgError> {
        self.check_len(evals.len())?;
        let mut values = evals.to_vec();
        fft_in_place(&mut values, &self.generator_inv)?;
        let cardinality_inv = self.cardinality_inv;
        values
            .par_iter_mut()
            .for_each(|value| *value = *value * cardinality_inv);
        Ok(values)
    }

    /// Inverse FFT of G1 points. Applied to the monomial trusted setup
    /// `[τ^i]G1` this yields the lagrange setup `[L_i(τ)]G1` for this domain.
    pub fn ifft_g1(&self, points: &[G1Affine]) -> Result<Vec<G1Affine>, KzgError> {
        let projective: Vec<G1Projective> = points.par_iter().map(|p| p.into_group()).collect();
        let lagrange = self.ifft(&projective)?;
        Ok(G1Projective::normalize_batch(&lagrange))
    }
}

/// Iterative radix-2 Cooley-Tukey transform. `root` must have order
/// `values.len()`.
fn fft_in_place<T: FftElement>(values: &mut [T], root: &Fr) -> Result<(), KzgError> {
    helpers::bit_reverse(values)?;

    let n = values.len();
    let mut half = 1;
    while half < n {
        let size = 2 * half;
        let step = root.pow([(n / size) as u64]);
        let twiddles = helpers::compute_powers(&step, half);

        values.par_chunks_mut(size).for_each(|chunk| {
            let (lo, hi) = chunk.split_at_mut(half);
            lo.par_iter_mut()
                .zip(hi.par_iter_mut())
                .zip(twiddles.par_iter())
                .for_each(|((a, b), w)| {
                    let t = *b * *w;
                    let u = *a;
                    *a = u + t;
                    *b = u - t;
                });
        });
        half = size;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::FftField;

    #[test]
    fn test_fixed_root_matches_field_two_adic_root() {
        assert_eq!(ROOT_OF_UNITY_2_32, Fr::TWO_ADIC_ROOT_OF_UNITY);
        assert_eq!(ROOT_OF_UNITY_2_32.pow([1u64 << 32]), Fr::one());
        assert_ne!(ROOT_OF_UNITY_2_32.pow([1u64 << 31]), Fr::one());
    }

    #[test]
    fn test_generator_has_exact_order() {
        let domain = Domain::new(4096).unwrap();
        assert_eq!(domain.cardinality(), 4096);
        assert_eq!(domain.generator().pow([4096u64]), Fr::one());
        assert_ne!(domain.generator().pow([2048u64]), Fr::one());
        assert_eq!(*domain.generator() * domain.generator_inv(), Fr::one());
        assert_eq!(
            *domain.cardinality_inv() * Fr::from(4096u64),
            Fr::one()
        );
    }

    #[test]
    fn test_inverse_roots() {
        let domain = Domain::new(64).unwrap();
        assert_eq!(domain.roots().len(), 64);
        for (root, inv) in domain.roots().iter().zip(domain.inverse_roots()) {
            assert_eq!(*root * inv, Fr::one());
        }
    }

    #[test]
    fn test_rounds_up_to_power_of_two() {
        assert_eq!(Domain::new(3).unwrap().cardinality(), 4);
        assert_eq!(Domain::new(4097).unwrap().cardinality(), 8192);
        assert_eq!(Domain::new(0).unwrap().cardinality(), 1);
        assert_eq!(Domain::new(1).unwrap().roots(), &[Fr::one()]);
    }

    #[test]
    fn test_fft_of_constant() {
        let domain = Domain::new(8).unwrap();
        let mut coeffs = vec![Fr::zero(); 8];
        coeffs[0] = Fr::from(7u64);
        assert_eq!(domain.fft(&coeffs).unwrap(), vec![Fr::from(7u64); 8]);
    }
}
