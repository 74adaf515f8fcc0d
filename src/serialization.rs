//! Canonical wire formats.
//!
//! Everything that crosses the trust boundary is one of the fixed-width byte
//! arrays defined here. Scalars are 32 byte little-endian integers that must
//! be strictly less than the field modulus; points use the standard
//! compressed BLS12-381 encoding (48 bytes for G1, 96 for G2). Decoding is
//! strict: non-canonical scalars and points outside the prime order subgroup
//! are rejected, never reduced or corrected.

use ark_bls12_381::{Fr, G1Affine, G2Affine};
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{
    consts::{
        BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB,
        SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::KzgError,
    helpers,
    polynomial::PolynomialEvalForm,
};

pub type SerialisedScalar = [u8; BYTES_PER_FIELD_ELEMENT];
pub type SerialisedG1Point = [u8; SIZE_OF_G1_AFFINE_COMPRESSED];
pub type SerialisedG2Point = [u8; SIZE_OF_G2_AFFINE_COMPRESSED];
pub type SerialisedPoly = [SerialisedScalar; FIELD_ELEMENTS_PER_BLOB];

/// A blob is a serialised polynomial in Lagrange form. Its scalars are not
/// known to be canonical until it has been deserialised.
pub type Blob = SerialisedPoly;

pub type KzgCommitment = SerialisedG1Point;
pub type KzgProof = SerialisedG1Point;

/// Copies `bytes` into a fixed size array, failing if the length is wrong.
pub fn to_fixed_bytes<const N: usize>(bytes: &[u8]) -> Result<[u8; N], KzgError> {
    bytes
        .try_into()
        .map_err(|_| KzgError::InvalidInputLength {
            expected: N,
            got: bytes.len(),
        })
}

pub fn serialize_scalar(scalar: &Fr) -> SerialisedScalar {
    let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
    out.copy_from_slice(&scalar.into_bigint().to_bytes_le());
    out
}

/// Decodes a little-endian scalar, rejecting values `>= r`.
pub fn deserialize_scalar(ser_scalar: &SerialisedScalar) -> Result<Fr, KzgError> {
    let mut bytes_be = *ser_scalar;
    helpers::reverse_array(&mut bytes_be);
    helpers::reduce_canonical(&bytes_be).ok_or(KzgError::NonCanonicalScalar)
}

pub fn serialize_g1_point(point: &G1Affine) -> Result<SerialisedG1Point, KzgError> {
    let mut out = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    point
        .serialize_compressed(&mut out[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(out)
}

/// Decodes a compressed G1 point, checking that it is on the curve and in
/// the prime order subgroup.
pub fn deserialize_g1_point(ser_point: &SerialisedG1Point) -> Result<G1Affine, KzgError> {
    G1Affine::deserialize_compressed(&ser_point[..])
        .map_err(|e| KzgError::InvalidPoint(format!("G1: {}", e)))
}

/// Decodes a compressed G1 point without the subgroup check.
///
/// Only for points from an already trusted setup. Never use this on
/// commitments, proofs or any other untrusted input.
pub fn deserialize_g1_point_unchecked(
    ser_point: &SerialisedG1Point,
) -> Result<G1Affine, KzgError> {
    G1Affine::deserialize_compressed_unchecked(&ser_point[..])
        .map_err(|e| KzgError::InvalidPoint(format!("G1: {}", e)))
}

pub fn serialize_g2_point(point: &G2Affine) -> Result<SerialisedG2Point, KzgError> {
    let mut out = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
    point
        .serialize_compressed(&mut out[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(out)
}

pub fn deserialize_g2_point(ser_point: &SerialisedG2Point) -> Result<G2Affine, KzgError> {
    G2Affine::deserialize_compressed(&ser_point[..])
        .map_err(|e| KzgError::InvalidPoint(format!("G2: {}", e)))
}

/// G2 counterpart of [deserialize_g1_point_unchecked], same restrictions.
pub fn deserialize_g2_point_unchecked(
    ser_point: &SerialisedG2Point,
) -> Result<G2Affine, KzgError> {
    G2Affine::deserialize_compressed_unchecked(&ser_point[..])
        .map_err(|e| KzgError::InvalidPoint(format!("G2: {}", e)))
}

/// Decodes every scalar of a serialised polynomial. Stops at the first
/// non-canonical scalar; no partial polynomial is returned.
pub fn deserialize_poly(ser_poly: &SerialisedPoly) -> Result<PolynomialEvalForm, KzgError> {
    let evaluations = ser_poly
        .iter()
        .map(deserialize_scalar)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PolynomialEvalForm::new(evaluations))
}

pub fn deserialize_blob(blob: &Blob) -> Result<PolynomialEvalForm, KzgError> {
    deserialize_poly(blob)
}

pub fn deserialize_polys(ser_polys: &[SerialisedPoly]) -> Result<Vec<PolynomialEvalForm>, KzgError> {
    ser_polys.iter().map(deserialize_poly).collect()
}

/// Serialises a polynomial with exactly [FIELD_ELEMENTS_PER_BLOB] values.
pub fn serialize_poly(poly: &PolynomialEvalForm) -> Result<Box<SerialisedPoly>, KzgError> {
    if poly.len() != FIELD_ELEMENTS_PER_BLOB {
        return Err(KzgError::LengthMismatch {
            left: poly.len(),
            right: FIELD_ELEMENTS_PER_BLOB,
        });
    }
    let mut out = Box::new([[0u8; BYTES_PER_FIELD_ELEMENT]; FIELD_ELEMENTS_PER_BLOB]);
    for (ser, scalar) in out.iter_mut().zip(poly.evaluations()) {
        *ser = serialize_scalar(scalar);
    }
    Ok(out)
}

/// Splits [BYTES_PER_BLOB] raw bytes into a [Blob]. No canonicity check is
/// made here; that happens in [deserialize_blob].
pub fn blob_from_bytes(bytes: &[u8]) -> Result<Box<Blob>, KzgError> {
    if bytes.len() != BYTES_PER_BLOB {
        return Err(KzgError::InvalidInputLength {
            expected: BYTES_PER_BLOB,
            got: bytes.len(),
        });
    }
    let mut blob = Box::new([[0u8; BYTES_PER_FIELD_ELEMENT]; FIELD_ELEMENTS_PER_BLOB]);
    for (ser, chunk) in blob
        .iter_mut()
        .zip(bytes.chunks_exact(BYTES_PER_FIELD_ELEMENT))
    {
        ser.copy_from_slice(chunk);
    }
    Ok(blob)
}

/// Decodes commitments with full subgroup checks. Stops at the first invalid
/// point.
pub fn deserialize_commitments(ser_comms: &[KzgCommitment]) -> Result<Vec<G1Affine>, KzgError> {
    ser_comms.iter().map(deserialize_g1_point).collect()
}

pub fn serialize_commitments(comms: &[G1Affine]) -> Result<Vec<KzgCommitment>, KzgError> {
    comms.iter().map(serialize_g1_point).collect()
}
