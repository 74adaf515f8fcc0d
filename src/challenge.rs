use ark_bls12_381::Fr;
use ark_ff::PrimeField;
use sha2::{Digest, Sha256};

use crate::{
    consts::{
        BYTES_PER_BLOB, FIAT_SHAMIR_PROTOCOL_DOMAIN, FIELD_ELEMENTS_PER_BLOB,
        SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    serialization::{Blob, KzgCommitment},
};

/// Computes the Fiat-Shamir challenge for a blob and its commitment.
///
/// The hashed transcript is
///
/// ```text
/// FIAT_SHAMIR_PROTOCOL_DOMAIN || FIELD_ELEMENTS_PER_BLOB as 16 bytes LE || blob || commitment
/// ```
///
/// Every other implementation of the scheme derives the same challenge from
/// the same bytes. Changing the framing, the byte order or the hash breaks
/// interoperability.
pub fn compute_challenge(blob: &Blob, commitment: &KzgCommitment) -> Fr {
    let mut data = Vec::with_capacity(
        FIAT_SHAMIR_PROTOCOL_DOMAIN.len() + 16 + BYTES_PER_BLOB + SIZE_OF_G1_AFFINE_COMPRESSED,
    );
    data.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    data.extend_from_slice(&u64_to_byte_array16(FIELD_ELEMENTS_PER_BLOB as u64));
    for scalar in blob.iter() {
        data.extend_from_slice(scalar);
    }
    data.extend_from_slice(commitment);

    hash_to_bls_field(&data)
}

/// Hashes `data` with SHA-256 and reads the digest as a little-endian
/// integer reduced modulo r. A digest is uniformly distributed, so unlike
/// wire scalars it is reduced rather than rejected when it exceeds r.
pub fn hash_to_bls_field(data: &[u8]) -> Fr {
    let digest = Sha256::digest(data);
    Fr::from_le_bytes_mod_order(digest.as_slice())
}

/// Encodes `number` as 16 little-endian bytes, zero extended.
pub fn u64_to_byte_array16(number: u64) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&number.to_le_bytes());
    bytes
}
