#[cfg(test)]
mod tests {
    use ark_bls12_381::{Fr, G1Affine};
    use ark_ec::AffineRepr;
    use kzg_blob_core::{
        challenge::{compute_challenge, hash_to_bls_field, u64_to_byte_array16},
        consts::FIELD_ELEMENTS_PER_BLOB,
        serialization::{serialize_g1_point, serialize_scalar, Blob, KzgCommitment},
    };

    fn zero_blob() -> Box<Blob> {
        Box::new([[0u8; 32]; FIELD_ELEMENTS_PER_BLOB])
    }

    fn identity_commitment() -> KzgCommitment {
        serialize_g1_point(&G1Affine::identity()).unwrap()
    }

    // Changing how the challenge is derived breaks every other implementation
    // of the scheme. If this fails, the transcript framing has regressed.
    #[test]
    fn test_compute_challenge_interop() {
        let challenge = compute_challenge(&zero_blob(), &identity_commitment());
        let expected: [u8; 32] = [
            59, 127, 233, 79, 178, 22, 242, 95, 176, 209, 125, 10, 193, 90, 102, 229, 56, 104,
            204, 58, 237, 60, 121, 97, 77, 194, 248, 45, 172, 7, 224, 74,
        ];
        assert_eq!(serialize_scalar(&challenge), expected);
    }

    #[test]
    fn test_u64_to_byte_array16() {
        assert_eq!(
            u64_to_byte_array16(4096),
            [0, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_challenge_is_deterministic() {
        let mut blob = zero_blob();
        blob[100] = serialize_scalar(&Fr::from(100u64));
        let commitment = serialize_g1_point(&G1Affine::generator()).unwrap();

        let first = compute_challenge(&blob, &commitment);
        let second = compute_challenge(&blob.clone(), &commitment);
        assert_eq!(first, second);
    }

    #[test]
    fn test_challenge_depends_on_every_input() {
        let base = compute_challenge(&zero_blob(), &identity_commitment());

        let mut blob = zero_blob();
        blob[FIELD_ELEMENTS_PER_BLOB - 1][31] = 1;
        assert_ne!(compute_challenge(&blob, &identity_commitment()), base);

        let mut commitment = identity_commitment();
        commitment[47] = 1;
        assert_ne!(compute_challenge(&zero_blob(), &commitment), base);
    }

    #[test]
    fn test_hash_to_bls_field_reduces() {
        // whatever the digest, the result is a canonical scalar
        let scalar = hash_to_bls_field(b"");
        let bytes = serialize_scalar(&scalar);
        assert_eq!(
            kzg_blob_core::serialization::deserialize_scalar(&bytes).unwrap(),
            scalar
        );
        assert_ne!(hash_to_bls_field(b"a"), hash_to_bls_field(b"b"));
    }
}
