use ark_bls12_381::Fr;
use ark_ff::MontFp;

pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 48; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 96; // in bytes

/// Number of 32 byte field elements in a blob. Set at the protocol level and
/// unrelated to any cryptographic assumption. Fixes the domain size and the
/// length prefix hashed into the Fiat-Shamir challenge.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8] = b"FSBLOBVERIFY_V1_";

/// Two-adicity of the scalar field: the largest power of two dividing r - 1.
pub const MAX_ORDER_ROOT: u32 = 32;

/// Generator of the 2^32 order multiplicative subgroup of Fr.
pub const ROOT_OF_UNITY_2_32: Fr =
    MontFp!("10238227357739495823651030575849232062558860180284477541189508159991286009131");

/// Number of G2 points in the mainnet 4844 ceremony output.
pub const SETUP_G2_LENGTH: usize = 65;
