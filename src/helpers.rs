use ark_bls12_381::Fr;
use ark_ff::{BigInt, PrimeField};
use ark_std::One;

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError};

/// Reverses a byte array in place. Used to move between the little-endian
/// wire format and big-endian integer order.
pub fn reverse_array<const N: usize>(bytes: &mut [u8; N]) {
    bytes.reverse();
}

/// Interprets `data` as a big-endian integer and returns it as a field
/// element, or `None` if the integer is not strictly less than the modulus.
/// Unlike `Fr::from_be_bytes_mod_order`, this never reduces.
pub fn reduce_canonical(data: &[u8; BYTES_PER_FIELD_ELEMENT]) -> Option<Fr> {
    let mut limbs = [0u64; 4];
    for (i, chunk) in data.chunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        // most significant limb comes first in big-endian order
        limbs[3 - i] = u64::from_be_bytes(word);
    }
    Fr::from_bigint(BigInt::new(limbs))
}

pub fn is_power_of_two(n: u64) -> bool {
    n.is_power_of_two()
}

/// Applies the bit-reversal permutation to `list` in place.
/// `list.len()` must be a power of two.
pub fn bit_reverse<T>(list: &mut [T]) -> Result<(), KzgError> {
    let n = list.len();
    if !is_power_of_two(n as u64) {
        return Err(KzgError::InvalidInputLength {
            expected: n.next_power_of_two(),
            got: n,
        });
    }
    if n == 1 {
        return Ok(());
    }

    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let irev = i.reverse_bits() >> shift;
        if irev > i {
            list.swap(i, irev);
        }
    }
    Ok(())
}

/// Computes powers of a field element up to a given exponent.
///
/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{BigInteger, Field};
    use ark_std::Zero;

    fn modulus_be() -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&Fr::MODULUS.to_bytes_be());
        bytes
    }

    #[test]
    fn test_reduce_canonical_small_values() {
        let mut bytes = [0u8; 32];
        assert_eq!(reduce_canonical(&bytes), Some(Fr::zero()));
        bytes[31] = 5;
        assert_eq!(reduce_canonical(&bytes), Some(Fr::from(5u64)));
        bytes[0] = 1;
        assert_eq!(
            reduce_canonical(&bytes),
            Some(Fr::from(2u64).pow([248]) + Fr::from(5u64))
        );
    }

    #[test]
    fn test_reduce_canonical_modulus_boundary() {
        let modulus = modulus_be();
        assert_eq!(reduce_canonical(&modulus), None);

        let mut below = modulus;
        // modulus ends in ...00000001, so no borrow is needed
        below[31] -= 1;
        assert_eq!(reduce_canonical(&below), Some(-Fr::one()));

        assert_eq!(reduce_canonical(&[0xff; 32]), None);
    }

    #[test]
    fn test_reverse_array() {
        let mut bytes = [1u8, 2, 3, 4];
        reverse_array(&mut bytes);
        assert_eq!(bytes, [4, 3, 2, 1]);
    }

    #[test]
    fn test_is_power_of_two() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(4096));
        assert!(!is_power_of_two(4095));
        assert!(is_power_of_two(1 << 33));
    }

    #[test]
    fn test_bit_reverse_eight() {
        let mut list: Vec<usize> = (0..8).collect();
        bit_reverse(&mut list).unwrap();
        assert_eq!(list, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn test_bit_reverse_is_an_involution() {
        let original: Vec<u32> = (0..1024).collect();
        let mut list = original.clone();
        bit_reverse(&mut list).unwrap();
        assert_ne!(list, original);
        bit_reverse(&mut list).unwrap();
        assert_eq!(list, original);
    }

    #[test]
    fn test_bit_reverse_trivial_and_invalid_lengths() {
        let mut single = [42u8];
        bit_reverse(&mut single).unwrap();
        assert_eq!(single, [42]);

        let mut three = [1u8, 2, 3];
        assert_eq!(
            bit_reverse(&mut three),
            Err(KzgError::InvalidInputLength {
                expected: 4,
                got: 3
            })
        );
        let mut empty: [u8; 0] = [];
        assert!(bit_reverse(&mut empty).is_err());
    }

    #[test]
    fn test_compute_powers() {
        let base = Fr::from(3u64);
        let powers = compute_powers(&base, 5);
        assert_eq!(
            powers,
            vec![
                Fr::from(1u64),
                Fr::from(3u64),
                Fr::from(9u64),
                Fr::from(27u64),
                Fr::from(81u64)
            ]
        );
        assert!(compute_powers(&base, 0).is_empty());
    }
}
