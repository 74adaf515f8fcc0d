//! ## Library Design / Architecture
//!
//! This library is the cryptographic core of KZG commitments to
//! [EIP-4844](https://eips.ethereum.org/EIPS/eip-4844) style blobs over
//! BLS12-381. It does not implement the commit / prove / verify protocol
//! itself, only the primitives that protocol is built from.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > wire bytes -> [serialization::Blob] -> [polynomial::PolynomialEvalForm]
//! > -> commitment ([trusted_setup::TrustedSetup::commit]) ->
//! > challenge ([challenge::compute_challenge]) -> evaluation
//! > ([domain::Domain::evaluate_lagrange_polynomial])
//!
//! - Blob: 4096 little-endian 32 byte scalars. Untrusted until deserialised,
//!   at which point every scalar must be strictly less than the modulus.
//! - Polynomial: 4096 field elements interpreted in Lagrange basis, i.e.
//!   element `i` is the value of the polynomial at the `i`-th root of unity
//!   of the [domain::Domain].
//! - Trusted setup: monomial G1 points, lagrange G1 points and monomial G2
//!   points. The lagrange points are the inverse FFT of the monomial points,
//!   which [trusted_setup::check_trusted_setup_well_formed] verifies.
//!
//! ### KZG Commitments
//!
//! A commitment is the multi-scalar multiplication of a polynomial's
//! evaluations with the lagrange setup points, see [multiexp::multi_exp].
//!
//! ## Examples
//!
//! ### Commit to a blob and evaluate it at its challenge
//! ```rust
//! use kzg_blob_core::{
//!     challenge::compute_challenge,
//!     consts::FIELD_ELEMENTS_PER_BLOB,
//!     domain::Domain,
//!     serialization::{deserialize_blob, serialize_g1_point},
//!     test_setup::insecure_test_setup,
//!     trusted_setup::parse_trusted_setup,
//! };
//!
//! let setup = parse_trusted_setup(insecure_test_setup().unwrap()).unwrap();
//! let domain = Domain::new(FIELD_ELEMENTS_PER_BLOB as u64).unwrap();
//!
//! let mut blob = Box::new([[0u8; 32]; FIELD_ELEMENTS_PER_BLOB]);
//! blob[0][0] = 42;
//! let poly = deserialize_blob(&blob).unwrap();
//!
//! let commitment = serialize_g1_point(&setup.commit(&poly).unwrap()).unwrap();
//! let z = compute_challenge(&blob, &commitment);
//! let y = domain.evaluate_lagrange_polynomial(poly.evaluations(), &z).unwrap();
//! ```

pub mod challenge;
pub mod consts;
pub mod domain;
pub mod errors;
pub mod helpers;
pub mod multiexp;
pub mod polynomial;
pub mod serialization;
pub mod test_setup;
pub mod trusted_setup;
