use thiserror::Error;

/// Broad classes of failure. Every [`KzgError`] maps onto exactly one of
/// these through [`KzgError::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    SizeMismatch,
    NonCanonicalEncoding,
    SetupInconsistency,
    DomainConstruction,
    Decode,
}

/// Errors related to KZG operations.
///
/// All of them are recoverable and deterministic: the same input always
/// produces the same error, and no operation returns a partial result.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// A polynomial (or FFT input) does not have one value per domain element.
    #[error("polynomial length {polynomial_len} does not match domain size {domain_size}")]
    PolynomialDomainSizeMismatch {
        polynomial_len: usize,
        domain_size: u64,
    },

    /// Two parallel input lists have different lengths.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The monomial and lagrange G1 setups have different lengths.
    #[error("monomial setup has {monomial} G1 points but lagrange setup has {lagrange}")]
    SetupLengthMismatch { monomial: usize, lagrange: usize },

    /// The trusted setup does not contain the generator point.
    #[error("trusted setup must contain at least one G1 point")]
    MinSrsSize,

    /// Bytes encode an integer greater than or equal to the field modulus.
    #[error("scalar is not in canonical format")]
    NonCanonicalScalar,

    /// A compressed point failed to decode, is not on the curve, or is not in
    /// the prime order subgroup.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// The lagrange setup is not the inverse FFT of the monomial setup.
    #[error("unexpected lagrange setup being used: mismatch at index {index}")]
    UnexpectedLagrangeSetup { index: usize },

    /// The requested domain would need a root of unity the field lacks.
    #[error("domain size {size} is too big: the required root of unity does not exist")]
    DomainTooLarge { size: u64 },

    /// A field element that must be inverted is zero.
    #[error("invalid denominator")]
    InvalidDenominator,

    /// Malformed hex in a trusted setup entry.
    #[error("hex decode error: {0}")]
    HexDecodeError(String),

    /// Input bytes of the wrong length.
    #[error("invalid input length: expected {expected} bytes, got {got}")]
    InvalidInputLength { expected: usize, got: usize },

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("MSM error: {0}")]
    MsmError(String),
}

impl KzgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KzgError::PolynomialDomainSizeMismatch { .. }
            | KzgError::LengthMismatch { .. }
            | KzgError::SetupLengthMismatch { .. }
            | KzgError::MinSrsSize
            | KzgError::MsmError(_) => ErrorKind::SizeMismatch,
            KzgError::NonCanonicalScalar | KzgError::InvalidPoint(_) => {
                ErrorKind::NonCanonicalEncoding
            },
            KzgError::UnexpectedLagrangeSetup { .. } => ErrorKind::SetupInconsistency,
            KzgError::DomainTooLarge { .. } | KzgError::InvalidDenominator => {
                ErrorKind::DomainConstruction
            },
            KzgError::HexDecodeError(_)
            | KzgError::InvalidInputLength { .. }
            | KzgError::SerializationError(_) => ErrorKind::Decode,
        }
    }
}

impl From<hex::FromHexError> for KzgError {
    fn from(err: hex::FromHexError) -> Self {
        KzgError::HexDecodeError(err.to_string())
    }
}
