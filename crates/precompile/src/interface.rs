//! Interface for the precompiles. It contains the precompile trait, the
//! precompile result type, the precompile output type, and the precompile error type.
use alloy_primitives::Bytes;
use core::fmt;
use std::string::String;

/// A precompile operation result type
///
/// Returns either `Ok(PrecompileOutput)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas charged before the precompile ran
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// A native contract reachable at a reserved address.
///
/// Implementations must be pure functions of their input: the same bytes always
/// price and evaluate the same way on every node.
pub trait Precompile: Send + Sync + fmt::Debug {
    /// Gas charged before [`Precompile::run`] is invoked.
    fn required_gas(&self, input: &[u8]) -> u64;

    /// Evaluates the contract over `input`.
    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError>;
}

/// Precompile error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// out of gas is the main error. Others are here just for completeness
    OutOfGas,
    /// Modexp base length does not fit in memory
    ModexpBaseOverflow,
    /// Modexp exponent length does not fit in memory
    ModexpExpOverflow,
    /// Modexp modulus length does not fit in memory
    ModexpModOverflow,
    /// Bn128 coordinate is not below the field modulus
    Bn128FieldPointNotAMember,
    /// Bn128 coordinates do not satisfy the curve equation
    Bn128AffineGFailedToCreate,
    /// Bn128 pairing input is not a whole number of pairs
    Bn128PairLength,
    /// Catch-all variant for other errors
    Other(String),
}

impl PrecompileError {
    /// Returns another error with the given message.
    pub fn other(err: impl Into<String>) -> Self {
        Self::Other(err.into())
    }

    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfGas => "out of gas",
            Self::ModexpBaseOverflow => "modexp base overflow",
            Self::ModexpExpOverflow => "modexp exp overflow",
            Self::ModexpModOverflow => "modexp mod overflow",
            Self::Bn128FieldPointNotAMember => "invalid elliptic curve point",
            Self::Bn128AffineGFailedToCreate => "point not on elliptic curve",
            Self::Bn128PairLength => "bad elliptic curve pairing size",
            Self::Other(s) => s,
        };
        f.write_str(s)
    }
}
