//! BN254 (alt_bn128) precompiles added in [`EIP-196`](https://eips.ethereum.org/EIPS/eip-196)
//! and [`EIP-197`](https://eips.ethereum.org/EIPS/eip-197).
use crate::{
    gas,
    utilities::{bool_to_bytes32, right_pad},
    Precompile, PrecompileError,
};
use alloy_primitives::{uint, Address, Bytes, U256};
use std::vec::Vec;

pub(crate) mod substrate;

use substrate::{
    encode_g1_point, g1_point_add, g1_point_mul, pairing_check, read_g1_point, read_g2_point,
    read_scalar,
};

/// Bn128 add precompile address.
pub const ADD_ADDRESS: Address = crate::u64_to_address(6);

/// Bn128 mul precompile address.
pub const MUL_ADDRESS: Address = crate::u64_to_address(7);

/// Bn128 pairing precompile address.
pub const PAIR_ADDRESS: Address = crate::u64_to_address(8);

/// Modulus of the base field.
pub const FIELD_ORDER: U256 =
    uint!(0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47_U256);

/// Order of the G1 group, which is the modulus of the scalar field.
pub const GROUP_ORDER: U256 =
    uint!(0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001_U256);

/// FQ_LEN specifies the number of bytes needed to represent an
/// Fq element. This is an element in the base field of BN254.
pub const FQ_LEN: usize = 32;

/// SCALAR_LEN specifies the number of bytes needed to represent an Fr element.
/// This is an element in the scalar field of BN254.
pub const SCALAR_LEN: usize = 32;

/// FQ2_LEN specifies the number of bytes needed to represent an
/// Fq^2 element.
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// G1_LEN specifies the number of bytes needed to represent a G1 element.
pub const G1_LEN: usize = 2 * FQ_LEN;

/// G2_LEN specifies the number of bytes needed to represent a G2 element.
pub const G2_LEN: usize = 2 * FQ2_LEN;

/// Input length for the add operation.
/// `ADD` takes two uncompressed G1 points (64 bytes each).
pub const ADD_INPUT_LEN: usize = 2 * G1_LEN;

/// Input length for the multiplication operation.
/// `MUL` takes an uncompressed G1 point (64 bytes) and scalar (32 bytes).
pub const MUL_INPUT_LEN: usize = G1_LEN + SCALAR_LEN;

/// Pair element length.
/// `PAIR` elements are composed of an uncompressed G1 point (64 bytes) and an uncompressed G2 point
/// (128 bytes).
pub const PAIR_ELEMENT_LEN: usize = G1_LEN + G2_LEN;

/// Point addition on the G1 group at a fixed cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn128Add {
    /// Fixed cost.
    pub gas: u64,
}

impl Default for Bn128Add {
    fn default() -> Self {
        Self {
            gas: gas::BN128_ADD,
        }
    }
}

impl Precompile for Bn128Add {
    fn required_gas(&self, _input: &[u8]) -> u64 {
        self.gas
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        run_add(input)
    }
}

/// Scalar multiplication on the G1 group at a fixed cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn128Mul {
    /// Fixed cost.
    pub gas: u64,
}

impl Default for Bn128Mul {
    fn default() -> Self {
        Self {
            gas: gas::BN128_MUL,
        }
    }
}

impl Precompile for Bn128Mul {
    fn required_gas(&self, _input: &[u8]) -> u64 {
        self.gas
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        run_mul(input)
    }
}

/// Pairing check priced per `(G1, G2)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn128Pair {
    /// Base cost.
    pub base: u64,
    /// Cost per pair.
    pub per_point: u64,
}

impl Default for Bn128Pair {
    fn default() -> Self {
        Self {
            base: gas::BN128_PAIR_BASE,
            per_point: gas::BN128_PAIR_PER_POINT,
        }
    }
}

impl Precompile for Bn128Pair {
    fn required_gas(&self, input: &[u8]) -> u64 {
        ((input.len() / PAIR_ELEMENT_LEN) as u64)
            .saturating_mul(self.per_point)
            .saturating_add(self.base)
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        run_pair(input)
    }
}

/// Adds two G1 points. Missing input bytes read as zero.
pub fn run_add(input: &[u8]) -> Result<Bytes, PrecompileError> {
    let input = right_pad::<ADD_INPUT_LEN>(input);

    let p1 = read_g1_point(&input[..G1_LEN])?;
    let p2 = read_g1_point(&input[G1_LEN..])?;
    let result = g1_point_add(p1, p2);

    let output = encode_g1_point(result)?;
    Ok(output.into())
}

/// Multiplies a G1 point by a scalar. Missing input bytes read as zero.
pub fn run_mul(input: &[u8]) -> Result<Bytes, PrecompileError> {
    let input = right_pad::<MUL_INPUT_LEN>(input);

    let p = read_g1_point(&input[..G1_LEN])?;
    let scalar = read_scalar(&input[G1_LEN..G1_LEN + SCALAR_LEN])?;
    let result = g1_point_mul(p, scalar);

    let output = encode_g1_point(result)?;
    Ok(output.into())
}

/// Checks that the product of pairings of all `(G1, G2)` pairs is one.
pub fn run_pair(input: &[u8]) -> Result<Bytes, PrecompileError> {
    if input.len() % PAIR_ELEMENT_LEN != 0 {
        return Err(PrecompileError::Bn128PairLength);
    }

    let elements = input.len() / PAIR_ELEMENT_LEN;
    let mut points = Vec::with_capacity(elements);

    for chunk in input.chunks_exact(PAIR_ELEMENT_LEN) {
        let a = read_g1_point(&chunk[..G1_LEN])?;
        let b = read_g2_point(&chunk[G1_LEN..])?;
        points.push((a, b));
    }

    let success = pairing_check(&points);
    Ok(bool_to_bytes32(success))
}
