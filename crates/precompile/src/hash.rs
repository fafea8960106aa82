//! Hash precompiles, it contains SHA-256 and RIPEMD-160 hash precompiles
//! More details in [`sha256_run`] and [`ripemd160_run`]
use super::calc_linear_cost;
use crate::{gas, Precompile, PrecompileError};
use alloy_primitives::{Address, Bytes};
use sha2::Digest;

/// SHA-256 precompile address.
pub const SHA256_ADDRESS: Address = crate::u64_to_address(2);

/// RIPEMD-160 precompile address.
pub const RIPEMD160_ADDRESS: Address = crate::u64_to_address(3);

/// SHA-256 precompile priced per 32-byte word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sha256 {
    /// Base cost.
    pub base: u64,
    /// Cost per word.
    pub per_word: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self {
            base: gas::SHA256_BASE,
            per_word: gas::SHA256_PER_WORD,
        }
    }
}

impl Precompile for Sha256 {
    fn required_gas(&self, input: &[u8]) -> u64 {
        calc_linear_cost(input.len(), self.base, self.per_word)
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        Ok(sha256_run(input))
    }
}

/// RIPEMD-160 precompile priced per 32-byte word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ripemd160 {
    /// Base cost.
    pub base: u64,
    /// Cost per word.
    pub per_word: u64,
}

impl Default for Ripemd160 {
    fn default() -> Self {
        Self {
            base: gas::RIPEMD160_BASE,
            per_word: gas::RIPEMD160_PER_WORD,
        }
    }
}

impl Precompile for Ripemd160 {
    fn required_gas(&self, input: &[u8]) -> u64 {
        calc_linear_cost(input.len(), self.base, self.per_word)
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        Ok(ripemd160_run(input))
    }
}

/// Computes the SHA-256 hash of the input data.
///
/// See: <https://ethereum.github.io/yellowpaper/paper.pdf>
/// See: <https://etherscan.io/address/0000000000000000000000000000000000000002>
pub fn sha256_run(input: &[u8]) -> Bytes {
    let output = sha2::Sha256::digest(input);
    Bytes::copy_from_slice(&output)
}

/// Computes the RIPEMD-160 hash of the input data, left-padded to 32 bytes.
///
/// See: <https://ethereum.github.io/yellowpaper/paper.pdf>
/// See: <https://etherscan.io/address/0000000000000000000000000000000000000003>
pub fn ripemd160_run(input: &[u8]) -> Bytes {
    let mut hasher = ripemd::Ripemd160::new();
    hasher.update(input);

    let mut output = [0u8; 32];
    hasher.finalize_into((&mut output[12..]).into());
    Bytes::copy_from_slice(&output)
}
