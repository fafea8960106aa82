//! Identity precompile returns
use super::calc_linear_cost;
use crate::{gas, Precompile, PrecompileError};
use alloy_primitives::{Address, Bytes};

/// Address of the identity precompile.
pub const ADDRESS: Address = crate::u64_to_address(4);

/// Copies its input to its output, priced per 32-byte word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    /// The base cost of the operation.
    pub base: u64,
    /// The cost per word.
    pub per_word: u64,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            base: gas::IDENTITY_BASE,
            per_word: gas::IDENTITY_PER_WORD,
        }
    }
}

impl Precompile for Identity {
    fn required_gas(&self, input: &[u8]) -> u64 {
        calc_linear_cost(input.len(), self.base, self.per_word)
    }

    /// Takes the input bytes, copies them, and returns it as the output.
    ///
    /// See: <https://ethereum.github.io/yellowpaper/paper.pdf>
    /// See: <https://etherscan.io/address/0000000000000000000000000000000000000004>
    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        Ok(Bytes::copy_from_slice(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[])]
    #[case::one_byte(&[0xff])]
    #[case::two_words(&[7; 64])]
    #[case::uneven(&[9; 33])]
    fn copies_input(#[case] input: &[u8]) {
        let out = Identity::default().run(input).unwrap();
        assert_eq!(&out[..], input);
    }

    #[test]
    fn per_word_pricing() {
        let identity = Identity::default();
        assert_eq!(identity.required_gas(&[]), 15);
        assert_eq!(identity.required_gas(&[0; 32]), 18);
        assert_eq!(identity.required_gas(&[0; 33]), 21);
    }

    #[test]
    fn pricing_is_monotonic() {
        let identity = Identity::default();
        let input = [0u8; 200];
        for len in 1..input.len() {
            let (shorter, longer) = (&input[..len - 1], &input[..len]);
            assert!(identity.required_gas(longer) >= identity.required_gas(shorter));
        }
    }
}
