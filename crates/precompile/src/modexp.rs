//! Modexp precompile added in [`EIP-198`](https://eips.ethereum.org/EIPS/eip-198)
//!
//! Input is three 32-byte big-endian lengths followed by the base, exponent and modulus. Bytes
//! missing from the end of the input are read as zero.
use crate::{
    gas,
    utilities::{left_pad_vec, right_pad_with_offset_vec},
    Precompile, PrecompileError,
};
use alloy_primitives::{Address, Bytes, U256};
use aurora_engine_modexp::modexp;
use std::vec;

/// Modexp precompile address.
pub const ADDRESS: Address = crate::u64_to_address(5);

/// Length of each of the three length words at the head of the input.
const HEADER_LENGTH: usize = 96;

/// Big integer modular exponentiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModExp {
    /// Divisor applied to `complexity * iterations`.
    pub quad_coeff_div: u64,
}

impl Default for ModExp {
    fn default() -> Self {
        Self {
            quad_coeff_div: gas::MODEXP_QUAD_COEFF_DIV,
        }
    }
}

impl Precompile for ModExp {
    fn required_gas(&self, input: &[u8]) -> u64 {
        byzantium_gas_calc(input, self.quad_coeff_div)
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        run_inner(input)
    }
}

/// Reads the `(base, exp, mod)` length words.
fn read_lengths(input: &[u8]) -> (U256, U256, U256) {
    let header = right_pad_with_offset_vec(input, 0, HEADER_LENGTH);
    (
        U256::from_be_slice(&header[0..32]),
        U256::from_be_slice(&header[32..64]),
        U256::from_be_slice(&header[64..96]),
    )
}

/// Multiplication complexity of EIP-198.
fn mult_complexity(x: U256) -> U256 {
    if x <= U256::from(64) {
        x.saturating_mul(x)
    } else if x <= U256::from(1024) {
        // x^2 / 4 + 96x - 3072
        (x.saturating_mul(x) / U256::from(4))
            .saturating_add(x.saturating_mul(U256::from(96)))
            .saturating_sub(U256::from(3072))
    } else {
        // x^2 / 16 + 480x - 199680
        (x.saturating_mul(x) / U256::from(16))
            .saturating_add(x.saturating_mul(U256::from(480)))
            .saturating_sub(U256::from(199_680))
    }
}

/// Adjusted exponent length: eight per exponent byte past the first 32, plus the index of the
/// highest set bit of the first 32 exponent bytes.
fn adjusted_exp_len(exp_len: U256, exp_head: U256) -> U256 {
    let msb = exp_head.bit_len().saturating_sub(1);
    let extra = if exp_len > U256::from(32) {
        (exp_len - U256::from(32)).saturating_mul(U256::from(8))
    } else {
        U256::ZERO
    };
    extra.saturating_add(U256::from(msb))
}

/// Calculates the gas cost of a modexp call.
///
/// Saturates to `u64::MAX` when the cost does not fit in 64 bits.
pub fn byzantium_gas_calc(input: &[u8], quad_coeff_div: u64) -> u64 {
    let (base_len, exp_len, mod_len) = read_lengths(input);
    let data = input.get(HEADER_LENGTH..).unwrap_or_default();

    // The head of the exponent is only read when the data reaches past the base.
    let exp_head = if U256::from(data.len()) <= base_len {
        U256::ZERO
    } else {
        // `base_len < data.len()`, so it fits in usize.
        let base_len = base_len.to::<usize>();
        let head_len = exp_len.min(U256::from(32)).to::<usize>();
        let head = right_pad_with_offset_vec(data, base_len, head_len);
        U256::from_be_slice(&head)
    };

    let gas = mult_complexity(base_len.max(mod_len))
        .saturating_mul(adjusted_exp_len(exp_len, exp_head).max(U256::from(1)))
        .checked_div(U256::from(quad_coeff_div))
        .unwrap_or(U256::MAX);

    gas.try_into().unwrap_or(u64::MAX)
}

/// Executes the modular exponentiation.
pub fn run_inner(input: &[u8]) -> Result<Bytes, PrecompileError> {
    let (base_len, exp_len, mod_len) = read_lengths(input);

    // Empty base and modulus yield an empty result whatever the exponent length.
    if base_len.is_zero() && mod_len.is_zero() {
        return Ok(Bytes::new());
    }

    let base_len = usize::try_from(base_len).map_err(|_| PrecompileError::ModexpBaseOverflow)?;
    let exp_len = usize::try_from(exp_len).map_err(|_| PrecompileError::ModexpExpOverflow)?;
    let mod_len = usize::try_from(mod_len).map_err(|_| PrecompileError::ModexpModOverflow)?;

    let data = input.get(HEADER_LENGTH..).unwrap_or_default();
    let mod_offset = base_len
        .checked_add(exp_len)
        .ok_or(PrecompileError::ModexpExpOverflow)?;

    let base = right_pad_with_offset_vec(data, 0, base_len);
    let exponent = right_pad_with_offset_vec(data, base_len, exp_len);
    let modulus = right_pad_with_offset_vec(data, mod_offset, mod_len);

    // Modulo 0 is undefined, return zero.
    if modulus.iter().all(|&b| b == 0) {
        return Ok(vec![0u8; mod_len].into());
    }

    let output = modexp(&base, &exponent, &modulus);
    Ok(left_pad_vec(&output, mod_len).into_owned().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use rstest::rstest;

    fn encode(base: &[u8], exp: &[u8], modulus: &[u8]) -> std::vec::Vec<u8> {
        let mut input = std::vec::Vec::new();
        input.extend_from_slice(&U256::from(base.len()).to_be_bytes::<32>());
        input.extend_from_slice(&U256::from(exp.len()).to_be_bytes::<32>());
        input.extend_from_slice(&U256::from(modulus.len()).to_be_bytes::<32>());
        input.extend_from_slice(base);
        input.extend_from_slice(exp);
        input.extend_from_slice(modulus);
        input
    }

    #[test]
    fn three_pow_five_mod_seven() {
        let input = encode(&[3], &[5], &[7]);
        let out = ModExp::default().run(&input).unwrap();
        assert_eq!(out[..], [5]);
    }

    #[test]
    fn result_is_left_padded_to_modulus_length() {
        let input = encode(&[3], &[5], &[0, 0, 7]);
        let out = ModExp::default().run(&input).unwrap();
        assert_eq!(out[..], [0, 0, 5]);
    }

    #[test]
    fn all_lengths_zero_returns_empty() {
        let out = ModExp::default().run(&[]).unwrap();
        assert!(out.is_empty());
        let out = ModExp::default().run(&[0u8; 96]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn huge_exponent_with_empty_base_and_modulus() {
        let mut input = [0u8; 96];
        input[32..64].fill(0xff);
        let modexp = ModExp::default();
        assert_eq!(modexp.required_gas(&input), 0);
        assert_eq!(modexp.run(&input), Ok(Bytes::new()));
    }

    #[test]
    fn zero_modulus_returns_zeroes() {
        let input = encode(&[3], &[5], &[0, 0, 0, 0]);
        let out = ModExp::default().run(&input).unwrap();
        assert_eq!(out[..], [0, 0, 0, 0]);

        // modulus bytes missing from the input read as zero
        let mut input = encode(&[3], &[5], &[]);
        input[64..96].copy_from_slice(&U256::from(2).to_be_bytes::<32>());
        let out = ModExp::default().run(&input).unwrap();
        assert_eq!(out[..], [0, 0]);
    }

    #[test]
    fn zero_base_with_modulus() {
        let input = encode(&[], &[5], &[7]);
        let out = ModExp::default().run(&input).unwrap();
        assert_eq!(out[..], [0]);
    }

    // Vectors from the EIP-198 reference: Fermat's little theorem example and its gas.
    #[rstest]
    #[case::fermat(
        "0000000000000000000000000000000000000000000000000000000000000001\
         0000000000000000000000000000000000000000000000000000000000000020\
         0000000000000000000000000000000000000000000000000000000000000020\
         03\
         fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e\
         fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        "0000000000000000000000000000000000000000000000000000000000000001",
        13_056
    )]
    #[case::zero_base_zero_exp(
        "0000000000000000000000000000000000000000000000000000000000000000\
         0000000000000000000000000000000000000000000000000000000000000020\
         0000000000000000000000000000000000000000000000000000000000000020\
         fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e\
         fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        "0000000000000000000000000000000000000000000000000000000000000000",
        13_056
    )]
    fn eip198_vectors(#[case] input: &str, #[case] expected: &str, #[case] gas: u64) {
        let input = hex::decode(input).unwrap();
        let modexp = ModExp::default();
        assert_eq!(modexp.required_gas(&input), gas);
        assert_eq!(
            modexp.run(&input).unwrap()[..],
            hex::decode(expected).unwrap()[..]
        );
    }

    #[test]
    fn gas_saturates() {
        let input = hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        assert_eq!(byzantium_gas_calc(&input, 20), u64::MAX);
    }

    #[test]
    fn gas_small_inputs() {
        // max(1, 1)^2 * max(msb(5), 1) / 20 == 0
        assert_eq!(byzantium_gas_calc(&encode(&[3], &[5], &[7]), 20), 0);
        // 64^2 * 1 / 20
        assert_eq!(
            byzantium_gas_calc(&encode(&[1; 64], &[1], &[1; 64]), 20),
            4096 / 20
        );
        // exponent longer than 32 bytes: 8 * (33 - 32) + msb(0x01 << 248 ..) = 8 + 248
        let mut exp = [0u8; 33];
        exp[0] = 1;
        assert_eq!(
            byzantium_gas_calc(&encode(&[1; 20], &exp, &[1; 20]), 20),
            400 * 256 / 20
        );
    }

    #[rstest]
    #[case::base(0..32)]
    #[case::exponent(32..64)]
    #[case::modulus(64..96)]
    fn gas_is_monotonic_in_length(#[case] word: core::ops::Range<usize>) {
        let mut last = 0;
        for len in 0..1200usize {
            // the other two lengths stay at one and every data byte is 0xff, so the
            // exponent head never runs past the input
            let mut input = encode(&[0xff], &[0xff], &[0xff]);
            input.resize(HEADER_LENGTH + 1300, 0xff);
            input[word.clone()].copy_from_slice(&U256::from(len).to_be_bytes::<32>());
            let gas = byzantium_gas_calc(&input, 20);
            assert!(gas >= last, "length {len}: {gas} < {last}");
            last = gas;
        }
    }
}
