//! `ecrecover` precompile.
//!
//! Uses the pure rust [`k256`](https://crates.io/crates/k256) crate.
//!
//! Input format:
//! [32 bytes for message][32 bytes for v][32 bytes for r][32 bytes for s]
//!
//! Output format:
//! [32 bytes for recovered address], or empty output if recovery fails.
use crate::{gas, utilities::right_pad, Precompile, PrecompileError};
use alloy_primitives::{keccak256, Address, Bytes, B256};
use k256::ecdsa::{Error, RecoveryId, Signature, VerifyingKey};

/// `ecrecover` precompile address.
pub const ADDRESS: Address = crate::u64_to_address(1);

/// `ecrecover` precompile with a fixed cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcRecover {
    /// Fixed cost.
    pub base: u64,
}

impl Default for EcRecover {
    fn default() -> Self {
        Self {
            base: gas::ECRECOVER_BASE,
        }
    }
}

impl Precompile for EcRecover {
    fn required_gas(&self, _input: &[u8]) -> u64 {
        self.base
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        Ok(ec_recover_run(input))
    }
}

/// `ecrecover` precompile function. Read more about input and output format in [this module docs](self).
pub fn ec_recover_run(input: &[u8]) -> Bytes {
    let input = right_pad::<128>(input);

    // `v` must be a 32-byte big-endian integer equal to 27 or 28.
    if !(input[32..63].iter().all(|&b| b == 0) && matches!(input[63], 27 | 28)) {
        return Bytes::new();
    }

    let msg = B256::from_slice(&input[0..32]);
    let recid = input[63] - 27;
    let sig = &input[64..128];

    ecrecover(sig, recid, &msg)
        .map(|address| Bytes::copy_from_slice(address.as_slice()))
        .unwrap_or_default()
}

/// Recover the address from a signature and a message.
///
/// Returns the keccak hash of the uncompressed public key with the first 12 bytes zeroed.
pub fn ecrecover(sig: &[u8], mut recid: u8, msg: &B256) -> Result<B256, Error> {
    // parse signature, rejects r or s outside of [1, n)
    let mut sig = Signature::from_slice(sig)?;

    // normalize signature and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or_else(Error::new)?;

    // recover key
    let recovered_key = VerifyingKey::recover_from_prehash(&msg[..], &sig, recid)?;
    // hash it
    let mut hash = keccak256(
        &recovered_key
            .to_encoded_point(/* compress = */ false)
            .as_bytes()[1..],
    );

    // truncate to 20 bytes
    hash[..12].fill(0);
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, U256};
    use k256::ecdsa::SigningKey;

    fn signed_input(key: &SigningKey, msg: &[u8]) -> ([u8; 128], B256) {
        let hash = keccak256(msg);
        let (sig, recid) = key.sign_prehash_recoverable(&hash[..]).unwrap();

        let mut input = [0u8; 128];
        input[0..32].copy_from_slice(&hash[..]);
        input[32..64].copy_from_slice(&U256::from(recid.to_byte() + 27).to_be_bytes::<32>());
        input[64..128].copy_from_slice(&sig.to_bytes());

        let pubkey = key.verifying_key().to_encoded_point(false);
        let mut expected = keccak256(&pubkey.as_bytes()[1..]);
        expected[..12].fill(0);
        (input, expected)
    }

    #[test]
    fn recovers_signer() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let (input, expected) = signed_input(&key, b"1337133713371337");

        let out = EcRecover::default().run(&input).unwrap();
        assert_eq!(out[..], expected[..]);
    }

    #[test]
    fn known_vector() {
        let input = hex!("18c547e4f7b0f325ad1e56f57e26c745b09a3e503d86e00e5255ff7f715d3d1c000000000000000000000000000000000000000000000000000000000000001c73b1693892219d736caba55bdb67216e485557ea6b6af75f37096c9aa6a5a75feeb940b1d03b21e36b0e47e79769f095fe2ab855bd91e3a38756b7d75a9c4549");
        let expected = hex!("000000000000000000000000a94f5374fce5edbc8e2a8697c15331677e6ebf0b");

        let out = EcRecover::default().run(&input).unwrap();
        assert_eq!(out[..], expected[..]);
    }

    #[test]
    fn bad_v_yields_empty_output() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let (mut input, _) = signed_input(&key, b"payload");

        input[63] = 29;
        assert!(ec_recover_run(&input).is_empty());

        input[63] = 27;
        input[40] = 1;
        assert!(ec_recover_run(&input).is_empty());
    }

    #[test]
    fn zero_signature_yields_empty_output() {
        let mut input = [0u8; 128];
        input[63] = 27;
        assert!(ec_recover_run(&input).is_empty());
        assert!(ec_recover_run(&[]).is_empty());
    }

    #[test]
    fn fixed_cost() {
        assert_eq!(EcRecover::default().required_gas(&[0; 500]), 3_000);
    }
}
