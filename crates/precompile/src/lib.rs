//! # hvm-precompile
//!
//! Native contracts of the HVM execution engine, reachable at reserved addresses.
//!
//! Every contract is priced before it runs: the dispatcher asks for
//! [`Precompile::required_gas`], charges it through a [`GasMeter`] and only then calls
//! [`Precompile::run`]. Besides the standard Ethereum primitives the registry carries
//! `zscVerify`, an inner-product proof verifier over BN254.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bn128;
pub mod gas;
pub mod hash;
pub mod identity;
pub mod interface;
pub mod modexp;
pub mod secp256k1;
pub mod utilities;
pub mod zsc;

pub use gas::{Gas, GasMeter, GasSchedule};
pub use interface::*;

use alloy_primitives::{
    map::{HashMap, HashSet},
    Address,
};
use once_cell::race::OnceBox;
use std::{boxed::Box, sync::Arc, vec::Vec};
use tracing::{debug, trace};

/// Linear cost: `base` plus `word` for every started 32-byte word of input.
pub fn calc_linear_cost(len: usize, base: u64, word: u64) -> u64 {
    (len as u64)
        .div_ceil(32)
        .saturating_mul(word)
        .saturating_add(base)
}

/// Charges the contract's price to `meter`, then runs it.
///
/// The contract is not invoked when the meter cannot cover the price, and the meter is not
/// charged again on failure.
pub fn run_precompile(
    precompile: &dyn Precompile,
    input: &[u8],
    meter: &mut impl GasMeter,
) -> PrecompileResult {
    let gas_used = precompile.required_gas(input);
    if !meter.record_cost(gas_used) {
        debug!(gas_used, "precompile out of gas");
        return Err(PrecompileError::OutOfGas);
    }

    let bytes = precompile.run(input)?;
    Ok(PrecompileOutput::new(gas_used, bytes))
}

/// Address to contract registry.
#[derive(Clone, Default, Debug)]
pub struct Precompiles {
    /// Precompiles
    inner: HashMap<Address, Arc<dyn Precompile>>,
    /// Addresses of precompile
    addresses: HashSet<Address>,
}

impl Precompiles {
    /// Builds the full HPB contract set priced by `schedule`.
    pub fn new(schedule: &GasSchedule) -> Self {
        let mut precompiles = Self::default();
        precompiles.extend([
            PrecompileWithAddress::new(
                secp256k1::ADDRESS,
                secp256k1::EcRecover {
                    base: schedule.ecrecover,
                },
            ),
            PrecompileWithAddress::new(
                hash::SHA256_ADDRESS,
                hash::Sha256 {
                    base: schedule.sha256_base,
                    per_word: schedule.sha256_per_word,
                },
            ),
            PrecompileWithAddress::new(
                hash::RIPEMD160_ADDRESS,
                hash::Ripemd160 {
                    base: schedule.ripemd160_base,
                    per_word: schedule.ripemd160_per_word,
                },
            ),
            PrecompileWithAddress::new(
                identity::ADDRESS,
                identity::Identity {
                    base: schedule.identity_base,
                    per_word: schedule.identity_per_word,
                },
            ),
            // EIP-198: Big integer modular exponentiation.
            PrecompileWithAddress::new(
                modexp::ADDRESS,
                modexp::ModExp {
                    quad_coeff_div: schedule.modexp_quad_coeff_div,
                },
            ),
            // EIP-196: Precompiled contracts for addition and scalar multiplication on the elliptic curve alt_bn128.
            PrecompileWithAddress::new(
                bn128::ADD_ADDRESS,
                bn128::Bn128Add {
                    gas: schedule.bn128_add,
                },
            ),
            PrecompileWithAddress::new(
                bn128::MUL_ADDRESS,
                bn128::Bn128Mul {
                    gas: schedule.bn128_mul,
                },
            ),
            // EIP-197: Precompiled contracts for optimal ate pairing check on the elliptic curve alt_bn128.
            PrecompileWithAddress::new(
                bn128::PAIR_ADDRESS,
                bn128::Bn128Pair {
                    base: schedule.bn128_pair_base,
                    per_point: schedule.bn128_pair_per_point,
                },
            ),
            PrecompileWithAddress::new(
                zsc::ADDRESS,
                zsc::ZscVerify {
                    gas: schedule.zsc_verify,
                },
            ),
        ]);
        precompiles
    }

    /// Returns the precompiles priced by the default [`GasSchedule`].
    pub fn hpb() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| Box::new(Self::new(&GasSchedule::default())))
    }

    /// Runs the contract at `address`, charging `meter` first.
    ///
    /// Returns `None` if no contract is registered at `address`.
    pub fn run(
        &self,
        address: &Address,
        input: &[u8],
        meter: &mut impl GasMeter,
    ) -> Option<PrecompileResult> {
        let precompile = self.get(address)?;
        trace!(%address, len = input.len(), "running precompile");
        Some(run_precompile(precompile.as_ref(), input, meter))
    }

    /// Returns inner HashMap of precompiles.
    pub fn inner(&self) -> &HashMap<Address, Arc<dyn Precompile>> {
        &self.inner
    }

    /// Returns an iterator over the precompiles addresses.
    #[inline]
    pub fn addresses(&self) -> impl ExactSizeIterator<Item = &Address> {
        self.inner.keys()
    }

    /// Is the given address a precompile.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.inner.contains_key(address)
    }

    /// Returns the precompile for the given address.
    #[inline]
    pub fn get(&self, address: &Address) -> Option<&Arc<dyn Precompile>> {
        self.inner.get(address)
    }

    /// Is the precompiles list empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of precompiles.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns the precompiles addresses as a set.
    pub fn addresses_set(&self) -> &HashSet<Address> {
        &self.addresses
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// Other precompiles will overwrite existing precompiles.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = PrecompileWithAddress>) {
        let items: Vec<PrecompileWithAddress> = other.into_iter().collect::<Vec<_>>();
        self.addresses.extend(items.iter().map(|p| *p.address()));
        self.inner.extend(items.into_iter().map(|p| (p.0, p.1)));
    }
}

/// A contract paired with the address it is reachable at.
#[derive(Clone, Debug)]
pub struct PrecompileWithAddress(pub Address, pub Arc<dyn Precompile>);

impl From<(Address, Arc<dyn Precompile>)> for PrecompileWithAddress {
    fn from(value: (Address, Arc<dyn Precompile>)) -> Self {
        PrecompileWithAddress(value.0, value.1)
    }
}

impl From<PrecompileWithAddress> for (Address, Arc<dyn Precompile>) {
    fn from(value: PrecompileWithAddress) -> Self {
        (value.0, value.1)
    }
}

impl PrecompileWithAddress {
    /// Wraps `precompile` for registration at `address`.
    pub fn new(address: Address, precompile: impl Precompile + 'static) -> Self {
        Self(address, Arc::new(precompile))
    }

    /// Returns reference of address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.0
    }

    /// Returns reference of precompile.
    #[inline]
    pub fn precompile(&self) -> &Arc<dyn Precompile> {
        &self.1
    }
}

/// Const function for making an address from a number.
///
/// The number fills the low 8 bytes of the 20-byte address.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
