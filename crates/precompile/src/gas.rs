//! Gas schedule and gas metering.
//!
//! [`GasSchedule`] holds every constant the precompiles are priced with. It is read once when
//! [`Precompiles`](crate::Precompiles) is built and never changes afterwards.
//!
//! [`GasMeter`] is the only view the precompiles get of the caller's gas accounting.

/// `ecrecover` fixed cost.
pub const ECRECOVER_BASE: u64 = 3_000;
/// `sha256` base cost.
pub const SHA256_BASE: u64 = 60;
/// `sha256` cost per 32-byte word.
pub const SHA256_PER_WORD: u64 = 12;
/// `ripemd160` base cost.
pub const RIPEMD160_BASE: u64 = 600;
/// `ripemd160` cost per 32-byte word.
pub const RIPEMD160_PER_WORD: u64 = 120;
/// Identity base cost.
pub const IDENTITY_BASE: u64 = 15;
/// Identity cost per 32-byte word.
pub const IDENTITY_PER_WORD: u64 = 3;
/// Divisor of the modexp multiplication complexity.
pub const MODEXP_QUAD_COEFF_DIV: u64 = 20;
/// `bn256Add` fixed cost.
pub const BN128_ADD: u64 = 500;
/// `bn256ScalarMul` fixed cost.
pub const BN128_MUL: u64 = 40_000;
/// `bn256Pairing` base cost.
pub const BN128_PAIR_BASE: u64 = 100_000;
/// `bn256Pairing` cost per (G1, G2) pair.
pub const BN128_PAIR_PER_POINT: u64 = 80_000;
/// `zscVerify` fixed cost.
pub const ZSC_VERIFY: u64 = 3_000_000;

/// Gas constants of every precompile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GasSchedule {
    /// `ecrecover` fixed cost.
    pub ecrecover: u64,
    /// `sha256` base cost.
    pub sha256_base: u64,
    /// `sha256` cost per word.
    pub sha256_per_word: u64,
    /// `ripemd160` base cost.
    pub ripemd160_base: u64,
    /// `ripemd160` cost per word.
    pub ripemd160_per_word: u64,
    /// Identity base cost.
    pub identity_base: u64,
    /// Identity cost per word.
    pub identity_per_word: u64,
    /// Modexp quadratic coefficient divisor.
    pub modexp_quad_coeff_div: u64,
    /// `bn256Add` fixed cost.
    pub bn128_add: u64,
    /// `bn256ScalarMul` fixed cost.
    pub bn128_mul: u64,
    /// `bn256Pairing` base cost.
    pub bn128_pair_base: u64,
    /// `bn256Pairing` cost per pair.
    pub bn128_pair_per_point: u64,
    /// `zscVerify` fixed cost.
    pub zsc_verify: u64,
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            ecrecover: ECRECOVER_BASE,
            sha256_base: SHA256_BASE,
            sha256_per_word: SHA256_PER_WORD,
            ripemd160_base: RIPEMD160_BASE,
            ripemd160_per_word: RIPEMD160_PER_WORD,
            identity_base: IDENTITY_BASE,
            identity_per_word: IDENTITY_PER_WORD,
            modexp_quad_coeff_div: MODEXP_QUAD_COEFF_DIV,
            bn128_add: BN128_ADD,
            bn128_mul: BN128_MUL,
            bn128_pair_base: BN128_PAIR_BASE,
            bn128_pair_per_point: BN128_PAIR_PER_POINT,
            zsc_verify: ZSC_VERIFY,
        }
    }
}

/// Caller-side gas accounting as seen by the dispatcher.
pub trait GasMeter {
    /// Deducts `cost` and returns `true`, or leaves the meter untouched and returns `false` if
    /// not enough gas remains.
    fn record_cost(&mut self, cost: u64) -> bool;
}

/// Represents the state of gas during execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gas {
    /// The initial gas limit. This is constant throughout execution.
    limit: u64,
    /// The remaining gas.
    remaining: u64,
}

impl Gas {
    /// Creates a new `Gas` struct with the given gas limit.
    #[inline]
    pub const fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Returns the gas limit.
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the amount of gas remaining.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns the total amount of gas spent.
    #[inline]
    pub const fn spent(&self) -> u64 {
        self.limit - self.remaining
    }
}

impl GasMeter for Gas {
    #[inline]
    fn record_cost(&mut self, cost: u64) -> bool {
        if let Some(new_remaining) = self.remaining.checked_sub(cost) {
            self.remaining = new_remaining;
            return true;
        }
        false
    }
}

impl<T: GasMeter + ?Sized> GasMeter for &mut T {
    #[inline]
    fn record_cost(&mut self, cost: u64) -> bool {
        (**self).record_cost(cost)
    }
}
