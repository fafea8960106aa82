//! `zscVerify` precompile: inner-product argument verifier over BN254 G1.
//!
//! The proof commits to two vectors `a`, `b` of length `N = 2^k` against the bases `G`
//! (fixed, see [`generators`]) and `H` (supplied by the caller), plus a blinding base `U`:
//!
//! `P = <a, G> + <b, H> + <a, b>·U`
//!
//! Each of the `k` rounds contributes a pair of commitments `L[i]`, `R[i]` and a challenge
//! derived from them with Keccak-256. The final scalars `a`, `b` are checked against the
//! folded bases in a single multi-scalar multiplication.
//!
//! Input layout (byte offsets):
//!
//! | range          | content              |
//! |----------------|----------------------|
//! | `[0, 64)`      | reserved header      |
//! | `[64, 96)`     | salt                 |
//! | `[96, 128)`    | reserved             |
//! | `[128, 2176)`  | `H[0..32)`           |
//! | `[2176, 2240)` | `U`                  |
//! | `[2240, 2304)` | `P`                  |
//! | `[2304, 2336)` | reserved             |
//! | `[2336, 2656)` | `L[0..5)`            |
//! | `[2656, 2976)` | `R[0..5)`            |
//! | `[2976, 3008)` | `a`                  |
//! | `[3008, 3040)` | `b`                  |
//!
//! Output is a boolean word. Inputs shorter than [`ZSC_MIN_INPUT_LEN`] are not decoded and
//! return their first byte left-padded to 32 bytes.
use crate::{
    bn128::{
        substrate::{encode_g1_point, g1_point_add, g1_point_mul, read_g1_point, read_scalar},
        GROUP_ORDER, G1_LEN, SCALAR_LEN,
    },
    gas,
    utilities::{bool_to_bytes32, left_pad},
    Precompile, PrecompileError,
};
use alloy_primitives::{keccak256, Address, Bytes, U256};
use bn::{Fr, Group, G1};
use std::vec::Vec;
use tracing::{debug, trace};

pub mod generators;

pub use generators::{GENERATORS, GENERATORS_LEN};

/// `zscVerify` precompile address.
pub const ADDRESS: Address = crate::u64_to_address(9);

/// Number of folding rounds carried by a proof.
pub const ZSC_ROUNDS: usize = 5;

/// Length of the committed vectors, `2^ZSC_ROUNDS`.
pub const ZSC_BASIS_LEN: usize = 1 << ZSC_ROUNDS;

const SALT_OFFSET: usize = 64;
const H_OFFSET: usize = 128;
const U_OFFSET: usize = H_OFFSET + ZSC_BASIS_LEN * G1_LEN;
const P_OFFSET: usize = U_OFFSET + G1_LEN;
const L_OFFSET: usize = P_OFFSET + G1_LEN + 32;
const R_OFFSET: usize = L_OFFSET + ZSC_ROUNDS * G1_LEN;
const A_OFFSET: usize = R_OFFSET + ZSC_ROUNDS * G1_LEN;
const B_OFFSET: usize = A_OFFSET + SCALAR_LEN;

/// Smallest input that is decoded as a proof.
pub const ZSC_MIN_INPUT_LEN: usize = B_OFFSET + SCALAR_LEN;

/// Inner-product proof verifier at a fixed cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZscVerify {
    /// Fixed cost.
    pub gas: u64,
}

impl Default for ZscVerify {
    fn default() -> Self {
        Self {
            gas: gas::ZSC_VERIFY,
        }
    }
}

impl Precompile for ZscVerify {
    fn required_gas(&self, _input: &[u8]) -> u64 {
        self.gas
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        run_verify(input)
    }
}

/// A round commitment together with the bytes it was decoded from.
///
/// The challenge hash is taken over the wire bytes.
#[derive(Clone, Copy, Debug)]
pub struct Commitment {
    /// Decoded point.
    pub point: G1,
    /// Wire encoding.
    pub encoded: [u8; G1_LEN],
}

impl Commitment {
    /// Decodes and validates a commitment.
    ///
    /// # Panics
    ///
    /// Panics if the input is not at least 64 bytes long.
    pub fn read(input: &[u8]) -> Result<Self, PrecompileError> {
        let mut encoded = [0u8; G1_LEN];
        encoded.copy_from_slice(&input[..G1_LEN]);
        Ok(Self {
            point: read_g1_point(&encoded)?,
            encoded,
        })
    }
}

/// Decoded `zscVerify` input.
#[derive(Clone, Debug)]
pub struct ZscTranscript {
    /// Initial challenge seed.
    pub salt: U256,
    /// Caller supplied `H` basis.
    pub h: Vec<G1>,
    /// Blinding base.
    pub u: G1,
    /// Commitment being opened.
    pub p: G1,
    /// Left round commitments.
    pub ls: Vec<Commitment>,
    /// Right round commitments.
    pub rs: Vec<Commitment>,
    /// Final `a` scalar.
    pub a: Fr,
    /// Final `b` scalar.
    pub b: Fr,
}

impl ZscTranscript {
    /// Decodes the fixed layout. Every point is validated.
    pub fn decode(input: &[u8]) -> Result<Self, PrecompileError> {
        if input.len() < ZSC_MIN_INPUT_LEN {
            return Err(PrecompileError::other("zsc input too short"));
        }

        let salt = U256::from_be_slice(&input[SALT_OFFSET..SALT_OFFSET + 32]);
        let h = input[H_OFFSET..U_OFFSET]
            .chunks_exact(G1_LEN)
            .map(read_g1_point)
            .collect::<Result<Vec<_>, _>>()?;
        let u = read_g1_point(&input[U_OFFSET..P_OFFSET])?;
        let p = read_g1_point(&input[P_OFFSET..P_OFFSET + G1_LEN])?;
        let ls = input[L_OFFSET..R_OFFSET]
            .chunks_exact(G1_LEN)
            .map(Commitment::read)
            .collect::<Result<Vec<_>, _>>()?;
        let rs = input[R_OFFSET..A_OFFSET]
            .chunks_exact(G1_LEN)
            .map(Commitment::read)
            .collect::<Result<Vec<_>, _>>()?;
        let a = read_scalar(&input[A_OFFSET..B_OFFSET])?;
        let b = read_scalar(&input[B_OFFSET..ZSC_MIN_INPUT_LEN])?;

        Ok(Self {
            salt,
            h,
            u,
            p,
            ls,
            rs,
            a,
            b,
        })
    }
}

/// Runs the verifier over raw precompile input.
pub fn run_verify(input: &[u8]) -> Result<Bytes, PrecompileError> {
    if input.len() < ZSC_MIN_INPUT_LEN {
        trace!(len = input.len(), "zsc input below proof size, echoing first byte");
        let word = left_pad::<32>(input.get(..1).unwrap_or_default());
        return Ok(Bytes::copy_from_slice(&word[..]));
    }

    let transcript = ZscTranscript::decode(input)?;
    let g = decode_generators(ZSC_BASIS_LEN)?;
    let accepted = verify(&g, &transcript)?;
    debug!(accepted, "zsc proof verified");

    Ok(bool_to_bytes32(accepted))
}

/// Decodes the first `len` entries of the generator table.
pub fn decode_generators(len: usize) -> Result<Vec<G1>, PrecompileError> {
    GENERATORS
        .get(..len)
        .ok_or_else(|| PrecompileError::other("zsc basis larger than generator table"))?
        .iter()
        .map(|g| read_g1_point(g))
        .collect()
}

/// Verifies `transcript` against the `g` basis.
///
/// `g` and `transcript.h` must both hold `2^k` points where `k` is the number of rounds.
pub fn verify(g: &[G1], transcript: &ZscTranscript) -> Result<bool, PrecompileError> {
    let rounds = transcript.ls.len();
    if transcript.rs.len() != rounds {
        return Err(PrecompileError::other("zsc round commitments mismatch"));
    }
    let n = 1usize
        .checked_shl(rounds as u32)
        .ok_or_else(|| PrecompileError::other("zsc too many rounds"))?;
    if g.len() != n || transcript.h.len() != n {
        return Err(PrecompileError::other("zsc basis length mismatch"));
    }

    // Fold the round commitments into P.
    let mut o = transcript.salt;
    let mut p = transcript.p;
    let mut challenges = Vec::with_capacity(rounds);
    for (l, r) in transcript.ls.iter().zip(&transcript.rs) {
        o = challenge(&o, &l.encoded, &r.encoded);
        let x = scalar_from_u256(o)?;
        let x_inv = invert(x);
        let folded = g1_point_add(
            g1_point_mul(l.point, x * x),
            g1_point_mul(r.point, x_inv * x_inv),
        );
        p = g1_point_add(p, folded);
        challenges.push(x);
    }

    let s = exponents(&challenges);

    let mut g_comb = G1::zero();
    let mut h_comb = G1::zero();
    for i in 0..n {
        g_comb = g1_point_add(g_comb, g1_point_mul(g[i], s[i]));
        h_comb = g1_point_add(h_comb, g1_point_mul(transcript.h[i], s[n - 1 - i]));
    }

    let (a, b) = (transcript.a, transcript.b);
    let expected = g1_point_add(
        g1_point_add(g1_point_mul(g_comb, a), g1_point_mul(h_comb, b)),
        g1_point_mul(transcript.u, a * b),
    );

    Ok(encode_g1_point(expected)? == encode_g1_point(p)?)
}

/// Round challenge: `keccak256(o || L || R) mod GROUP_ORDER`.
pub fn challenge(o: &U256, l: &[u8; G1_LEN], r: &[u8; G1_LEN]) -> U256 {
    let mut buf = [0u8; 32 + 2 * G1_LEN];
    buf[..32].copy_from_slice(&o.to_be_bytes::<32>());
    buf[32..32 + G1_LEN].copy_from_slice(l);
    buf[32 + G1_LEN..].copy_from_slice(r);
    U256::from_be_bytes(keccak256(buf).0).reduce_mod(GROUP_ORDER)
}

/// Exponents applied to the bases after folding, one per basis index.
///
/// `s[0]` is the inverse of the product of all challenges. Each further index is reached
/// from a smaller one by setting bit `j`, which multiplies by the square of challenge
/// `k - 1 - j`.
fn exponents(challenges: &[Fr]) -> Vec<Fr> {
    let k = challenges.len();
    let n = 1usize << k;

    let mut s = std::vec![Fr::zero(); n];
    let mut set = std::vec![false; n];
    s[0] = invert(challenges.iter().fold(Fr::one(), |acc, x| acc * *x));

    for i in 0..n {
        let mut j = 0;
        while i + (1 << j) < n {
            let i1 = i + (1 << j);
            if !set[i1] {
                let x = challenges[k - 1 - j];
                s[i1] = s[i] * x * x;
                set[i1] = true;
            }
            j += 1;
        }
    }
    s
}

/// `x^(r-2)`, so zero maps to zero.
fn invert(x: Fr) -> Fr {
    x.inverse().unwrap_or_else(Fr::zero)
}

fn scalar_from_u256(value: U256) -> Result<Fr, PrecompileError> {
    read_scalar(&value.to_be_bytes::<SCALAR_LEN>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn128::FIELD_ORDER;

    fn fr(value: U256) -> Fr {
        scalar_from_u256(value).unwrap()
    }

    fn msm(scalars: &[U256], points: &[G1]) -> G1 {
        scalars
            .iter()
            .zip(points)
            .fold(G1::zero(), |acc, (s, p)| acc + *p * fr(*s))
    }

    fn inner(a: &[U256], b: &[U256]) -> U256 {
        a.iter().zip(b).fold(U256::ZERO, |acc, (x, y)| {
            acc.add_mod(x.mul_mod(*y, GROUP_ORDER), GROUP_ORDER)
        })
    }

    fn inv(x: U256) -> U256 {
        x.pow_mod(GROUP_ORDER - U256::from(2), GROUP_ORDER)
    }

    fn lin(x: U256, p: U256, y: U256, q: U256) -> U256 {
        x.mul_mod(p, GROUP_ORDER)
            .add_mod(y.mul_mod(q, GROUP_ORDER), GROUP_ORDER)
    }

    struct Proof {
        ls: Vec<[u8; 64]>,
        rs: Vec<[u8; 64]>,
        a: U256,
        b: U256,
    }

    /// Halving prover matching the verifier's folding order.
    fn prove(g: &[G1], h: &[G1], u: G1, a: &[U256], b: &[U256], salt: U256) -> Proof {
        let (mut g, mut h, mut a, mut b) = (g.to_vec(), h.to_vec(), a.to_vec(), b.to_vec());
        let (mut ls, mut rs) = (Vec::new(), Vec::new());
        let mut o = salt;

        while a.len() > 1 {
            let n = a.len() / 2;
            let c_l = inner(&a[..n], &b[n..]);
            let c_r = inner(&a[n..], &b[..n]);
            let l = msm(&a[..n], &g[n..]) + msm(&b[n..], &h[..n]) + u * fr(c_l);
            let r = msm(&a[n..], &g[..n]) + msm(&b[..n], &h[n..]) + u * fr(c_r);
            let l = encode_g1_point(l).unwrap();
            let r = encode_g1_point(r).unwrap();

            o = challenge(&o, &l, &r);
            let (x, xi) = (o, inv(o));
            let (fx, fxi) = (fr(x), fr(xi));

            g = (0..n).map(|i| g[i] * fxi + g[n + i] * fx).collect();
            h = (0..n).map(|i| h[i] * fx + h[n + i] * fxi).collect();
            a = (0..n).map(|i| lin(a[i], x, a[n + i], xi)).collect();
            b = (0..n).map(|i| lin(b[i], xi, b[n + i], x)).collect();
            ls.push(l);
            rs.push(r);
        }

        Proof {
            ls,
            rs,
            a: a[0],
            b: b[0],
        }
    }

    fn honest_input() -> Vec<u8> {
        let g = decode_generators(ZSC_BASIS_LEN).unwrap();
        let h: Vec<G1> = (0..ZSC_BASIS_LEN)
            .map(|i| G1::one() * fr(U256::from(1000 + i)))
            .collect();
        let u = G1::one() * fr(U256::from(77));
        let a: Vec<U256> = (0..ZSC_BASIS_LEN).map(|i| U256::from(i + 1)).collect();
        let b: Vec<U256> = (0..ZSC_BASIS_LEN).map(|i| U256::from(2 * i + 3)).collect();
        let salt = U256::from(12345);

        let p = msm(&a, &g) + msm(&b, &h) + u * fr(inner(&a, &b));
        let proof = prove(&g, &h, u, &a, &b, salt);
        assert_eq!(proof.ls.len(), ZSC_ROUNDS);

        let mut input = std::vec![0u8; ZSC_MIN_INPUT_LEN];
        input[SALT_OFFSET..SALT_OFFSET + 32].copy_from_slice(&salt.to_be_bytes::<32>());
        for (i, point) in h.iter().enumerate() {
            let at = H_OFFSET + i * G1_LEN;
            input[at..at + G1_LEN].copy_from_slice(&encode_g1_point(*point).unwrap());
        }
        input[U_OFFSET..P_OFFSET].copy_from_slice(&encode_g1_point(u).unwrap());
        input[P_OFFSET..P_OFFSET + G1_LEN].copy_from_slice(&encode_g1_point(p).unwrap());
        for i in 0..ZSC_ROUNDS {
            let at = L_OFFSET + i * G1_LEN;
            input[at..at + G1_LEN].copy_from_slice(&proof.ls[i]);
            let at = R_OFFSET + i * G1_LEN;
            input[at..at + G1_LEN].copy_from_slice(&proof.rs[i]);
        }
        input[A_OFFSET..B_OFFSET].copy_from_slice(&proof.a.to_be_bytes::<32>());
        input[B_OFFSET..ZSC_MIN_INPUT_LEN].copy_from_slice(&proof.b.to_be_bytes::<32>());
        input
    }

    #[test]
    fn layout() {
        assert_eq!(U_OFFSET, 2176);
        assert_eq!(P_OFFSET, 2240);
        assert_eq!(L_OFFSET, 2336);
        assert_eq!(R_OFFSET, 2656);
        assert_eq!(A_OFFSET, 2976);
        assert_eq!(ZSC_MIN_INPUT_LEN, 3040);
    }

    #[test]
    fn generator_table_is_valid() {
        let g = decode_generators(GENERATORS_LEN).unwrap();
        assert_eq!(g.len(), 64);
        for entry in GENERATORS.iter() {
            assert!(U256::from_be_slice(&entry[..32]) < FIELD_ORDER);
            assert_ne!(entry[..], [0u8; 64][..]);
        }
        assert!(decode_generators(GENERATORS_LEN + 1).is_err());
    }

    #[test]
    fn exponents_single_round() {
        let x = fr(U256::from(5));
        let s = exponents(&[x]);
        assert_eq!(s.len(), 2);
        assert!(s[0] * x == Fr::one());
        assert!(s[1] == x);
    }

    #[test]
    fn exponents_two_rounds() {
        let (x0, x1) = (fr(U256::from(3)), fr(U256::from(7)));
        let s = exponents(&[x0, x1]);
        let base = invert(x0 * x1);
        assert!(s[0] == base);
        // bit 0 follows the last round, bit 1 the first
        assert!(s[1] == base * x1 * x1);
        assert!(s[2] == base * x0 * x0);
        assert!(s[3] == base * x0 * x0 * x1 * x1);
    }

    #[test]
    fn challenge_is_reduced() {
        let c = challenge(&U256::MAX, &[0xff; 64], &[0xff; 64]);
        assert!(c < GROUP_ORDER);
        assert_ne!(c, challenge(&U256::ZERO, &[0xff; 64], &[0xff; 64]));
    }

    #[test]
    fn honest_proof_accepts() {
        let input = honest_input();
        let out = ZscVerify::default().run(&input).unwrap();
        assert_eq!(out, bool_to_bytes32(true));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut input = honest_input();
        input.extend_from_slice(&[0xab; 100]);
        assert_eq!(run_verify(&input).unwrap(), bool_to_bytes32(true));
    }

    #[test]
    fn tampered_scalar_rejects() {
        let mut input = honest_input();
        input[A_OFFSET + 31] ^= 1;
        assert_eq!(run_verify(&input).unwrap(), bool_to_bytes32(false));
    }

    #[test]
    fn tampered_salt_rejects() {
        let mut input = honest_input();
        input[SALT_OFFSET + 31] ^= 1;
        assert_eq!(run_verify(&input).unwrap(), bool_to_bytes32(false));
    }

    #[test]
    fn invalid_round_commitment_is_an_error() {
        let mut input = honest_input();
        input[L_OFFSET..L_OFFSET + G1_LEN].copy_from_slice(&[0x11; 64]);
        assert_eq!(
            run_verify(&input),
            Err(PrecompileError::Bn128AffineGFailedToCreate)
        );

        let mut input = honest_input();
        input[U_OFFSET..U_OFFSET + 32].copy_from_slice(&FIELD_ORDER.to_be_bytes::<32>());
        assert_eq!(
            run_verify(&input),
            Err(PrecompileError::Bn128FieldPointNotAMember)
        );
    }

    #[test]
    fn short_input_echoes_first_byte() {
        let out = run_verify(&[0x07; 10]).unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 0x07;
        assert_eq!(out[..], expected[..]);

        assert_eq!(run_verify(&[]).unwrap()[..], [0u8; 32][..]);
        assert_eq!(
            run_verify(&[0x01; ZSC_MIN_INPUT_LEN - 1]).unwrap(),
            bool_to_bytes32(true)
        );
    }

    #[test]
    fn decode_rejects_short_input() {
        assert!(ZscTranscript::decode(&[0u8; 100]).is_err());
    }

    #[test]
    fn fixed_cost() {
        assert_eq!(ZscVerify::default().required_gas(&[]), 3_000_000);
    }
}
