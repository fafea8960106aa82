use super::{FQ2_LEN, FQ_LEN, G1_LEN, SCALAR_LEN};
use crate::PrecompileError;
use bn::{AffineG1, AffineG2, Fq, Fq2, Fr, Group, Gt, G1, G2};

/// Reads a single `Fq` field element from the input slice.
///
/// Values not below the field modulus are rejected.
///
/// # Panics
///
/// Panics if the input is not at least 32 bytes long.
#[inline]
fn read_fq(input: &[u8]) -> Result<Fq, PrecompileError> {
    Fq::from_slice(&input[..FQ_LEN]).map_err(|_| PrecompileError::Bn128FieldPointNotAMember)
}

/// Reads a Fq2 (quadratic extension field element) from the input slice.
///
/// The imaginary part comes first on the wire, so for an element `x + y·i` the
/// bytes of `y` are parsed before the bytes of `x`.
///
/// # Panics
///
/// Panics if the input is not at least 64 bytes long.
#[inline]
fn read_fq2(input: &[u8]) -> Result<Fq2, PrecompileError> {
    let y = read_fq(&input[..FQ_LEN])?;
    let x = read_fq(&input[FQ_LEN..2 * FQ_LEN])?;
    Ok(Fq2::new(x, y))
}

/// Creates a new `G1` point from the given `x` and `y` coordinates.
///
/// `(0, 0)` is the point at infinity, which `AffineG1` cannot represent.
#[inline]
fn new_g1_point(px: Fq, py: Fq) -> Result<G1, PrecompileError> {
    if px == Fq::zero() && py == Fq::zero() {
        Ok(G1::zero())
    } else {
        AffineG1::new(px, py)
            .map(Into::into)
            .map_err(|_| PrecompileError::Bn128AffineGFailedToCreate)
    }
}

/// Creates a new `G2` point from the given Fq2 coordinates.
///
/// `(0, 0)` is the point at infinity. Points off the twist or outside the
/// prime-order subgroup are rejected by `AffineG2::new`.
#[inline]
fn new_g2_point(x: Fq2, y: Fq2) -> Result<G2, PrecompileError> {
    let point = if x.is_zero() && y.is_zero() {
        G2::zero()
    } else {
        G2::from(AffineG2::new(x, y).map_err(|_| PrecompileError::Bn128AffineGFailedToCreate)?)
    };

    Ok(point)
}

/// Reads a G1 point from the input slice.
///
/// # Panics
///
/// Panics if the input is not at least 64 bytes long.
#[inline]
pub(crate) fn read_g1_point(input: &[u8]) -> Result<G1, PrecompileError> {
    let px = read_fq(&input[0..FQ_LEN])?;
    let py = read_fq(&input[FQ_LEN..2 * FQ_LEN])?;
    new_g1_point(px, py)
}

/// Encodes a G1 point into its 64-byte affine form.
///
/// The point at infinity encodes as all zeroes.
#[inline]
pub(crate) fn encode_g1_point(point: G1) -> Result<[u8; G1_LEN], PrecompileError> {
    let mut output = [0u8; G1_LEN];

    if let Some(point_affine) = AffineG1::from_jacobian(point) {
        point_affine
            .x()
            .to_big_endian(&mut output[..FQ_LEN])
            .map_err(|_| PrecompileError::other("bn128 coordinate encoding failed"))?;
        point_affine
            .y()
            .to_big_endian(&mut output[FQ_LEN..])
            .map_err(|_| PrecompileError::other("bn128 coordinate encoding failed"))?;
    }

    Ok(output)
}

/// Reads a G2 point from the input slice.
///
/// # Panics
///
/// Panics if the input is not at least 128 bytes long.
#[inline]
pub(crate) fn read_g2_point(input: &[u8]) -> Result<G2, PrecompileError> {
    let ba = read_fq2(&input[0..FQ2_LEN])?;
    let bb = read_fq2(&input[FQ2_LEN..2 * FQ2_LEN])?;
    new_g2_point(ba, bb)
}

/// Reads a scalar from the input slice.
///
/// Any 256-bit value is accepted and reduced modulo the group order.
#[inline]
pub(crate) fn read_scalar(input: &[u8]) -> Result<Fr, PrecompileError> {
    // `Fr::from_slice` can only fail when the length is not `SCALAR_LEN`.
    Fr::from_slice(input).map_err(|_| {
        PrecompileError::other(format!(
            "unexpected scalar length. got {}, expected {SCALAR_LEN}",
            input.len()
        ))
    })
}

/// Performs point addition on two G1 points.
#[inline]
pub(crate) fn g1_point_add(p1: G1, p2: G1) -> G1 {
    p1 + p2
}

/// Performs a G1 scalar multiplication.
#[inline]
pub(crate) fn g1_point_mul(p: G1, fr: Fr) -> G1 {
    p * fr
}

/// Returns true if the product of the pairings of all pairs is the identity of `Gt`.
///
/// An empty list is trivially the identity.
#[inline]
pub(crate) fn pairing_check(pairs: &[(G1, G2)]) -> bool {
    if pairs.is_empty() {
        return true;
    }
    bn::pairing_batch(pairs) == Gt::one()
}
