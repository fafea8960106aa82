//! Byte padding helpers shared by the precompiles.
use alloy_primitives::Bytes;
use std::{borrow::Cow, vec};

/// Reads `len` bytes of `data` starting at `offset`, filling whatever lies past the end of
/// `data` with zeroes.
///
/// Borrows when `data` covers the whole range.
#[inline]
pub fn right_pad_with_offset_vec(data: &[u8], offset: usize, len: usize) -> Cow<'_, [u8]> {
    let tail = data.get(offset..).unwrap_or_default();
    match tail.get(..len) {
        Some(window) => Cow::Borrowed(window),
        None => {
            let mut padded = vec![0; len];
            padded[..tail.len()].copy_from_slice(tail);
            Cow::Owned(padded)
        }
    }
}

/// Fixed-size input with missing trailing bytes read as zero.
#[inline]
pub fn right_pad<const LEN: usize>(data: &[u8]) -> Cow<'_, [u8; LEN]> {
    match data.first_chunk::<LEN>() {
        Some(chunk) => Cow::Borrowed(chunk),
        None => {
            let mut padded = [0; LEN];
            padded[..data.len()].copy_from_slice(data);
            Cow::Owned(padded)
        }
    }
}

/// Big-endian word of `LEN` bytes: shorter data is placed at the end.
#[inline]
pub fn left_pad<const LEN: usize>(data: &[u8]) -> Cow<'_, [u8; LEN]> {
    match data.first_chunk::<LEN>() {
        Some(chunk) => Cow::Borrowed(chunk),
        None => {
            let mut padded = [0; LEN];
            padded[LEN - data.len()..].copy_from_slice(data);
            Cow::Owned(padded)
        }
    }
}

/// Same as [`left_pad`] with a length known only at runtime.
#[inline]
pub fn left_pad_vec(data: &[u8], len: usize) -> Cow<'_, [u8]> {
    match data.get(..len) {
        Some(head) => Cow::Borrowed(head),
        None => {
            let mut padded = vec![0; len];
            padded[len - data.len()..].copy_from_slice(data);
            Cow::Owned(padded)
        }
    }
}

/// 32-byte big-endian encoding of a boolean, served from static storage.
#[inline]
pub const fn bool_to_bytes32(value: bool) -> Bytes {
    const TRUE: [u8; 32] = {
        let mut word = [0u8; 32];
        word[31] = 1;
        word
    };
    const FALSE: [u8; 32] = [0u8; 32];
    Bytes::from_static(if value { &TRUE } else { &FALSE })
}
