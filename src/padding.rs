//! PKCS #7 padding.
//!
//! Padding is the conventional way of fitting a message to full cipher
//! blocks; the ciphertext stealing mode in this crate exists specifically to
//! avoid it. The utility is kept as a standalone sibling with no dependency
//! on the CTS core.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::Error;

/// Compute the PKCS #7 padding length for a message of `len` bytes. Returns
/// the padding length and the total padded length.
///
/// The padding length is always in `1..=block_size`; a block-aligned message
/// gains one full block of padding.
pub fn pad_len(len: usize, block_size: usize) -> (usize, usize) {
    let pad_len = block_size - len % block_size;
    (pad_len, len + pad_len)
}

/// Append the PKCS #7 padding to the buffer: `pad_len` bytes, each holding
/// the value `pad_len`.
pub fn pad(buf: &mut Vec<u8>, block_size: usize) {
    debug_assert!(block_size > 0 && block_size < 256);
    let (pad_len, padded_len) = pad_len(buf.len(), block_size);
    buf.resize(padded_len, pad_len as u8);
}

/// Remove the PKCS #7 padding, returning a subslice of the argument.
///
/// Only the final byte is inspected; use [`unpad_check`] to verify the
/// padding bytes themselves.
///
/// # Errors
/// Returns `Error::InvalidPadding` if the buffer is empty or the encoded
/// padding length exceeds the buffer.
pub fn unpad(buf: &[u8]) -> Result<&[u8], Error> {
    let Some(&last) = buf.last() else {
        return Err(Error::InvalidPadding);
    };
    let pad_len = last as usize;
    if pad_len > buf.len() {
        return Err(Error::InvalidPadding);
    }
    Ok(&buf[..buf.len() - pad_len])
}

/// Remove the PKCS #7 padding, verifying that every padding byte holds the
/// padding length. The comparison accumulates over all padding bytes without
/// data-dependent branching.
///
/// # Errors
/// Returns `Error::InvalidPadding` if the buffer is empty, the encoded
/// padding length exceeds the buffer, or any padding byte is wrong.
pub fn unpad_check(buf: &[u8]) -> Result<&[u8], Error> {
    let Some(&last) = buf.last() else {
        return Err(Error::InvalidPadding);
    };
    let pad_len = last as usize;
    if pad_len > buf.len() {
        return Err(Error::InvalidPadding);
    }
    let limit = buf.len() - pad_len;

    let mut check = 0u8;
    for &b in &buf[limit..] {
        check |= b ^ last;
    }
    if check != 0 {
        return Err(Error::InvalidPadding);
    }

    Ok(&buf[..limit])
}
