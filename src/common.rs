//! Definitions shared by the encrypter and decrypter.

/// Unified error type for all operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// IV length does not equal the cipher's block size.
    InvalidIvLength,
    /// Input does not span more than one block.
    InputTooShort,
    /// Output buffer is smaller than the input.
    OutputTooSmall,
    /// Data does not carry a valid PKCS #7 padding.
    InvalidPadding,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidIvLength => write!(f, "IV length must equal block size"),
            Error::InputTooShort => write!(f, "input too short"),
            Error::OutputTooSmall => write!(f, "output smaller than input"),
            Error::InvalidPadding => write!(f, "invalid PKCS #7 padding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Cipher block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// XOR a 16-byte block into the first argument.
#[inline]
pub fn xor_block(dst: &mut [u8; BLOCK_LENGTH], src: &[u8; BLOCK_LENGTH]) {
    for i in 0..BLOCK_LENGTH {
        dst[i] ^= src[i];
    }
}

/// Compute the block layout of a message: the number of blocks it spans and
/// the length of its final, possibly partial block.
///
/// A message that exactly fills its blocks has a full tail. Ciphertext
/// stealing needs at least two blocks to work with, so a message of one block
/// or less fails with `Error::InputTooShort`.
pub fn block_layout(len: usize) -> Result<(usize, usize), Error> {
    let mut num_blocks = len / BLOCK_LENGTH;
    let mut tail = len % BLOCK_LENGTH;

    if tail != 0 {
        num_blocks += 1;
    } else {
        tail = BLOCK_LENGTH;
    }

    if num_blocks < 2 {
        return Err(Error::InputTooShort);
    }
    Ok((num_blocks, tail))
}
