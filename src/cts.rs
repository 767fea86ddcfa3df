#![allow(deprecated)]
//! CTS-3 (Kerberos variant) ciphertext stealing encrypter and decrypter.
//!
//! The mode is standard CBC for all but the final two block positions. The
//! CTS-3 formatting then swaps the last two ciphertext blocks: the encryption
//! of the second-to-last plaintext block is written, truncated to the tail
//! length, into the last ciphertext position, and the encryption of the
//! zero-padded final plaintext block is written in full into the
//! second-to-last position. The truncated bytes are "stolen" and recovered
//! algebraically during decryption, so the ciphertext is exactly as long as
//! the plaintext.
//!
//! Properties:
//! - Ciphertext length equals plaintext length (no expansion)
//! - Input must span strictly more than one block
//! - No authentication - use a MAC or AEAD if integrity protection is needed
//!
//! An instance owns its chaining value and scratch buffers exclusively;
//! `encrypt` and `decrypt` take `&mut self`, so an instance cannot be shared
//! between threads without external synchronization. Construct one instance
//! per concurrent stream.

#[allow(deprecated)]
use aes::cipher::{Array, BlockCipherDecrypt, BlockCipherEncrypt};

use crate::common::{BLOCK_LENGTH, Error, block_layout, xor_block};

/// Ciphertext stealing encrypter, generic over a 128-bit block cipher.
pub struct CtsEncrypter<C: BlockCipherEncrypt> {
    cipher: C,
    iv: [u8; BLOCK_LENGTH],
    tmp: [u8; BLOCK_LENGTH],
}

impl<C: BlockCipherEncrypt> CtsEncrypter<C> {
    /// Cipher block length in bytes (always 16).
    pub const BLOCK_LENGTH: usize = BLOCK_LENGTH;

    /// Minimum input length in bytes.
    pub const MIN_INPUT_LENGTH: usize = BLOCK_LENGTH + 1;

    /// Create an encrypter from a keyed block cipher and an IV.
    ///
    /// The IV is cloned into the instance; the caller's buffer is never
    /// written to.
    ///
    /// # Errors
    /// Returns `Error::InvalidIvLength` if the IV length does not equal the
    /// cipher's block size.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self, Error> {
        debug_assert_eq!(C::block_size(), BLOCK_LENGTH);
        if iv.len() != BLOCK_LENGTH {
            return Err(Error::InvalidIvLength);
        }
        let mut chain = [0u8; BLOCK_LENGTH];
        chain.copy_from_slice(iv);
        Ok(Self {
            cipher,
            iv: chain,
            tmp: [0u8; BLOCK_LENGTH],
        })
    }

    /// Current chaining value. After `encrypt` it holds the final encrypted
    /// block of the message.
    pub fn chaining_value(&self) -> &[u8; BLOCK_LENGTH] {
        &self.iv
    }

    /// Encrypt `plaintext` into `ciphertext` using ciphertext stealing.
    ///
    /// Exactly `plaintext.len()` bytes of `ciphertext` are written.
    ///
    /// # Errors
    /// Returns `Error::InputTooShort` if the plaintext does not span more
    /// than one block, or `Error::OutputTooSmall` if the destination is
    /// shorter than the plaintext. No output is produced on failure.
    pub fn encrypt(&mut self, plaintext: &[u8], ciphertext: &mut [u8]) -> Result<(), Error> {
        let (num_blocks, tail) = block_layout(plaintext.len())?;
        if ciphertext.len() < plaintext.len() {
            return Err(Error::OutputTooSmall);
        }
        let dst = &mut ciphertext[..plaintext.len()];

        // Standard CBC for the first num_blocks - 1 blocks.
        for i in 0..num_blocks - 1 {
            self.tmp
                .copy_from_slice(&plaintext[i * BLOCK_LENGTH..(i + 1) * BLOCK_LENGTH]);
            xor_block(&mut self.tmp, &self.iv);
            let mut block = Array::clone_from_slice(&self.tmp);
            self.cipher.encrypt_block(&mut block);
            self.iv.copy_from_slice(block.as_slice());

            if i < num_blocks - 2 {
                dst[i * BLOCK_LENGTH..(i + 1) * BLOCK_LENGTH].copy_from_slice(&self.iv);
            } else {
                // Second-to-last plaintext block: only `take` bytes of its
                // encryption land in the last ciphertext position. The
                // remaining bytes are stolen and never transmitted.
                let start = (num_blocks - 1) * BLOCK_LENGTH;
                let take = dst.len() - start;
                dst[start..].copy_from_slice(&self.iv[..take]);
            }
        }

        // Zero-pad the plaintext tail to a full block, encrypt it and store
        // the result in the second-to-last ciphertext position.
        self.tmp[..tail].copy_from_slice(&plaintext[(num_blocks - 1) * BLOCK_LENGTH..]);
        self.tmp[tail..].fill(0);
        xor_block(&mut self.tmp, &self.iv);
        let mut block = Array::clone_from_slice(&self.tmp);
        self.cipher.encrypt_block(&mut block);
        self.iv.copy_from_slice(block.as_slice());
        dst[(num_blocks - 2) * BLOCK_LENGTH..(num_blocks - 1) * BLOCK_LENGTH]
            .copy_from_slice(&self.iv);

        Ok(())
    }
}

/// Ciphertext stealing decrypter, generic over a 128-bit block cipher.
pub struct CtsDecrypter<C: BlockCipherDecrypt> {
    cipher: C,
    iv: [u8; BLOCK_LENGTH],
    tmp: [u8; BLOCK_LENGTH],
    tmp2: [u8; BLOCK_LENGTH],
}

impl<C: BlockCipherDecrypt> CtsDecrypter<C> {
    /// Cipher block length in bytes (always 16).
    pub const BLOCK_LENGTH: usize = BLOCK_LENGTH;

    /// Minimum input length in bytes.
    pub const MIN_INPUT_LENGTH: usize = BLOCK_LENGTH + 1;

    /// Create a decrypter from a keyed block cipher and an IV.
    ///
    /// The IV is cloned into the instance; the caller's buffer is never
    /// written to.
    ///
    /// # Errors
    /// Returns `Error::InvalidIvLength` if the IV length does not equal the
    /// cipher's block size.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self, Error> {
        debug_assert_eq!(C::block_size(), BLOCK_LENGTH);
        if iv.len() != BLOCK_LENGTH {
            return Err(Error::InvalidIvLength);
        }
        let mut chain = [0u8; BLOCK_LENGTH];
        chain.copy_from_slice(iv);
        Ok(Self {
            cipher,
            iv: chain,
            tmp: [0u8; BLOCK_LENGTH],
            tmp2: [0u8; BLOCK_LENGTH],
        })
    }

    /// Current chaining value. After `decrypt` it holds the last full
    /// ciphertext block, the same value the matching encrypter retains.
    pub fn chaining_value(&self) -> &[u8; BLOCK_LENGTH] {
        &self.iv
    }

    /// Decrypt `ciphertext` into `plaintext` using ciphertext stealing.
    ///
    /// Exactly `ciphertext.len()` bytes of `plaintext` are written.
    ///
    /// # Errors
    /// Returns `Error::InputTooShort` if the ciphertext does not span more
    /// than one block, or `Error::OutputTooSmall` if the destination is
    /// shorter than the ciphertext. No output is produced on failure.
    pub fn decrypt(&mut self, ciphertext: &[u8], plaintext: &mut [u8]) -> Result<(), Error> {
        let (num_blocks, tail) = block_layout(ciphertext.len())?;
        if plaintext.len() < ciphertext.len() {
            return Err(Error::OutputTooSmall);
        }
        let dst = &mut plaintext[..ciphertext.len()];

        // Standard CBC for the blocks before the swapped pair.
        for i in 0..num_blocks - 2 {
            let src_block = &ciphertext[i * BLOCK_LENGTH..(i + 1) * BLOCK_LENGTH];
            let mut block = Array::clone_from_slice(src_block);
            self.cipher.decrypt_block(&mut block);
            let out = &mut dst[i * BLOCK_LENGTH..(i + 1) * BLOCK_LENGTH];
            for j in 0..BLOCK_LENGTH {
                out[j] = block[j] ^ self.iv[j];
            }
            self.iv.copy_from_slice(src_block);
        }

        // The second-to-last ciphertext position holds the full final
        // encrypted block. Its decryption exposes the stolen bytes.
        let last_full =
            &ciphertext[(num_blocks - 2) * BLOCK_LENGTH..(num_blocks - 1) * BLOCK_LENGTH];
        let mut block = Array::clone_from_slice(last_full);
        self.cipher.decrypt_block(&mut block);
        self.tmp.copy_from_slice(block.as_slice());

        // Reconstruct the stolen second-to-last ciphertext block from the
        // transmitted tail and the stolen bytes recovered above.
        self.tmp2[..tail].copy_from_slice(&ciphertext[(num_blocks - 1) * BLOCK_LENGTH..]);
        self.tmp2[tail..].copy_from_slice(&self.tmp[tail..]);

        // Recover the second-to-last plaintext block.
        let mut block = Array::clone_from_slice(&self.tmp2);
        self.cipher.decrypt_block(&mut block);
        let out = &mut dst[(num_blocks - 2) * BLOCK_LENGTH..(num_blocks - 1) * BLOCK_LENGTH];
        for j in 0..BLOCK_LENGTH {
            out[j] = block[j] ^ self.iv[j];
        }

        // Recover the plaintext tail. The reconstructed block is the chaining
        // value for the final block.
        xor_block(&mut self.tmp, &self.tmp2);
        dst[(num_blocks - 1) * BLOCK_LENGTH..].copy_from_slice(&self.tmp[..tail]);

        // Leave the chaining value at the last full ciphertext block, the
        // value the matching encrypter retains.
        self.iv.copy_from_slice(last_full);

        Ok(())
    }
}
