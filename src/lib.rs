//! CTS-3 (Kerberos variant) ciphertext stealing mode.
//!
//! This crate implements the CTS-3 ciphertext stealing formatting for CBC
//! encryption, the variant standardized for the Kerberos encryption types
//! (RFC 3962).
//!
//! # Overview
//!
//! Ciphertext stealing lets a CBC-style chaining mode encrypt plaintext whose
//! length is not a multiple of the cipher's block size without adding padding:
//! the ciphertext is exactly as long as the plaintext. The last two ciphertext
//! blocks are swapped and the final block is truncated to the length of the
//! plaintext tail; the missing "stolen" bytes are reconstructed during
//! decryption.
//!
//! The block cipher itself is an external collaborator, consumed through the
//! RustCrypto cipher traits. Any keyed 128-bit block cipher works; the tests
//! and examples use AES.
//!
//! # Quick Start
//!
//! ```rust
//! use aes::Aes128;
//! use aes::cipher::{Array, KeyInit};
//! use cts::{CtsDecrypter, CtsEncrypter};
//!
//! let key = [0u8; 16];
//! let iv = [0u8; 16];
//!
//! let plaintext = b"I would like the General Gau's";
//! let mut ciphertext = vec![0u8; plaintext.len()];
//!
//! let mut enc = CtsEncrypter::new(Aes128::new(Array::from_slice(&key)), &iv).unwrap();
//! enc.encrypt(plaintext, &mut ciphertext).unwrap();
//!
//! let mut decrypted = vec![0u8; plaintext.len()];
//! let mut dec = CtsDecrypter::new(Aes128::new(Array::from_slice(&key)), &iv).unwrap();
//! dec.decrypt(&ciphertext, &mut decrypted).unwrap();
//!
//! assert_eq!(plaintext.as_slice(), decrypted.as_slice());
//! ```
//!
//! # Security Considerations
//!
//! - **No authentication**: corrupted ciphertext decrypts to garbage without
//!   any signal; integrity must be provided by a layer above (e.g. a MAC)
//! - **Minimum message length**: strictly more than one block (17 bytes with
//!   AES); with only one block there is nothing to steal
//! - **One message per call**: an instance carries its chaining value across
//!   calls, but each call processes exactly one complete message
//!
//! # Feature Flags
//!
//! - `std` (default): Enable standard library support
//! - When disabled, the crate is `no_std` compatible (`alloc` is required for
//!   [`padding::pad`])

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod common;
pub mod cts;
pub mod padding;

#[cfg(test)]
mod cross_check;

pub use common::{BLOCK_LENGTH, Error};
pub use cts::{CtsDecrypter, CtsEncrypter};
