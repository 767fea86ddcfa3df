#![allow(deprecated)]
//! Known-answer tests against the RFC 3962 AES-CTS test vectors.
//!
//! Every vector is checked in both directions, including the resulting
//! chaining value, and the exact-multiple vectors are compared against a
//! plain CBC reference to pin down the block swap.

#[cfg(test)]
mod tests {
    use aes::Aes128;
    use aes::cipher::{Array, BlockCipherEncrypt, KeyInit};

    use crate::common::BLOCK_LENGTH;
    use crate::{CtsDecrypter, CtsEncrypter};

    /// AES-128 key from the RFC 3962 test vectors.
    const KEY: &[u8; 16] = b"chicken teriyaki";

    struct TestVector {
        input: &'static [u8],
        output: &'static str,
        next_iv: &'static str,
    }

    const VECTORS: [TestVector; 6] = [
        TestVector {
            input: b"I would like the ",
            output: "c6353568f2bf8cb4d8a580362da7ff7f97",
            next_iv: "c6353568f2bf8cb4d8a580362da7ff7f",
        },
        TestVector {
            input: b"I would like the General Gau's ",
            output: "fc00783e0efdb2c1d445d4c8eff7ed2297687268d6ecccc0c07b25e25ecfe5",
            next_iv: "fc00783e0efdb2c1d445d4c8eff7ed22",
        },
        TestVector {
            input: b"I would like the General Gau's C",
            output: "39312523a78662d5be7fcbcc98ebf5a897687268d6ecccc0c07b25e25ecfe584",
            next_iv: "39312523a78662d5be7fcbcc98ebf5a8",
        },
        TestVector {
            input: b"I would like the General Gau's Chicken, please,",
            output: "97687268d6ecccc0c07b25e25ecfe584b3fffd940c16a18c1b5549d2f838029e\
                     39312523a78662d5be7fcbcc98ebf5",
            next_iv: "b3fffd940c16a18c1b5549d2f838029e",
        },
        TestVector {
            input: b"I would like the General Gau's Chicken, please, ",
            output: "97687268d6ecccc0c07b25e25ecfe5849dad8bbb96c4cdc03bc103e1a194bbd8\
                     39312523a78662d5be7fcbcc98ebf5a8",
            next_iv: "9dad8bbb96c4cdc03bc103e1a194bbd8",
        },
        TestVector {
            input: b"I would like the General Gau's Chicken, please, and wonton soup.",
            output: "97687268d6ecccc0c07b25e25ecfe58439312523a78662d5be7fcbcc98ebf5a8\
                     4807efe836ee89a526730dbc2f7bc8409dad8bbb96c4cdc03bc103e1a194bbd8",
            next_iv: "4807efe836ee89a526730dbc2f7bc840",
        },
    ];

    fn unhex(s: &str) -> Vec<u8> {
        let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    /// Plain CBC encryption reference for the block-swap comparison.
    fn cbc_encrypt(key: &[u8; 16], iv: &[u8; 16], src: &[u8]) -> Vec<u8> {
        let cipher = Aes128::new(Array::from_slice(key));
        let mut chain = *iv;
        let mut out = vec![0u8; src.len()];

        for (i, chunk) in src.chunks(BLOCK_LENGTH).enumerate() {
            let mut block = [0u8; BLOCK_LENGTH];
            block.copy_from_slice(chunk);
            for j in 0..BLOCK_LENGTH {
                block[j] ^= chain[j];
            }
            let mut b = Array::clone_from_slice(&block);
            cipher.encrypt_block(&mut b);
            chain.copy_from_slice(b.as_slice());
            out[i * BLOCK_LENGTH..(i + 1) * BLOCK_LENGTH].copy_from_slice(&chain);
        }
        out
    }

    #[test]
    fn kat_aes_cts_encrypt() {
        let iv = [0u8; BLOCK_LENGTH];

        for (idx, tv) in VECTORS.iter().enumerate() {
            let mut enc =
                CtsEncrypter::new(Aes128::new(Array::from_slice(KEY)), &iv).unwrap();

            let mut ciphertext = vec![0u8; tv.input.len()];
            enc.encrypt(tv.input, &mut ciphertext).unwrap();

            assert_eq!(ciphertext, unhex(tv.output), "vector {}: ciphertext", idx);
            assert_eq!(
                enc.chaining_value().as_slice(),
                unhex(tv.next_iv),
                "vector {}: next chaining value",
                idx
            );
        }
    }

    #[test]
    fn kat_aes_cts_decrypt() {
        let iv = [0u8; BLOCK_LENGTH];

        for (idx, tv) in VECTORS.iter().enumerate() {
            let mut dec =
                CtsDecrypter::new(Aes128::new(Array::from_slice(KEY)), &iv).unwrap();

            let ciphertext = unhex(tv.output);
            let mut plaintext = vec![0u8; ciphertext.len()];
            dec.decrypt(&ciphertext, &mut plaintext).unwrap();

            assert_eq!(plaintext, tv.input, "vector {}: plaintext", idx);
            assert_eq!(
                dec.chaining_value().as_slice(),
                unhex(tv.next_iv),
                "vector {}: next chaining value",
                idx
            );
        }
    }

    #[test]
    fn exact_multiple_swaps_last_two_cbc_blocks() {
        let iv = [0u8; BLOCK_LENGTH];

        // The exact-multiple vectors: 2, 3 and 4 blocks.
        for tv in VECTORS.iter().filter(|tv| tv.input.len() % BLOCK_LENGTH == 0) {
            let mut enc =
                CtsEncrypter::new(Aes128::new(Array::from_slice(KEY)), &iv).unwrap();
            let mut cts = vec![0u8; tv.input.len()];
            enc.encrypt(tv.input, &mut cts).unwrap();

            let cbc = cbc_encrypt(KEY, &iv, tv.input);
            let num_blocks = tv.input.len() / BLOCK_LENGTH;
            let split = (num_blocks - 2) * BLOCK_LENGTH;

            // Identical up to the swapped pair.
            assert_eq!(&cts[..split], &cbc[..split]);
            // Second-to-last CTS block is CBC's last, and vice versa.
            assert_eq!(
                &cts[split..split + BLOCK_LENGTH],
                &cbc[split + BLOCK_LENGTH..]
            );
            assert_eq!(
                &cts[split + BLOCK_LENGTH..],
                &cbc[split..split + BLOCK_LENGTH]
            );
        }
    }

    #[test]
    fn exact_multiple_swap_nonzero_iv() {
        let key = [0x5Au8; 16];
        let iv = [0xC3u8; 16];
        let plaintext: Vec<u8> = (0..3 * BLOCK_LENGTH).map(|i| i as u8).collect();

        let mut enc =
            CtsEncrypter::new(Aes128::new(Array::from_slice(&key)), &iv).unwrap();
        let mut cts = vec![0u8; plaintext.len()];
        enc.encrypt(&plaintext, &mut cts).unwrap();

        let cbc = cbc_encrypt(&key, &iv, &plaintext);
        assert_eq!(&cts[..BLOCK_LENGTH], &cbc[..BLOCK_LENGTH]);
        assert_eq!(&cts[BLOCK_LENGTH..2 * BLOCK_LENGTH], &cbc[2 * BLOCK_LENGTH..]);
        assert_eq!(&cts[2 * BLOCK_LENGTH..], &cbc[BLOCK_LENGTH..2 * BLOCK_LENGTH]);
    }
}
