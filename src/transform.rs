// src/transform.rs
//! Capability seams for the injected cipher stack
//!
//! The crate decides nothing cryptographic. Both traits have a single
//! method; alternative cipher/digest implementations substitute here
//! without touching the swap orchestration.

use std::io::{Read, Write};

use crate::digest::PlaintextDigest;
use crate::error::Result;

/// One application of the block cipher transform.
///
/// `block` holds one ciphertext block and is decrypted in place. Every
/// block is [`crate::consts::BLOCK_LENGTH`] bytes except possibly a shorter
/// final one.
pub trait BlockDecrypter {
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

/// Streaming decrypt capability.
///
/// Consumes `input` fully, writes the decrypted bytes to `output`, and
/// returns the digest folded over every plaintext byte emitted.
/// Implementations must not retain either stream past completion.
pub trait StreamDecrypter {
    fn decrypt<R: Read, W: Write>(&self, input: R, output: W) -> Result<PlaintextDigest>;
}
