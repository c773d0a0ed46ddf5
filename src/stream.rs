// src/stream.rs
//! Block-loop streaming adapter
//!
//! Chunks the ciphertext stream into fixed-size blocks, pushes each through
//! the injected block transform, writes the plaintext out, and folds every
//! emitted byte into a SHA-1 digest. Memory stays bounded by one block no
//! matter how large the file is.

use std::io::{ErrorKind, Read, Write};

use sha1::{Digest, Sha1};

use crate::consts::BLOCK_LENGTH;
use crate::digest::PlaintextDigest;
use crate::error::Result;
use crate::transform::{BlockDecrypter, StreamDecrypter};

/// Streaming decrypter over any [`BlockDecrypter`].
#[derive(Debug, Clone)]
pub struct BlockStreamDecrypter<B> {
    blocks: B,
    block_length: usize,
}

impl<B: BlockDecrypter> BlockStreamDecrypter<B> {
    /// Adapter with the standard [`BLOCK_LENGTH`] (4096-byte) geometry.
    #[must_use]
    pub fn new(blocks: B) -> Self {
        Self {
            blocks,
            block_length: BLOCK_LENGTH,
        }
    }

    /// Override the block length (minimum 1).
    #[must_use]
    pub fn with_block_length(mut self, block_length: usize) -> Self {
        self.block_length = block_length.max(1);
        self
    }

    /// Current block length in bytes.
    #[must_use]
    pub const fn block_length(&self) -> usize {
        self.block_length
    }

    /// The underlying block transform.
    #[must_use]
    pub const fn blocks(&self) -> &B {
        &self.blocks
    }
}

impl<B: BlockDecrypter> StreamDecrypter for BlockStreamDecrypter<B> {
    fn decrypt<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<PlaintextDigest> {
        let mut digest = Sha1::new();
        let mut block = vec![0u8; self.block_length];

        loop {
            let filled = read_full(&mut input, &mut block)?;
            if filled == 0 {
                break;
            }

            self.blocks.decrypt_block(&mut block[..filled])?;
            digest.update(&block[..filled]);
            output.write_all(&block[..filled])?;

            if filled < self.block_length {
                break; // end of stream mid-block
            }
        }

        output.flush()?;
        Ok(PlaintextDigest::new(digest.finalize().into()))
    }
}

/// Fill `buf` from `reader`, retrying short reads, until full or end of
/// stream. Returns how many bytes were placed in `buf`.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
