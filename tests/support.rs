// tests/support.rs
//! Test utilities — fake transforms, capture sink, on-disk fixtures

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sha1::{Digest, Sha1};
use tempfile::TempDir;

use decrypt_in_place::error::Result;
use decrypt_in_place::{
    BlockDecrypter, DecryptError, DiagnosticSink, PlaintextDigest, StreamDecrypter,
};

/// Pass-through block transform: decrypted output equals raw input.
#[allow(dead_code)] // Used across multiple test files
pub struct IdentityBlocks;

impl BlockDecrypter for IdentityBlocks {
    fn decrypt_block(&self, _block: &mut [u8]) -> Result<()> {
        Ok(())
    }
}

/// Repeating-key XOR transform. With a key length that divides the block
/// length, per-block application equals one cycling pass over the whole
/// stream, so tests can build expected bytes with [`xor_cycle`].
#[allow(dead_code)]
pub struct XorBlocks {
    key: Vec<u8>,
}

impl XorBlocks {
    #[allow(dead_code)]
    pub fn new(key: &[u8]) -> Self {
        assert!(!key.is_empty(), "XOR key must be non-empty");
        Self { key: key.to_vec() }
    }
}

impl BlockDecrypter for XorBlocks {
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        for (i, byte) in block.iter_mut().enumerate() {
            *byte ^= self.key[i % self.key.len()];
        }
        Ok(())
    }
}

/// Records the length of every block it is handed, in call order.
#[derive(Default)]
#[allow(dead_code)] // Used across multiple test files
pub struct RecordingBlocks {
    sizes: Mutex<Vec<usize>>,
}

impl RecordingBlocks {
    #[allow(dead_code)]
    pub fn sizes(&self) -> Vec<usize> {
        self.sizes.lock().unwrap().clone()
    }
}

impl BlockDecrypter for RecordingBlocks {
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.sizes.lock().unwrap().push(block.len());
        Ok(())
    }
}

/// Stream decrypter that emits a fixed prefix and then fails, for
/// exercising mid-stream error paths.
#[allow(dead_code)]
pub struct FailingStream {
    pub prefix: &'static [u8],
}

impl StreamDecrypter for FailingStream {
    fn decrypt<R: Read, W: Write>(&self, _input: R, mut output: W) -> Result<PlaintextDigest> {
        output.write_all(self.prefix)?;
        output.flush()?;
        Err(DecryptError::Crypto("simulated transform failure".into()))
    }
}

/// Diagnostics sink that captures messages for assertions.
#[derive(Default)]
#[allow(dead_code)] // Used across multiple test files
pub struct CaptureSink {
    debugs: Mutex<Vec<String>>,
    warns: Mutex<Vec<String>>,
}

impl CaptureSink {
    #[allow(dead_code)]
    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn warns(&self) -> Vec<String> {
        self.warns.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn warn_count(&self) -> usize {
        self.warns.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn has_warn_containing(&self, needle: &str) -> bool {
        self.warns.lock().unwrap().iter().any(|m| m.contains(needle))
    }

    #[allow(dead_code)]
    pub fn has_debug_containing(&self, needle: &str) -> bool {
        self.debugs.lock().unwrap().iter().any(|m| m.contains(needle))
    }
}

impl DiagnosticSink for CaptureSink {
    fn debug(&self, message: &str) {
        self.debugs.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warns.lock().unwrap().push(message.to_string());
    }
}

/// SHA-1 of `data` as the crate's digest type.
#[allow(dead_code)] // Used across multiple test files
pub fn sha1_digest(data: &[u8]) -> PlaintextDigest {
    let mut digest = Sha1::new();
    digest.update(data);
    PlaintextDigest::new(digest.finalize().into())
}

/// Deterministic non-repeating-at-4096 byte pattern.
#[allow(dead_code)]
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// One cycling XOR pass over `data`, the whole-stream equivalent of
/// [`XorBlocks`] when the key length divides the block length.
#[allow(dead_code)]
pub fn xor_cycle(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect()
}

/// On-disk fixture: one payload file plus an empty scratch directory for
/// temporaries, both inside a tempdir that lives as long as the fixture.
#[allow(dead_code)] // Fields are used in tests (paths, cleanup checks)
pub struct SwapFixture {
    pub dir: TempDir,
    pub file: PathBuf,
    pub temp_dir: PathBuf,
}

#[allow(dead_code)]
pub fn fixture_with(content: &[u8]) -> SwapFixture {
    let dir = tempfile::tempdir().expect("create test dir");
    let temp_dir = dir.path().join("scratch");
    fs::create_dir(&temp_dir).expect("create scratch dir");
    let file = dir.path().join("payload.bin");
    fs::write(&file, content).expect("write payload");
    SwapFixture {
        dir,
        file,
        temp_dir,
    }
}

/// Number of directory entries, for asserting scratch dirs end up empty.
#[allow(dead_code)]
pub fn dir_entry_count<P: AsRef<Path>>(dir: P) -> usize {
    fs::read_dir(dir).expect("read dir").count()
}
