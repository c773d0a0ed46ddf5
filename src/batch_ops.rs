// src/batch_ops.rs
//! Parallel decryption of independent files
//!
//! Requires the `batch-ops` feature. Each entry runs the same relocate,
//! stream, truncate sequence as [`decrypt_file`]; entries must name
//! distinct paths.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;
#[cfg(feature = "batch-ops")]
use std::path::Path;

#[cfg(feature = "batch-ops")]
use crate::digest::PlaintextDigest;
#[cfg(feature = "batch-ops")]
use crate::error::Result;
#[cfg(feature = "batch-ops")]
use crate::file_ops::decrypt_file;
#[cfg(feature = "batch-ops")]
use crate::transform::StreamDecrypter;

/// Decrypt every `(file, stream_decrypter, decrypted_size)` entry in place.
///
/// Digests come back in input order. On the first error the remaining
/// entries are abandoned; entries that already completed stay decrypted on
/// disk.
#[cfg(feature = "batch-ops")]
pub fn decrypt_batch<P, S, Q>(batch: &[(P, S, u64)], temp_dir: Q) -> Result<Vec<PlaintextDigest>>
where
    P: AsRef<Path> + Sync,
    S: StreamDecrypter + Sync,
    Q: AsRef<Path> + Sync,
{
    batch
        .par_iter()
        .map(|(file, stream_decrypter, decrypted_size)| {
            decrypt_file(file, stream_decrypter, *decrypted_size, temp_dir.as_ref())
        })
        .collect()
}
