// src/temp.rs
//! Temporary-path naming and best-effort cleanup
//!
//! The ciphertext sits at a throwaway path inside the caller's temp
//! directory for the duration of one decryption. Names are fresh random hex
//! per call; removal runs on every exit path and never overrides the
//! operation's outcome.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::RngCore;

use crate::consts::TEMP_NAME_BYTES;
use crate::diag::DiagnosticSink;

/// Fresh collision-resistant path inside `temp_dir`.
///
/// 32 lowercase hex chars from [`TEMP_NAME_BYTES`] random bytes, never
/// reused across calls. Windows note: `fs::rename` onto an existing file
/// fails there, so the fresh name is what keeps that window negligible.
#[must_use]
pub fn temp_path<P: AsRef<Path>>(temp_dir: P) -> PathBuf {
    let mut token = [0u8; TEMP_NAME_BYTES];
    rand::rng().fill_bytes(&mut token);
    temp_dir.as_ref().join(hex::encode(token))
}

/// Scope guard that removes the temporary file when dropped.
///
/// Runs on success, error return, and unwind. A missing file is silent
/// (covers the relocation-failed path); any other removal failure is warned
/// through the sink, never propagated.
pub struct TempFileGuard<'a, D: DiagnosticSink> {
    path: PathBuf,
    diag: &'a D,
}

impl<'a, D: DiagnosticSink> TempFileGuard<'a, D> {
    pub fn new(path: PathBuf, diag: &'a D) -> Self {
        Self { path, diag }
    }

    /// The guarded path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<D: DiagnosticSink> Drop for TempFileGuard<'_, D> {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => self.diag.warn(&format!(
                "failed to delete temporary file {}: {e}",
                self.path.display()
            )),
        }
    }
}
