// src/truncate.rs
//! Post-decryption length correction
//!
//! Block decryption emits whole blocks, so the plaintext on disk can carry
//! trailing padding past the real end of the file. [`truncate_file`] cuts it
//! to the caller's expected size. It only ever shrinks: an undersized file
//! is reported through the sink and left alone.

use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::diag::DiagnosticSink;
use crate::error::Result;

/// Truncate `file` down to `decrypted_size` bytes.
///
/// A `decrypted_size` of 0 means "size unknown" and is a no-op, so callers
/// without length metadata can pass 0 unconditionally. A file already at or
/// below the expected size is never grown; the undersized case warns and
/// returns `Ok`.
pub fn truncate_file<P: AsRef<Path>, D: DiagnosticSink>(
    file: P,
    decrypted_size: u64,
    diag: &D,
) -> Result<()> {
    if decrypted_size == 0 {
        return Ok(());
    }
    let file = file.as_ref();
    let actual = fs::metadata(file)?.len();
    if actual > decrypted_size {
        OpenOptions::new()
            .write(true)
            .open(file)?
            .set_len(decrypted_size)?;
        diag.debug(&format!(
            "truncated {}: {actual} -> {decrypted_size}",
            file.display()
        ));
    } else if actual < decrypted_size {
        diag.warn(&format!(
            "cannot truncate {}: {actual} < {decrypted_size}",
            file.display()
        ));
    }
    Ok(())
}
