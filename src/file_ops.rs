// src/file_ops.rs
//! In-place file decryption
//!
//! The source file is relocated into the caller's temp directory with an
//! atomic rename, streamed back through the decrypter into the original
//! path, then cut to the expected plaintext size. The temporary ciphertext
//! is removed on every exit path.

use std::fs::{self, File};
use std::path::Path;

use crate::aliases::FileKey;
use crate::diag::{DiagnosticSink, LogSink};
use crate::digest::PlaintextDigest;
use crate::error::Result;
use crate::temp::{temp_path, TempFileGuard};
use crate::transform::StreamDecrypter;
use crate::truncate::truncate_file;

/// Decrypt `file` in place, replacing its contents with plaintext.
///
/// Diagnostics go to the [`log`] facade; use [`decrypt_file_ext`] to supply
/// a sink. Returns the digest over every plaintext byte the decrypter
/// emitted, including any bytes past `decrypted_size` that the final
/// truncation discards.
///
/// `decrypted_size` of 0 means the plaintext length is unknown and the
/// decrypted file is left at whatever length the stream produced.
///
/// `temp_dir` should live on the same filesystem as `file`: relocation is a
/// single `rename` and fails across mount points. A failed relocation
/// leaves the source untouched at its original path. A failure after
/// relocation still removes the relocated ciphertext; the original path
/// then holds whatever plaintext was streamed before the failure.
pub fn decrypt_file<P, S, Q>(
    file: P,
    stream_decrypter: &S,
    decrypted_size: u64,
    temp_dir: Q,
) -> Result<PlaintextDigest>
where
    P: AsRef<Path>,
    S: StreamDecrypter,
    Q: AsRef<Path>,
{
    decrypt_file_ext(file, stream_decrypter, decrypted_size, temp_dir, &LogSink)
}

/// [`decrypt_file`] with an injected diagnostics sink.
pub fn decrypt_file_ext<P, S, Q, D>(
    file: P,
    stream_decrypter: &S,
    decrypted_size: u64,
    temp_dir: Q,
    diag: &D,
) -> Result<PlaintextDigest>
where
    P: AsRef<Path>,
    S: StreamDecrypter,
    Q: AsRef<Path>,
    D: DiagnosticSink,
{
    let file = file.as_ref();
    // Armed before the rename: if relocation fails the guard's removal
    // hits NotFound and stays silent.
    let guard = TempFileGuard::new(temp_path(temp_dir), diag);
    fs::rename(file, guard.path())?;

    let input = File::open(guard.path())?;
    let output = File::create(file)?;
    let digest = stream_decrypter.decrypt(input, output)?;

    truncate_file(file, decrypted_size, diag)?;
    Ok(digest)
}

/// Keyed front-end over [`decrypt_file`].
///
/// Holds a factory from [`FileKey`] to a stream decrypter, so call sites
/// that look up per-file keys never touch decrypter construction. Mirrors
/// the capability style of the stream layer: the factory is injected once
/// and the decrypter itself stays swappable.
///
/// ```
/// use decrypt_in_place::{BlockDecrypter, BlockStreamDecrypter, FileDecrypter, FileKey, Result};
///
/// struct Identity;
///
/// impl BlockDecrypter for Identity {
///     fn decrypt_block(&self, _block: &mut [u8]) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let dir = tempfile::tempdir()?;
/// let file = dir.path().join("asset");
/// std::fs::write(&file, b"ciphertext")?;
///
/// let decrypter = FileDecrypter::new(|_key: &FileKey| BlockStreamDecrypter::new(Identity));
/// let key = FileKey::new(vec![0u8; 16]);
/// let digest = decrypter.decrypt(&file, &key, 0, dir.path())?;
/// # let _ = digest;
/// # Ok(())
/// # }
/// ```
pub struct FileDecrypter<F> {
    make_stream: F,
}

impl<F> FileDecrypter<F> {
    pub fn new(make_stream: F) -> Self {
        Self { make_stream }
    }

    /// Decrypt `file` in place with the decrypter built for `key`.
    pub fn decrypt<P, Q, S>(
        &self,
        file: P,
        key: &FileKey,
        decrypted_size: u64,
        temp_dir: Q,
    ) -> Result<PlaintextDigest>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: Fn(&FileKey) -> S,
        S: StreamDecrypter,
    {
        self.decrypt_ext(file, key, decrypted_size, temp_dir, &LogSink)
    }

    /// [`FileDecrypter::decrypt`] with an injected diagnostics sink.
    pub fn decrypt_ext<P, Q, S, D>(
        &self,
        file: P,
        key: &FileKey,
        decrypted_size: u64,
        temp_dir: Q,
        diag: &D,
    ) -> Result<PlaintextDigest>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: Fn(&FileKey) -> S,
        S: StreamDecrypter,
        D: DiagnosticSink,
    {
        let stream_decrypter = (self.make_stream)(key);
        decrypt_file_ext(file, &stream_decrypter, decrypted_size, temp_dir, diag)
    }
}
