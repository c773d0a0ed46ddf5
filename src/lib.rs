// src/lib.rs
//! decrypt-in-place — Streaming in-place file decryption
//!
//! Features:
//! - Atomic relocate-and-replace: plaintext lands at the original path
//! - Block-wise streaming decryption with a SHA-1 plaintext digest
//! - Post-decryption truncation to the real plaintext size
//! - Guaranteed temporary-file cleanup on success, error, and unwind
//! - Optional parallel batch decryption (`batch-ops` feature)

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod diag;
pub mod digest;
pub mod error;
pub mod file_ops;
pub mod stream;
pub mod temp;
pub mod transform;
pub mod truncate;

// Re-export everything users need at the crate root
pub use aliases::FileKey;
#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;
pub use diag::{DiagnosticSink, LogSink};
pub use digest::PlaintextDigest;
pub use error::{DecryptError, Result};
pub use file_ops::{decrypt_file, decrypt_file_ext, FileDecrypter};
pub use stream::BlockStreamDecrypter;
pub use temp::temp_path;
pub use transform::{BlockDecrypter, StreamDecrypter};
pub use truncate::truncate_file;
