// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// The error type for all in-place decryption operations.
#[derive(Error, Debug)]
pub enum DecryptError {
    /// I/O failure in any on-disk step: relocating the source, re-creating
    /// it, streaming, probing the size, or truncating.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The injected decrypt capability failed for a non-I/O reason
    /// (bad key shape, integrity check, padding).
    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DecryptError>;
