// src/consts.rs
//! Shared constants — block geometry and naming defaults

/// Ciphertext block length in bytes.
///
/// One application of the block transform covers exactly this much input,
/// except for a shorter final block at end of stream.
pub const BLOCK_LENGTH: usize = 0x1000;

/// Byte length of the plaintext digest (SHA-1).
pub const DIGEST_LENGTH: usize = 20;

/// Random bytes behind each temporary file name.
// 128 bits — same collision resistance as a v4 UUID
pub const TEMP_NAME_BYTES: usize = 16;
