// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Key bytes are opaque to this crate; the alias keeps them zeroized on drop
//! and behind explicit `expose_secret()` access.

pub use secure_gate::dynamic_alias;

// Raw decryption key, handed untouched to the injected transform factory
dynamic_alias!(FileKey, Vec<u8>);
