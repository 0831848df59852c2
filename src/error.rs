// In: src/error.rs

//! This module defines the single, unified error type for the entire rbtzip library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RbtzipError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The container header is not something we can act on at all: missing or
    /// wrong magic, truncated header fields, or a declared payload length that
    /// does not fit the buffer.
    #[error("Container format error: {0}")]
    Format(String),

    /// The container was well-formed but a verification check disagreed:
    /// CRC32 over the stored payload, or the SHA-256 digest of the
    /// reconstructed bytes.
    #[error("Integrity check failed: {0}")]
    Integrity(String),

    /// The entropy stage was driven outside its contract, e.g. asked to
    /// transform an absent input buffer.
    #[error("Entropy stage capability violation: {0}")]
    Capability(String),

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    /// The run table could not be deserialized: short buffer or a declared
    /// run count that exceeds the bytes actually present. The container
    /// decoder surfaces this as `Format`.
    #[error("Malformed run table: {0}")]
    MalformedData(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not
    /// found). Propagated unchanged, never reinterpreted.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
