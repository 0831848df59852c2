// In: src/container/format.rs

//! Defines the on-disk container layout and constants. This is the single
//! source of truth for the framed artifact: every offset and size used by
//! the codec comes from here.
//!
//! Layout (all integers little-endian):
//!
//! | Offset            | Size        | Field          |
//! |-------------------|-------------|----------------|
//! | 0                 | 4           | magic `"RBT1"` |
//! | 4                 | 4           | payload_length |
//! | 8                 | 4           | payload_crc32  |
//! | 12                | payload_len | payload        |
//! | 12 + payload_len  | 32          | digest         |

use crate::checksum::sha256::DIGEST_LEN;
use crate::error::RbtzipError;

/// The magic number identifying a container.
pub const MAGIC: &[u8; 4] = b"RBT1";

/// Fixed header size: magic + payload length + payload CRC32.
pub const HEADER_LEN: usize = 12;

/// Trailing SHA-256 digest size.
pub const TRAILER_LEN: usize = DIGEST_LEN;

//==================================================================================
// Header Parsing
//==================================================================================

/// The fixed-size header fields, extracted without touching the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Declared length of the payload field in bytes.
    pub payload_len: u32,
    /// Stored CRC32 of the payload field.
    pub payload_crc: u32,
}

impl ContainerHeader {
    /// Parses and validates the fixed header.
    ///
    /// Rejects buffers shorter than [`HEADER_LEN`] or with the wrong magic
    /// before reading any further field, so clearly-garbage input never
    /// reaches the checksum machinery.
    pub fn parse(bytes: &[u8]) -> Result<Self, RbtzipError> {
        if bytes.len() < HEADER_LEN {
            return Err(RbtzipError::Format(format!(
                "too short: {} bytes cannot hold a {HEADER_LEN}-byte header",
                bytes.len()
            )));
        }
        if &bytes[..4] != MAGIC {
            return Err(RbtzipError::Format("bad magic".to_string()));
        }
        Ok(Self {
            payload_len: u32::from_le_bytes(bytes[4..8].try_into().unwrap()),
            payload_crc: u32::from_le_bytes(bytes[8..12].try_into().unwrap()),
        })
    }
}
