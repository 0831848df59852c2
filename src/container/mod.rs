//! The container layer: framed layout plus the orchestration that turns raw
//! bytes into a verified artifact and back.

pub mod codec;
pub mod format;

pub use codec::{decode_with, encode_with};

use crate::entropy::PassthroughCoder;
use crate::error::RbtzipError;

//==================================================================================
// Stateless Facade (default entropy stage)
//==================================================================================

/// Encodes `raw` into a container using the default identity entropy stage.
pub fn encode(raw: &[u8]) -> Result<Vec<u8>, RbtzipError> {
    encode_with(raw, &PassthroughCoder)
}

/// Decodes and verifies a container produced with the default identity
/// entropy stage.
pub fn decode(container: &[u8]) -> Result<Vec<u8>, RbtzipError> {
    decode_with(container, &PassthroughCoder)
}
