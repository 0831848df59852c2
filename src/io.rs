//! File boundary: whole-file reads and writes as opaque byte buffers.
//!
//! OS failures propagate unchanged as [`RbtzipError::Io`]; nothing here
//! inspects or reinterprets them.

use std::fs;
use std::path::Path;

use crate::error::RbtzipError;

/// Reads an entire file into memory.
pub fn read_all(path: &Path) -> Result<Vec<u8>, RbtzipError> {
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Writes a byte buffer to a file, replacing any existing content.
pub fn write_all(path: &Path, bytes: &[u8]) -> Result<(), RbtzipError> {
    fs::write(path, bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
