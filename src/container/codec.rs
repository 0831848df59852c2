// In: src/container/codec.rs

//! The container orchestrator: wires the run-length, serialization, entropy,
//! and checksum kernels into a single encode/decode operation over the
//! framed layout in [`format`](crate::container::format).
//!
//! Decode verification order is a contract, not an accident: the cheap CRC32
//! over the stored payload is checked *before* the entropy inverse runs, so
//! corrupted bytes never reach the pluggable stage, and the SHA-256 digest
//! of the reconstructed bytes is checked last, catching corruption anywhere
//! in the deeper layers that the payload CRC cannot see.

use crate::checksum::{crc32_of, Sha256};
use crate::container::format::{ContainerHeader, HEADER_LEN, MAGIC, TRAILER_LEN};
use crate::entropy::EntropyCoder;
use crate::error::RbtzipError;
use crate::kernels::{rle, run_table};

//==================================================================================
// 1. Encode
//==================================================================================

/// Encodes `raw` into a container, running the serialized run table through
/// `coder`. The only failure path is a coder failure, which propagates
/// unchanged.
pub fn encode_with(raw: &[u8], coder: &dyn EntropyCoder) -> Result<Vec<u8>, RbtzipError> {
    // 1. Compress and serialize.
    let runs = rle::encode(raw);
    let table = run_table::serialize(&runs);

    // 2. Entropy stage output becomes the stored payload.
    let payload = coder.transform(Some(&table))?;

    // 3. Shallow check over what is stored, deep check over what was given.
    let payload_crc = crc32_of(&payload);
    let mut hasher = Sha256::new();
    hasher.update(raw);
    let digest = hasher.finish();

    log::debug!(
        "encode: {} raw bytes -> {} runs -> {} payload bytes (crc 0x{payload_crc:08x})",
        raw.len(),
        runs.len(),
        payload.len()
    );

    // 4. Assemble the frame.
    let mut container = Vec::with_capacity(HEADER_LEN + payload.len() + TRAILER_LEN);
    container.extend_from_slice(MAGIC);
    container.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    container.extend_from_slice(&payload_crc.to_le_bytes());
    container.extend_from_slice(&payload);
    container.extend_from_slice(&digest);
    Ok(container)
}

//==================================================================================
// 2. Decode
//==================================================================================

/// Decodes and fully verifies a container, returning the original raw bytes
/// or no bytes at all. Reverses [`encode_with`] stage by stage, failing at
/// the first check that disagrees.
pub fn decode_with(container: &[u8], coder: &dyn EntropyCoder) -> Result<Vec<u8>, RbtzipError> {
    // 1. Fixed header: size and magic.
    let header = ContainerHeader::parse(container)?;
    let payload_len = header.payload_len as usize;

    // 2. Length arithmetic, in u64 so a hostile length cannot wrap it.
    let needed = HEADER_LEN as u64 + payload_len as u64 + TRAILER_LEN as u64;
    if needed > container.len() as u64 {
        return Err(RbtzipError::Format(format!(
            "length mismatch: declared payload of {payload_len} bytes needs {needed} total, got {}",
            container.len()
        )));
    }

    let payload = &container[HEADER_LEN..HEADER_LEN + payload_len];
    let stored_digest = &container[HEADER_LEN + payload_len..HEADER_LEN + payload_len + TRAILER_LEN];

    // 3. Shallow gate: the payload CRC must agree before the entropy stage
    //    is allowed to see the bytes.
    let computed_crc = crc32_of(payload);
    if computed_crc != header.payload_crc {
        return Err(RbtzipError::Integrity(format!(
            "checksum mismatch: stored 0x{:08x}, computed 0x{computed_crc:08x}",
            header.payload_crc
        )));
    }

    // 4. Invert the pipeline.
    let table = coder.inverse(Some(payload))?;
    let runs = run_table::deserialize(&table).map_err(|error| match error {
        RbtzipError::MalformedData(detail) => RbtzipError::Format(format!("run table: {detail}")),
        other => other,
    })?;
    let raw = rle::decode(&runs);

    // 5. Deep check: digest of the reconstructed bytes.
    let mut hasher = Sha256::new();
    hasher.update(&raw);
    if hasher.finish() != *stored_digest {
        return Err(RbtzipError::Integrity("digest mismatch".to_string()));
    }

    log::debug!(
        "decode: {} container bytes -> {} runs -> {} raw bytes",
        container.len(),
        runs.len(),
        raw.len()
    );
    Ok(raw)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
