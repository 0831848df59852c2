//! This module is the single source of truth for the run-table wire layout:
//! a little-endian `u32` run count followed by one 5-byte record per run
//! (`count: u32 LE`, `value: u8`).
//!
//! The deserializer must survive adversarial input. Every bound is validated
//! before the corresponding read, and the implied record length is computed
//! in `u64`, so a hostile run count can neither index out of bounds nor
//! overflow the length arithmetic on 32-bit targets.

use crate::error::RbtzipError;
use crate::kernels::rle::{Run, RunSequence};

//==================================================================================
// Format Constants
//==================================================================================

/// Size of the leading run-count header in bytes.
const COUNT_HEADER_LEN: usize = 4;
/// Size of one serialized run record: u32 count + u8 value.
const RUN_RECORD_LEN: usize = 5;

//==================================================================================
// 1. Serialization
//==================================================================================

/// Serializes a run sequence into the wire layout. The empty sequence
/// serializes to the bare 4-byte zero count.
pub fn serialize(runs: &[Run]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(COUNT_HEADER_LEN + runs.len() * RUN_RECORD_LEN);
    buffer.extend_from_slice(&(runs.len() as u32).to_le_bytes());
    for run in runs {
        buffer.extend_from_slice(&run.count.to_le_bytes());
        buffer.push(run.value);
    }
    buffer
}

//==================================================================================
// 2. Deserialization
//==================================================================================

/// Deserializes the wire layout back into a run sequence.
///
/// Fails with [`RbtzipError::MalformedData`] if the buffer is shorter than
/// the count header, or if the declared run count implies more record bytes
/// than the buffer holds. Trailing bytes beyond the declared records are
/// ignored.
pub fn deserialize(buffer: &[u8]) -> Result<RunSequence, RbtzipError> {
    if buffer.len() < COUNT_HEADER_LEN {
        return Err(RbtzipError::MalformedData(format!(
            "buffer too small for run count header: need {}, got {}",
            COUNT_HEADER_LEN,
            buffer.len()
        )));
    }

    let declared = u32::from_le_bytes(buffer[..COUNT_HEADER_LEN].try_into().unwrap());
    let body = &buffer[COUNT_HEADER_LEN..];

    // u64 arithmetic: declared * 5 must not wrap on 32-bit usize.
    let needed = u64::from(declared) * RUN_RECORD_LEN as u64;
    if needed > body.len() as u64 {
        return Err(RbtzipError::MalformedData(format!(
            "truncated run records: {} runs need {} bytes, only {} remain",
            declared,
            needed,
            body.len()
        )));
    }

    let mut runs = Vec::with_capacity(declared as usize);
    for record in body[..needed as usize].chunks_exact(RUN_RECORD_LEN) {
        runs.push(Run {
            count: u32::from_le_bytes(record[..4].try_into().unwrap()),
            value: record[4],
        });
    }
    Ok(runs)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
