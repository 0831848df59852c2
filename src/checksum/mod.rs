//! Integrity primitives for the container format.
//!
//! Two tiers, used at different depths of the pipeline: a cheap CRC32 over
//! the stored payload for fast shallow corruption detection, and a SHA-256
//! digest over the original raw bytes for deep end-to-end verification.
//! Both are streaming and depend only on process-wide immutable tables, so
//! they are safe to drive concurrently from any number of threads.

pub mod crc32;
pub mod sha256;

pub use crc32::{crc32_of, Crc32};
pub use sha256::Sha256;
