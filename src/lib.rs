//! This file is the root of the `rbtzip` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`,
//!     `checksum`, `container`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface consumed by the CLI binary and
//!     by embedding callers.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod checksum;
pub mod container;
pub mod entropy;
pub mod io;
pub mod kernels;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use container::{decode, decode_with, encode, encode_with};
pub use entropy::{EntropyCoder, PassthroughCoder};
pub use error::RbtzipError;
