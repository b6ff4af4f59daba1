//! Error types for CRC-32 forcing operations

use std::io;
use thiserror::Error;

/// Result type alias for CRC-32 forcing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CRC-32 forcing operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading or patching the target file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Patch region does not fit inside the file
    #[error("byte offset {offset} plus 4 exceeds file length {file_len}")]
    OffsetOutOfRange {
        /// Requested byte offset of the patch region
        offset: u64,
        /// Actual file length in bytes
        file_len: u64,
    },

    /// Polynomial division by the zero polynomial
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// No multiplicative inverse modulo the generator polynomial
    ///
    /// Cannot occur with the standard CRC-32 generator; hitting this means
    /// the generator constant itself is wrong.
    #[error("polynomial {0:#x} has no inverse modulo the generator polynomial")]
    NoInverse(u64),

    /// Recomputed CRC-32 does not match the requested value
    ///
    /// The 4 target bytes have already been rewritten when this is
    /// returned, so the file is in a patched-but-unverified state.
    #[error("verification failed: expected CRC-32 {expected:08X}, recomputed {actual:08X}")]
    Verification {
        /// The CRC-32 the patch was supposed to produce
        expected: u32,
        /// The CRC-32 actually recomputed after patching
        actual: u32,
    },
}
