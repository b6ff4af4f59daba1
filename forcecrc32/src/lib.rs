//! # forcecrc32 - force a file's CRC-32 to any chosen value
//!
//! Computes and applies the minimal byte patch that takes a binary file to
//! an arbitrary CRC-32: exactly 4 contiguous bytes at a caller-chosen
//! offset are XORed, and the file length never changes. Useful for
//! save-game and firmware editing tools that must keep an embedded
//! checksum field consistent after other edits.
//!
//! The interesting part is the arithmetic: the required delta is found by
//! inverting x^k modulo the CRC-32 generator polynomial in GF(2)[x], via
//! the extended Euclidean algorithm. See [`poly`] for the field
//! arithmetic and [`planner`] for the derivation.
//!
//! ## Examples
//!
//! ```no_run
//! # fn main() -> forcecrc32::Result<()> {
//! // Patch 4 bytes at offset 0x40 so the whole file checks out to
//! // 0xDEADBEEF, then verify by re-reading.
//! let report = forcecrc32::force_crc32("save.dat", 0x40, 0xDEAD_BEEF)?;
//! assert_eq!(report.new_crc, 0xDEAD_BEEF);
//! # Ok(())
//! # }
//! ```
//!
//! Only the standard reflected CRC-32 is supported (generator 0x104C11DB7,
//! initial register all ones, final complement), the variant used by zlib,
//! PNG, and Ethernet.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod crc32;
pub mod error;
pub mod patcher;
pub mod planner;
pub mod poly;

// Re-export commonly used types
pub use crc32::{Crc32, crc32, crc32_reader};
pub use error::{Error, Result};
pub use patcher::{ForceReport, force_crc32};
pub use planner::{PatchPlan, plan};
