//! In-place file patching
//!
//! Orchestrates the full forcing operation: measure the file, compute its
//! current CRC-32, plan the 4-byte delta, rewrite the target bytes, and
//! re-read the file to verify the result. The 4-byte write is the only
//! mutation performed; the file length never changes.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info};

use crate::crc32::crc32_reader;
use crate::error::{Error, Result};
use crate::planner;

/// Outcome of a successful forcing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForceReport {
    /// CRC-32 of the file before patching.
    pub original_crc: u32,
    /// Verified CRC-32 after patching; equals the requested target.
    pub new_crc: u32,
}

/// Forces the CRC-32 of the file at `path` to `target_crc` by XORing 4
/// bytes at `offset`, then re-reads the file to verify.
///
/// Nothing is written when the offset check or the initial CRC pass fails.
/// A [`Error::Verification`] result means the 4 bytes were already
/// rewritten but the re-read CRC did not match; no rollback is attempted.
///
/// ```no_run
/// let report = forcecrc32::force_crc32("save.dat", 0x40, 0xDEAD_BEEF)?;
/// println!("{:08X} -> {:08X}", report.original_crc, report.new_crc);
/// # Ok::<(), forcecrc32::Error>(())
/// ```
pub fn force_crc32<P: AsRef<Path>>(path: P, offset: u64, target_crc: u32) -> Result<ForceReport> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path.as_ref())?;

    let file_len = file.metadata()?.len();
    let region_ok = offset
        .checked_add(4)
        .is_some_and(|end| end <= file_len);
    if !region_ok {
        return Err(Error::OffsetOutOfRange { offset, file_len });
    }

    let original_crc = crc32_reader(&mut file)?;
    debug!("current CRC-32: {original_crc:08X}, file length: {file_len}");

    let plan = planner::plan(original_crc, target_crc, file_len, offset)?;
    debug!("polynomial-domain delta: {:08X}", plan.delta);

    let mut region = [0u8; 4];
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(&mut region)?;
    for (byte, mask) in region.iter_mut().zip(plan.file_byte_mask()) {
        *byte ^= mask;
    }
    file.seek(SeekFrom::Start(offset))?;
    file.write_all(&region)?;
    info!("wrote 4-byte patch at offset {offset}");

    file.seek(SeekFrom::Start(0))?;
    let new_crc = crc32_reader(&mut file)?;
    if new_crc != target_crc {
        return Err(Error::Verification {
            expected: target_crc,
            actual: new_crc,
        });
    }

    Ok(ForceReport {
        original_crc,
        new_crc,
    })
}
