//! Patch planning: the 4-byte XOR delta that moves a file's CRC-32
//!
//! The CRC-32 of a byte stream is (up to reflection and complement) the
//! remainder of the stream, read as one huge GF(2) polynomial, modulo the
//! generator. Flipping bits at a fixed position therefore changes the CRC
//! by a known multiple of x^k, where k is the bit distance from that
//! position to the end of the stream. Inverting x^k modulo the generator
//! gives the exact 32-bit pattern to XOR into the file so the CRC lands on
//! the requested value.

use crate::error::Result;
use crate::poly::{multiply_mod, pow_mod, reciprocal_mod};

/// A planned 4-byte patch, produced by [`plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchPlan {
    /// Byte offset of the patched region within the file.
    pub offset: u64,
    /// XOR delta in the polynomial domain (bit i is the coefficient of
    /// x^i). Zero when the file already has the requested CRC.
    pub delta: u32,
}

impl PatchPlan {
    /// The XOR mask to apply to the 4 file bytes at [`Self::offset`].
    pub fn file_byte_mask(&self) -> [u8; 4] {
        delta_file_bytes(self.delta)
    }

    /// True when applying the patch leaves every byte unchanged.
    pub fn is_noop(&self) -> bool {
        self.delta == 0
    }
}

/// Computes the patch that takes a file of `file_len` bytes with CRC-32
/// `current_crc` to CRC-32 `target_crc` by XORing 4 bytes at `offset`.
///
/// Both CRCs are in the external convention (already reflected and
/// complemented). The caller must have established `offset + 4 <=
/// file_len` against the real file length.
pub fn plan(current_crc: u32, target_crc: u32, file_len: u64, offset: u64) -> Result<PatchPlan> {
    debug_assert!(
        offset.checked_add(4).is_some_and(|end| end <= file_len),
        "patch region must lie inside the file"
    );

    // Bit distance from the start of the patched region to the end of the
    // file; the patched bits are worth x^k per position in the CRC.
    let tail_bits = (file_len - offset) * 8;
    let reciprocal = reciprocal_mod(pow_mod(2, tail_bits))?;

    // XOR of the two CRCs, carried into the polynomial domain.
    let diff = (current_crc ^ target_crc).reverse_bits();
    let delta = multiply_mod(reciprocal, diff as u64) as u32;

    Ok(PatchPlan { offset, delta })
}

/// Maps a polynomial-domain delta onto file bytes.
///
/// Byte `i` of the patched region receives bits `[i*8, i*8+8)` of the
/// reflected delta, so each byte is individually bit-reversed relative to
/// the polynomial word. This is the same reflection the CRC engine applies
/// to input bytes, implemented once here so the convention cannot drift.
pub fn delta_file_bytes(delta: u32) -> [u8; 4] {
    delta.reverse_bits().to_le_bytes()
}
