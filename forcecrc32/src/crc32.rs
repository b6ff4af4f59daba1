//! Bitwise reflected CRC-32 engine
//!
//! Implements the standard CRC-32 (as used by zlib, PNG, Ethernet):
//! reflected input and output, initial register of all ones, final
//! complement. The engine is deliberately bitwise rather than
//! table-driven; the forcing operation reads each file only twice and the
//! arithmetic in [`crate::poly`] dominates neither pass.

use std::io::{ErrorKind, Read};

use crate::error::Result;

/// Reflected form of the low 32 bits of [`crate::poly::POLYNOMIAL`].
const REFLECTED_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Chunk size for streaming passes over a reader.
const READ_BUFFER_SIZE: usize = 32 * 1024;

/// Incremental CRC-32 digest over a byte stream.
///
/// ```
/// use forcecrc32::Crc32;
///
/// let mut digest = Crc32::new();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0xCBF4_3926);
/// ```
#[derive(Debug, Clone)]
pub struct Crc32 {
    register: u32,
}

impl Crc32 {
    /// Creates a digest with the all-ones initial register.
    pub fn new() -> Self {
        Self {
            register: 0xFFFF_FFFF,
        }
    }

    /// Folds `data` into the digest, least-significant bit of each byte
    /// first.
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.register;
        for &byte in data {
            crc ^= byte as u32;
            for _ in 0..8 {
                let carry = crc & 1;
                crc >>= 1;
                if carry != 0 {
                    crc ^= REFLECTED_POLYNOMIAL;
                }
            }
        }
        self.register = crc;
    }

    /// Returns the externally visible CRC-32: the complement of the
    /// register. The digest itself is unchanged and may keep absorbing
    /// input.
    pub fn finalize(&self) -> u32 {
        !self.register
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the CRC-32 of a byte slice in one shot.
pub fn crc32(data: &[u8]) -> u32 {
    let mut digest = Crc32::new();
    digest.update(data);
    digest.finalize()
}

/// Computes the CRC-32 of everything remaining in `reader`, consuming it
/// sequentially in fixed-size chunks. The caller is responsible for
/// positioning the reader at the start of the data.
pub fn crc32_reader<R: Read>(mut reader: R) -> Result<u32> {
    let mut digest = Crc32::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => return Ok(digest.finalize()),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        digest.update(&buffer[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn known_vectors() {
        assert_eq!(crc32(b""), 0x0000_0000);
        assert_eq!(crc32(b"a"), 0xE8B7_BE43);
        assert_eq!(crc32(b"abc"), 0x3524_41C2);
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414F_A339
        );
    }

    #[test]
    fn incremental_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        for split in 0..data.len() {
            let mut digest = Crc32::new();
            digest.update(&data[..split]);
            digest.update(&data[split..]);
            assert_eq!(digest.finalize(), crc32(data), "split at {split}");
        }
    }

    #[test]
    fn finalize_does_not_consume() {
        let mut digest = Crc32::new();
        digest.update(b"1234");
        let _ = digest.finalize();
        digest.update(b"56789");
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }

    #[test]
    fn reader_pass_spans_chunk_boundaries() {
        // Longer than one read buffer so the loop takes several trips
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        let from_reader = crc32_reader(Cursor::new(&data)).expect("cursor reads cannot fail");
        assert_eq!(from_reader, crc32(&data));
    }
}
