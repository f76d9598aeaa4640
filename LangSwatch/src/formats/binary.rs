//! Big-endian write primitives shared by the binary swatch formats
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

use crate::error::{Error, Result};

/// UTF-16 code units of `s` plus the null terminator.
///
/// This is the value both Adobe formats store as a string length; characters
/// outside the BMP count twice (surrogate pair).
pub fn utf16_len_with_nul(s: &str) -> usize {
    s.encode_utf16().count() + 1
}

/// Write helpers over any [`Write`] sink.
pub trait SwatchWriteExt: Write {
    fn write_u16_be(&mut self, value: u16) -> Result<()> {
        self.write_u16::<BigEndian>(value)?;
        Ok(())
    }

    fn write_u32_be(&mut self, value: u32) -> Result<()> {
        self.write_u32::<BigEndian>(value)?;
        Ok(())
    }

    fn write_f32_be(&mut self, value: f32) -> Result<()> {
        self.write_f32::<BigEndian>(value)?;
        Ok(())
    }

    /// UTF-16BE code units of `s` followed by a `0x0000` terminator.
    fn write_utf16_nul(&mut self, s: &str) -> Result<()> {
        for unit in s.encode_utf16() {
            self.write_u16::<BigEndian>(unit)?;
        }
        self.write_u16::<BigEndian>(0)?;
        Ok(())
    }

    /// String with a u16 length prefix (`ase`).
    fn write_utf16_u16_prefixed(&mut self, s: &str) -> Result<()> {
        let len = u16::try_from(utf16_len_with_nul(s)).map_err(|_| Error::NameTooLong {
            name: s.to_string(),
            max: usize::from(u16::MAX) - 1,
        })?;
        self.write_u16_be(len)?;
        self.write_utf16_nul(s)
    }

    /// String with a u32 length prefix (`aco` version 2).
    fn write_utf16_u32_prefixed(&mut self, s: &str) -> Result<()> {
        let len = u32::try_from(utf16_len_with_nul(s)).map_err(|_| Error::NameTooLong {
            name: s.to_string(),
            max: u32::MAX as usize - 1,
        })?;
        self.write_u32_be(len)?;
        self.write_utf16_nul(s)
    }
}

impl<W: Write + ?Sized> SwatchWriteExt for W {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_len_counts_surrogate_pairs() {
        assert_eq!(utf16_len_with_nul(""), 1);
        assert_eq!(utf16_len_with_nul("Go"), 3);
        assert_eq!(utf16_len_with_nul("Ré"), 3);
        // U+1F980 is a surrogate pair in UTF-16
        assert_eq!(utf16_len_with_nul("a\u{1F980}"), 4);
    }

    #[test]
    fn test_u16_prefixed_string() {
        let mut buf = Vec::new();
        buf.write_utf16_u16_prefixed("Go").unwrap();
        assert_eq!(buf, [0, 3, 0, b'G', 0, b'o', 0, 0]);
    }

    #[test]
    fn test_u32_prefixed_string() {
        let mut buf = Vec::new();
        buf.write_utf16_u32_prefixed("\u{1F980}").unwrap();
        assert_eq!(buf, [0, 0, 0, 3, 0xD8, 0x3E, 0xDD, 0x80, 0, 0]);
    }

    #[test]
    fn test_u16_prefix_overflow() {
        let long = "x".repeat(usize::from(u16::MAX));
        let mut buf = Vec::new();
        assert!(matches!(
            buf.write_utf16_u16_prefixed(&long),
            Err(Error::NameTooLong { .. })
        ));
    }

    #[test]
    fn test_numbers_are_big_endian() {
        let mut buf = Vec::new();
        buf.write_u16_be(0xC001).unwrap();
        buf.write_u32_be(1).unwrap();
        buf.write_f32_be(1.0).unwrap();
        assert_eq!(buf, [0xC0, 0x01, 0, 0, 0, 1, 0x3F, 0x80, 0, 0]);
    }
}
