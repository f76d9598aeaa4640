//! Photoshop colour swatches (`.aco`) writing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! # Layout
//!
//! Two sections back to back, each `u16 version | u16 count | records`:
//!
//! - version 1: 10-byte colour records only
//! - version 2: 10-byte colour record + `u32 length | UTF-16BE name | 0x0000`
//!
//! A colour record is `u16 colour space | u16 w | u16 x | u16 y | u16 z`;
//! for RGB (space 0) w/x/y are red/green/blue scaled to `0..=65535` and z
//! is zero.

use std::io::Write;

use super::binary::SwatchWriteExt;
use super::{PaletteEncoder, PaletteFormat};
use crate::error::{Error, Result};
use crate::palette::{ColorRecord, Palette};

/// Colour space id for RGB
pub const COLOR_SPACE_RGB: u16 = 0;

/// `.aco` encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct AcoEncoder;

impl PaletteEncoder for AcoEncoder {
    fn format(&self) -> PaletteFormat {
        PaletteFormat::Aco
    }

    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()> {
        let count = u16::try_from(palette.len()).map_err(|_| Error::TooManyColors {
            format: "aco",
            count: palette.len(),
            max: usize::from(u16::MAX),
        })?;

        // Version 1: colours only
        sink.write_u16_be(1)?;
        sink.write_u16_be(count)?;
        for record in palette {
            write_color(sink, record)?;
        }

        // Version 2: colours with names
        sink.write_u16_be(2)?;
        sink.write_u16_be(count)?;
        for record in palette {
            write_color(sink, record)?;
            sink.write_utf16_u32_prefixed(&record.name)?;
        }

        tracing::debug!("ACO: wrote {count} swatches per section");
        Ok(())
    }
}

fn write_color(sink: &mut dyn Write, record: &ColorRecord) -> Result<()> {
    let [r, g, b] = record.rgb16();
    sink.write_u16_be(COLOR_SPACE_RGB)?;
    sink.write_u16_be(r)?;
    sink.write_u16_be(g)?;
    sink.write_u16_be(b)?;
    sink.write_u16_be(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::test_palette as palette;

    const COLOR_RECORD_SIZE: usize = 10;

    fn encode(palette: &Palette) -> Vec<u8> {
        let mut out = Vec::new();
        AcoEncoder.encode(palette, &mut out).unwrap();
        out
    }

    #[test]
    fn test_empty_palette() {
        assert_eq!(encode(&Palette::new()), [0, 1, 0, 0, 0, 2, 0, 0]);
    }

    #[test]
    fn test_single_swatch_bytes() {
        let out = encode(&palette(&[("Go", [0.0, 1.0, 0.5])]));

        let color = [0, 0, 0, 0, 0xFF, 0xFF, 0x7F, 0xFF, 0, 0];
        let mut expected = vec![0, 1, 0, 1];
        expected.extend_from_slice(&color);
        expected.extend_from_slice(&[0, 2, 0, 1]);
        expected.extend_from_slice(&color);
        expected.extend_from_slice(&[0, 0, 0, 3, 0, b'G', 0, b'o', 0, 0]);

        assert_eq!(out, expected);
    }

    #[test]
    fn test_sections_share_colours() {
        let out = encode(&palette(&[("a", [0.1, 0.2, 0.3]), ("b", [0.9, 0.8, 0.7])]));

        let v1 = &out[4..4 + 2 * COLOR_RECORD_SIZE];
        let v2 = &out[4 + 2 * COLOR_RECORD_SIZE + 4..];
        // Each v2 entry: record + 4-byte length + "a\0" in UTF-16
        let stride = COLOR_RECORD_SIZE + 8;
        assert_eq!(&v2[..COLOR_RECORD_SIZE], &v1[..COLOR_RECORD_SIZE]);
        assert_eq!(
            &v2[stride..stride + COLOR_RECORD_SIZE],
            &v1[COLOR_RECORD_SIZE..]
        );
    }
}
