//! Adobe Swatch Exchange (`.ase`) writing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! # Layout
//!
//! All integers big-endian.
//!
//! ```text
//! "ASEF" | u16 major = 1 | u16 minor = 0 | u32 block count
//! block: u16 type | u32 content length | content
//! ```
//!
//! The palette is written as one group: a group-start block named
//! [`PALETTE_TITLE`], one colour block per swatch, and an empty group-end
//! block.

use std::io::Write;

use super::binary::SwatchWriteExt;
use super::{PALETTE_TITLE, PaletteEncoder, PaletteFormat};
use crate::error::{Error, Result};
use crate::palette::{ColorRecord, Palette};

/// "ASEF" file signature
pub const ASE_SIGNATURE: [u8; 4] = *b"ASEF";

/// File version 1.0
pub const ASE_VERSION: (u16, u16) = (1, 0);

/// Block type tags
pub const BLOCK_GROUP_START: u16 = 0xC001;
pub const BLOCK_GROUP_END: u16 = 0xC002;
pub const BLOCK_COLOR: u16 = 0x0001;

/// Colour model tag for RGB entries
pub const COLOR_MODEL_RGB: [u8; 4] = *b"RGB ";

/// Colour type: 0 = global, 1 = spot, 2 = normal
pub const COLOR_TYPE_NORMAL: u16 = 2;

/// `.ase` encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct AseEncoder;

impl PaletteEncoder for AseEncoder {
    fn format(&self) -> PaletteFormat {
        PaletteFormat::Ase
    }

    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()> {
        let block_count = u32::try_from(palette.len())
            .ok()
            .and_then(|n| n.checked_add(2))
            .ok_or(Error::TooManyColors {
                format: "ase",
                count: palette.len(),
                max: u32::MAX as usize - 2,
            })?;

        sink.write_all(&ASE_SIGNATURE)?;
        sink.write_u16_be(ASE_VERSION.0)?;
        sink.write_u16_be(ASE_VERSION.1)?;
        sink.write_u32_be(block_count)?;

        let mut content = Vec::new();
        content.write_utf16_u16_prefixed(PALETTE_TITLE)?;
        write_block(sink, BLOCK_GROUP_START, &content)?;

        for record in palette {
            content.clear();
            write_color_content(&mut content, record)?;
            write_block(sink, BLOCK_COLOR, &content)?;
        }

        write_block(sink, BLOCK_GROUP_END, &[])?;

        tracing::debug!("ASE: wrote {block_count} blocks");
        Ok(())
    }
}

/// Name, colour model, three f32 channels, colour type.
fn write_color_content(content: &mut Vec<u8>, record: &ColorRecord) -> Result<()> {
    content.write_utf16_u16_prefixed(&record.name)?;
    content.write_all(&COLOR_MODEL_RGB)?;
    for channel in record.rgb_f32() {
        content.write_f32_be(channel)?;
    }
    content.write_u16_be(COLOR_TYPE_NORMAL)
}

fn write_block(sink: &mut dyn Write, block_type: u16, content: &[u8]) -> Result<()> {
    sink.write_u16_be(block_type)?;
    // Bounded by the u16 name length prefix
    sink.write_u32_be(content.len() as u32)?;
    sink.write_all(content)?;
    Ok(())
}
