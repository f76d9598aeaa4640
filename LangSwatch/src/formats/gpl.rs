//! GIMP palette (`.gpl`) writing
//!
//! ```text
//! GIMP Palette
//! # GitHub Languages
//!   0 173 216 Go
//! ```
//!
//! Lines always end in `\n` regardless of platform.

use std::io::Write;

use super::{PALETTE_TITLE, PaletteEncoder, PaletteFormat};
use crate::error::Result;
use crate::palette::Palette;

/// First line of every GIMP palette
pub const GPL_MAGIC: &str = "GIMP Palette";

/// `.gpl` encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct GplEncoder;

impl PaletteEncoder for GplEncoder {
    fn format(&self) -> PaletteFormat {
        PaletteFormat::Gpl
    }

    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "{GPL_MAGIC}")?;
        writeln!(sink, "# {PALETTE_TITLE}")?;

        for record in palette {
            let [r, g, b] = record.rgb8();
            writeln!(sink, "{r:>3} {g:>3} {b:>3} {}", record.name)?;
        }
        Ok(())
    }
}
