//! JSON name to hex mapping
//!
//! Keys keep palette order; indented with four spaces.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

use super::{PaletteEncoder, PaletteFormat};
use crate::error::Result;
use crate::palette::Palette;

/// `.json` encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl PaletteEncoder for JsonEncoder {
    fn format(&self) -> PaletteFormat {
        PaletteFormat::Json
    }

    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()> {
        let map: IndexMap<&str, &str> = palette
            .iter()
            .map(|r| (r.name.as_str(), r.hex.as_str()))
            .collect();

        let mut serializer = Serializer::with_formatter(sink, PrettyFormatter::with_indent(b"    "));
        map.serialize(&mut serializer)?;
        Ok(())
    }
}
