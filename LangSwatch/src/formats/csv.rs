//! CSV rows of name, truncated RGB and hex
//!
//! ```text
//! Language,R,G,B,Hex
//! Go,0,173,216,#00add8
//! ```

use std::borrow::Cow;
use std::io::Write;

use super::{PaletteEncoder, PaletteFormat};
use crate::error::Result;
use crate::palette::Palette;

/// Header row
pub const CSV_HEADER: &str = "Language,R,G,B,Hex";

/// `.csv` encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl PaletteEncoder for CsvEncoder {
    fn format(&self) -> PaletteFormat {
        PaletteFormat::Csv
    }

    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "{CSV_HEADER}")?;

        for record in palette {
            let [r, g, b] = record.rgb8();
            writeln!(
                sink,
                "{},{r},{g},{b},{}",
                escape_field(&record.name),
                record.hex
            )?;
        }
        Ok(())
    }
}

/// Quote a field containing a comma, quote or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
