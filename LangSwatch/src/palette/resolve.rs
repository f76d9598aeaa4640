//! Colour specification resolution
//!
//! Accepts anything `csscolorparser` understands: `#rgb`, `#rrggbb`, CSS
//! named colours, `rgb()`/`hsl()` functions.

use super::ColorRecord;
use crate::error::{Error, Result};

/// Resolve `spec` into a [`ColorRecord`] named `name`.
///
/// Channels are quantized to 8 bits first so `rgb` and `hex` always
/// describe exactly the same colour. Alpha is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidColorSpec`] if the spec cannot be parsed.
pub fn resolve_color(name: &str, spec: &str) -> Result<ColorRecord> {
    let color = csscolorparser::parse(spec.trim()).map_err(|e| Error::InvalidColorSpec {
        name: name.to_string(),
        spec: spec.to_string(),
        reason: e.to_string(),
    })?;

    let [r, g, b, _] = color.to_rgba8();

    Ok(ColorRecord {
        name: name.to_string(),
        rgb: [r, g, b].map(|c| f64::from(c) / 255.0),
        hex: format!("#{r:02x}{g:02x}{b:02x}"),
    })
}
