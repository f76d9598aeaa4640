//! Colour map loading
//!
//! Reads a JSON document shaped like the linguist languages data:
//!
//! ```json
//! { "Go": { "type": "programming", "color": "#00ADD8" }, "Text": { "type": "prose" } }
//! ```

use std::path::Path;

use crate::error::Result;
use crate::palette::ColorMap;

/// Read a colour map from a JSON file.
///
/// # Errors
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, or
/// [`Error::JsonError`](crate::Error::JsonError) if it is not a valid map.
pub fn read_color_map<P: AsRef<Path>>(path: P) -> Result<ColorMap> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let colors = parse_color_map(&text)?;
    tracing::info!("Loaded {} entries from {:?}", colors.len(), path.as_ref());
    Ok(colors)
}

/// Parse a colour map from JSON text, keeping document order.
///
/// # Errors
/// Returns [`Error::JsonError`](crate::Error::JsonError) on malformed input.
pub fn parse_color_map(text: &str) -> Result<ColorMap> {
    Ok(serde_json::from_str(text)?)
}
