//! Palette data model
//!
//! A [`Palette`] is the ordered sequence of resolved swatches every encoder
//! consumes. It is built once from a raw [`ColorMap`] and only read afterwards.

mod builder;
mod resolve;

pub use builder::{ColorMap, LanguageEntry, build_palette};
pub use resolve::resolve_color;

/// A named colour resolved from a colour specification.
///
/// `rgb` is the canonical value used by every encoder; `hex` is the same
/// colour as lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRecord {
    pub name: String,
    /// Red, green and blue, each in `[0.0, 1.0]`
    pub rgb: [f64; 3],
    pub hex: String,
}

impl ColorRecord {
    /// Channels scaled to `[0, 255]`, truncated.
    pub fn rgb8(&self) -> [u8; 3] {
        self.rgb.map(|c| (c * 255.0) as u8)
    }

    /// Channels scaled to `[0, 65535]`, truncated.
    pub fn rgb16(&self) -> [u16; 3] {
        self.rgb.map(|c| (c * 65535.0) as u16)
    }

    /// Channels as single-precision floats.
    pub fn rgb_f32(&self) -> [f32; 3] {
        self.rgb.map(|c| c as f32)
    }
}

/// Swatches in case-insensitive name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    records: Vec<ColorRecord>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorRecord;
    type IntoIter = std::slice::Iter<'a, ColorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Palette from literal records, in the given order.
#[cfg(test)]
pub(crate) fn test_palette(records: &[(&str, [f64; 3])]) -> Palette {
    let records = records
        .iter()
        .map(|(name, rgb)| {
            let record = ColorRecord {
                name: (*name).to_string(),
                rgb: *rgb,
                hex: String::new(),
            };
            let [r, g, b] = record.rgb8();
            ColorRecord {
                hex: format!("#{r:02x}{g:02x}{b:02x}"),
                ..record
            }
        })
        .collect();
    Palette { records }
}
