//! Palette file formats
//!
//! Every format is a stateless [`PaletteEncoder`] that writes a whole
//! [`Palette`] to a sink:
//!
//! - **ccxml** - Colour Chooser XML palette
//! - **gpl** - GIMP palette (text)
//! - **ase** - Adobe Swatch Exchange (binary, block-framed)
//! - **aco** - Adobe Photoshop colour swatches (binary, v1 + v2 sections)
//! - **json** - name to hex object
//! - **csv** - name, RGB and hex rows

pub mod aco;
pub mod ase;
pub mod binary;
pub mod ccxml;
pub mod csv;
pub mod gpl;
pub mod json;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::palette::Palette;

pub use aco::AcoEncoder;
pub use ase::AseEncoder;
pub use ccxml::CcxmlEncoder;
pub use csv::CsvEncoder;
pub use gpl::GplEncoder;
pub use json::JsonEncoder;

/// Title embedded by formats that carry a palette name.
pub const PALETTE_TITLE: &str = "GitHub Languages";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFormat {
    Ccxml,
    Gpl,
    Ase,
    Aco,
    Json,
    Csv,
}

impl PaletteFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [PaletteFormat; 6] = [
        Self::Ccxml,
        Self::Gpl,
        Self::Ase,
        Self::Aco,
        Self::Json,
        Self::Csv,
    ];

    /// Look up a format by its identifier (exact, lowercase).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Identifier used on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Ccxml => "ccxml",
            Self::Gpl => "gpl",
            Self::Ase => "ase",
            Self::Aco => "aco",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Conventional file extension
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Ccxml => "xml",
            other => other.id(),
        }
    }

    /// The encoder for this format.
    #[must_use]
    pub fn encoder(self) -> &'static dyn PaletteEncoder {
        match self {
            Self::Ccxml => &CcxmlEncoder,
            Self::Gpl => &GplEncoder,
            Self::Ase => &AseEncoder,
            Self::Aco => &AcoEncoder,
            Self::Json => &JsonEncoder,
            Self::Csv => &CsvEncoder,
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaletteFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Writes a [`Palette`] in one file format.
pub trait PaletteEncoder {
    /// The format this encoder produces.
    fn format(&self) -> PaletteFormat;

    /// Encode the whole palette into `sink`.
    ///
    /// # Errors
    /// Returns an error if writing to `sink` fails or the palette cannot be
    /// represented in this format.
    fn encode(&self, palette: &Palette, sink: &mut dyn Write) -> Result<()>;
}

/// Encoder for a format identifier, or `None` if it is not recognised.
pub fn encoder_for(format_id: &str) -> Option<&'static dyn PaletteEncoder> {
    PaletteFormat::from_id(format_id).map(PaletteFormat::encoder)
}

/// Encode `palette` into a fresh buffer.
///
/// # Errors
/// Returns any error raised by the format's encoder.
pub fn encode_to_vec(palette: &Palette, format: PaletteFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    format.encoder().encode(palette, &mut buffer)?;
    Ok(buffer)
}
