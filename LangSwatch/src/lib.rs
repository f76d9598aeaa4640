//! # LangSwatch
//!
//! Turns a language-to-colour mapping (such as the linguist languages data)
//! into palette files for design and illustration tools.
//!
//! ## Supported Formats
//!
//! - **ccxml** - Colour Chooser XML palette
//! - **gpl** - GIMP palette
//! - **ase** - Adobe Swatch Exchange
//! - **aco** - Adobe Photoshop colour swatches
//! - **json** / **csv** - Plain name to colour listings
//!
//! ## Quick Start
//!
//! ```no_run
//! use langswatch::prelude::*;
//!
//! let colors = read_color_map("languages.json")?;
//! let count = generate_palette_file(&colors, "ase", "languages.ase")?;
//! println!("Wrote {count} swatches");
//! # Ok::<(), langswatch::Error>(())
//! ```
//!
//! ### Encoding in memory
//!
//! ```
//! use langswatch::prelude::*;
//!
//! let mut colors = ColorMap::new();
//! colors.insert("Rust".into(), LanguageEntry::with_color("#dea584"));
//!
//! let palette = build_palette(&colors)?;
//! let gpl = encode_to_vec(&palette, PaletteFormat::Gpl)?;
//! assert!(gpl.ends_with(b"222 165 132 Rust\n"));
//! # Ok::<(), langswatch::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `langswatch` command-line binary

pub mod error;
pub mod formats;
pub mod generate;
pub mod palette;
pub mod source;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{PaletteEncoder, PaletteFormat, encode_to_vec, encoder_for};
    pub use crate::generate::{generate_palette_file, write_palette};
    pub use crate::palette::{
        ColorMap, ColorRecord, LanguageEntry, Palette, build_palette, resolve_color,
    };
    pub use crate::source::{parse_color_map, read_color_map};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
