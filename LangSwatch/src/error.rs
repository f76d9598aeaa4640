//! Error types for `LangSwatch`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `LangSwatch` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Palette Building Errors ====================
    /// A colour specification could not be resolved to an RGB value.
    #[error("invalid colour spec '{spec}' for '{name}': {reason}")]
    InvalidColorSpec {
        /// The palette entry the spec belongs to.
        name: String,
        /// The raw colour specification string.
        spec: String,
        /// Why the colour parser rejected it.
        reason: String,
    },

    // ==================== Format Errors ====================
    /// The requested format identifier is not recognised.
    #[error("unsupported palette format: {0}")]
    UnsupportedFormat(String),

    /// The palette has more swatches than the format's count field can hold.
    #[error("{format} supports at most {max} colours, palette has {count}")]
    TooManyColors {
        /// The format identifier.
        format: &'static str,
        /// Number of swatches in the palette.
        count: usize,
        /// Largest count the format can encode.
        max: usize,
    },

    /// A swatch name does not fit the format's string length prefix.
    #[error("name too long for swatch string (max {max} UTF-16 units): {name}")]
    NameTooLong {
        /// The offending name.
        name: String,
        /// Largest encodable length in UTF-16 code units.
        max: usize,
    },

    // ==================== Output Errors ====================
    /// The destination could not be created, written or persisted.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Wrapped Errors ====================
    /// IO error from a sink or source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization error.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::WriteFailure`] for `path`.
    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for `LangSwatch` operations.
pub type Result<T> = std::result::Result<T, Error>;
