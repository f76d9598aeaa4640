//! Raw colour map to ordered [`Palette`]

use indexmap::IndexMap;
use serde::Deserialize;

use super::{Palette, resolve_color};
use crate::error::Result;

/// Raw per-language record. Only `color` is read; any other fields in the
/// source document are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageEntry {
    #[serde(default)]
    pub color: Option<String>,
}

impl LanguageEntry {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
        }
    }
}

/// Name to raw record, in source order.
pub type ColorMap = IndexMap<String, LanguageEntry>;

/// Sort `colors` case-insensitively by name and resolve every entry that has
/// a `color` field.
///
/// Names that compare equal when lowercased keep their source order.
///
/// # Errors
///
/// Returns [`Error::InvalidColorSpec`](crate::Error::InvalidColorSpec) for the
/// first unparseable spec; no palette is produced in that case.
pub fn build_palette(colors: &ColorMap) -> Result<Palette> {
    let mut entries: Vec<(&str, &str)> = colors
        .iter()
        .filter_map(|(name, entry)| match entry.color.as_deref() {
            Some(spec) => Some((name.as_str(), spec)),
            None => {
                tracing::debug!("Skipping {name}: no colour");
                None
            }
        })
        .collect();

    entries.sort_by_cached_key(|(name, _)| name.to_lowercase());

    let records = entries
        .into_iter()
        .map(|(name, spec)| resolve_color(name, spec))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Built palette: {} swatches from {} entries",
        records.len(),
        colors.len()
    );
    Ok(Palette { records })
}
