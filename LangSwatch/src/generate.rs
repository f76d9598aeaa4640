//! End-to-end palette generation
//!
//! Output is encoded fully in memory and written through a temporary file
//! next to the destination, which is only renamed into place once every
//! byte has been flushed. A failed run leaves no file behind. Symlinks are
//! followed and an existing file keeps its permissions.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::formats::{PaletteFormat, encode_to_vec};
use crate::palette::{ColorMap, Palette, build_palette};

/// Build a palette from `colors` and write it to `dest` as `format_id`.
///
/// The format is checked before anything else, and the palette is fully
/// resolved before the destination is touched.
///
/// Returns the number of swatches written.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] for an unknown `format_id`
/// - [`Error::InvalidColorSpec`] if any colour cannot be resolved
/// - [`Error::WriteFailure`] if `dest` cannot be written
pub fn generate_palette_file<P: AsRef<Path>>(
    colors: &ColorMap,
    format_id: &str,
    dest: P,
) -> Result<usize> {
    let format: PaletteFormat = format_id.parse()?;
    let palette = build_palette(colors)?;
    write_palette(&palette, format, dest)?;
    Ok(palette.len())
}

/// Encode `palette` as `format` and write it atomically to `dest`.
///
/// # Errors
/// Returns an encoder error, or [`Error::WriteFailure`] if `dest` cannot be
/// written.
pub fn write_palette<P: AsRef<Path>>(
    palette: &Palette,
    format: PaletteFormat,
    dest: P,
) -> Result<()> {
    let dest = dest.as_ref();

    tracing::info!(
        "Writing {} palette ({} swatches) to {:?}",
        format,
        palette.len(),
        dest
    );

    let bytes = encode_to_vec(palette, format)?;
    write_atomic(dest, &bytes)?;

    tracing::info!("Wrote {} bytes", bytes.len());
    Ok(())
}

fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    // Write through symlinks to the file they point at
    let target = std::fs::canonicalize(dest).unwrap_or_else(|_| dest.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = std::fs::metadata(&target).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".langswatch");
    // New files get the usual 0666 minus umask instead of tempfile's 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| Error::write_failure(dest, e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.flush())
        .map_err(|e| Error::write_failure(dest, e))?;

    #[cfg(unix)]
    {
        if let Some(permissions) = existing {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| Error::write_failure(dest, e))?;
        }
    }
    #[cfg(not(unix))]
    let _ = existing;

    tmp.persist(&target)
        .map_err(|e| Error::write_failure(dest, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::LanguageEntry;

    fn colors() -> ColorMap {
        let mut colors = ColorMap::new();
        colors.insert("Rust".to_string(), LanguageEntry::with_color("#dea584"));
        colors.insert("Go".to_string(), LanguageEntry::with_color("#00ADD8"));
        colors.insert("Text".to_string(), LanguageEntry::default());
        colors
    }

    #[test]
    fn test_generate_csv() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.csv");

        let count = generate_palette_file(&colors(), "csv", &dest).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "Language,R,G,B,Hex\nGo,0,173,216,#00add8\nRust,222,165,132,#dea584\n"
        );
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.pdf");

        let err = generate_palette_file(&colors(), "pdf", &dest).unwrap_err();

        assert!(matches!(err, Error::UnsupportedFormat(ref id) if id == "pdf"));
        assert!(!dest.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_colour_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.gpl");
        let mut colors = colors();
        colors.insert("Broken".to_string(), LanguageEntry::with_color("#12"));

        let err = generate_palette_file(&colors, "gpl", &dest).unwrap_err();

        assert!(matches!(err, Error::InvalidColorSpec { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_missing_directory_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("langs.ase");

        let err = generate_palette_file(&colors(), "ase", &dest).unwrap_err();

        match err {
            Error::WriteFailure { path, .. } => assert_eq!(path, dest),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.json");
        std::fs::write(&dest, "stale contents that are longer than the palette").unwrap();

        generate_palette_file(&colors(), "json", &dest).unwrap();

        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "{\n    \"Go\": \"#00add8\",\n    \"Rust\": \"#dea584\"\n}"
        );
    }

    fn assert_dir_empty(dir: &Path) {
        let entries: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert!(entries.is_empty(), "left behind: {entries:?}");
    }

    #[test]
    fn test_encoder_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.aco");
        let colors: ColorMap = (0..=usize::from(u16::MAX))
            .map(|i| (format!("L{i:05}"), LanguageEntry::with_color("#000000")))
            .collect();

        let err = generate_palette_file(&colors, "aco", &dest).unwrap_err();

        assert!(matches!(
            err,
            Error::TooManyColors { format: "aco", count: 65536, max: 65535 }
        ));
        assert_dir_empty(dir.path());
    }

    #[test]
    fn test_name_too_long_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.ase");
        let mut colors = ColorMap::new();
        colors.insert("x".repeat(usize::from(u16::MAX)), LanguageEntry::with_color("#fff"));

        let err = generate_palette_file(&colors, "ase", &dest).unwrap_err();

        assert!(matches!(err, Error::NameTooLong { .. }));
        assert_dir_empty(dir.path());
    }

    #[cfg(unix)]
    #[test]
    fn test_writes_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.csv");
        let link = dir.path().join("link.csv");
        std::fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        generate_palette_file(&colors(), "csv", &link).unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(std::fs::read_to_string(&real).unwrap().starts_with("Language,R,G,B,Hex\n"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("secret.csv");
        std::fs::write(&dest, "old").unwrap();
        std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o600)).unwrap();

        generate_palette_file(&colors(), "csv", &dest).unwrap();

        let mode = std::fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_regular_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("langs.gpl");

        generate_palette_file(&colors(), "gpl", &dest).unwrap();

        let mode = std::fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o600);
        assert_eq!(mode & 0o111, 0);
    }
}
