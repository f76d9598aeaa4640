//! LangSwatch CLI - Command-line interface for palette generation

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::formats::PaletteFormat;
use crate::generate::generate_palette_file;
use crate::source::read_color_map;

#[derive(Parser)]
#[command(name = "langswatch")]
#[command(version, about = "Creates a palette file for GitHub language colours", long_about = None)]
struct Cli {
    /// Output filename (the format's extension is added if it has none)
    #[arg(required_unless_present = "list_formats")]
    output: Option<PathBuf>,

    /// Palette format (ccxml, gpl, ase, aco, json, csv)
    #[arg(short, long, default_value = "ccxml")]
    format: String,

    /// JSON file mapping language names to records with a "color" field
    #[arg(short, long, required_unless_present = "list_formats")]
    input: Option<PathBuf>,

    /// List supported formats and exit
    #[arg(long)]
    list_formats: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

/// Run the LangSwatch CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.list_formats {
        for format in PaletteFormat::ALL {
            println!("{:<6} .{}", format.id(), format.extension());
        }
        return Ok(());
    }

    // Reject unknown formats before reading or writing anything
    let format: PaletteFormat = cli.format.parse()?;

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        anyhow::bail!("both --input and an output path are required");
    };
    let output = with_default_extension(&output, format);

    let colors = read_color_map(&input)
        .with_context(|| format!("failed to load colours from {}", input.display()))?;
    let count = generate_palette_file(&colors, format.id(), &output)?;

    if !cli.quiet {
        println!("Wrote {count} colours to {}", output.display());
    }
    Ok(())
}

fn with_default_extension(path: &Path, format: PaletteFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}
