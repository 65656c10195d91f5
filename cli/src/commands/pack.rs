//! # DocxKit Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! Implements `docx-pack`, which turns an unpacked document directory back into a
//! `.docx` file:
//!
//! 1. Validate that the input is an existing directory holding `[Content_Types].xml`
//! 2. Force the output path to end in `.docx` and create its parent directories
//! 3. Write every file under the input directory into a deflate-compressed archive
//! 4. Print a summary with the file count, archive size, and a verification hint
//!
//! Validation runs before anything touches the filesystem, so a rejected input
//! never leaves an output file behind.
//!
//! ## Examples
//!
//! ```bash
//! docx-pack ./unpacked document-edited.docx
//! docx-pack ./unpacked build/final      # writes build/final.docx
//! ```
//!
use super::ToolArgs;
use crate::common::archive::{
    writer::{self, PackOptions},
    CONTENT_TYPES_MARKER, DOCX_EXTENSION,
};
use crate::common::fs::io::{ensure_dir_exists, ensure_extension};
use crate::core::config::Config;
use crate::core::error::{DocxError, Result};
use anyhow::Context;
use clap::Parser;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for `docx-pack`.
#[derive(Parser, Debug)]
#[command(
    name = "docx-pack",
    about = "Pack a directory back into a .docx file",
    version
)]
pub struct PackArgs {
    /// Directory containing unpacked docx contents
    pub input_directory: PathBuf,
    /// Path for the output .docx file (the extension is forced to .docx)
    pub output_docx: PathBuf,
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ToolArgs for PackArgs {
    const USAGE: &'static str = "Usage: docx-pack <input_directory> <output_docx>";
    const EXAMPLE: &'static str = "Example: docx-pack ./unpacked document-edited.docx";

    fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Outcome of a successful pack, rendered as the command's summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub file_count: usize,
    pub size_bytes: u64,
}

impl PackReport {
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

impl fmt::Display for PackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.output_path.display();
        writeln!(f, "✓ Packed {} to {}", self.input_dir.display(), output)?;
        writeln!(f, "  Files included: {}", self.file_count)?;
        writeln!(f, "  Output size: {:.1} KB", self.size_kb())?;
        writeln!(f)?;
        write!(f, "  Verify with: pandoc --track-changes=all {output} -o verification.md")
    }
}

/// Handler invoked by the `docx-pack` binary.
pub fn handle_pack(args: PackArgs, cfg: &Config) -> Result<()> {
    let options = PackOptions {
        compression_level: cfg.pack.compression_level,
    };
    let report = pack(&args.input_directory, &args.output_docx, &options)?;
    println!("{report}");
    Ok(())
}

/// Checks that `input_dir` is an existing directory with the marker file at its root.
pub fn validate_input_dir(input_dir: &Path) -> Result<()> {
    if !input_dir.exists() {
        anyhow::bail!(DocxError::DirectoryNotFound(input_dir.to_path_buf()));
    }
    if !input_dir.is_dir() {
        anyhow::bail!(DocxError::NotADirectory(input_dir.to_path_buf()));
    }
    if !input_dir.join(CONTENT_TYPES_MARKER).is_file() {
        anyhow::bail!(DocxError::MissingMarker {
            marker: CONTENT_TYPES_MARKER
        });
    }
    Ok(())
}

/// Packs `input_dir` into a `.docx` at (the normalized form of) `output`.
pub fn pack(input_dir: &Path, output: &Path, options: &PackOptions) -> Result<PackReport> {
    validate_input_dir(input_dir)?;

    let output_path = ensure_extension(output.to_path_buf(), DOCX_EXTENSION);
    if output_path != output {
        info!("Output path {} normalized to {}", output.display(), output_path.display());
    }
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let file_count = writer::pack_directory(input_dir, &output_path, options)
        .with_context(|| format!("Failed to create docx {}", output_path.display()))?;
    let size_bytes = fs::metadata(&output_path)
        .with_context(|| format!("Failed to read size of {}", output_path.display()))?
        .len();

    Ok(PackReport {
        input_dir: input_dir.to_path_buf(),
        output_path,
        file_count,
        size_bytes,
    })
}
