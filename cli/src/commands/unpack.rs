//! # DocxKit Unpack Command
//!
//! File: cli/src/commands/unpack.rs
//!
//! ## Overview
//!
//! Implements `docx-unpack`, which extracts a `.docx` into a directory for editing:
//!
//! 1. Fail if the archive does not exist (before creating any directory)
//! 2. Warn, without stopping, if the file does not end in `.docx`
//! 3. Create the output directory and extract every entry into it
//! 4. Count the files now present in the output directory
//! 5. Print a summary with the main content path and a suggested RSID
//!
//! The RSID is only suggested; it is never written into the extracted XML.
//!
//! ## Examples
//!
//! ```bash
//! docx-unpack document.docx ./unpacked
//! ```
//!
use super::ToolArgs;
use crate::common::archive::{reader, DOCX_EXTENSION};
use crate::common::fs::io::{count_files, has_extension};
use crate::common::rsid::generate_rsid;
use crate::core::config::Config;
use crate::core::error::{DocxError, Result};
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Arguments for `docx-unpack`.
#[derive(Parser, Debug)]
#[command(
    name = "docx-unpack",
    about = "Unpack a .docx file to a directory for editing",
    version
)]
pub struct UnpackArgs {
    /// Path to the .docx file
    pub docx_file: PathBuf,
    /// Directory to extract contents to (created if missing)
    pub output_directory: PathBuf,
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ToolArgs for UnpackArgs {
    const USAGE: &'static str = "Usage: docx-unpack <docx_file> <output_directory>";
    const EXAMPLE: &'static str = "Example: docx-unpack document.docx ./unpacked";

    fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Outcome of a successful unpack, rendered as the command's summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackReport {
    pub archive_path: PathBuf,
    pub output_dir: PathBuf,
    pub file_count: usize,
    pub main_part: String,
    pub rsid: String,
}

impl fmt::Display for UnpackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let archive_name = self
            .archive_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.archive_path.to_string_lossy());
        let output_dir = self.output_dir.display();
        writeln!(f, "✓ Unpacked {archive_name} to {output_dir}")?;
        writeln!(f, "  Files extracted: {}", self.file_count)?;
        writeln!(f, "  Main content: {output_dir}/{}", self.main_part)?;
        writeln!(f)?;
        writeln!(f, "  Suggested RSID for tracked changes: {}", self.rsid)?;
        write!(f, "  Use this RSID in your editing scripts for consistent revision tracking.")
    }
}

/// Handler invoked by the `docx-unpack` binary.
pub fn handle_unpack(args: UnpackArgs, cfg: &Config) -> Result<()> {
    // Checked here too so the extension warning never precedes "File not found".
    if !args.docx_file.exists() {
        anyhow::bail!(DocxError::FileNotFound(args.docx_file));
    }
    if !has_extension(&args.docx_file, DOCX_EXTENSION) {
        println!("{}", extension_warning(&args.docx_file));
    }
    let report = unpack(&args.docx_file, &args.output_directory, cfg.unpack.main_part())?;
    println!("{report}");
    Ok(())
}

/// Message shown when the input does not carry the `.docx` extension.
pub fn extension_warning(path: &Path) -> String {
    format!(
        "Warning: File does not have .{DOCX_EXTENSION} extension: {}",
        path.display()
    )
}

/// Extracts `archive_path` into `output_dir` and builds the summary.
///
/// # Errors
///
/// - `DocxError::FileNotFound` if `archive_path` does not exist; `output_dir` is
///   not created in that case.
/// - `DocxError::InvalidArchive` if the file is not a zip container.
/// - Any I/O error during extraction. Files already extracted are left in place.
pub fn unpack(archive_path: &Path, output_dir: &Path, main_part: &str) -> Result<UnpackReport> {
    if !archive_path.exists() {
        anyhow::bail!(DocxError::FileNotFound(archive_path.to_path_buf()));
    }

    let stats = reader::extract_archive(archive_path, output_dir)?;
    if stats.skipped > 0 {
        warn!("{} archive entries were skipped", stats.skipped);
    }
    let file_count = count_files(output_dir)?;

    Ok(UnpackReport {
        archive_path: archive_path.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        file_count,
        main_part: main_part.to_string(),
        rsid: generate_rsid(),
    })
}
