//! # DocxKit Filesystem Helpers
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by both tools:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) unless it already
//!   exists; fails if the path exists but is not a directory.
//! - **`has_extension`** / **`ensure_extension`**: Case-insensitive extension check
//!   and normalization, used for the `.docx` warning on unpack and the forced
//!   `.docx` suffix on pack.
//! - **`count_files`**: Counts regular files below a directory, used for the
//!   "Files extracted" figure.
//!
//! ## Usage
//!
//! ```rust
//! use docxkit::common::fs::io;
//! use std::path::PathBuf;
//!
//! let out = io::ensure_extension(PathBuf::from("edited.zip"), "docx");
//! assert_eq!(out, PathBuf::from("edited.docx"));
//! assert!(io::has_extension(&out, "DOCX"));
//! ```
//!
use crate::core::error::{DocxError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(DocxError::NotADirectory(path.to_path_buf()));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Returns `true` when `path` ends in `.<extension>`, ignoring ASCII case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    )
}

/// Forces `extension` onto `path` when it is missing or different.
///
/// A matching extension is kept as written (`Report.DOCX` stays untouched);
/// anything else is replaced (`out.zip` -> `out.docx`) or appended (`out` -> `out.docx`).
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    if !has_extension(&path, extension) {
        path.set_extension(extension);
    }
    path
}

/// Counts the regular files anywhere below `dir`. Symlinks are not followed.
pub fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory {}", dir.display()))?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
