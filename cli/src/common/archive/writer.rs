//! # DocxKit Archive Writer (`common::archive::writer`)
//!
//! File: cli/src/common/archive/writer.rs
//!
//! ## Overview
//!
//! Builds a `.docx` container from an unpacked directory tree.
//!
//! ## Architecture
//!
//! Packing happens in two steps:
//!
//! 1. `collect_entries` walks the input directory with `walkdir` and produces one
//!    `PackEntry` per regular file, named by its path relative to the input root
//!    with `/` separators. `[Content_Types].xml` is moved to the front and the
//!    rest stay in sorted order, so repeated runs produce the same entry order.
//! 2. `pack_directory` streams each file into a `zip::ZipWriter` using the
//!    Deflated method and finalizes the central directory.
//!
//! Directories are not written as separate entries; they are implied by the
//! file names, which is how Word itself lays out documents.
//!
use super::CONTENT_TYPES_MARKER;
use crate::core::error::{DocxError, Result};
use anyhow::Context;
use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

/// Tuning for the archive writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackOptions {
    /// Deflate level (1-9). `None` uses the library default.
    pub compression_level: Option<i64>,
}

/// A file on disk and the name it will have inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Converts `path` (somewhere below `root`) into an archive entry name.
///
/// # Errors
///
/// Fails if `path` is not below `root` or contains a component that is not
/// valid UTF-8.
pub fn archive_entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} is not inside {}", path.display(), root.display()))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| DocxError::NonUtf8Path(path.to_path_buf()))?;
                parts.push(part);
            }
            Component::CurDir => {}
            other => anyhow::bail!("Unexpected component {:?} in {}", other, path.display()),
        }
    }
    Ok(parts.join("/"))
}

/// Lists every regular file below `input_dir` as a `PackEntry`.
///
/// `exclude`, when it names an existing file inside the tree, is left out. This
/// keeps a previous output archive from being packed into the new one when the
/// destination sits inside the input directory.
pub fn collect_entries(input_dir: &Path, exclude: Option<&Path>) -> Result<Vec<PackEntry>> {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());
    let mut entries = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(true).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk directory {}", input_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(excluded) = &excluded {
            if entry.path().canonicalize().ok().as_ref() == Some(excluded) {
                debug!("Skipping output archive {}", entry.path().display());
                continue;
            }
        }
        let name = archive_entry_name(input_dir, entry.path())?;
        entries.push(PackEntry {
            path: entry.into_path(),
            name,
        });
    }

    if let Some(pos) = entries.iter().position(|e| e.name == CONTENT_TYPES_MARKER) {
        let marker = entries.remove(pos);
        entries.insert(0, marker);
    }
    Ok(entries)
}

/// # Pack Directory (`pack_directory`)
///
/// Packs every regular file below `input_dir` into a new Deflated archive at
/// `output`, with `[Content_Types].xml` as the first entry. An existing file at
/// `output` that sits inside the input tree is not packed into itself.
///
/// ## Arguments
///
/// * `input_dir` - Root of the unpacked document. Entry names are relative to it.
/// * `output` - Archive path. Created or truncated; its parent must already exist.
/// * `options` - Compression settings (`PackOptions`).
///
/// ## Returns
///
/// * `Result<usize>` - The number of files written into the archive.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - A file name below `input_dir` is not valid UTF-8 (`DocxError::NonUtf8Path`).
///   Entries are collected first, so `output` is not created in this case.
/// - Walking the tree or reading a file fails.
/// - Creating or writing the archive fails. The archive may be left incomplete.
pub fn pack_directory(input_dir: &Path, output: &Path, options: &PackOptions) -> Result<usize> {
    let entries = collect_entries(input_dir, Some(output))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create archive file {}", output.display()))?;
    let mut zip = ZipWriter::new(file);
    let file_options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(options.compression_level);

    for entry in &entries {
        debug!("Adding {} as {}", entry.path.display(), entry.name);
        zip.start_file(entry.name.as_str(), file_options)
            .with_context(|| format!("Failed to add file {} to archive", entry.name))?;
        let mut reader = File::open(&entry.path)
            .with_context(|| format!("Failed to read {}", entry.path.display()))?;
        io::copy(&mut reader, &mut zip)
            .with_context(|| format!("Failed to write {} into archive", entry.name))?;
    }

    zip.finish().context("Failed to finalize archive")?;
    info!("Wrote {} entries to {}", entries.len(), output.display());
    Ok(entries.len())
}
