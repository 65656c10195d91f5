//! # DocxKit Archive Reader (`common::archive::reader`)
//!
//! File: cli/src/common/archive/reader.rs
//!
//! Extracts a `.docx` container into a directory, recreating subdirectories as
//! needed. Entry names that would land outside the destination (absolute paths,
//! `..` components) are skipped with a warning instead of being written.
//!
//! Extraction is not transactional: if a later entry fails, the files already
//! written stay on disk.
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::{DocxError, Result};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// What `extract_archive` did with the entries it found.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    pub files: usize,
    pub directories: usize,
    pub skipped: usize,
}

/// # Extract Archive (`extract_archive`)
///
/// Extracts every entry of `archive_path` into `output_dir`, recreating
/// subdirectories. Entries whose names would escape `output_dir` are skipped
/// and counted in `ExtractStats::skipped`.
///
/// ## Arguments
///
/// * `archive_path` - The `.docx` (or any zip) file to read.
/// * `output_dir` - Destination. Created if missing, before the archive is opened,
///   and left in place if extraction fails.
///
/// ## Returns
///
/// * `Result<ExtractStats>` - Counts of files written, directories created and
///   entries skipped.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - `output_dir` exists but is not a directory.
/// - The file is not a readable zip container or an entry header is corrupt
///   (`DocxError::InvalidArchive`).
/// - Creating a directory or writing a file fails.
pub fn extract_archive(archive_path: &Path, output_dir: &Path) -> Result<ExtractStats> {
    ensure_dir_exists(output_dir)?;

    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open {}", archive_path.display()))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|source| DocxError::InvalidArchive {
            path: archive_path.to_path_buf(),
            source,
        })?;

    let mut stats = ExtractStats::default();

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| DocxError::InvalidArchive {
                path: archive_path.to_path_buf(),
                source,
            })?;
        let name = entry.name().to_string();

        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping entry with unsafe path: {name}");
            stats.skipped += 1;
            continue;
        };
        let target = output_dir.join(relative);

        if entry.is_dir() {
            ensure_dir_exists(&target)?;
            stats.directories += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_dir_exists(parent)?;
        }
        debug!("Extracting {name} -> {}", target.display());
        let mut out = File::create(&target)
            .with_context(|| format!("Failed to create {}", target.display()))?;
        io::copy(&mut entry, &mut out).with_context(|| format!("Failed to extract {name}"))?;
        stats.files += 1;
    }

    info!(
        "Extracted {} files and {} directories from {} ({} skipped)",
        stats.files,
        stats.directories,
        archive_path.display(),
        stats.skipped
    );
    Ok(stats)
}
