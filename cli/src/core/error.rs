//! # DocxKit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared by `docx-pack` and `docx-unpack`.
//! Every failure ends the same way at the binary boundary (a message on stdout and
//! exit status 1), but the failures that users need to recognise get their own
//! variant so the message is stable and tests can match on it.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DocxError`: A custom error enum using `thiserror` for the user-facing cases
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The variants cover:
//! - Missing paths (archive file or input directory)
//! - Structural validation (not a directory, missing `[Content_Types].xml`)
//! - Archive format errors (the file is not a readable zip container)
//! - Path encoding problems when naming archive entries
//! - Configuration errors
//!
//! Generic I/O failures are not wrapped in a variant; they travel as
//! `anyhow::Error` with context attached at the call site.
//!
//! ## Examples
//!
//! ```rust
//! use docxkit::core::error::{DocxError, Result};
//! use std::path::Path;
//!
//! fn check(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         anyhow::bail!(DocxError::FileNotFound(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//!
//! let err = check(Path::new("/definitely/missing.docx")).unwrap_err();
//! assert!(matches!(
//!     err.downcast_ref::<DocxError>(),
//!     Some(DocxError::FileNotFound(_))
//! ));
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the DocxKit tools.
#[derive(Error, Debug)]
pub enum DocxError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Missing {marker} - not a valid unpacked docx")]
    MissingMarker { marker: &'static str },

    #[error("Invalid or corrupted .docx file: {}", .path.display())]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Path is not valid UTF-8 and cannot be stored in an archive: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
