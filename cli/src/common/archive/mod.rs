//! # DocxKit Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! A `.docx` file is a zip container of XML parts. This module holds the two
//! halves of working with that container:
//!
//! - **`writer`**: Walks an unpacked document tree and writes it into a new
//!   deflate-compressed archive (used by `docx-pack`).
//! - **`reader`**: Opens an archive and extracts its entries into a directory
//!   (used by `docx-unpack`).
//!
//! Both sides own their archive handle for the duration of a single function call;
//! the underlying file is closed when the handle is dropped, on success and on
//! every early error return.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docxkit::common::archive::{reader, writer};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let written = writer::pack_directory(
//!     Path::new("./unpacked"),
//!     Path::new("./edited.docx"),
//!     &writer::PackOptions::default(),
//! )?;
//! let stats = reader::extract_archive(Path::new("./edited.docx"), Path::new("./roundtrip"))?;
//! assert_eq!(written, stats.files);
//! # Ok(())
//! # }
//! ```
//!

pub mod reader;
pub mod writer;

/// Root-level part every unpacked document must contain.
pub const CONTENT_TYPES_MARKER: &str = "[Content_Types].xml";

/// Extension forced onto packed output and expected on unpack input.
pub const DOCX_EXTENSION: &str = "docx";
