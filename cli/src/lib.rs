//! # DocxKit
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! DocxKit provides two small command-line tools for editing Word documents at the
//! XML level:
//!
//! - `docx-unpack <docx_file> <output_directory>` extracts a `.docx` container into
//!   a directory tree and suggests a revision identifier (RSID) for tracked changes.
//! - `docx-pack <input_directory> <output_docx>` validates an unpacked tree and
//!   writes it back into a deflate-compressed `.docx`.
//!
//! ## Architecture
//!
//! - `commands`: Argument structs, handlers, and summaries for each tool
//! - `common`: Archive reading/writing, filesystem helpers, RSID generation
//! - `core`: Errors, configuration, logging
//!
//! The binaries in `src/bin/` are thin wrappers around `commands::run`.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use docxkit::commands::{pack, unpack};
//! use docxkit::common::archive::writer::PackOptions;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let packed = pack::pack(Path::new("./unpacked"), Path::new("edited"), &PackOptions::default())?;
//! println!("{packed}"); // written to edited.docx
//!
//! let unpacked = unpack::unpack(&packed.output_path, Path::new("./roundtrip"), "word/document.xml")?;
//! println!("{unpacked}");
//! # Ok(())
//! # }
//! ```
//!
pub mod commands;
pub mod common;
pub mod core;
