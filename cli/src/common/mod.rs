//! # DocxKit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the `pack` and `unpack` commands:
//!
//! - **`archive`**: Reading and writing the `.docx` zip container.
//! - **`fs`**: Directory creation, extension normalization, file counting.
//! - **`rsid`**: Revision identifier generation.
//!

/// Reading and writing `.docx` zip containers.
pub mod archive;
/// Filesystem helpers.
pub mod fs;
/// Revision identifiers for tracked changes.
pub mod rsid;
