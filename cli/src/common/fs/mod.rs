//! # DocxKit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers used by both commands. Import from the submodule directly,
//! e.g. `use crate::common::fs::io::ensure_dir_exists;`.
//!

/// Directory creation, extension normalization and file counting.
pub mod io;
