//! # DocxKit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by both tools:
//! - `config`: Optional TOML configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `logging`: `tracing` subscriber setup driven by `-v` flags and `RUST_LOG`
//!
//! ```rust
//! use docxkit::core::config; // For loading configuration
//! use docxkit::core::error::{DocxError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
pub mod logging;
