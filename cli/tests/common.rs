//! # DocxKit Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests (`pack.rs`, `unpack.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate, so this
//! module is declared with `mod common;` wherever it is needed.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const MARKER: &str = "[Content_Types].xml";
pub const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;
pub const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#;

/// Builds a command for one of the crate's binaries, isolated from any user or
/// project configuration by running inside `workdir` with a private config home.
fn tool_cmd(bin: &str, workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("Failed to find binary for testing");
    let config_home = workdir.join(".config-home");
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", &config_home)
        .env("HOME", &config_home)
        .env_remove("RUST_LOG");
    cmd
}

/// `docx-pack`, run from `workdir`.
pub fn pack_cmd(workdir: &Path) -> Command {
    tool_cmd("docx-pack", workdir)
}

/// `docx-unpack`, run from `workdir`.
pub fn unpack_cmd(workdir: &Path) -> Command {
    tool_cmd("docx-unpack", workdir)
}

/// Writes a minimal unpacked document (`[Content_Types].xml` + `word/document.xml`).
pub fn write_unpacked_doc(root: &Path) {
    fs::create_dir_all(root.join("word")).unwrap();
    fs::write(root.join(MARKER), CONTENT_TYPES_XML).unwrap();
    fs::write(root.join("word/document.xml"), DOCUMENT_XML).unwrap();
}

/// Lists the entry names of a zip archive in stored order.
pub fn archive_entry_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}
