//! # DocxKit Pack Integration Tests
//!
//! File: cli/tests/pack.rs
//!
//! ## Overview
//!
//! Runs the `docx-pack` binary against temporary directories and checks exit
//! status, printed summary, and the produced archive.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Packing `./unpacked` into `out.docx` yields exactly the two files, marker first.
#[test]
fn test_pack_minimal_document() {
    let temp_dir = tempdir().unwrap();
    write_unpacked_doc(&temp_dir.path().join("unpacked"));

    pack_cmd(temp_dir.path())
        .args(["./unpacked", "out.docx"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("✓ Packed ./unpacked to out.docx")
                .and(predicate::str::contains("Files included: 2"))
                .and(predicate::str::contains("KB"))
                .and(predicate::str::contains(
                    "Verify with: pandoc --track-changes=all out.docx -o verification.md",
                )),
        );

    assert_eq!(
        archive_entry_names(&temp_dir.path().join("out.docx")),
        vec![MARKER, "word/document.xml"]
    );
}

#[test]
fn test_pack_forces_docx_extension() {
    let temp_dir = tempdir().unwrap();
    write_unpacked_doc(&temp_dir.path().join("unpacked"));

    pack_cmd(temp_dir.path())
        .args(["unpacked", "nested/dir/edited.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nested/dir/edited.docx"));

    assert!(temp_dir.path().join("nested/dir/edited.docx").is_file());
    assert!(!temp_dir.path().join("nested/dir/edited.zip").exists());
}

#[test]
fn test_pack_missing_marker_fails_without_output() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("plain");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("readme.txt"), "not a document").unwrap();

    pack_cmd(temp_dir.path())
        .args(["plain", "out.docx"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Missing [Content_Types].xml - not a valid unpacked docx",
        ));

    assert!(!temp_dir.path().join("out.docx").exists());
}

#[test]
fn test_pack_missing_directory() {
    let temp_dir = tempdir().unwrap();

    pack_cmd(temp_dir.path())
        .args(["does-not-exist", "out.docx"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Directory not found: does-not-exist"));
}

#[test]
fn test_pack_input_is_a_file() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

    pack_cmd(temp_dir.path())
        .args(["file.txt", "out.docx"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Not a directory: file.txt"));
}

/// A project `.docxkit.toml` with an invalid level is a fatal configuration error.
#[test]
fn test_pack_rejects_invalid_project_config() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(
        temp_dir.path().join(".docxkit.toml"),
        "[pack]\ncompression_level = 42\n",
    )
    .unwrap();
    write_unpacked_doc(&temp_dir.path().join("unpacked"));

    pack_cmd(temp_dir.path())
        .args(["unpacked", "out.docx"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("compression_level"));

    assert!(!temp_dir.path().join("out.docx").exists());
}

/// A failure while writing the archive is fatal and names the destination.
#[cfg(unix)]
#[test]
fn test_pack_write_failure_is_reported() {
    let temp_dir = tempdir().unwrap();
    write_unpacked_doc(&temp_dir.path().join("unpacked"));
    fs::create_dir(temp_dir.path().join("out.docx")).unwrap();

    pack_cmd(temp_dir.path())
        .args(["unpacked", "out"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Failed to create docx out.docx:"))
        .stdout(predicate::str::contains("✓ Packed").not());

    assert!(temp_dir.path().join("out.docx").is_dir());
}
