//! # DocxKit Round-Trip Integration Tests
//!
//! File: cli/tests/roundtrip.rs
//!
//! ## Overview
//!
//! Packs a directory with `docx-pack`, unpacks the result with `docx-unpack`,
//! and compares the two trees file by file.
//!

mod common;
use common::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use walkdir::WalkDir;

/// Maps relative path -> bytes for every regular file under `root`.
fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            let key = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (key, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn test_pack_then_unpack_round_trip() {
    let temp_dir = tempdir().unwrap();
    let work = temp_dir.path();
    let source = work.join("unpacked");
    write_unpacked_doc(&source);
    fs::create_dir_all(source.join("_rels")).unwrap();
    fs::create_dir_all(source.join("word/media")).unwrap();
    fs::write(source.join("_rels/.rels"), "<Relationships/>").unwrap();
    fs::write(
        source.join("word/media/image1.png"),
        [0x89u8, b'P', b'N', b'G', 0, 1, 2, 3, 255],
    )
    .unwrap();
    fs::write(source.join("word/styles.xml"), "<w:styles/>".repeat(500)).unwrap();

    pack_cmd(work)
        .args(["unpacked", "out.docx"])
        .assert()
        .success();
    unpack_cmd(work)
        .args(["out.docx", "roundtrip"])
        .assert()
        .success();

    assert_eq!(snapshot(&source), snapshot(&work.join("roundtrip")));
}
