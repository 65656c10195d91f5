//! # `docx-unpack` Entry Point
//!
//! File: cli/src/bin/docx_unpack.rs
//!
//! Unpacks a `.docx` file into a directory for editing.
//!
//! ```bash
//! docx-unpack document.docx ./unpacked
//! ```
//!
use docxkit::commands::{self, unpack};

fn main() {
    commands::run::<unpack::UnpackArgs, _>(unpack::handle_unpack);
}
