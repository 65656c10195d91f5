//! # `docx-pack` Entry Point
//!
//! File: cli/src/bin/docx_pack.rs
//!
//! Packs an unpacked document directory back into a `.docx` file.
//!
//! ```bash
//! docx-pack ./unpacked document-edited.docx
//! ```
//!
use docxkit::commands::{self, pack};

fn main() {
    commands::run::<pack::PackArgs, _>(pack::handle_pack);
}
