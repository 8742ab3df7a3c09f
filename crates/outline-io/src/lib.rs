//! # Outline I/O
//!
//! Reads outline dumps (JSON emitted by the aircraft file extractor) and
//! persists rendered canvases as raster images. The image format follows the
//! destination path's extension.

pub mod dump;
pub mod writer;

pub use dump::{read_dump_file, DumpError, DumpReader};
pub use writer::{encode_canvas, output_format, save_canvas, ImageWriteError, ImageWriter};
