//! Image encoding module
//!
//! This module provides PNG writing for processed RGBA buffers.

mod writer;
mod standard_png_writer;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
