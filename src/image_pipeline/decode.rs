//! Image decoding module
//!
//! This module turns encoded image bytes into an 8-bit RGBA buffer.

mod reader;
mod standard_image_reader;

pub use reader::ImageReader;
pub use standard_image_reader::StandardImageReader;
