//! Image reader backed by the `image` crate.
//!
//! Any format enabled in the `image` dependency (PNG, JPEG, WebP) is accepted.
//! The decoded image is always forced into RGBA8 so that later stages can
//! compare full four-channel pixel values.

use tracing::debug;
use image::RgbaImage;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::decode::reader::ImageReader;

/// Reader that guesses the format from the byte signature.
pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    /// Decodes `data` and converts it to RGBA8.
    ///
    /// Sources without an alpha channel get a synthesized opaque one
    /// (`a = 255` everywhere), which is what `DynamicImage::to_rgba8` does.
    ///
    /// # Errors
    ///
    /// * `PipelineError::DecodeError` - the bytes are not a decodable image
    fn read_image(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    #[test]
    fn test_rgb_source_gets_opaque_alpha() {
        let source = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let mut bytes = Cursor::new(Vec::new());
        source.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let rgba = StandardImageReader.read_image(bytes.get_ref()).unwrap();

        assert_eq!(rgba.dimensions(), (3, 2));
        assert!(rgba.pixels().all(|p| p.0 == [10, 20, 30, 255]));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = StandardImageReader.read_image(b"definitely not an image");
        assert!(matches!(result, Err(PipelineError::DecodeError(_))));
    }
}
