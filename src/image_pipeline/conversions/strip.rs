use tracing::{info, instrument};
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::image_pipeline::{
    common::error::{PipelineError, Result},
    crop::{BoundingBox, middle_third},
    decode::{ImageReader, StandardImageReader},
};

/// Extracts the middle logo from a three-logo composite.
pub struct StripPipeline<R: ImageReader> {
    reader: R,
}

impl StripPipeline<StandardImageReader> {
    pub fn new() -> Self {
        Self {
            reader: StandardImageReader,
        }
    }
}

impl Default for StripPipeline<StandardImageReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ImageReader> StripPipeline<R> {
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Decodes `input_data` and returns the encoded middle panel.
    pub fn convert(&self, input_data: &[u8], format: ImageFormat) -> Result<(Vec<u8>, BoundingBox)> {
        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };
        info!("Original size: {}x{}", image.width(), image.height());

        let (strip, bounds) = middle_third(&DynamicImage::ImageRgba8(image))?;

        // JPEG has no alpha channel.
        let strip = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(strip.to_rgb8()),
            _ => strip,
        };

        let mut buffer = Cursor::new(Vec::new());
        {
            let _span = tracing::info_span!("encode_image", format = ?format).entered();
            strip
                .write_to(&mut buffer, format)
                .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
        }

        Ok((buffer.into_inner(), bounds))
    }

    /// Writes the middle panel of `input_path` to `output_path`.
    ///
    /// The output format follows the output extension, PNG when unknown.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<BoundingBox> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let input_data = std::fs::read(input_path).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        let format = ImageFormat::from_path(output_path).unwrap_or(ImageFormat::Png);
        let (encoded, bounds) = self.convert(&input_data, format)?;

        std::fs::write(output_path, &encoded).map_err(|e| {
            PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;

        info!("Saved to {}", output_path.display());
        Ok(bounds)
    }
}
