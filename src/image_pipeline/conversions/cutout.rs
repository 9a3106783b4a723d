use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use image::RgbaImage;

use crate::image_pipeline::{
    background::{BackgroundColorSet, CornerSamples, ExactMatchClassifier, remove_background},
    common::error::{PipelineError, Result},
    conversions::types::{CutoutConfig, CutoutReport},
    crop::{crop_to_bounds, find_content_bounds},
    decode::{ImageReader, StandardImageReader},
    encode::{PngWriter, StandardPngWriter},
};

/// Removes a checkerboard background and crops to what is left.
pub struct CutoutPipeline<R: ImageReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: CutoutConfig,
}

impl CutoutPipeline<StandardImageReader, StandardPngWriter> {
    pub fn new(config: CutoutConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: PngWriter> CutoutPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CutoutConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Clears background pixels of `image` and crops it to visible content.
    ///
    /// The background set is the four corner colors plus the configured
    /// reference colors. When nothing visible remains the image is returned
    /// uncropped and the report carries no bounds.
    pub fn cutout(&self, mut image: RgbaImage) -> Result<(RgbaImage, CutoutReport)> {
        let (width, height) = image.dimensions();
        let corners = CornerSamples::sample(&image)
            .ok_or(PipelineError::InvalidDimensions(width, height))?;
        info!("Corner pixels: {:?}", corners.as_array());

        let background = BackgroundColorSet::from_corners(&corners, &self.config.reference_colors);
        info!("Treating these as background: {}", background);

        let classifier = ExactMatchClassifier::new(background);
        let cleared_pixels = {
            let _span = tracing::info_span!("classify_background").entered();
            remove_background(&mut image, &classifier)
        };

        let bounds = {
            let _span = tracing::info_span!("crop_to_content").entered();
            find_content_bounds(&image)
        };

        let image = match bounds {
            Some(bounds) if self.config.crop_to_content => {
                info!("Cropping to {}", bounds);
                crop_to_bounds(&image, &bounds)
            }
            Some(bounds) => {
                info!("Content box {} (cropping disabled)", bounds);
                image
            }
            None => {
                warn!("No content found, writing the full transparent image");
                image
            }
        };

        let report = CutoutReport {
            corners,
            background: classifier.colors().clone(),
            cleared_pixels,
            bounds,
            width: image.width(),
            height: image.height(),
        };
        Ok((image, report))
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<CutoutReport> {
        info!("Starting background cutout");

        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        let (image, report) = self.cutout(image)?;

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&image, output)?;
        }

        info!(
            width = report.width,
            height = report.height,
            cleared = report.cleared_pixels,
            "Cutout complete"
        );
        Ok(report)
    }

    /// Reads `input_path`, runs the cutout and writes a PNG to `output_path`.
    ///
    /// The output file is only created once encoding has succeeded, so a
    /// failed run leaves nothing behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<CutoutReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let report = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        info!("Saved to {}", output_path.display());
        Ok(report)
    }

    pub fn config(&self) -> &CutoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CutoutConfig) {
        self.config = config;
    }
}
