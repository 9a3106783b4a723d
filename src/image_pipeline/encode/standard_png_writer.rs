use std::io::{Cursor, Write};
use tracing::debug;
use image::{ImageFormat, RgbaImage};
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::encode::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, image: &RgbaImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        // PNG encoding needs Seek; buffer first, then hand the bytes over.
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(buffer.get_ref())?;

        debug!("PNG encoding complete, {} bytes", buffer.get_ref().len());
        Ok(())
    }
}
