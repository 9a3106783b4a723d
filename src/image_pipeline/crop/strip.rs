use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::crop::bounds::BoundingBox;

/// Cuts the middle of three equally wide, side-by-side panels.
///
/// Keeps columns `[w / 3, 2 * (w / 3))` at full height. Leftover columns
/// from a width not divisible by three are dropped from the right panel.
pub fn middle_third(image: &DynamicImage) -> Result<(DynamicImage, BoundingBox)> {
    let (width, height) = (image.width(), image.height());
    if width < 3 || height == 0 {
        return Err(PipelineError::InvalidDimensions(width, height));
    }

    let panel = width / 3;
    let bounds = BoundingBox::new(panel, 0, panel * 2, height);
    debug!("Middle panel: {}", bounds);

    Ok((image.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height()), bounds))
}
