use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::image_pipeline::background::types::TRANSPARENT_WHITE;

pub trait BackgroundClassifier {
    fn is_background(&self, pixel: &Rgba<u8>) -> bool;
}

/// Replaces every pixel the classifier accepts with transparent white.
///
/// Pixels are visited in row-major order. Returns the number of pixels
/// cleared; all other pixels are left untouched, alpha included.
pub fn remove_background<C: BackgroundClassifier + ?Sized>(
    image: &mut RgbaImage,
    classifier: &C,
) -> usize {
    let mut cleared = 0;
    for pixel in image.pixels_mut() {
        if classifier.is_background(pixel) {
            *pixel = Rgba(TRANSPARENT_WHITE);
            cleared += 1;
        }
    }

    debug!("Cleared {} background pixels", cleared);
    cleared
}
