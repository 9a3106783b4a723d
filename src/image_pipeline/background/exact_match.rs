use image::Rgba;

use crate::image_pipeline::background::classifier::BackgroundClassifier;
use crate::image_pipeline::background::types::BackgroundColorSet;

/// Classifies a pixel as background only when its RGBA value is in the set.
///
/// There is no color distance: anti-aliased checkerboard edges that do not
/// exactly match a sampled or reference color stay visible.
#[derive(Debug, Clone)]
pub struct ExactMatchClassifier {
    colors: BackgroundColorSet,
}

impl ExactMatchClassifier {
    pub fn new(colors: BackgroundColorSet) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &BackgroundColorSet {
        &self.colors
    }
}

impl BackgroundClassifier for ExactMatchClassifier {
    fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        self.colors.contains(&pixel.0)
    }
}
