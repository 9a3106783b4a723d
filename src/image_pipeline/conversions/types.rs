//! Cutout configuration and result types

use crate::image_pipeline::background::{BackgroundColorSet, CornerSamples, DEFAULT_REFERENCE_COLORS};
use crate::image_pipeline::crop::BoundingBox;

/// Configuration for background removal
#[derive(Debug, Clone)]
pub struct CutoutConfig {
    /// Colors treated as background in addition to the four corner samples
    pub reference_colors: Vec<[u8; 4]>,
    /// Whether to crop the output to the bounding box of visible pixels
    pub crop_to_content: bool,
    /// Whether to reject empty or oversized images before processing
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validation is enabled
    pub max_dimension: Option<u32>,
}

impl Default for CutoutConfig {
    fn default() -> Self {
        Self {
            reference_colors: DEFAULT_REFERENCE_COLORS.to_vec(),
            crop_to_content: true,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl CutoutConfig {
    pub fn builder() -> CutoutConfigBuilder {
        CutoutConfigBuilder::default()
    }
}

/// Builder for CutoutConfig
#[derive(Default)]
pub struct CutoutConfigBuilder {
    reference_colors: Option<Vec<[u8; 4]>>,
    crop_to_content: Option<bool>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl CutoutConfigBuilder {
    pub fn reference_colors(mut self, colors: Vec<[u8; 4]>) -> Self {
        self.reference_colors = Some(colors);
        self
    }

    pub fn crop_to_content(mut self, enable: bool) -> Self {
        self.crop_to_content = Some(enable);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> CutoutConfig {
        let default = CutoutConfig::default();
        CutoutConfig {
            reference_colors: self.reference_colors.unwrap_or(default.reference_colors),
            crop_to_content: self.crop_to_content.unwrap_or(default.crop_to_content),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}

/// What a cutout run observed and produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoutReport {
    /// Corner pixels of the decoded input
    pub corners: CornerSamples,
    /// Colors that were cleared
    pub background: BackgroundColorSet,
    /// Number of pixels rewritten to transparent white
    pub cleared_pixels: usize,
    /// Visible content box, `None` when every pixel was background
    pub bounds: Option<BoundingBox>,
    /// Width of the written image
    pub width: u32,
    /// Height of the written image
    pub height: u32,
}

impl CutoutReport {
    pub fn has_content(&self) -> bool {
        self.bounds.is_some()
    }
}
