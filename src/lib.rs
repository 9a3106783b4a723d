//! Checkerboard background removal and cropping for logo images.

pub mod image_pipeline;
pub mod logger;
