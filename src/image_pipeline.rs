//! Image processing pipeline module
//!
//! This module provides a structured approach to logo cleanup, with separate
//! modules for decoding, background classification, cropping, PNG writing and
//! the pipelines that orchestrate them.

pub mod background;
pub mod common;
pub mod conversions;
pub mod crop;
pub mod decode;
pub mod encode;

pub use common::{
    PipelineError,
    Result,
};

pub use background::{
    BackgroundClassifier,
    BackgroundColorSet,
    CornerSamples,
    ExactMatchClassifier,
};

pub use crop::BoundingBox;

pub use decode::{
    ImageReader,
    StandardImageReader,
};

pub use encode::{
    PngWriter,
    StandardPngWriter,
};

pub use conversions::{
    CutoutConfig,
    CutoutConfigBuilder,
    CutoutPipeline,
    CutoutReport,
    StripPipeline,
};
