//! Pipeline conversions module
//!
//! This module contains the orchestration logic that ties decoding,
//! background classification, cropping and encoding together.

mod cutout;
mod strip;
pub mod types;


pub use cutout::CutoutPipeline;
pub use strip::StripPipeline;
pub use types::{CutoutConfig, CutoutConfigBuilder, CutoutReport};
