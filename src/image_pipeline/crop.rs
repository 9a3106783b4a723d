//! Cropping module
//!
//! Bounding-box detection over visible pixels and the fixed middle-third
//! strip used for three-logo composites.

pub mod bounds;
mod strip;

pub use bounds::{BoundingBox, crop_to_bounds, find_content_bounds};
pub use strip::middle_third;
