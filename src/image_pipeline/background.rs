//! Background classification module
//!
//! Samples candidate background colors from an image, decides which pixels
//! belong to the background and clears them to transparent white.

mod classifier;
mod exact_match;
pub mod types;

pub use classifier::{BackgroundClassifier, remove_background};
pub use exact_match::ExactMatchClassifier;
pub use types::{
    BackgroundColorSet, CornerSamples, DEFAULT_REFERENCE_COLORS, OPAQUE_GRAY, OPAQUE_WHITE,
    TRANSPARENT_WHITE,
};
