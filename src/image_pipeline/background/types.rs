//! Background color types

use std::collections::BTreeSet;
use std::fmt;

use image::RgbaImage;

/// Opaque white, the light tile of most checkerboards.
pub const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];

/// Opaque 0xCC gray, the usual dark tile of a checkerboard.
pub const OPAQUE_GRAY: [u8; 4] = [204, 204, 204, 255];

/// Value written over every pixel classified as background.
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

/// Colors always treated as background, even when no corner shows them.
pub const DEFAULT_REFERENCE_COLORS: [[u8; 4]; 2] = [OPAQUE_WHITE, OPAQUE_GRAY];

/// The four corner pixels of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerSamples {
    pub top_left: [u8; 4],
    pub top_right: [u8; 4],
    pub bottom_left: [u8; 4],
    pub bottom_right: [u8; 4],
}

impl CornerSamples {
    /// Reads the corners of `image`, or `None` when the image has no pixels.
    pub fn sample(image: &RgbaImage) -> Option<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return None;
        }

        let (right, bottom) = (width - 1, height - 1);
        Some(Self {
            top_left: image.get_pixel(0, 0).0,
            top_right: image.get_pixel(right, 0).0,
            bottom_left: image.get_pixel(0, bottom).0,
            bottom_right: image.get_pixel(right, bottom).0,
        })
    }

    /// Corners in top-left, top-right, bottom-left, bottom-right order.
    pub fn as_array(&self) -> [[u8; 4]; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }
}

/// Deduplicated set of RGBA values that count as background.
///
/// Ordered so that iteration, logging and equality do not depend on the
/// order the colors were inserted in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackgroundColorSet {
    colors: BTreeSet<[u8; 4]>,
}

impl BackgroundColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from the sampled corners plus `reference_colors`.
    pub fn from_corners(corners: &CornerSamples, reference_colors: &[[u8; 4]]) -> Self {
        corners
            .as_array()
            .into_iter()
            .chain(reference_colors.iter().copied())
            .collect()
    }

    pub fn insert(&mut self, color: [u8; 4]) -> bool {
        self.colors.insert(color)
    }

    pub fn contains(&self, color: &[u8; 4]) -> bool {
        self.colors.contains(color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8; 4]> {
        self.colors.iter()
    }
}

impl FromIterator<[u8; 4]> for BackgroundColorSet {
    fn from_iter<I: IntoIterator<Item = [u8; 4]>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BackgroundColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, [r, g, b, a]) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({r}, {g}, {b}, {a})")?;
        }
        f.write_str("}")
    }
}
