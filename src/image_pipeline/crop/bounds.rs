use std::fmt;

use image::{RgbaImage, imageops};

/// Axis-aligned pixel rectangle.
///
/// `right` and `bottom` are exclusive: a box holding only the pixel at
/// `(x, y)` is `(x, y, x + 1, y + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box covers the whole `width` x `height` image.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

/// Finds the smallest box enclosing every pixel with a nonzero alpha.
///
/// Returns `None` when the image is empty or fully transparent.
pub fn find_content_bounds(image: &RgbaImage) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > 0 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            found = true;
        }
    }

    found.then(|| BoundingBox::new(min_x, min_y, max_x + 1, max_y + 1))
}

/// Copies the region under `bounds` into a new image.
pub fn crop_to_bounds(image: &RgbaImage, bounds: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(image, bounds.left, bounds.top, bounds.width(), bounds.height()).to_image()
}
