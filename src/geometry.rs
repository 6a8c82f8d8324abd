//! Crop region types.
//!
//! A region is described two ways: [`CropSpec`] mirrors the config file
//! (offset plus extent) and [`CropRect`] is the derived LTRB form handed to
//! the image operation.

use std::fmt;

use crate::error::InvalidConfig;

/// The crop region as written in the config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CropSpec {
    /// Left edge of the region, in pixels.
    pub x: u32,
    /// Top edge of the region, in pixels.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropSpec {
    /// Creates a new crop spec.
    #[inline]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts to the `(left, top, right, bottom)` form.
    ///
    /// Fails when `x + width` or `y + height` does not fit in a `u32`.
    pub fn to_rect(&self) -> Result<CropRect, InvalidConfig> {
        let right = self.x.checked_add(self.width).ok_or(InvalidConfig)?;
        let bottom = self.y.checked_add(self.height).ok_or(InvalidConfig)?;
        Ok(CropRect::from_ltrb(self.x, self.y, right, bottom))
    }
}

/// An axis-aligned crop rectangle in LTRB format (left, top, right, bottom).
///
/// `right` and `bottom` are exclusive. The rectangle is not checked against
/// any image; [`crate::crop`] leaves out-of-bounds handling to the image
/// library.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl CropRect {
    /// Creates a rectangle from explicit edges.
    ///
    /// Callers must keep `left <= right` and `top <= bottom`.
    #[inline]
    pub fn from_ltrb(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left <= right && top <= bottom);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Returns the width of the rectangle.
    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Returns true if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns the edges as a `(left, top, right, bottom)` tuple.
    #[inline]
    pub fn to_ltrb(&self) -> (u32, u32, u32, u32) {
        (self.left, self.top, self.right, self.bottom)
    }
}

impl From<CropRect> for CropSpec {
    fn from(rect: CropRect) -> Self {
        CropSpec::new(rect.left, rect.top, rect.width(), rect.height())
    }
}

impl fmt::Debug for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropRect")
            .field("left", &self.left)
            .field("top", &self.top)
            .field("right", &self.right)
            .field("bottom", &self.bottom)
            .finish()
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
