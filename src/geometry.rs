//! Physical value types: margins, sizes and rectangles.
//!
//! Lengths are `f64` in physical units (millimeters by convention), except
//! [`RectF`], which lives in page-local pixel coordinates. All types are
//! plain `Copy` values with no behavior beyond simple arithmetic.

use crate::error::{SettingsError, check_finite};

/// Physical distances between the page edge and the content box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    /// Create margins (left, top, right, bottom).
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same distance on all four sides.
    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Like [`new`](Self::new), but rejects NaN and infinite values.
    pub fn try_new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, SettingsError> {
        Self::new(left, top, right, bottom).validated()
    }

    /// Check that every side is finite.
    pub fn validated(self) -> Result<Self, SettingsError> {
        check_finite("left margin", self.left)?;
        check_finite("top margin", self.top)?;
        check_finite("right margin", self.right)?;
        check_finite("bottom margin", self.bottom)?;
        Ok(self)
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Width × height in physical units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

impl SizeF {
    /// `0 × 0`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Like [`new`](Self::new), but rejects non-finite or negative components.
    pub fn try_new(width: f64, height: f64) -> Result<Self, SettingsError> {
        for (what, value) in [("width", width), ("height", height)] {
            check_finite(what, value)?;
            if value < 0.0 {
                return Err(SettingsError::NegativeSize { what, value });
            }
        }
        Ok(Self { width, height })
    }

    /// Grow by margins on each side: content size → hard size.
    pub fn expand_by(self, margins: &Margins) -> Self {
        Self {
            width: self.width + margins.horizontal(),
            height: self.height + margins.vertical(),
        }
    }

    /// Component-wise maximum. The two axes may come from different sizes.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Axis-aligned rectangle in page-local pixel coordinates.
///
/// An empty rect (zero area) means "content not detected yet".
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    /// The null rect at the origin.
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rect encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width.is_nan() || self.height.is_nan() || self.width <= 0.0 || self.height <= 0.0
    }

    /// Width × height of the rect.
    pub fn size(&self) -> SizeF {
        SizeF::new(self.width, self.height)
    }
}
