//! Content alignment within the hard page area.

use crate::geometry::SizeF;

/// Vertical placement of the content box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Flush against the top edge.
    Top,
    /// Centered vertically.
    #[default]
    Center,
    /// Flush against the bottom edge.
    Bottom,
}

/// Horizontal placement of the content box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Flush against the left edge.
    Left,
    /// Centered horizontally.
    #[default]
    Center,
    /// Flush against the right edge.
    Right,
}

/// How a page's content is positioned when the page is grown to the
/// document-wide aggregate size.
///
/// [`Null`](Self::Null) means the page is not aligned with the others: it
/// keeps its own hard size instead of growing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align along both axes.
    Aligned {
        vertical: VerticalAlignment,
        horizontal: HorizontalAlignment,
    },
    /// No alignment.
    Null,
}

impl Default for Alignment {
    /// Centered on both axes.
    fn default() -> Self {
        Self::CENTER
    }
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(VerticalAlignment::Center, HorizontalAlignment::Center);

    /// Create an alignment from its two components.
    pub const fn new(vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        Self::Aligned {
            vertical,
            horizontal,
        }
    }

    /// True for the "no alignment" sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Vertical component, if aligned.
    pub fn vertical(&self) -> Option<VerticalAlignment> {
        match *self {
            Self::Aligned { vertical, .. } => Some(vertical),
            Self::Null => None,
        }
    }

    /// Horizontal component, if aligned.
    pub fn horizontal(&self) -> Option<HorizontalAlignment> {
        match *self {
            Self::Aligned { horizontal, .. } => Some(horizontal),
            Self::Null => None,
        }
    }

    /// Offset `(x, y)` of a `content` box placed inside `area`.
    ///
    /// Slack is clamped at zero, so content larger than the area sits at
    /// the origin on that axis. A null alignment never moves the content.
    pub fn place(&self, content: SizeF, area: SizeF) -> (f64, f64) {
        match *self {
            Self::Null => (0.0, 0.0),
            Self::Aligned {
                vertical,
                horizontal,
            } => {
                let x = offset_1d(area.width - content.width, horizontal_fraction(horizontal));
                let y = offset_1d(area.height - content.height, vertical_fraction(vertical));
                (x, y)
            }
        }
    }
}

fn horizontal_fraction(h: HorizontalAlignment) -> f64 {
    match h {
        HorizontalAlignment::Left => 0.0,
        HorizontalAlignment::Center => 0.5,
        HorizontalAlignment::Right => 1.0,
    }
}

fn vertical_fraction(v: VerticalAlignment) -> f64 {
    match v {
        VerticalAlignment::Top => 0.0,
        VerticalAlignment::Center => 0.5,
        VerticalAlignment::Bottom => 1.0,
    }
}

fn offset_1d(space: f64, fraction: f64) -> f64 {
    if space.is_nan() || space <= 0.0 {
        return 0.0;
    }
    space * fraction
}
