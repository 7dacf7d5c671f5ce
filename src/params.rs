//! Per-page settings bundle returned by point queries.

use crate::alignment::Alignment;
use crate::geometry::{Margins, RectF, SizeF};

/// Layout settings of one page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Physical margins around the content, in millimeters.
    pub hard_margins: Margins,
    /// Detected content region in page-local pixels. Empty if not detected.
    pub content_rect: RectF,
    /// Physical size of the detected content, in millimeters.
    pub content_size: SizeF,
    /// Alignment policy.
    pub alignment: Alignment,
}

impl Params {
    /// Create a settings bundle.
    pub fn new(
        hard_margins: Margins,
        content_rect: RectF,
        content_size: SizeF,
        alignment: Alignment,
    ) -> Self {
        Self {
            hard_margins,
            content_rect,
            content_size,
            alignment,
        }
    }

    /// Content width plus left and right margins.
    pub fn hard_width(&self) -> f64 {
        self.content_size.width + self.hard_margins.left + self.hard_margins.right
    }

    /// Content height plus top and bottom margins.
    pub fn hard_height(&self) -> f64 {
        self.content_size.height + self.hard_margins.top + self.hard_margins.bottom
    }

    /// Physical page size including margins.
    pub fn hard_size(&self) -> SizeF {
        SizeF::new(self.hard_width(), self.hard_height())
    }
}
