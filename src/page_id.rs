//! Page identifiers.
//!
//! A page is a (possibly split) page of a source image file. The settings
//! store only needs keys to be totally ordered; [`PageId`] is the key used
//! by default.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies one page of a (possibly multi-page) image file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId {
    path: Arc<Path>,
    /// Zero-based page number inside the file.
    page: u32,
}

impl ImageId {
    /// Create an image id.
    pub fn new(path: impl Into<PathBuf>, page: u32) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
            page,
        }
    }

    /// Source file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Page number inside the file.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Which part of a scanned image a logical page covers.
///
/// Two-page spreads are split into a left and a right page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubPage {
    /// The whole image is one page.
    #[default]
    SinglePage,
    /// Left half of a spread.
    LeftPage,
    /// Right half of a spread.
    RightPage,
}

/// Logical page identifier, ordered by image then sub-page.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId {
    image: ImageId,
    sub_page: SubPage,
}

impl PageId {
    /// Create a page id.
    pub fn new(image: ImageId, sub_page: SubPage) -> Self {
        Self { image, sub_page }
    }

    /// Whole-image page of the first page in `path`.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self::new(ImageId::new(path, 0), SubPage::SinglePage)
    }

    /// The image this page belongs to.
    pub fn image(&self) -> &ImageId {
        &self.image
    }

    /// Which part of the image this page is.
    pub fn sub_page(&self) -> SubPage {
        self.sub_page
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.image.path.display(), self.image.page)?;
        match self.sub_page {
            SubPage::SinglePage => Ok(()),
            SubPage::LeftPage => f.write_str("/L"),
            SubPage::RightPage => f.write_str("/R"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_by_path_then_page_then_sub_page() {
        let a0l = PageId::new(ImageId::new("a.tif", 0), SubPage::LeftPage);
        let a0r = PageId::new(ImageId::new("a.tif", 0), SubPage::RightPage);
        let a1 = PageId::new(ImageId::new("a.tif", 1), SubPage::SinglePage);
        let b0 = PageId::single("b.tif");
        let mut ids = vec![b0.clone(), a1.clone(), a0r.clone(), a0l.clone()];
        ids.sort();
        assert_eq!(ids, vec![a0l, a0r, a1, b0]);
    }

    #[test]
    fn display() {
        let id = PageId::new(ImageId::new("scan.tif", 3), SubPage::RightPage);
        assert_eq!(id.to_string(), "scan.tif#3/R");
        assert_eq!(PageId::single("x.png").to_string(), "x.png#0");
    }

    #[test]
    fn accessors() {
        let id = PageId::new(ImageId::new("p.tif", 2), SubPage::LeftPage);
        assert_eq!(id.image().path(), Path::new("p.tif"));
        assert_eq!(id.image().page(), 2);
        assert_eq!(id.sub_page(), SubPage::LeftPage);
    }
}
