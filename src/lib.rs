//! Per-page layout settings for multi-page document processing.
//!
//! Pure in-memory state: no I/O, no persistence. One record per page,
//! shared between pipeline stages and UI threads behind a single lock.
//!
//! # Modules
//!
//! - [`settings`]: The thread-safe store and its aggregate size queries
//! - [`geometry`]: Margins, sizes and rectangles
//! - [`alignment`]: Content alignment policy and placement
//! - [`page_id`]: Page identifiers used as default store keys
//! - [`params`]: Per-page settings bundle

#![forbid(unsafe_code)]

pub mod alignment;
pub mod error;
pub mod geometry;
pub mod page_id;
pub mod params;
pub mod settings;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use error::SettingsError;
pub use geometry::{Margins, RectF, SizeF};
pub use page_id::{ImageId, PageId, SubPage};
pub use params::Params;
pub use settings::{PageOrders, PageSettings, SettingsDefaults};
