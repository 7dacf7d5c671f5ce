//! Thread-safe per-page layout settings with aggregate size queries.
//!
//! Every page carries hard margins, a detected content zone and an
//! alignment. The store keeps three views of the same records:
//!
//! - by page id (authoritative),
//! - by hard width, descending,
//! - by hard height, descending,
//!
//! so that the document-wide maximum page size, and the "what if this page
//! were different" variant used for live previews, are answered from the
//! front of the derived orders instead of a rescan.
//!
//! ```text
//!     hard width = margins.left + content.width + margins.right
//!     ┌─────────────────────────────┐
//!     │          top                │
//!     │     ┌───────────────┐       │
//!     │left │    content    │ right │  hard height =
//!     │     └───────────────┘       │    top + content.height + bottom
//!     │          bottom             │
//!     └─────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use zenpagelayout::{PageId, PageSettings, RectF, SizeF};
//!
//! let settings = PageSettings::new();
//! let a = PageId::single("a.tif");
//! let b = PageId::single("b.tif");
//!
//! settings.set_content_zone(&a, RectF::new(0.0, 0.0, 800.0, 1600.0), SizeF::new(100.0, 200.0));
//! settings.set_content_zone(&b, RectF::new(0.0, 0.0, 400.0, 400.0), SizeF::new(50.0, 50.0));
//!
//! // Default margins are 10/5/10/5 mm.
//! assert_eq!(settings.aggregate_hard_size(), SizeF::new(120.0, 210.0));
//! assert_eq!(settings.find_widest_page(), Some(a.clone()));
//!
//! // Preview shrinking `a`: the other page now dominates.
//! assert_eq!(
//!     settings.aggregate_hard_size_with(&a, SizeF::new(10.0, 10.0)),
//!     SizeF::new(70.0, 60.0)
//! );
//! ```

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use ordered_float::OrderedFloat;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::alignment::Alignment;
use crate::error::SettingsError;
use crate::geometry::{Margins, RectF, SizeF};
use crate::page_id::PageId;
use crate::params::Params;

/// Values used to seed a page's record on its first write.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SettingsDefaults {
    pub hard_margins: Margins,
    pub alignment: Alignment,
}

impl Default for SettingsDefaults {
    /// 10/5/10/5 mm margins, centered on both axes.
    fn default() -> Self {
        Self {
            hard_margins: Margins::new(10.0, 5.0, 10.0, 5.0),
            alignment: Alignment::CENTER,
        }
    }
}

impl SettingsDefaults {
    /// Set the default hard margins.
    pub fn hard_margins(mut self, margins: Margins) -> Self {
        self.hard_margins = margins;
        self
    }

    /// Set the default alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Reject non-finite default margins.
    pub fn validated(self) -> Result<Self, SettingsError> {
        self.hard_margins.validated()?;
        Ok(self)
    }

    fn seed(&self) -> Params {
        Params::new(self.hard_margins, RectF::EMPTY, SizeF::ZERO, self.alignment)
    }
}

/// Position in a descending derived order. Ties go to the smaller key.
type Rank<K> = (Reverse<OrderedFloat<f64>>, K);

fn rank<K>(extent: f64, page: K) -> Rank<K> {
    (Reverse(OrderedFloat(extent)), page)
}

/// Records plus the two derived orders. Only ever touched under the lock.
struct Index<K> {
    items: BTreeMap<K, Params>,
    desc_width: BTreeSet<Rank<K>>,
    desc_height: BTreeSet<Rank<K>>,
}

impl<K: Ord + Clone + fmt::Debug> Index<K> {
    fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            desc_width: BTreeSet::new(),
            desc_height: BTreeSet::new(),
        }
    }

    /// Insert a seeded record, or apply `modify` to the existing one and
    /// re-rank it if its hard size moved.
    fn upsert(
        &mut self,
        page: &K,
        seed: impl FnOnce() -> Params,
        modify: impl FnOnce(&mut Params),
    ) {
        match self.items.get_mut(page) {
            Some(params) => {
                let old = params.hard_size();
                modify(params);
                let new = params.hard_size();
                trace!(?page, "updated page settings");
                Self::rerank(&mut self.desc_width, page, old.width, new.width);
                Self::rerank(&mut self.desc_height, page, old.height, new.height);
            }
            None => {
                let params = seed();
                debug!(?page, hard_size = ?params.hard_size(), "created page settings");
                self.desc_width.insert(rank(params.hard_width(), page.clone()));
                self.desc_height.insert(rank(params.hard_height(), page.clone()));
                self.items.insert(page.clone(), params);
            }
        }
    }

    fn rerank(order: &mut BTreeSet<Rank<K>>, page: &K, old: f64, new: f64) {
        if OrderedFloat(old) == OrderedFloat(new) {
            return;
        }
        let mut entry = rank(old, page.clone());
        order.remove(&entry);
        entry.0 = Reverse(OrderedFloat(new));
        order.insert(entry);
        trace!(?page, old, new, "re-ranked page");
    }

    fn remove(&mut self, page: &K) -> Option<Params> {
        let params = self.items.remove(page)?;
        self.desc_width.remove(&rank(params.hard_width(), page.clone()));
        self.desc_height.remove(&rank(params.hard_height(), page.clone()));
        Some(params)
    }

    fn aggregate(&self) -> SizeF {
        SizeF::new(front(&self.desc_width), front(&self.desc_height))
    }

    fn aggregate_with(&self, page: &K, hard_size: SizeF) -> SizeF {
        SizeF::new(
            front_excluding(&self.desc_width, page, hard_size.width),
            front_excluding(&self.desc_height, page, hard_size.height),
        )
    }
}

/// Largest extent in a descending order, 0 when empty.
fn front<K: Ord>(order: &BTreeSet<Rank<K>>) -> f64 {
    order
        .first()
        .map_or(0.0, |(Reverse(extent), _)| extent.into_inner())
}

/// Largest extent if `page` had extent `replacement`.
///
/// Only the leader is swapped out: when `page` is not currently first, the
/// leader's extent stands.
fn front_excluding<K: Eq>(order: &BTreeSet<Rank<K>>, page: &K, replacement: f64) -> f64 {
    let mut it = order.iter();
    match it.next() {
        None => 0.0,
        Some((Reverse(first), leader)) if leader != page => first.into_inner(),
        Some(_) => match it.next() {
            Some((Reverse(second), _)) => replacement.max(second.into_inner()),
            None => replacement,
        },
    }
}

/// A consistent copy of the three index views, taken under one lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrders<K> {
    /// Ascending page id.
    pub by_key: Vec<K>,
    /// Descending hard width, ties by ascending page id.
    pub by_width: Vec<K>,
    /// Descending hard height, ties by ascending page id.
    pub by_height: Vec<K>,
}

/// Per-page layout settings shared across pipeline stages and UI threads.
///
/// All operations take a single internal lock for their whole duration, so
/// the three index views are always observed in agreement. Queries return
/// copies; nothing handed out aliases the store.
///
/// Pages without a record are not an error: getters fall back to the
/// store's [`SettingsDefaults`], and optional queries return `None`.
pub struct PageSettings<K = PageId> {
    index: Mutex<Index<K>>,
    defaults: SettingsDefaults,
}

impl<K: Ord + Clone + fmt::Debug> Default for PageSettings<K> {
    fn default() -> Self {
        Self::with_defaults(SettingsDefaults::default())
    }
}

impl<K> fmt::Debug for PageSettings<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSettings")
            .field("pages", &self.index.lock().items.len())
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl<K: Ord + Clone + fmt::Debug> PageSettings<K> {
    /// Empty store with 10/5/10/5 mm margins and centered alignment as
    /// defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store seeding new records from `defaults`.
    pub fn with_defaults(defaults: SettingsDefaults) -> Self {
        Self {
            index: Mutex::new(Index::new()),
            defaults,
        }
    }

    /// Defaults used for pages without a record.
    pub fn defaults(&self) -> SettingsDefaults {
        self.defaults
    }

    /// Number of pages with a record.
    pub fn len(&self) -> usize {
        self.index.lock().items.len()
    }

    /// True when no page has a record.
    pub fn is_empty(&self) -> bool {
        self.index.lock().items.is_empty()
    }

    /// All settings of `page`, or `None` if it was never written.
    pub fn page_params(&self, page: &K) -> Option<Params> {
        self.index.lock().items.get(page).copied()
    }

    /// Replace every field of `page`'s record, creating it if needed.
    pub fn set_page_params(&self, page: &K, params: Params) {
        self.index.lock().upsert(page, || params, |item| *item = params);
    }

    /// Stored hard margins, or the default margins.
    pub fn hard_margins(&self, page: &K) -> Margins {
        self.index
            .lock()
            .items
            .get(page)
            .map_or(self.defaults.hard_margins, |p| p.hard_margins)
    }

    /// Set the hard margins of `page`, leaving its other fields untouched.
    pub fn set_hard_margins(&self, page: &K, margins: Margins) {
        let defaults = &self.defaults;
        self.index.lock().upsert(
            page,
            || Params {
                hard_margins: margins,
                ..defaults.seed()
            },
            |item| item.hard_margins = margins,
        );
    }

    /// Stored alignment, or the default alignment.
    pub fn page_alignment(&self, page: &K) -> Alignment {
        self.index
            .lock()
            .items
            .get(page)
            .map_or(self.defaults.alignment, |p| p.alignment)
    }

    /// Set the alignment of `page`, leaving its other fields untouched.
    pub fn set_page_alignment(&self, page: &K, alignment: Alignment) {
        let defaults = &self.defaults;
        self.index.lock().upsert(
            page,
            || Params {
                alignment,
                ..defaults.seed()
            },
            |item| item.alignment = alignment,
        );
    }

    /// Set the detected content zone of `page`: its pixel rectangle and
    /// physical size together.
    pub fn set_content_zone(&self, page: &K, content_rect: RectF, content_size: SizeF) {
        let defaults = &self.defaults;
        self.index.lock().upsert(
            page,
            || Params {
                content_rect,
                content_size,
                ..defaults.seed()
            },
            |item| {
                item.content_rect = content_rect;
                item.content_size = content_size;
            },
        );
    }

    /// Hard size of one page, or `None` if it was never written.
    pub fn hard_size(&self, page: &K) -> Option<SizeF> {
        self.index.lock().items.get(page).map(Params::hard_size)
    }

    /// Largest hard width and largest hard height over all pages.
    ///
    /// The two maxima may come from different pages. `0 × 0` when empty.
    pub fn aggregate_hard_size(&self) -> SizeF {
        self.index.lock().aggregate()
    }

    /// Aggregate hard size as if `page`'s hard size were `hard_size`.
    ///
    /// Each axis is handled on its own: if `page` leads that axis, the
    /// answer is the larger of `hard_size` and the runner-up (or `hard_size`
    /// alone when there is no runner-up); otherwise the leader's extent.
    /// Nothing is committed. `0 × 0` when empty.
    pub fn aggregate_hard_size_with(&self, page: &K, hard_size: SizeF) -> SizeF {
        self.index.lock().aggregate_with(page, hard_size)
    }

    /// Page with the largest hard width. Ties go to the smallest page id.
    pub fn find_widest_page(&self) -> Option<K> {
        let index = self.index.lock();
        index.desc_width.first().map(|(_, page)| page.clone())
    }

    /// Page with the largest hard height. Ties go to the smallest page id.
    pub fn find_tallest_page(&self) -> Option<K> {
        let index = self.index.lock();
        index.desc_height.first().map(|(_, page)| page.clone())
    }

    /// Drop the record of `page`, returning what it held.
    pub fn remove_page(&self, page: &K) -> Option<Params> {
        let removed = self.index.lock().remove(page);
        if removed.is_some() {
            debug!(?page, "removed page settings");
        }
        removed
    }

    /// Keep only the pages for which `keep` returns true.
    ///
    /// `keep` runs with the store locked and must not call back into it.
    pub fn retain(&self, mut keep: impl FnMut(&K, &Params) -> bool) {
        let mut index = self.index.lock();
        let doomed: Vec<K> = index
            .items
            .iter()
            .filter(|&(page, params)| !keep(page, params))
            .map(|(page, _)| page.clone())
            .collect();
        for page in &doomed {
            index.remove(page);
        }
        if !doomed.is_empty() {
            debug!(removed = doomed.len(), remaining = index.items.len(), "pruned page settings");
        }
    }

    /// Drop records of pages no longer in the document.
    pub fn remove_pages_missing_from(&self, pages: &BTreeSet<K>) {
        self.retain(|page, _| pages.contains(page));
    }

    /// Drop every record.
    pub fn clear(&self) {
        let mut index = self.index.lock();
        let count = index.items.len();
        *index = Index::new();
        debug!(count, "cleared page settings");
    }

    /// Copy of all three index views, taken atomically.
    pub fn orders(&self) -> PageOrders<K> {
        let index = self.index.lock();
        PageOrders {
            by_key: index.items.keys().cloned().collect(),
            by_width: index.desc_width.iter().map(|(_, p)| p.clone()).collect(),
            by_height: index.desc_height.iter().map(|(_, p)| p.clone()).collect(),
        }
    }
}
