//! Turns a [`VisibleRange`] into concrete, positioned descriptors.
//!
//! Output is ascending by index and fully determined by `(collection, range, item_height)`, so
//! hosts can diff consecutive windows for minimal updates. Indexes that fall outside the
//! collection (it shrank after the range was computed) are skipped; the next scroll or resize
//! event recomputes the range against the new length.

use alloc::vec::Vec;

use crate::{RenderDescriptor, VisibleRange, WindowConfig};

/// A materialized window plus the extent of the whole list.
#[derive(Clone, Debug, PartialEq)]
pub struct Window<'a, T> {
    pub descriptors: Vec<RenderDescriptor<'a, T>>,
    /// `collection.len() * item_height`, recomputed from the collection on every call.
    pub total_extent: f64,
}

impl<T> Default for Window<'_, T> {
    fn default() -> Self {
        Self {
            descriptors: Vec::new(),
            total_extent: 0.0,
        }
    }
}

impl<'a, T> Window<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, RenderDescriptor<'a, T>> {
        self.descriptors.iter()
    }
}

pub fn total_extent(item_count: usize, item_height: f64) -> f64 {
    item_count as f64 * item_height
}

/// Collects descriptors for `range` into a new [`Window`].
///
/// For maximum performance, prefer [`for_each_descriptor`] or [`collect_descriptors`] with a
/// reused buffer.
pub fn materialize<'a, T>(
    config: &WindowConfig,
    collection: &'a [T],
    range: VisibleRange,
) -> Window<'a, T> {
    let mut descriptors = Vec::with_capacity(range.len().min(collection.len()));
    for_each_descriptor(config, collection, range, |d| descriptors.push(d));
    Window {
        descriptors,
        total_extent: config.total_extent(collection.len()),
    }
}

/// Collects descriptors into `out` (clears `out` first) and returns the total extent.
pub fn collect_descriptors<'a, T>(
    config: &WindowConfig,
    collection: &'a [T],
    range: VisibleRange,
    out: &mut Vec<RenderDescriptor<'a, T>>,
) -> f64 {
    out.clear();
    for_each_descriptor(config, collection, range, |d| out.push(d));
    config.total_extent(collection.len())
}

/// Calls `f` once per index of `range` present in `collection`, top to bottom.
pub fn for_each_descriptor<'a, T>(
    config: &WindowConfig,
    collection: &'a [T],
    range: VisibleRange,
    mut f: impl FnMut(RenderDescriptor<'a, T>),
) {
    let item_height = config.item_height();
    let indices = range.indices();
    let end = indices.end.min(collection.len());
    let present = collection.get(indices.start..end).unwrap_or(&[]);
    let skipped = indices.len() - present.len();
    for (index, item) in (indices.start..).zip(present) {
        f(RenderDescriptor {
            index,
            item,
            top_offset: index as f64 * item_height,
        });
    }
    if skipped > 0 {
        vdebug!(
            skipped,
            len = collection.len(),
            ?range,
            "skipped indexes missing from the collection"
        );
    }
}
