use crate::error::{Result, check_item_height};
use crate::materialize::{self, Window};
use crate::range::{floor_index, non_negative, range_unchecked};
use crate::{Align, RenderDescriptor, ViewportState, VisibleRange};

/// Overscan applied when none is configured.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Per-mount configuration for a fixed-height list.
///
/// `item_height` is validated once in [`WindowConfig::new`]; every query on a `WindowConfig` is
/// therefore infallible. The config is immutable after construction apart from the builder-style
/// [`WindowConfig::with_overscan`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Deserialization
/// runs the same item height check as [`WindowConfig::new`], and a missing `overscan` reads as
/// [`DEFAULT_OVERSCAN`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWindowConfig"))]
pub struct WindowConfig {
    item_height: f64,
    overscan: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindowConfig {
    item_height: f64,
    #[serde(default = "default_overscan")]
    overscan: usize,
}

#[cfg(feature = "serde")]
fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindowConfig> for WindowConfig {
    type Error = crate::Error;

    fn try_from(raw: RawWindowConfig) -> Result<Self> {
        Ok(Self::new(raw.item_height)?.with_overscan(raw.overscan))
    }
}

impl WindowConfig {
    /// Creates a config with the default overscan.
    ///
    /// Fails with [`crate::Error::InvalidItemHeight`] when `item_height` is zero, negative, or
    /// not finite.
    pub fn new(item_height: f64) -> Result<Self> {
        let item_height = check_item_height(item_height)?;
        vdebug!(item_height, "WindowConfig::new");
        Ok(Self {
            item_height,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Overscanned window for a viewport snapshot.
    pub fn range(&self, viewport: ViewportState, item_count: usize) -> VisibleRange {
        range_unchecked(viewport, self.item_height, self.overscan, item_count)
    }

    /// Full scrollable height: `item_count * item_height`.
    pub fn total_extent(&self, item_count: usize) -> f64 {
        materialize::total_extent(item_count, self.item_height)
    }

    /// Absolute top offset of `index`.
    pub fn top_offset(&self, index: usize) -> f64 {
        index as f64 * self.item_height
    }

    /// The item whose rectangle contains `offset`, or `None` when `offset` lies past the end.
    ///
    /// Negative offsets resolve to the first item.
    pub fn index_at_offset(&self, offset: f64, item_count: usize) -> Option<usize> {
        let index = floor_index(non_negative(offset) / self.item_height);
        (index < item_count).then_some(index)
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    pub fn max_scroll_offset(&self, container_height: f64, item_count: usize) -> f64 {
        let max = self.total_extent(item_count) - non_negative(container_height);
        non_negative(max)
    }

    /// Scroll offset that brings `index` into view with the given alignment.
    ///
    /// Out-of-range indexes are clamped to the last item. The result is clamped to
    /// `[0, max_scroll_offset]`. An empty collection yields `0`.
    pub fn scroll_offset_for_index(
        &self,
        index: usize,
        align: Align,
        viewport: ViewportState,
        item_count: usize,
    ) -> f64 {
        if item_count == 0 {
            return 0.0;
        }
        let index = index.min(item_count - 1);
        let viewport = viewport.sanitized();
        let view = viewport.container_height;
        let current = viewport.scroll_offset;
        let top = self.top_offset(index);
        let bottom = top + self.item_height;

        let target = match align {
            Align::Start => top,
            Align::End => bottom - view,
            Align::Center => top + self.item_height / 2.0 - view / 2.0,
            Align::Auto => {
                if top >= current && bottom <= current + view {
                    current
                } else if top < current {
                    top
                } else {
                    bottom - view
                }
            }
        };

        non_negative(target).min(self.max_scroll_offset(view, item_count))
    }

    /// Materializes `range` against `collection`. See [`crate::materialize`].
    pub fn materialize<'a, T>(&self, collection: &'a [T], range: VisibleRange) -> Window<'a, T> {
        materialize::materialize(self, collection, range)
    }

    /// Zero-allocation variant of [`WindowConfig::materialize`].
    pub fn for_each_descriptor<'a, T>(
        &self,
        collection: &'a [T],
        range: VisibleRange,
        f: impl FnMut(RenderDescriptor<'a, T>),
    ) {
        materialize::for_each_descriptor(self, collection, range, f);
    }
}
