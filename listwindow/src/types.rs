use core::fmt;
use core::ops::Range;

/// Where a target item should land inside the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item top at the viewport top.
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item bottom at the viewport bottom.
    End,
    /// Scroll the minimal amount needed to bring the item into view.
    #[default]
    Auto,
}

/// The contiguous, inclusive index interval of a collection to materialize.
///
/// A non-empty range always satisfies `start_index <= end_index < item_count` for the item
/// count it was computed against. An empty collection yields [`VisibleRange::EMPTY`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    start: usize,
    end: usize, // exclusive
}

impl VisibleRange {
    /// The range containing no items.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Builds a range from inclusive bounds. Returns [`Self::EMPTY`] when `start_index >
    /// end_index`.
    pub fn from_inclusive(start_index: usize, end_index: usize) -> Self {
        if start_index > end_index {
            return Self::EMPTY;
        }
        Self {
            start: start_index,
            end: end_index.saturating_add(1),
        }
    }

    /// First index in the range, or `None` when empty.
    pub fn start_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start)
    }

    /// Last index in the range (inclusive), or `None` when empty.
    pub fn end_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// The covered indexes as a half-open `Range`, in ascending order.
    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.start..self.end
        }
    }
}

impl Default for VisibleRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for VisibleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_index(), self.end_index()) {
            (Some(start), Some(end)) => write!(f, "VisibleRange[{start}..={end}]"),
            _ => f.write_str("VisibleRange[empty]"),
        }
    }
}

/// One materialized item: where it sits in the scroll axis and what it holds.
///
/// Descriptors borrow from the collection and are recomputed on every call; they are not meant
/// to be stored across renders.
pub struct RenderDescriptor<'a, T> {
    pub index: usize,
    pub item: &'a T,
    /// Absolute offset of the item's top edge from the start of the content.
    pub top_offset: f64,
}

impl<T> Clone for RenderDescriptor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderDescriptor<'_, T> {}

impl<T: PartialEq> PartialEq for RenderDescriptor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.item == other.item
            && self.top_offset.to_bits() == other.top_offset.to_bits()
    }
}

impl<T: fmt::Debug> fmt::Debug for RenderDescriptor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderDescriptor")
            .field("index", &self.index)
            .field("item", self.item)
            .field("top_offset", &self.top_offset)
            .finish()
    }
}
