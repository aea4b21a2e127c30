use crate::error::{Result, check_item_height};
use crate::{ViewportState, VisibleRange};

/// Computes the overscanned index window for a fixed-height list.
///
/// `start = max(0, floor(scroll_offset / item_height) - overscan)` and
/// `end = min(item_count - 1, ceil((scroll_offset + container_height) / item_height) + overscan)`,
/// both inclusive. The result covers every item whose rectangle `[i * h, (i + 1) * h)`
/// intersects `[scroll_offset, scroll_offset + container_height)`.
///
/// A negative or non-finite `scroll_offset`/`container_height` is read as `0`. When the viewport
/// lies entirely past the last item, `start` is clamped down to `end` so the range stays well
/// formed.
///
/// Returns [`crate::Error::InvalidItemHeight`] if `item_height` is not a positive finite number.
/// An empty collection always yields [`VisibleRange::EMPTY`].
pub fn compute_range(
    scroll_offset: f64,
    item_height: f64,
    container_height: f64,
    overscan: usize,
    item_count: usize,
) -> Result<VisibleRange> {
    let item_height = check_item_height(item_height)?;
    Ok(range_unchecked(
        ViewportState::new(scroll_offset, container_height),
        item_height,
        overscan,
        item_count,
    ))
}

/// Same as [`compute_range`], for an already validated `item_height`.
pub(crate) fn range_unchecked(
    viewport: ViewportState,
    item_height: f64,
    overscan: usize,
    item_count: usize,
) -> VisibleRange {
    if item_count == 0 {
        return VisibleRange::EMPTY;
    }

    let viewport = viewport.sanitized();
    let offset = viewport.scroll_offset;
    let scroll_end = viewport.scroll_end();
    let last = item_count - 1;

    // The quotients can land one ulp across an item boundary; settle both bounds against the
    // same `i * item_height` products used for item offsets.
    let mut first_visible = floor_index(offset / item_height);
    if first_visible > 0 && first_visible as f64 * item_height > offset {
        first_visible -= 1;
    }
    let mut past_visible = ceil_index(scroll_end / item_height);
    if (past_visible as f64) * item_height < scroll_end {
        past_visible = past_visible.saturating_add(1);
    }

    let end = past_visible.saturating_add(overscan).min(last);
    let start = first_visible.saturating_sub(overscan).min(end);

    vtrace!(
        offset,
        container_height = viewport.container_height,
        item_height,
        overscan,
        item_count,
        start,
        end,
        "compute_range"
    );
    VisibleRange::from_inclusive(start, end)
}

/// Returns `value` when it is finite and positive, `0` otherwise.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// `floor` for a non-negative ratio. Saturates at `usize::MAX`.
pub(crate) fn floor_index(ratio: f64) -> usize {
    // `as` truncates toward zero and saturates, which is `floor` for non-negative inputs.
    ratio as usize
}

/// `ceil` for a non-negative ratio. Saturates at `usize::MAX`.
pub(crate) fn ceil_index(ratio: f64) -> usize {
    let truncated = ratio as usize;
    if (truncated as f64) < ratio {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
