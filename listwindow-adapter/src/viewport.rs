use alloc::vec::Vec;

use listwindow::{
    Align, Result, ViewportState, VisibleRange, Window, WindowConfig, check_container_height,
};

use crate::{
    ContainerStyle, ContentStyle, ItemStyle, Overflow, Position, Positioned, RenderItem,
    RenderedWindow,
};

/// Binds a scroll container to the windowing engine.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_scroll` from the container's scroll notification
/// - `on_resize` when the container's height changes
///
/// The adapter is the only writer of its [`ViewportState`]. Each notification overwrites the
/// stored value and triggers exactly one range computation; there is no pending or debounced
/// state. Programmatic scrolling goes through the host: [`ViewportAdapter::scroll_target`]
/// returns an offset to apply to the real container, whose scroll notification then reaches
/// `on_scroll` like any other.
#[derive(Clone, Debug)]
pub struct ViewportAdapter {
    config: WindowConfig,
    viewport: ViewportState,
    overflow: Overflow,
}

impl ViewportAdapter {
    /// Creates an adapter scrolled to the top.
    ///
    /// Fails if `container_height` is negative or not finite.
    pub fn new(config: WindowConfig, container_height: f64) -> Result<Self> {
        Self::from_state(config, ViewportState::new(0.0, container_height))
    }

    /// Restores an adapter from a previously captured viewport snapshot.
    pub fn from_state(config: WindowConfig, viewport: ViewportState) -> Result<Self> {
        let container_height = check_container_height(viewport.container_height)?;
        vdebug!(
            item_height = config.item_height(),
            overscan = config.overscan(),
            container_height,
            "ViewportAdapter::new"
        );
        Ok(Self {
            config,
            viewport: ViewportState::new(viewport.scroll_offset, container_height).sanitized(),
            overflow: Overflow::Auto,
        })
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Current viewport snapshot, by value.
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset
    }

    pub fn container_height(&self) -> f64 {
        self.viewport.container_height
    }

    /// Scroll notification handler.
    ///
    /// Overwrites the stored offset with `scroll_offset` (negative or non-finite values read as
    /// `0`) and returns the window for a collection of `item_count` items.
    pub fn on_scroll(&mut self, scroll_offset: f64, item_count: usize) -> VisibleRange {
        self.viewport =
            ViewportState::new(scroll_offset, self.viewport.container_height).sanitized();
        vtrace!(
            scroll_offset = self.viewport.scroll_offset,
            item_count,
            "on_scroll"
        );
        self.range(item_count)
    }

    /// Returns `on_scroll` as a closure, for hosts that register plain callbacks.
    pub fn scroll_handler(&mut self) -> impl FnMut(f64, usize) -> VisibleRange + '_ {
        move |scroll_offset, item_count| self.on_scroll(scroll_offset, item_count)
    }

    /// Resize notification handler.
    ///
    /// Rejects a negative or non-finite height and leaves the stored state untouched.
    pub fn on_resize(&mut self, container_height: f64, item_count: usize) -> Result<VisibleRange> {
        self.viewport.container_height = check_container_height(container_height)?;
        vtrace!(container_height, item_count, "on_resize");
        Ok(self.range(item_count))
    }

    /// Window for the current viewport and a collection of `item_count` items.
    pub fn range(&self, item_count: usize) -> VisibleRange {
        self.config.range(self.viewport, item_count)
    }

    pub fn container_style(&self) -> ContainerStyle {
        ContainerStyle {
            height: self.viewport.container_height,
            overflow_y: self.overflow,
            position: Position::Relative,
        }
    }

    pub fn content_style(&self, item_count: usize) -> ContentStyle {
        ContentStyle {
            height: self.config.total_extent(item_count),
        }
    }

    pub fn item_style(&self, index: usize) -> ItemStyle {
        ItemStyle::absolute(self.config.top_offset(index), self.config.item_height())
    }

    /// Materializes the current window against `collection`.
    pub fn window<'a, T>(&self, collection: &'a [T]) -> Window<'a, T> {
        let range = self.range(collection.len());
        self.config.materialize(collection, range)
    }

    /// Materializes the current window and hands each item to `renderer`, top to bottom.
    pub fn render<T, R>(&self, collection: &[T], mut renderer: R) -> RenderedWindow<R::Output>
    where
        R: RenderItem<T>,
    {
        let range = self.range(collection.len());
        let mut items = Vec::with_capacity(range.len());
        self.config.for_each_descriptor(collection, range, |d| {
            items.push(Positioned {
                index: d.index,
                style: self.item_style(d.index),
                node: renderer.render(d.item, d.index),
            });
        });
        RenderedWindow {
            container: self.container_style(),
            content: self.content_style(collection.len()),
            items,
        }
    }

    /// Offset the host should scroll the container to so that `index` is in view.
    ///
    /// Does not modify the adapter.
    pub fn scroll_target(&self, index: usize, align: Align, item_count: usize) -> f64 {
        self.config
            .scroll_offset_for_index(index, align, self.viewport, item_count)
    }
}
