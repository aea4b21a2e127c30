use crate::range::non_negative;

/// A snapshot of the scroll container's geometry.
///
/// Hosts hand this to the range calculator by value; the only writer is the viewport adapter
/// that owns the scroll container.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub container_height: f64,
}

impl ViewportState {
    pub fn new(scroll_offset: f64, container_height: f64) -> Self {
        Self {
            scroll_offset,
            container_height,
        }
    }

    /// Reads a negative or non-finite offset or height as `0`.
    pub fn sanitized(self) -> Self {
        Self {
            scroll_offset: non_negative(self.scroll_offset),
            container_height: non_negative(self.container_height),
        }
    }

    /// The offset one past the last visible pixel.
    pub fn scroll_end(&self) -> f64 {
        self.scroll_offset + self.container_height
    }
}
