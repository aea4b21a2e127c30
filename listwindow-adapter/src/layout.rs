use core::fmt;

/// Vertical overflow behavior of the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// Scrollbar shown only when content overflows.
    #[default]
    Auto,
    /// Scrollbar always shown.
    Scroll,
}

impl Overflow {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Scroll => "scroll",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Relative,
    Absolute,
}

impl Position {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

/// Attributes the host must apply to the scroll container.
///
/// The container has a fixed height, scrolls vertically, and is the positioning context for
/// absolutely placed items.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerStyle {
    pub height: f64,
    pub overflow_y: Overflow,
    pub position: Position,
}

impl fmt::Display for ContainerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "height: {}px; overflow-y: {}; position: {}",
            self.height,
            self.overflow_y.as_css(),
            self.position.as_css()
        )
    }
}

/// The inner element that gives the container its full scrollable height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentStyle {
    /// `item_count * item_height`.
    pub height: f64,
}

impl fmt::Display for ContentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "height: {}px; position: relative", self.height)
    }
}

/// Placement of one materialized item inside the content element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub top: f64,
    pub height: f64,
    pub position: Position,
}

impl ItemStyle {
    pub fn absolute(top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            position: Position::Absolute,
        }
    }
}

impl fmt::Display for ItemStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: {}; top: {}px; height: {}px; left: 0; right: 0",
            self.position.as_css(),
            self.top,
            self.height
        )
    }
}
