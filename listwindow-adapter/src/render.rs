use alloc::vec::Vec;

use crate::{ContainerStyle, ContentStyle, ItemStyle};

/// Produces a presentation unit for one item.
///
/// Implemented for every `FnMut(&T, usize) -> O` closure, so most hosts pass a closure. Closures
/// passed directly need their item parameter annotated (`|row: &Row, index| ...`).
pub trait RenderItem<T> {
    type Output;

    fn render(&mut self, item: &T, index: usize) -> Self::Output;
}

impl<T, O, F> RenderItem<T> for F
where
    F: FnMut(&T, usize) -> O,
{
    type Output = O;

    fn render(&mut self, item: &T, index: usize) -> O {
        self(item, index)
    }
}

/// A rendered item and where the host must place it.
#[derive(Clone, Debug, PartialEq)]
pub struct Positioned<N> {
    pub index: usize,
    pub style: ItemStyle,
    pub node: N,
}

/// Everything a host needs to draw one frame of the list.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedWindow<N> {
    pub container: ContainerStyle,
    pub content: ContentStyle,
    /// Ascending by index.
    pub items: Vec<Positioned<N>>,
}

impl<N> RenderedWindow<N> {
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.items.iter().map(|p| &p.node)
    }
}
