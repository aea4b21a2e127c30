//! Scroll-container adapter for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and only computes which items to materialize and where.
//! This crate provides the small, framework-neutral pieces a host needs around it:
//!
//! - [`ViewportAdapter`]: owns the scroll offset and container height, and recomputes the window
//!   once per scroll or resize notification
//! - Layout attributes for the container, the content element, and each item
//! - [`RenderItem`]: the per-item rendering capability, implemented for closures
//!
//! ```rust
//! use listwindow::WindowConfig;
//! use listwindow_adapter::ViewportAdapter;
//!
//! let rows: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
//! let mut adapter = ViewportAdapter::new(WindowConfig::new(20.0).unwrap(), 100.0).unwrap();
//! adapter.on_scroll(400.0, rows.len());
//!
//! let frame = adapter.render(&rows, |row: &String, _index: usize| row.to_uppercase());
//! assert_eq!(frame.items[0].index, 15);
//! assert_eq!(frame.content.height, 2000.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod render;
mod viewport;


pub use layout::{ContainerStyle, ContentStyle, ItemStyle, Overflow, Position};
pub use render::{Positioned, RenderItem, RenderedWindow};
pub use viewport::ViewportAdapter;
