//! A headless windowing engine for fixed-height, one-dimensional lists.
//!
//! For the scroll-container side (scroll observation, layout attributes, per-item rendering),
//! see the `listwindow-adapter` crate.
//!
//! Given a collection length, a uniform item height, and a viewport snapshot, this crate
//! computes the minimal overscanned index window to materialize and the absolute offset of each
//! item in it. Every computation is O(1) in the collection length (plus O(window) to
//! materialize) and takes its inputs by value, so it is safe to run on every scroll event.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the scroll offset and container height
//! - the backing collection
//! - a way to place each materialized item at its `top_offset`
//!
//! ```rust
//! use listwindow::{ViewportState, WindowConfig};
//!
//! let rows: Vec<u32> = (0..1000).collect();
//! let config = WindowConfig::new(50.0).unwrap().with_overscan(2);
//! let range = config.range(ViewportState::new(500.0, 300.0), rows.len());
//! assert_eq!(range.start_index(), Some(8));
//! assert_eq!(range.end_index(), Some(18));
//!
//! let window = config.materialize(&rows, range);
//! assert_eq!(window.descriptors[0].top_offset, 400.0);
//! assert_eq!(window.total_extent, 50_000.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod materialize;
mod options;
mod range;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, Result, check_container_height};
pub use materialize::{Window, collect_descriptors, for_each_descriptor, total_extent};
pub use options::{DEFAULT_OVERSCAN, WindowConfig};
pub use range::{compute_range, non_negative};
pub use state::ViewportState;
pub use types::{Align, RenderDescriptor, VisibleRange};
