use core::result::Result as CoreResult;

use thiserror::Error;

/// Configuration errors reported at setup time.
///
/// The engine refuses to compute anything from a geometry that would produce negative or
/// infinite indices. Transient size races (a collection shrinking between a scroll event and
/// materialization) are never reported here; missing indices are skipped instead.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// Item height was zero, negative, or not finite.
    #[error("item height must be a positive finite number, got {0}")]
    InvalidItemHeight(f64),
    /// Container height was negative or not finite.
    #[error("container height must be a non-negative finite number, got {0}")]
    InvalidContainerHeight(f64),
}

/// Result type for listwindow operations.
pub type Result<T> = CoreResult<T, Error>;

pub(crate) fn check_item_height(item_height: f64) -> Result<f64> {
    if item_height.is_finite() && item_height > 0.0 {
        Ok(item_height)
    } else {
        vwarn!(item_height, "rejected item height");
        Err(Error::InvalidItemHeight(item_height))
    }
}

/// Validates a container height supplied by a host at setup or on resize.
pub fn check_container_height(container_height: f64) -> Result<f64> {
    if container_height.is_finite() && container_height >= 0.0 {
        Ok(container_height)
    } else {
        vwarn!(container_height, "rejected container height");
        Err(Error::InvalidContainerHeight(container_height))
    }
}
