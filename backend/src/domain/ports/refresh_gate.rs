//! Port for the demand counters and advisory locks behind refresh decisions.

use async_trait::async_trait;

use super::{RefreshKey, define_port_error};

define_port_error! {
    /// Errors raised by refresh gate adapters.
    pub enum RefreshGateError {
        /// Gate backend is unavailable or timing out.
        Backend { message: String } =>
            "refresh gate backend failure: {message}",
    }
}

/// Demand counter and refresh lock for one mirrored partition.
///
/// The counter records how many reads a partition has served since its last
/// refresh. The lock is advisory with a short expiry so a crashed refresher
/// cannot wedge the partition; exactly one caller observes `try_lock`
/// returning `true` per expiry window.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshGate: Send + Sync {
    /// Increment the partition's demand counter and return the new value.
    async fn bump(&self, key: &RefreshKey) -> Result<i64, RefreshGateError>;

    /// Reset the partition's demand counter to zero.
    async fn reset(&self, key: &RefreshKey) -> Result<(), RefreshGateError>;

    /// Attempt to take the partition's refresh lock.
    ///
    /// Returns `false` when another refresher already holds it.
    async fn try_lock(&self, key: &RefreshKey) -> Result<bool, RefreshGateError>;

    /// Release the partition's refresh lock.
    async fn unlock(&self, key: &RefreshKey) -> Result<(), RefreshGateError>;
}
