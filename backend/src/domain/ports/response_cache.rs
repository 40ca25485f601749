//! Port for caching serialised read responses per refresh partition.

use async_trait::async_trait;

use super::{RefreshKey, define_port_error};

define_port_error! {
    /// Errors raised by response cache adapters.
    pub enum ResponseCacheError {
        /// Cache backend is unavailable or timing out.
        Backend { message: String } =>
            "response cache backend failure: {message}",
    }
}

/// Cache of serialised responses, namespaced by refresh partition.
///
/// Entries live under the partition's [`RefreshKey::cache_prefix`] plus a
/// caller-supplied fingerprint of the query arguments, so a refresh can
/// invalidate every cached response for its partition in one sweep without
/// knowing which queries were served.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Read a cached response, refreshing its expiry on a hit.
    async fn get(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
    ) -> Result<Option<String>, ResponseCacheError>;

    /// Store a response unless one is already cached for this fingerprint.
    ///
    /// Returns `true` when the entry was written, `false` when an existing
    /// entry was left in place.
    async fn put(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
        body: &str,
    ) -> Result<bool, ResponseCacheError>;

    /// Drop every cached response for the partition.
    async fn invalidate(&self, key: &RefreshKey) -> Result<(), ResponseCacheError>;
}
