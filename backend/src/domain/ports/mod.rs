//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod content_queries;
mod helpdesk_source;
mod mirror_sync;
mod refresh_gate;
mod refresh_key;
mod response_cache;

#[cfg(test)]
pub use content_queries::MockContentQueries;
pub use content_queries::{ContentQueries, ContentQueryError};
#[cfg(test)]
pub use helpdesk_source::MockHelpdeskSource;
pub use helpdesk_source::{HelpdeskSource, HelpdeskSourceError};
#[cfg(test)]
pub use mirror_sync::MockMirrorSync;
pub use mirror_sync::{MirrorSync, MirrorSyncError};
#[cfg(test)]
pub use refresh_gate::MockRefreshGate;
pub use refresh_gate::{RefreshGate, RefreshGateError};
pub use refresh_key::RefreshKey;
#[cfg(test)]
pub use response_cache::MockResponseCache;
pub use response_cache::{ResponseCache, ResponseCacheError};
