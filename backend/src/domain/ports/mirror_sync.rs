//! Port for reconciling the content mirror against upstream snapshots.

use async_trait::async_trait;

use crate::domain::content::{
    Country, Locale, UpstreamArticle, UpstreamCategory, UpstreamDynamicContent, UpstreamSection,
    UpstreamTicketField, UpstreamTicketForm,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by mirror sync adapters.
    pub enum MirrorSyncError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "mirror sync connection failed: {message}",
        /// The reconciliation transaction failed to apply.
        Transaction { message: String } =>
            "mirror sync transaction failed: {message}",
        /// An upstream record could not be stored as given.
        Data { message: String } =>
            "mirror sync rejected upstream data: {message}",
    }
}

/// Write operations that reconcile one resource against an upstream snapshot.
///
/// Country-scoped operations are per-locale: syncing `(country, locale)`
/// upserts parents and translations for that locale, deletes translations
/// absent from the snapshot, and removes a parent only once its last
/// translation in any locale is gone. Each call runs inside a single
/// transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MirrorSync: Send + Sync {
    /// Reconcile categories for one country and locale.
    async fn sync_categories(
        &self,
        upstream: &[UpstreamCategory],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError>;

    /// Reconcile sections for one country and locale.
    async fn sync_sections(
        &self,
        upstream: &[UpstreamSection],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError>;

    /// Reconcile articles for one country and locale.
    async fn sync_articles(
        &self,
        upstream: &[UpstreamArticle],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError>;

    /// Replace the deployment-wide ticket form set.
    async fn sync_ticket_forms(
        &self,
        upstream: &[UpstreamTicketForm],
    ) -> Result<(), MirrorSyncError>;

    /// Replace the deployment-wide ticket field set.
    async fn sync_ticket_fields(
        &self,
        upstream: &[UpstreamTicketField],
    ) -> Result<(), MirrorSyncError>;

    /// Replace the deployment-wide dynamic-content set.
    async fn sync_dynamic_content(
        &self,
        upstream: &[UpstreamDynamicContent],
    ) -> Result<(), MirrorSyncError>;
}
