//! Port for fetching canonical content from the upstream helpdesk.

use async_trait::async_trait;

use crate::domain::content::{
    Country, Locale, UpstreamArticle, UpstreamCategory, UpstreamDynamicContent, UpstreamSection,
    UpstreamTicketField, UpstreamTicketForm,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by upstream helpdesk adapters.
    pub enum HelpdeskSourceError {
        /// Upstream answered with an unexpected HTTP status.
        Status { status: u16 } =>
            "helpdesk responded with unexpected status {status}",
        /// Request never completed (connection, DNS, timeout).
        Transport { message: String } =>
            "helpdesk request failed: {message}",
        /// Response body could not be decoded.
        Decode { message: String } =>
            "helpdesk response could not be decoded: {message}",
    }
}

/// Fetchers for the upstream helpdesk's canonical content.
///
/// Each fetcher walks upstream pagination internally and returns the
/// complete record list for its resource, normalised into upstream records.
/// Listing fetchers are scoped by country and locale; ticket forms, ticket
/// fields and dynamic content are deployment-wide feeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HelpdeskSource: Send + Sync {
    /// Fetch every category for one country and locale.
    async fn categories(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<UpstreamCategory>, HelpdeskSourceError>;

    /// Fetch every section for one country and locale.
    async fn sections(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<UpstreamSection>, HelpdeskSourceError>;

    /// Fetch every article for one country and locale.
    async fn articles(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<UpstreamArticle>, HelpdeskSourceError>;

    /// Fetch the deployment-wide ticket form list.
    async fn ticket_forms(&self) -> Result<Vec<UpstreamTicketForm>, HelpdeskSourceError>;

    /// Fetch the deployment-wide ticket field list.
    async fn ticket_fields(&self) -> Result<Vec<UpstreamTicketField>, HelpdeskSourceError>;

    /// Fetch the deployment-wide dynamic-content list.
    async fn dynamic_content(&self) -> Result<Vec<UpstreamDynamicContent>, HelpdeskSourceError>;
}
