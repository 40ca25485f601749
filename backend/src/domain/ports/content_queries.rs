//! Port for reading mirrored help-centre content.
//!
//! The [`ContentQueries`] trait is the read side of the content store.
//! Adapters back it with the relational mirror; the service layer composes
//! it with the response cache and the refresh examiner.

use async_trait::async_trait;

use crate::domain::content::{
    Article, Category, Country, DynamicContentItem, ListingQuery, Locale, Section, TicketField,
    TicketForm,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by content store read adapters.
    pub enum ContentQueryError {
        /// No row satisfied the lookup.
        NotFound { entity: String } => "{entity} not found",
        /// Store connection could not be established.
        Connection { message: String } =>
            "content store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "content store query failed: {message}",
        /// A stored row could not be interpreted.
        Data { message: String } =>
            "content store returned malformed data: {message}",
    }
}

/// Read operations over the mirrored help-centre content.
///
/// List operations return the page of matching rows together with the total
/// count of parents that carry a translation in the requested locale, so the
/// caller can paginate without a second query. Single-row gets follow the
/// mirror's fallback rules: [`ContentQueries::section`] and
/// [`ContentQueries::article`] return the parent with blank translation
/// attributes when the parent exists but the locale does not, while list
/// operations omit untranslated parents entirely.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentQueries: Send + Sync {
    /// List categories for the query's country and locale.
    async fn categories(
        &self,
        query: &ListingQuery,
    ) -> Result<(Vec<Category>, i64), ContentQueryError>;

    /// Resolve a case-insensitive category key name to its category id.
    async fn category_id_for_key_name(
        &self,
        key_name: &str,
        country: Country,
    ) -> Result<i64, ContentQueryError>;

    /// List sections belonging to one category.
    async fn sections_by_category(
        &self,
        category_id: i64,
        query: &ListingQuery,
    ) -> Result<(Vec<Section>, i64), ContentQueryError>;

    /// Fetch a single section, falling back to blank translation fields.
    async fn section(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Section, ContentQueryError>;

    /// List every article for the query's country and locale.
    async fn articles(
        &self,
        query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError>;

    /// List articles carrying any of the given labels.
    ///
    /// An empty label set disables the filter and lists every article for
    /// the country and locale.
    async fn articles_by_category(
        &self,
        labels: &[String],
        query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError>;

    /// List articles belonging to one section.
    async fn articles_by_section(
        &self,
        section_id: i64,
        query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError>;

    /// Fetch a single article, falling back to blank translation fields.
    async fn article(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Article, ContentQueryError>;

    /// Most-read articles ranked by promotion then click count.
    async fn top_articles(
        &self,
        limit: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<Article>, ContentQueryError>;

    /// Add one to an article's click counter.
    async fn bump_article_click(&self, id: i64, country: Country) -> Result<(), ContentQueryError>;

    /// Assemble a ticket form with its portal-visible fields in stored order.
    ///
    /// Fields that are missing or hidden from the portal are skipped; a
    /// dynamic-content title that fails to resolve is an error, not a skip.
    async fn ticket_form(
        &self,
        form_id: i64,
        locale: Locale,
    ) -> Result<TicketForm, ContentQueryError>;

    /// Fetch a single portal-visible ticket field with its title resolved.
    async fn ticket_field(
        &self,
        field_id: i64,
        locale: Locale,
    ) -> Result<TicketField, ContentQueryError>;

    /// Fetch a dynamic-content item by its full placeholder string.
    async fn dynamic_content_item(
        &self,
        placeholder: &str,
    ) -> Result<DynamicContentItem, ContentQueryError>;
}
