//! Diesel-backed implementation of the mirror write port.
//!
//! Country-scoped resources reconcile in three passes inside one
//! transaction: upstream records already mirrored are updated in place
//! together with their translation for the refreshed locale, new records are
//! inserted, and mirrored ids absent upstream lose that locale's translation.
//! A parent row is only deleted once its last translation in any locale is
//! gone, so refreshing `en-us` never tears down content that `zh-tw` still
//! serves. Deployment-wide resources (ticket forms, ticket fields, dynamic
//! content) have no locale axis and are replaced outright.
//!
//! Every reconciliation runs under the configured transaction deadline.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;

use crate::domain::content::{
    Country, Locale, UpstreamArticle, UpstreamCategory, UpstreamDynamicContent, UpstreamSection,
    UpstreamTicketField, UpstreamTicketForm,
};
use crate::domain::ports::{MirrorSync, MirrorSyncError};

use super::models::{
    ArticleTranslationUpdate, ArticleUpdate, CategoryTranslationUpdate, CategoryUpdate,
    DynamicContentItemUpdate, NewArticleRow, NewArticleTranslationRow, NewCategoryRow,
    NewCategoryTranslationRow, NewDynamicContentItemRow, NewSectionRow, NewSectionTranslationRow,
    NewTicketFieldRow, NewTicketFormRow, SectionTranslationUpdate, SectionUpdate,
    TicketFieldUpdate, TicketFormUpdate,
};
use super::pool::{DbPool, PoolError};
use super::schema::{
    article_translates, articles, categories, category_translates, dynamic_content_items,
    section_translates, sections, ticket_fields, ticket_forms,
};

/// Mirror write adapter backed by the PostgreSQL mirror.
#[derive(Clone)]
pub struct DieselMirrorSync {
    pool: DbPool,
    transaction_deadline: Duration,
}

impl DieselMirrorSync {
    /// Create a new adapter over the given pool.
    ///
    /// `transaction_deadline` bounds each reconciliation end to end; an
    /// elapsed deadline abandons the transaction and reports a transaction
    /// failure.
    pub fn new(pool: DbPool, transaction_deadline: Duration) -> Self {
        Self {
            pool,
            transaction_deadline,
        }
    }

    async fn with_transaction_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, MirrorSyncError>>,
    ) -> Result<T, MirrorSyncError> {
        match tokio::time::timeout(self.transaction_deadline, operation).await {
            Ok(result) => result,
            Err(_) => Err(MirrorSyncError::transaction(
                "reconciliation deadline exceeded",
            )),
        }
    }

    async fn reconcile_categories(
        &self,
        upstream: &[UpstreamCategory],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let known: Vec<i64> = categories::table
                    .filter(categories::country_code.eq(country.as_str()))
                    .select(categories::id)
                    .load(conn)
                    .await?;
                let mut leftovers: HashSet<i64> = known.into_iter().collect();

                for record in upstream {
                    if leftovers.remove(&record.id) {
                        diesel::update(
                            categories::table
                                .filter(categories::id.eq(record.id))
                                .filter(categories::country_code.eq(country.as_str())),
                        )
                        .set(CategoryUpdate::from(record))
                        .execute(conn)
                        .await?;

                        let translated = category_translates::table
                            .filter(category_translates::category_id.eq(record.id))
                            .filter(category_translates::locale.eq(locale.as_str()))
                            .select(category_translates::category_id)
                            .first::<i64>(conn)
                            .await
                            .optional()?;
                        if translated.is_some() {
                            diesel::update(
                                category_translates::table
                                    .filter(category_translates::category_id.eq(record.id))
                                    .filter(category_translates::locale.eq(locale.as_str())),
                            )
                            .set(CategoryTranslationUpdate::from(record))
                            .execute(conn)
                            .await?;
                        } else {
                            diesel::insert_into(category_translates::table)
                                .values(NewCategoryTranslationRow::from(record))
                                .execute(conn)
                                .await?;
                        }
                    } else {
                        diesel::insert_into(categories::table)
                            .values(category_row(record, country.as_str()))
                            .execute(conn)
                            .await?;
                        diesel::insert_into(category_translates::table)
                            .values(NewCategoryTranslationRow::from(record))
                            .execute(conn)
                            .await?;
                    }
                }

                for id in leftovers {
                    diesel::delete(
                        category_translates::table
                            .filter(category_translates::category_id.eq(id))
                            .filter(category_translates::locale.eq(locale.as_str())),
                    )
                    .execute(conn)
                    .await?;
                    let remaining: i64 = category_translates::table
                        .filter(category_translates::category_id.eq(id))
                        .count()
                        .get_result(conn)
                        .await?;
                    if remaining == 0 {
                        diesel::delete(
                            categories::table
                                .filter(categories::id.eq(id))
                                .filter(categories::country_code.eq(country.as_str())),
                        )
                        .execute(conn)
                        .await?;
                    }
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn reconcile_sections(
        &self,
        upstream: &[UpstreamSection],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let known: Vec<i64> = sections::table
                    .filter(sections::country_code.eq(country.as_str()))
                    .select(sections::id)
                    .load(conn)
                    .await?;
                let mut leftovers: HashSet<i64> = known.into_iter().collect();

                for record in upstream {
                    if leftovers.remove(&record.id) {
                        diesel::update(
                            sections::table
                                .filter(sections::id.eq(record.id))
                                .filter(sections::country_code.eq(country.as_str())),
                        )
                        .set(SectionUpdate::from(record))
                        .execute(conn)
                        .await?;

                        let translated = section_translates::table
                            .filter(section_translates::section_id.eq(record.id))
                            .filter(section_translates::locale.eq(locale.as_str()))
                            .select(section_translates::section_id)
                            .first::<i64>(conn)
                            .await
                            .optional()?;
                        if translated.is_some() {
                            diesel::update(
                                section_translates::table
                                    .filter(section_translates::section_id.eq(record.id))
                                    .filter(section_translates::locale.eq(locale.as_str())),
                            )
                            .set(SectionTranslationUpdate::from(record))
                            .execute(conn)
                            .await?;
                        } else {
                            diesel::insert_into(section_translates::table)
                                .values(NewSectionTranslationRow::from(record))
                                .execute(conn)
                                .await?;
                        }
                    } else {
                        diesel::insert_into(sections::table)
                            .values(section_row(record, country.as_str()))
                            .execute(conn)
                            .await?;
                        diesel::insert_into(section_translates::table)
                            .values(NewSectionTranslationRow::from(record))
                            .execute(conn)
                            .await?;
                    }
                }

                for id in leftovers {
                    diesel::delete(
                        section_translates::table
                            .filter(section_translates::section_id.eq(id))
                            .filter(section_translates::locale.eq(locale.as_str())),
                    )
                    .execute(conn)
                    .await?;
                    let remaining: i64 = section_translates::table
                        .filter(section_translates::section_id.eq(id))
                        .count()
                        .get_result(conn)
                        .await?;
                    if remaining == 0 {
                        diesel::delete(
                            sections::table
                                .filter(sections::id.eq(id))
                                .filter(sections::country_code.eq(country.as_str())),
                        )
                        .execute(conn)
                        .await?;
                    }
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn reconcile_articles(
        &self,
        upstream: &[UpstreamArticle],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let known: Vec<i64> = articles::table
                    .filter(articles::country_code.eq(country.as_str()))
                    .select(articles::id)
                    .load(conn)
                    .await?;
                let mut leftovers: HashSet<i64> = known.into_iter().collect();

                for record in upstream {
                    if leftovers.remove(&record.id) {
                        diesel::update(
                            articles::table
                                .filter(articles::id.eq(record.id))
                                .filter(articles::country_code.eq(country.as_str())),
                        )
                        .set(ArticleUpdate::from(record))
                        .execute(conn)
                        .await?;

                        let translated = article_translates::table
                            .filter(article_translates::article_id.eq(record.id))
                            .filter(article_translates::locale.eq(locale.as_str()))
                            .select(article_translates::article_id)
                            .first::<i64>(conn)
                            .await
                            .optional()?;
                        if translated.is_some() {
                            diesel::update(
                                article_translates::table
                                    .filter(article_translates::article_id.eq(record.id))
                                    .filter(article_translates::locale.eq(locale.as_str())),
                            )
                            .set(ArticleTranslationUpdate::from(record))
                            .execute(conn)
                            .await?;
                        } else {
                            diesel::insert_into(article_translates::table)
                                .values(NewArticleTranslationRow::from(record))
                                .execute(conn)
                                .await?;
                        }
                    } else {
                        diesel::insert_into(articles::table)
                            .values(article_row(record, country.as_str()))
                            .execute(conn)
                            .await?;
                        diesel::insert_into(article_translates::table)
                            .values(NewArticleTranslationRow::from(record))
                            .execute(conn)
                            .await?;
                    }
                }

                for id in leftovers {
                    diesel::delete(
                        article_translates::table
                            .filter(article_translates::article_id.eq(id))
                            .filter(article_translates::locale.eq(locale.as_str())),
                    )
                    .execute(conn)
                    .await?;
                    let remaining: i64 = article_translates::table
                        .filter(article_translates::article_id.eq(id))
                        .count()
                        .get_result(conn)
                        .await?;
                    if remaining == 0 {
                        diesel::delete(
                            articles::table
                                .filter(articles::id.eq(id))
                                .filter(articles::country_code.eq(country.as_str())),
                        )
                        .execute(conn)
                        .await?;
                    }
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn replace_ticket_forms(
        &self,
        upstream: &[UpstreamTicketForm],
    ) -> Result<(), MirrorSyncError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let known: Vec<i64> =
                    ticket_forms::table.select(ticket_forms::id).load(conn).await?;
                let mut leftovers: HashSet<i64> = known.into_iter().collect();

                for record in upstream {
                    if leftovers.remove(&record.id) {
                        diesel::update(ticket_forms::table.filter(ticket_forms::id.eq(record.id)))
                            .set(TicketFormUpdate::from(record))
                            .execute(conn)
                            .await?;
                    } else {
                        diesel::insert_into(ticket_forms::table)
                            .values(NewTicketFormRow::from(record))
                            .execute(conn)
                            .await?;
                    }
                }

                if !leftovers.is_empty() {
                    let stale: Vec<i64> = leftovers.into_iter().collect();
                    diesel::delete(ticket_forms::table.filter(ticket_forms::id.eq_any(stale)))
                        .execute(conn)
                        .await?;
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn replace_ticket_fields(
        &self,
        upstream: &[UpstreamTicketField],
    ) -> Result<(), MirrorSyncError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let known: Vec<i64> = ticket_fields::table
                    .select(ticket_fields::id)
                    .load(conn)
                    .await?;
                let mut leftovers: HashSet<i64> = known.into_iter().collect();

                for record in upstream {
                    let custom_field_options = json_value(&record.custom_field_options)?;
                    let system_field_options = json_value(&record.system_field_options)?;
                    if leftovers.remove(&record.id) {
                        diesel::update(
                            ticket_fields::table.filter(ticket_fields::id.eq(record.id)),
                        )
                        .set(field_update(
                            record,
                            &custom_field_options,
                            &system_field_options,
                        ))
                        .execute(conn)
                        .await?;
                    } else {
                        diesel::insert_into(ticket_fields::table)
                            .values(field_row(
                                record,
                                &custom_field_options,
                                &system_field_options,
                            ))
                            .execute(conn)
                            .await?;
                    }
                }

                if !leftovers.is_empty() {
                    let stale: Vec<i64> = leftovers.into_iter().collect();
                    diesel::delete(ticket_fields::table.filter(ticket_fields::id.eq_any(stale)))
                        .execute(conn)
                        .await?;
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn replace_dynamic_content(
        &self,
        upstream: &[UpstreamDynamicContent],
    ) -> Result<(), MirrorSyncError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let known: Vec<i64> = dynamic_content_items::table
                    .select(dynamic_content_items::id)
                    .load(conn)
                    .await?;
                let mut leftovers: HashSet<i64> = known.into_iter().collect();

                for record in upstream {
                    let variants = json_value(&record.variants)?;
                    if leftovers.remove(&record.id) {
                        diesel::update(
                            dynamic_content_items::table
                                .filter(dynamic_content_items::id.eq(record.id)),
                        )
                        .set(item_update(record, &variants))
                        .execute(conn)
                        .await?;
                    } else {
                        diesel::insert_into(dynamic_content_items::table)
                            .values(item_row(record, &variants))
                            .execute(conn)
                            .await?;
                    }
                }

                if !leftovers.is_empty() {
                    let stale: Vec<i64> = leftovers.into_iter().collect();
                    diesel::delete(
                        dynamic_content_items::table
                            .filter(dynamic_content_items::id.eq_any(stale)),
                    )
                    .execute(conn)
                    .await?;
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}

#[async_trait]
impl MirrorSync for DieselMirrorSync {
    async fn sync_categories(
        &self,
        upstream: &[UpstreamCategory],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        self.with_transaction_deadline(self.reconcile_categories(upstream, country, locale))
            .await
    }

    async fn sync_sections(
        &self,
        upstream: &[UpstreamSection],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        self.with_transaction_deadline(self.reconcile_sections(upstream, country, locale))
            .await
    }

    async fn sync_articles(
        &self,
        upstream: &[UpstreamArticle],
        country: Country,
        locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        self.with_transaction_deadline(self.reconcile_articles(upstream, country, locale))
            .await
    }

    async fn sync_ticket_forms(
        &self,
        upstream: &[UpstreamTicketForm],
    ) -> Result<(), MirrorSyncError> {
        self.with_transaction_deadline(self.replace_ticket_forms(upstream))
            .await
    }

    async fn sync_ticket_fields(
        &self,
        upstream: &[UpstreamTicketField],
    ) -> Result<(), MirrorSyncError> {
        self.with_transaction_deadline(self.replace_ticket_fields(upstream))
            .await
    }

    async fn sync_dynamic_content(
        &self,
        upstream: &[UpstreamDynamicContent],
    ) -> Result<(), MirrorSyncError> {
        self.with_transaction_deadline(self.replace_dynamic_content(upstream))
            .await
    }
}

fn map_pool_error(error: PoolError) -> MirrorSyncError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            MirrorSyncError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> MirrorSyncError {
    let error_message = error.to_string();
    debug!(%error_message, "mirror reconciliation failed");
    match error {
        diesel::result::Error::SerializationError(source) => {
            MirrorSyncError::data(source.to_string())
        }
        other => MirrorSyncError::transaction(other.to_string()),
    }
}

/// Serialize a nested upstream structure for JSON column storage.
///
/// Failures are wrapped as serialization errors so they can cross the
/// transaction boundary and map to a data error instead of a transaction
/// failure.
fn json_value<T: serde::Serialize>(
    value: &T,
) -> Result<serde_json::Value, diesel::result::Error> {
    serde_json::to_value(value)
        .map_err(|err| diesel::result::Error::SerializationError(Box::new(err)))
}

fn category_row<'a>(record: &'a UpstreamCategory, country_code: &'a str) -> NewCategoryRow<'a> {
    NewCategoryRow {
        id: record.id,
        position: record.position,
        created_at: record.created_at,
        updated_at: record.updated_at,
        source_locale: &record.source_locale,
        outdated: record.outdated,
        country_code,
    }
}

fn section_row<'a>(record: &'a UpstreamSection, country_code: &'a str) -> NewSectionRow<'a> {
    NewSectionRow {
        category_id: record.category_id,
        id: record.id,
        position: record.position,
        created_at: record.created_at,
        updated_at: record.updated_at,
        source_locale: &record.source_locale,
        outdated: record.outdated,
        country_code,
    }
}

fn article_row<'a>(record: &'a UpstreamArticle, country_code: &'a str) -> NewArticleRow<'a> {
    NewArticleRow {
        section_id: record.section_id,
        id: record.id,
        author_id: record.author_id,
        comments_disable: record.comments_disable,
        draft: record.draft,
        promoted: record.promoted,
        position: record.position,
        vote_sum: record.vote_sum,
        vote_count: record.vote_count,
        created_at: record.created_at,
        updated_at: record.updated_at,
        source_locale: &record.source_locale,
        outdated: record.outdated,
        outdated_locales: &record.outdated_locales,
        edited_at: record.edited_at,
        label_names: &record.label_names,
        country_code,
    }
}

fn field_row<'a>(
    record: &'a UpstreamTicketField,
    custom_field_options: &'a serde_json::Value,
    system_field_options: &'a serde_json::Value,
) -> NewTicketFieldRow<'a> {
    NewTicketFieldRow {
        id: record.id,
        url: &record.url,
        kind: &record.kind,
        title: &record.title,
        raw_title: &record.raw_title,
        description: &record.description,
        raw_description: &record.raw_description,
        position: record.position,
        active: record.active,
        required: record.required,
        collapsed_for_agents: record.collapsed_for_agents,
        regexp_for_validation: &record.regexp_for_validation,
        title_in_portal: &record.title_in_portal,
        raw_title_in_portal: &record.raw_title_in_portal,
        visible_in_portal: record.visible_in_portal,
        editable_in_portal: record.editable_in_portal,
        required_in_portal: record.required_in_portal,
        tag: &record.tag,
        created_at: record.created_at,
        updated_at: record.updated_at,
        removable: record.removable,
        custom_field_options,
        system_field_options,
    }
}

fn field_update<'a>(
    record: &'a UpstreamTicketField,
    custom_field_options: &'a serde_json::Value,
    system_field_options: &'a serde_json::Value,
) -> TicketFieldUpdate<'a> {
    TicketFieldUpdate {
        url: &record.url,
        kind: &record.kind,
        title: &record.title,
        raw_title: &record.raw_title,
        description: &record.description,
        raw_description: &record.raw_description,
        position: record.position,
        active: record.active,
        required: record.required,
        collapsed_for_agents: record.collapsed_for_agents,
        regexp_for_validation: &record.regexp_for_validation,
        title_in_portal: &record.title_in_portal,
        raw_title_in_portal: &record.raw_title_in_portal,
        visible_in_portal: record.visible_in_portal,
        editable_in_portal: record.editable_in_portal,
        required_in_portal: record.required_in_portal,
        tag: &record.tag,
        created_at: record.created_at,
        updated_at: record.updated_at,
        removable: record.removable,
        custom_field_options,
        system_field_options,
    }
}

fn item_row<'a>(
    record: &'a UpstreamDynamicContent,
    variants: &'a serde_json::Value,
) -> NewDynamicContentItemRow<'a> {
    NewDynamicContentItemRow {
        id: record.id,
        url: &record.url,
        name: &record.name,
        placeholder: &record.placeholder,
        default_locale_id: record.default_locale_id,
        outdated: record.outdated,
        created_at: record.created_at,
        updated_at: record.updated_at,
        variants,
    }
}

fn item_update<'a>(
    record: &'a UpstreamDynamicContent,
    variants: &'a serde_json::Value,
) -> DynamicContentItemUpdate<'a> {
    DynamicContentItemUpdate {
        url: &record.url,
        name: &record.name,
        placeholder: &record.placeholder,
        default_locale_id: record.default_locale_id,
        outdated: record.outdated,
        created_at: record.created_at,
        updated_at: record.updated_at,
        variants,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for error mapping and row construction.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use crate::domain::content::{CustomFieldOption, DynamicContentVariant};

    use super::*;

    fn stamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 3, 12, 8, 30, 0).unwrap()
    }

    fn upstream_article() -> UpstreamArticle {
        UpstreamArticle {
            section_id: 31,
            id: 11,
            author_id: 9,
            comments_disable: false,
            draft: false,
            promoted: true,
            position: 1,
            vote_sum: 4,
            vote_count: 6,
            created_at: stamp(),
            updated_at: stamp(),
            source_locale: "en-us".to_owned(),
            outdated: false,
            outdated_locales: vec!["ja".to_owned()],
            edited_at: stamp(),
            label_names: vec!["delivery".to_owned(), "refund".to_owned()],
            url: "https://example.test/articles/11.json".to_owned(),
            html_url: "https://example.test/hc/articles/11".to_owned(),
            name: "Where is my order".to_owned(),
            title: "Where is my order".to_owned(),
            body: "<p>Check the tracking page.</p>".to_owned(),
            locale: "en-us".to_owned(),
        }
    }

    #[rstest]
    fn pool_errors_become_connection_failures() {
        let error = map_pool_error(PoolError::checkout("pool exhausted"));
        assert!(matches!(error, MirrorSyncError::Connection { .. }));
        assert!(error.to_string().contains("pool exhausted"));
    }

    #[rstest]
    fn serialization_failures_become_data_errors() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error =
            map_diesel_error(diesel::result::Error::SerializationError(Box::new(source)));
        assert!(matches!(error, MirrorSyncError::Data { .. }));
    }

    #[rstest]
    fn other_diesel_failures_become_transaction_errors() {
        let error = map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert!(matches!(error, MirrorSyncError::Transaction { .. }));
    }

    #[rstest]
    fn article_rows_carry_the_target_country() {
        let record = upstream_article();
        let row = article_row(&record, "sg");
        assert_eq!(row.id, 11);
        assert_eq!(row.country_code, "sg");
        assert_eq!(row.label_names, &["delivery", "refund"]);
        assert_eq!(row.source_locale, "en-us");
    }

    #[rstest]
    fn article_updates_never_touch_identity_columns() {
        let record = upstream_article();
        let update = ArticleUpdate::from(&record);
        // The changeset has no id or country field to clobber; spot-check
        // the attributes that do refresh.
        assert_eq!(update.section_id, 31);
        assert_eq!(update.vote_count, 6);
        assert!(update.promoted);
    }

    #[rstest]
    fn nested_options_serialize_for_json_storage() {
        let options = vec![CustomFieldOption {
            id: 1,
            name: "Late delivery".to_owned(),
            raw_name: "Late delivery".to_owned(),
            value: "late_delivery".to_owned(),
        }];
        let value = json_value(&options).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["value"], "late_delivery");
    }

    #[rstest]
    fn variants_serialize_for_json_storage() {
        let variants = vec![DynamicContentVariant {
            id: 901,
            url: String::new(),
            content: "Order Number".to_owned(),
            locale_id: 1,
            outdated: false,
            active: true,
            created_at: stamp(),
            updated_at: stamp(),
        }];
        let value = json_value(&variants).unwrap();
        assert_eq!(value[0]["content"], "Order Number");
        assert_eq!(value[0]["locale_id"], 1);
    }
}
