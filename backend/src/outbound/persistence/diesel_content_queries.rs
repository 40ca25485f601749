//! Diesel-backed implementation of the content read port.
//!
//! Listings join parent tables with their translation tables so untranslated
//! parents never reach a page, and counts run over the same join to agree
//! with what pagination can actually serve. Single-row gets follow the
//! mirror's fallback rules instead: a parent without a translation still
//! comes back, with blank translation attributes.
//!
//! Every read runs under the configured read deadline; the click-counter
//! bump, the one write on this port, runs under the write deadline.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::content::{
    Article, Category, Country, DynamicContentItem, ListingQuery, Locale, Section, SortBy,
    SortOrder, TicketField, TicketForm,
};
use crate::domain::ports::{ContentQueries, ContentQueryError};

use super::models::{
    ArticleRow, ArticleTranslationRow, CategoryKeyRow, CategoryRow, CategoryTranslationRow,
    DynamicContentItemRow, SectionRow, SectionTranslationRow, TicketFieldRow, TicketFormRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{
    article_translates, articles, categories, category_key, category_translates,
    dynamic_content_items, lower, section_translates, sections, ticket_fields, ticket_forms,
};

/// Content read adapter backed by the PostgreSQL mirror.
#[derive(Clone)]
pub struct DieselContentQueries {
    pool: DbPool,
    read_deadline: Duration,
    write_deadline: Duration,
}

impl DieselContentQueries {
    /// Create a new adapter over the given pool.
    ///
    /// Each deadline bounds its operations end to end, connection checkout
    /// included.
    pub fn new(pool: DbPool, read_deadline: Duration, write_deadline: Duration) -> Self {
        Self {
            pool,
            read_deadline,
            write_deadline,
        }
    }

    async fn with_read_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, ContentQueryError>>,
    ) -> Result<T, ContentQueryError> {
        match tokio::time::timeout(self.read_deadline, operation).await {
            Ok(result) => result,
            Err(_) => Err(ContentQueryError::query("read deadline exceeded")),
        }
    }

    async fn with_write_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, ContentQueryError>>,
    ) -> Result<T, ContentQueryError> {
        match tokio::time::timeout(self.write_deadline, operation).await {
            Ok(result) => result,
            Err(_) => Err(ContentQueryError::query("write deadline exceeded")),
        }
    }

    async fn list_categories(
        &self,
        listing: &ListingQuery,
    ) -> Result<(Vec<Category>, i64), ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = categories::table
            .inner_join(
                category_translates::table
                    .on(category_translates::category_id.eq(categories::id)),
            )
            .left_join(
                category_key::table.on(category_key::category_id
                    .eq(categories::id)
                    .and(category_key::country_code.eq(categories::country_code))),
            )
            .filter(categories::country_code.eq(listing.country.as_str()))
            .filter(category_translates::locale.eq(listing.locale.as_str()))
            .select((
                CategoryRow::as_select(),
                CategoryTranslationRow::as_select(),
                Option::<CategoryKeyRow>::as_select(),
            ))
            .into_boxed();

        query = match (listing.sort_by, listing.sort_order) {
            (SortBy::Position, SortOrder::Asc) => {
                query.order((categories::position.asc(), categories::created_at.desc()))
            }
            (SortBy::Position, SortOrder::Desc) => {
                query.order((categories::position.desc(), categories::created_at.desc()))
            }
            (SortBy::CreatedAt, SortOrder::Asc) => query.order(categories::created_at.asc()),
            (SortBy::CreatedAt, SortOrder::Desc) => query.order(categories::created_at.desc()),
            (SortBy::UpdatedAt, SortOrder::Asc) => {
                query.order((categories::updated_at.asc(), categories::created_at.desc()))
            }
            (SortBy::UpdatedAt, SortOrder::Desc) => {
                query.order((categories::updated_at.desc(), categories::created_at.desc()))
            }
        };

        let rows = query
            .limit(listing.per_page)
            .offset(listing.offset())
            .load::<(CategoryRow, CategoryTranslationRow, Option<CategoryKeyRow>)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let count = categories::table
            .inner_join(
                category_translates::table
                    .on(category_translates::category_id.eq(categories::id)),
            )
            .filter(categories::country_code.eq(listing.country.as_str()))
            .filter(category_translates::locale.eq(listing.locale.as_str()))
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows.into_iter().map(category_from_rows).collect();
        Ok((items, count))
    }

    async fn resolve_key_name(
        &self,
        key_name: &str,
        country: Country,
    ) -> Result<i64, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let category_id = category_key::table
            .filter(lower(category_key::key_name).eq(key_name.to_lowercase()))
            .filter(category_key::country_code.eq(country.as_str()))
            .select(category_key::category_id)
            .first::<i64>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        category_id.ok_or_else(|| ContentQueryError::not_found("category key name"))
    }

    async fn list_sections(
        &self,
        category_id: i64,
        listing: &ListingQuery,
    ) -> Result<(Vec<Section>, i64), ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = sections::table
            .inner_join(
                section_translates::table.on(section_translates::section_id.eq(sections::id)),
            )
            .filter(sections::country_code.eq(listing.country.as_str()))
            .filter(section_translates::locale.eq(listing.locale.as_str()))
            .filter(sections::category_id.eq(category_id))
            .select((SectionRow::as_select(), SectionTranslationRow::as_select()))
            .into_boxed();

        query = match (listing.sort_by, listing.sort_order) {
            (SortBy::Position, SortOrder::Asc) => {
                query.order((sections::position.asc(), sections::created_at.desc()))
            }
            (SortBy::Position, SortOrder::Desc) => {
                query.order((sections::position.desc(), sections::created_at.desc()))
            }
            (SortBy::CreatedAt, SortOrder::Asc) => query.order(sections::created_at.asc()),
            (SortBy::CreatedAt, SortOrder::Desc) => query.order(sections::created_at.desc()),
            (SortBy::UpdatedAt, SortOrder::Asc) => {
                query.order((sections::updated_at.asc(), sections::created_at.desc()))
            }
            (SortBy::UpdatedAt, SortOrder::Desc) => {
                query.order((sections::updated_at.desc(), sections::created_at.desc()))
            }
        };

        let rows = query
            .limit(listing.per_page)
            .offset(listing.offset())
            .load::<(SectionRow, SectionTranslationRow)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let count = sections::table
            .inner_join(
                section_translates::table.on(section_translates::section_id.eq(sections::id)),
            )
            .filter(sections::country_code.eq(listing.country.as_str()))
            .filter(section_translates::locale.eq(listing.locale.as_str()))
            .filter(sections::category_id.eq(category_id))
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(|(parent, translation)| section_from_rows(parent, translation))
            .collect();
        Ok((items, count))
    }

    async fn get_section(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Section, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let parent = sections::table
            .filter(sections::country_code.eq(country.as_str()))
            .filter(sections::id.eq(id))
            .select(SectionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .ok_or_else(|| ContentQueryError::not_found("section"))?;

        let translation = section_translates::table
            .filter(section_translates::section_id.eq(id))
            .filter(section_translates::locale.eq(locale.as_str()))
            .select(SectionTranslationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(match translation {
            Some(translation) => section_from_rows(parent, translation),
            None => untranslated_section(parent),
        })
    }

    async fn list_articles(
        &self,
        labels: &[String],
        section_id: Option<i64>,
        listing: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = articles::table
            .inner_join(
                article_translates::table.on(article_translates::article_id.eq(articles::id)),
            )
            .filter(articles::country_code.eq(listing.country.as_str()))
            .filter(article_translates::locale.eq(listing.locale.as_str()))
            .select((ArticleRow::as_select(), ArticleTranslationRow::as_select()))
            .into_boxed();
        let mut count_query = articles::table
            .inner_join(
                article_translates::table.on(article_translates::article_id.eq(articles::id)),
            )
            .filter(articles::country_code.eq(listing.country.as_str()))
            .filter(article_translates::locale.eq(listing.locale.as_str()))
            .count()
            .into_boxed();

        // Any shared label qualifies an article; the filter is an overlap,
        // not a containment check.
        if !labels.is_empty() {
            query = query.filter(articles::label_names.overlaps_with(labels.to_vec()));
            count_query = count_query.filter(articles::label_names.overlaps_with(labels.to_vec()));
        }
        if let Some(section_id) = section_id {
            query = query.filter(articles::section_id.eq(section_id));
            count_query = count_query.filter(articles::section_id.eq(section_id));
        }

        query = match (listing.sort_by, listing.sort_order) {
            (SortBy::Position, SortOrder::Asc) => {
                query.order((articles::position.asc(), articles::created_at.desc()))
            }
            (SortBy::Position, SortOrder::Desc) => {
                query.order((articles::position.desc(), articles::created_at.desc()))
            }
            (SortBy::CreatedAt, SortOrder::Asc) => query.order(articles::created_at.asc()),
            (SortBy::CreatedAt, SortOrder::Desc) => query.order(articles::created_at.desc()),
            (SortBy::UpdatedAt, SortOrder::Asc) => {
                query.order((articles::updated_at.asc(), articles::created_at.desc()))
            }
            (SortBy::UpdatedAt, SortOrder::Desc) => {
                query.order((articles::updated_at.desc(), articles::created_at.desc()))
            }
        };

        let rows = query
            .limit(listing.per_page)
            .offset(listing.offset())
            .load::<(ArticleRow, ArticleTranslationRow)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let count = count_query
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(|(parent, translation)| article_from_rows(parent, translation))
            .collect();
        Ok((items, count))
    }

    async fn get_article(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Article, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let parent = articles::table
            .filter(articles::country_code.eq(country.as_str()))
            .filter(articles::id.eq(id))
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .ok_or_else(|| ContentQueryError::not_found("article"))?;

        let translation = article_translates::table
            .filter(article_translates::article_id.eq(id))
            .filter(article_translates::locale.eq(locale.as_str()))
            .select(ArticleTranslationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(match translation {
            Some(translation) => article_from_rows(parent, translation),
            None => untranslated_article(parent),
        })
    }

    async fn rank_top_articles(
        &self,
        limit: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<Article>, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let parents = articles::table
            .filter(articles::country_code.eq(country.as_str()))
            .order((articles::promoted.desc(), articles::click_count.desc()))
            .limit(limit)
            .select(ArticleRow::as_select())
            .load::<ArticleRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let ids: Vec<i64> = parents.iter().map(|row| row.id).collect();
        let translations = article_translates::table
            .filter(article_translates::article_id.eq_any(ids))
            .filter(article_translates::locale.eq(locale.as_str()))
            .select(ArticleTranslationRow::as_select())
            .load::<ArticleTranslationRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let mut by_id: HashMap<i64, ArticleTranslationRow> = translations
            .into_iter()
            .map(|translation| (translation.article_id, translation))
            .collect();

        // Ranking happens over parents, so an untranslated front-runner
        // shortens the result rather than promoting the next article.
        Ok(parents
            .into_iter()
            .filter_map(|parent| {
                by_id
                    .remove(&parent.id)
                    .map(|translation| article_from_rows(parent, translation))
            })
            .collect())
    }

    async fn add_article_click(&self, id: i64, country: Country) -> Result<(), ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Unknown ids update zero rows; the read that triggered the bump
        // already reports its own NotFound.
        diesel::update(
            articles::table
                .filter(articles::id.eq(id))
                .filter(articles::country_code.eq(country.as_str())),
        )
        .set(articles::click_count.eq(articles::click_count + 1))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn assemble_ticket_form(
        &self,
        form_id: i64,
        locale: Locale,
    ) -> Result<TicketForm, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let form = ticket_forms::table
            .filter(ticket_forms::id.eq(form_id))
            .select(TicketFormRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .ok_or_else(|| ContentQueryError::not_found("ticket form"))?;

        let mut fields = Vec::new();
        for field_id in &form.ticket_field_ids {
            if let Some(field) = load_portal_field(&mut conn, *field_id, locale).await? {
                fields.push(field);
            }
        }

        Ok(form_from_row(form, fields))
    }

    async fn get_ticket_field(
        &self,
        field_id: i64,
        locale: Locale,
    ) -> Result<TicketField, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        load_portal_field(&mut conn, field_id, locale)
            .await?
            .ok_or_else(|| ContentQueryError::not_found("ticket field"))
    }

    async fn get_dynamic_content_item(
        &self,
        placeholder: &str,
    ) -> Result<DynamicContentItem, ContentQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        load_dynamic_content(&mut conn, placeholder).await
    }
}

#[async_trait]
impl ContentQueries for DieselContentQueries {
    async fn categories(
        &self,
        query: &ListingQuery,
    ) -> Result<(Vec<Category>, i64), ContentQueryError> {
        self.with_read_deadline(self.list_categories(query)).await
    }

    async fn category_id_for_key_name(
        &self,
        key_name: &str,
        country: Country,
    ) -> Result<i64, ContentQueryError> {
        self.with_read_deadline(self.resolve_key_name(key_name, country))
            .await
    }

    async fn sections_by_category(
        &self,
        category_id: i64,
        query: &ListingQuery,
    ) -> Result<(Vec<Section>, i64), ContentQueryError> {
        self.with_read_deadline(self.list_sections(category_id, query))
            .await
    }

    async fn section(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Section, ContentQueryError> {
        self.with_read_deadline(self.get_section(id, country, locale))
            .await
    }

    async fn articles(
        &self,
        query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        self.with_read_deadline(self.list_articles(&[], None, query))
            .await
    }

    async fn articles_by_category(
        &self,
        labels: &[String],
        query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        self.with_read_deadline(self.list_articles(labels, None, query))
            .await
    }

    async fn articles_by_section(
        &self,
        section_id: i64,
        query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        self.with_read_deadline(self.list_articles(&[], Some(section_id), query))
            .await
    }

    async fn article(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Article, ContentQueryError> {
        self.with_read_deadline(self.get_article(id, country, locale))
            .await
    }

    async fn top_articles(
        &self,
        limit: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<Article>, ContentQueryError> {
        self.with_read_deadline(self.rank_top_articles(limit, country, locale))
            .await
    }

    async fn bump_article_click(&self, id: i64, country: Country) -> Result<(), ContentQueryError> {
        self.with_write_deadline(self.add_article_click(id, country))
            .await
    }

    async fn ticket_form(
        &self,
        form_id: i64,
        locale: Locale,
    ) -> Result<TicketForm, ContentQueryError> {
        self.with_read_deadline(self.assemble_ticket_form(form_id, locale))
            .await
    }

    async fn ticket_field(
        &self,
        field_id: i64,
        locale: Locale,
    ) -> Result<TicketField, ContentQueryError> {
        self.with_read_deadline(self.get_ticket_field(field_id, locale))
            .await
    }

    async fn dynamic_content_item(
        &self,
        placeholder: &str,
    ) -> Result<DynamicContentItem, ContentQueryError> {
        self.with_read_deadline(self.get_dynamic_content_item(placeholder))
            .await
    }
}

/// Load one ticket field in its portal projection, resolving a
/// dynamic-content title when the stored title is a placeholder.
///
/// Returns `Ok(None)` for fields that are missing or hidden from the portal;
/// form assembly skips those. A placeholder that cannot be resolved is an
/// error, matching the contract that stale dynamic content must surface
/// rather than render as a raw `{{dc.*}}` token.
async fn load_portal_field(
    conn: &mut AsyncPgConnection,
    field_id: i64,
    locale: Locale,
) -> Result<Option<TicketField>, ContentQueryError> {
    let row = ticket_fields::table
        .filter(ticket_fields::id.eq(field_id))
        .select(TicketFieldRow::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

    let Some(row) = row else {
        return Ok(None);
    };
    if !row.visible_in_portal || !row.editable_in_portal {
        return Ok(None);
    }

    let mut field = portal_field_from_row(row)?;
    if DynamicContentItem::is_placeholder(&field.raw_title_in_portal) {
        let item = load_dynamic_content(conn, &field.raw_title_in_portal).await?;
        let variant = item
            .variant_for(locale)
            .ok_or_else(|| ContentQueryError::not_found("dynamic content variant"))?;
        field.raw_title_in_portal = variant.content.clone();
    }

    Ok(Some(field))
}

async fn load_dynamic_content(
    conn: &mut AsyncPgConnection,
    placeholder: &str,
) -> Result<DynamicContentItem, ContentQueryError> {
    let row = dynamic_content_items::table
        .filter(dynamic_content_items::placeholder.eq(placeholder))
        .select(DynamicContentItemRow::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?
        .ok_or_else(|| ContentQueryError::not_found("dynamic content item"))?;

    item_from_row(row)
}

fn map_pool_error(error: PoolError) -> ContentQueryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ContentQueryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ContentQueryError {
    let error_message = error.to_string();
    debug!(%error_message, "content query failed");
    match error {
        diesel::result::Error::NotFound => ContentQueryError::query("record not found"),
        other => ContentQueryError::query(other.to_string()),
    }
}

/// Decode a stored JSON list, treating SQL `null` as an empty list.
fn decode_json_list<T: DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> Result<Vec<T>, ContentQueryError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value)
        .map_err(|err| ContentQueryError::data(format!("{what}: {err}")))
}

fn category_from_rows(
    (parent, translation, key): (CategoryRow, CategoryTranslationRow, Option<CategoryKeyRow>),
) -> Category {
    Category {
        id: parent.id,
        position: parent.position,
        created_at: parent.created_at,
        updated_at: parent.updated_at,
        source_locale: parent.source_locale,
        outdated: parent.outdated,
        country_code: parent.country_code,
        url: translation.url,
        html_url: translation.html_url,
        name: translation.name,
        description: translation.description,
        locale: translation.locale,
        key_name: key.map(|key| key.key_name).unwrap_or_default(),
    }
}

fn section_from_rows(parent: SectionRow, translation: SectionTranslationRow) -> Section {
    Section {
        category_id: parent.category_id,
        id: parent.id,
        position: parent.position,
        created_at: parent.created_at,
        updated_at: parent.updated_at,
        source_locale: parent.source_locale,
        outdated: parent.outdated,
        country_code: parent.country_code,
        url: translation.url,
        html_url: translation.html_url,
        name: translation.name,
        description: translation.description,
        locale: translation.locale,
    }
}

fn untranslated_section(parent: SectionRow) -> Section {
    Section {
        category_id: parent.category_id,
        id: parent.id,
        position: parent.position,
        created_at: parent.created_at,
        updated_at: parent.updated_at,
        source_locale: parent.source_locale,
        outdated: parent.outdated,
        country_code: parent.country_code,
        url: String::new(),
        html_url: String::new(),
        name: String::new(),
        description: String::new(),
        locale: String::new(),
    }
}

fn article_from_rows(parent: ArticleRow, translation: ArticleTranslationRow) -> Article {
    Article {
        section_id: parent.section_id,
        id: parent.id,
        author_id: parent.author_id,
        comments_disable: parent.comments_disable,
        draft: parent.draft,
        promoted: parent.promoted,
        position: parent.position,
        vote_sum: parent.vote_sum,
        vote_count: parent.vote_count,
        created_at: parent.created_at,
        updated_at: parent.updated_at,
        source_locale: parent.source_locale,
        outdated: parent.outdated,
        outdated_locales: parent.outdated_locales,
        edited_at: parent.edited_at,
        label_names: parent.label_names,
        country_code: parent.country_code,
        url: translation.url,
        html_url: translation.html_url,
        name: translation.name,
        title: translation.title,
        body: translation.body,
        locale: translation.locale,
    }
}

fn untranslated_article(parent: ArticleRow) -> Article {
    Article {
        section_id: parent.section_id,
        id: parent.id,
        author_id: parent.author_id,
        comments_disable: parent.comments_disable,
        draft: parent.draft,
        promoted: parent.promoted,
        position: parent.position,
        vote_sum: parent.vote_sum,
        vote_count: parent.vote_count,
        created_at: parent.created_at,
        updated_at: parent.updated_at,
        source_locale: parent.source_locale,
        outdated: parent.outdated,
        outdated_locales: parent.outdated_locales,
        edited_at: parent.edited_at,
        label_names: parent.label_names,
        country_code: parent.country_code,
        url: String::new(),
        html_url: String::new(),
        name: String::new(),
        title: String::new(),
        body: String::new(),
        locale: String::new(),
    }
}

/// Project a stored ticket field into its portal shape.
///
/// Management attributes stay at their zero values; the wire contract elides
/// them, so the portal response only carries what the portal renders.
fn portal_field_from_row(row: TicketFieldRow) -> Result<TicketField, ContentQueryError> {
    let custom_field_options = decode_json_list(row.custom_field_options, "custom field options")?;
    let system_field_options = decode_json_list(row.system_field_options, "system field options")?;

    Ok(TicketField {
        id: row.id,
        url: String::new(),
        kind: row.kind,
        title: row.title,
        raw_title: row.raw_title,
        description: row.description,
        raw_description: row.raw_description,
        position: row.position,
        active: false,
        required: false,
        collapsed_for_agents: false,
        regexp_for_validation: row.regexp_for_validation,
        title_in_portal: row.title_in_portal,
        raw_title_in_portal: row.raw_title_in_portal,
        visible_in_portal: false,
        editable_in_portal: false,
        required_in_portal: false,
        tag: String::new(),
        created_at: row.created_at,
        updated_at: row.updated_at,
        removable: false,
        custom_field_options,
        system_field_options,
    })
}

fn form_from_row(row: TicketFormRow, ticket_fields: Vec<TicketField>) -> TicketForm {
    TicketForm {
        id: row.id,
        url: row.url,
        name: row.name,
        raw_name: row.raw_name,
        display_name: row.display_name,
        raw_display_name: row.raw_display_name,
        end_user_visible: row.end_user_visible,
        position: row.position,
        active: row.active,
        in_all_brands: row.in_all_brands,
        restricted_brand_ids: row.restricted_brand_ids,
        ticket_fields,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn item_from_row(row: DynamicContentItemRow) -> Result<DynamicContentItem, ContentQueryError> {
    let variants = decode_json_list(row.variants, "dynamic content variants")?;
    Ok(DynamicContentItem {
        id: row.id,
        url: row.url,
        name: row.name,
        placeholder: row.placeholder,
        default_locale_id: row.default_locale_id,
        outdated: row.outdated,
        created_at: row.created_at,
        updated_at: row.updated_at,
        variants,
    })
}
