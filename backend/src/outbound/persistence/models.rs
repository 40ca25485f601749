//! Internal Diesel row structs for the content mirror tables.
//!
//! These types are implementation details of the persistence layer and never
//! cross into the domain. Read rows deliberately skip the surrogate `sn`
//! column, and `ArticleRow` skips `click_count`: the counter is ranking
//! bookkeeping, not content, so reads never project it.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::content::{
    UpstreamArticle, UpstreamCategory, UpstreamSection, UpstreamTicketForm,
};

use super::schema::{
    article_translates, articles, categories, category_key, category_translates,
    dynamic_content_items, section_translates, sections, ticket_fields, ticket_forms,
};

// ---------------------------------------------------------------------------
// Category models
// ---------------------------------------------------------------------------

/// Row struct for reading category parents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub country_code: String,
}

/// Row struct for reading one category translation.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = category_translates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryTranslationRow {
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,
}

/// Row struct for reading a category's operator-assigned key name.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = category_key)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryKeyRow {
    pub key_name: String,
}

/// Insertable struct for new category parents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: &'a str,
    pub outdated: bool,
    pub country_code: &'a str,
}

/// Changeset for refreshing an existing category parent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = categories)]
pub(crate) struct CategoryUpdate<'a> {
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: &'a str,
    pub outdated: bool,
}

/// Insertable struct for new category translations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = category_translates)]
pub(crate) struct NewCategoryTranslationRow<'a> {
    pub category_id: i64,
    pub url: &'a str,
    pub html_url: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub locale: &'a str,
}

/// Changeset for refreshing an existing category translation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = category_translates)]
pub(crate) struct CategoryTranslationUpdate<'a> {
    pub url: &'a str,
    pub html_url: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a UpstreamCategory> for CategoryUpdate<'a> {
    fn from(record: &'a UpstreamCategory) -> Self {
        Self {
            position: record.position,
            created_at: record.created_at,
            updated_at: record.updated_at,
            source_locale: &record.source_locale,
            outdated: record.outdated,
        }
    }
}

impl<'a> From<&'a UpstreamCategory> for NewCategoryTranslationRow<'a> {
    fn from(record: &'a UpstreamCategory) -> Self {
        Self {
            category_id: record.id,
            url: &record.url,
            html_url: &record.html_url,
            name: &record.name,
            description: &record.description,
            locale: &record.locale,
        }
    }
}

impl<'a> From<&'a UpstreamCategory> for CategoryTranslationUpdate<'a> {
    fn from(record: &'a UpstreamCategory) -> Self {
        Self {
            url: &record.url,
            html_url: &record.html_url,
            name: &record.name,
            description: &record.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Section models
// ---------------------------------------------------------------------------

/// Row struct for reading section parents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SectionRow {
    pub category_id: i64,
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub country_code: String,
}

/// Row struct for reading one section translation.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = section_translates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SectionTranslationRow {
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,
}

/// Insertable struct for new section parents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sections)]
pub(crate) struct NewSectionRow<'a> {
    pub category_id: i64,
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: &'a str,
    pub outdated: bool,
    pub country_code: &'a str,
}

/// Changeset for refreshing an existing section parent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = sections)]
pub(crate) struct SectionUpdate<'a> {
    pub category_id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: &'a str,
    pub outdated: bool,
}

/// Insertable struct for new section translations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = section_translates)]
pub(crate) struct NewSectionTranslationRow<'a> {
    pub section_id: i64,
    pub url: &'a str,
    pub html_url: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub locale: &'a str,
}

/// Changeset for refreshing an existing section translation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = section_translates)]
pub(crate) struct SectionTranslationUpdate<'a> {
    pub url: &'a str,
    pub html_url: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a UpstreamSection> for SectionUpdate<'a> {
    fn from(record: &'a UpstreamSection) -> Self {
        Self {
            category_id: record.category_id,
            position: record.position,
            created_at: record.created_at,
            updated_at: record.updated_at,
            source_locale: &record.source_locale,
            outdated: record.outdated,
        }
    }
}

impl<'a> From<&'a UpstreamSection> for NewSectionTranslationRow<'a> {
    fn from(record: &'a UpstreamSection) -> Self {
        Self {
            section_id: record.id,
            url: &record.url,
            html_url: &record.html_url,
            name: &record.name,
            description: &record.description,
            locale: &record.locale,
        }
    }
}

impl<'a> From<&'a UpstreamSection> for SectionTranslationUpdate<'a> {
    fn from(record: &'a UpstreamSection) -> Self {
        Self {
            url: &record.url,
            html_url: &record.html_url,
            name: &record.name,
            description: &record.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Article models
// ---------------------------------------------------------------------------

/// Row struct for reading article parents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub section_id: i64,
    pub id: i64,
    pub author_id: i64,
    pub comments_disable: bool,
    pub draft: bool,
    pub promoted: bool,
    pub position: i32,
    pub vote_sum: i32,
    pub vote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub outdated_locales: Vec<String>,
    pub edited_at: DateTime<Utc>,
    pub label_names: Vec<String>,
    pub country_code: String,
}

/// Row struct for reading one article translation.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = article_translates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleTranslationRow {
    pub article_id: i64,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub title: String,
    pub body: String,
    pub locale: String,
}

/// Insertable struct for new article parents.
///
/// `click_count` is absent: it starts from the column default and survives
/// every subsequent refresh untouched.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub section_id: i64,
    pub id: i64,
    pub author_id: i64,
    pub comments_disable: bool,
    pub draft: bool,
    pub promoted: bool,
    pub position: i32,
    pub vote_sum: i32,
    pub vote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: &'a str,
    pub outdated: bool,
    pub outdated_locales: &'a [String],
    pub edited_at: DateTime<Utc>,
    pub label_names: &'a [String],
    pub country_code: &'a str,
}

/// Changeset for refreshing an existing article parent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = articles)]
pub(crate) struct ArticleUpdate<'a> {
    pub section_id: i64,
    pub author_id: i64,
    pub comments_disable: bool,
    pub draft: bool,
    pub promoted: bool,
    pub position: i32,
    pub vote_sum: i32,
    pub vote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: &'a str,
    pub outdated: bool,
    pub outdated_locales: &'a [String],
    pub edited_at: DateTime<Utc>,
    pub label_names: &'a [String],
}

/// Insertable struct for new article translations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = article_translates)]
pub(crate) struct NewArticleTranslationRow<'a> {
    pub article_id: i64,
    pub url: &'a str,
    pub html_url: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub locale: &'a str,
}

/// Changeset for refreshing an existing article translation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = article_translates)]
pub(crate) struct ArticleTranslationUpdate<'a> {
    pub url: &'a str,
    pub html_url: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> From<&'a UpstreamArticle> for ArticleUpdate<'a> {
    fn from(record: &'a UpstreamArticle) -> Self {
        Self {
            section_id: record.section_id,
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
        }
    }
}

impl<'a> From<&'a UpstreamArticle> for NewArticleTranslationRow<'a> {
    fn from(record: &'a UpstreamArticle) -> Self {
        Self {
            article_id: record.id,
            url: &record.url,
            html_url: &record.html_url,
            name: &record.name,
            title: &record.title,
            body: &record.body,
            locale: &record.locale,
        }
    }
}

impl<'a> From<&'a UpstreamArticle> for ArticleTranslationUpdate<'a> {
    fn from(record: &'a UpstreamArticle) -> Self {
        Self {
            url: &record.url,
            html_url: &record.html_url,
            name: &record.name,
            title: &record.title,
            body: &record.body,
        }
    }
}

// ---------------------------------------------------------------------------
// Ticket form models
// ---------------------------------------------------------------------------

/// Row struct for reading ticket forms.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ticket_forms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketFormRow {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub raw_name: String,
    pub display_name: String,
    pub raw_display_name: String,
    pub end_user_visible: bool,
    pub position: i32,
    pub active: bool,
    pub in_all_brands: bool,
    pub restricted_brand_ids: Vec<i64>,
    pub ticket_field_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for new ticket forms.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ticket_forms)]
pub(crate) struct NewTicketFormRow<'a> {
    pub id: i64,
    pub url: &'a str,
    pub name: &'a str,
    pub raw_name: &'a str,
    pub display_name: &'a str,
    pub raw_display_name: &'a str,
    pub end_user_visible: bool,
    pub position: i32,
    pub active: bool,
    pub in_all_brands: bool,
    pub restricted_brand_ids: &'a [i64],
    pub ticket_field_ids: &'a [i64],
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset for refreshing an existing ticket form.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = ticket_forms)]
pub(crate) struct TicketFormUpdate<'a> {
    pub url: &'a str,
    pub name: &'a str,
    pub raw_name: &'a str,
    pub display_name: &'a str,
    pub raw_display_name: &'a str,
    pub end_user_visible: bool,
    pub position: i32,
    pub active: bool,
    pub in_all_brands: bool,
    pub restricted_brand_ids: &'a [i64],
    pub ticket_field_ids: &'a [i64],
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a UpstreamTicketForm> for NewTicketFormRow<'a> {
    fn from(record: &'a UpstreamTicketForm) -> Self {
        Self {
            id: record.id,
            url: &record.url,
            name: &record.name,
            raw_name: &record.raw_name,
            display_name: &record.display_name,
            raw_display_name: &record.raw_display_name,
            end_user_visible: record.end_user_visible,
            position: record.position,
            active: record.active,
            in_all_brands: record.in_all_brands,
            restricted_brand_ids: &record.restricted_brand_ids,
            ticket_field_ids: &record.ticket_field_ids,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl<'a> From<&'a UpstreamTicketForm> for TicketFormUpdate<'a> {
    fn from(record: &'a UpstreamTicketForm) -> Self {
        Self {
            url: &record.url,
            name: &record.name,
            raw_name: &record.raw_name,
            display_name: &record.display_name,
            raw_display_name: &record.raw_display_name,
            end_user_visible: record.end_user_visible,
            position: record.position,
            active: record.active,
            in_all_brands: record.in_all_brands,
            restricted_brand_ids: &record.restricted_brand_ids,
            ticket_field_ids: &record.ticket_field_ids,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Ticket field models
// ---------------------------------------------------------------------------

/// Row struct for reading ticket fields.
///
/// Option lists come back as raw JSON; converting them into typed options is
/// the adapter's job so a malformed blob surfaces as a data error instead of
/// a decode panic.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ticket_fields)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketFieldRow {
    pub id: i64,
    pub url: String,
    pub kind: String,
    pub title: String,
    pub raw_title: String,
    pub description: String,
    pub raw_description: String,
    pub position: i32,
    pub active: bool,
    pub required: bool,
    pub collapsed_for_agents: bool,
    pub regexp_for_validation: String,
    pub title_in_portal: String,
    pub raw_title_in_portal: String,
    pub visible_in_portal: bool,
    pub editable_in_portal: bool,
    pub required_in_portal: bool,
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removable: bool,
    pub custom_field_options: serde_json::Value,
    pub system_field_options: serde_json::Value,
}

/// Insertable struct for new ticket fields.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ticket_fields)]
pub(crate) struct NewTicketFieldRow<'a> {
    pub id: i64,
    pub url: &'a str,
    pub kind: &'a str,
    pub title: &'a str,
    pub raw_title: &'a str,
    pub description: &'a str,
    pub raw_description: &'a str,
    pub position: i32,
    pub active: bool,
    pub required: bool,
    pub collapsed_for_agents: bool,
    pub regexp_for_validation: &'a str,
    pub title_in_portal: &'a str,
    pub raw_title_in_portal: &'a str,
    pub visible_in_portal: bool,
    pub editable_in_portal: bool,
    pub required_in_portal: bool,
    pub tag: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removable: bool,
    pub custom_field_options: &'a serde_json::Value,
    pub system_field_options: &'a serde_json::Value,
}

/// Changeset for refreshing an existing ticket field.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = ticket_fields)]
pub(crate) struct TicketFieldUpdate<'a> {
    pub url: &'a str,
    pub kind: &'a str,
    pub title: &'a str,
    pub raw_title: &'a str,
    pub description: &'a str,
    pub raw_description: &'a str,
    pub position: i32,
    pub active: bool,
    pub required: bool,
    pub collapsed_for_agents: bool,
    pub regexp_for_validation: &'a str,
    pub title_in_portal: &'a str,
    pub raw_title_in_portal: &'a str,
    pub visible_in_portal: bool,
    pub editable_in_portal: bool,
    pub required_in_portal: bool,
    pub tag: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removable: bool,
    pub custom_field_options: &'a serde_json::Value,
    pub system_field_options: &'a serde_json::Value,
}

// ---------------------------------------------------------------------------
// Dynamic content models
// ---------------------------------------------------------------------------

/// Row struct for reading dynamic-content items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dynamic_content_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DynamicContentItemRow {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub placeholder: String,
    pub default_locale_id: i64,
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub variants: serde_json::Value,
}

/// Insertable struct for new dynamic-content items.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = dynamic_content_items)]
pub(crate) struct NewDynamicContentItemRow<'a> {
    pub id: i64,
    pub url: &'a str,
    pub name: &'a str,
    pub placeholder: &'a str,
    pub default_locale_id: i64,
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub variants: &'a serde_json::Value,
}

/// Changeset for refreshing an existing dynamic-content item.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = dynamic_content_items)]
pub(crate) struct DynamicContentItemUpdate<'a> {
    pub url: &'a str,
    pub name: &'a str,
    pub placeholder: &'a str,
    pub default_locale_id: i64,
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub variants: &'a serde_json::Value,
}
