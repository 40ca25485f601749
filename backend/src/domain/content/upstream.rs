//! Upstream listing records produced by the help-desk source.
//!
//! These are the normalised shapes the sync operations consume: one record
//! per upstream entity, already scoped to a locale where the resource is
//! locale-scoped. The outbound client maps the remote API's JSON onto them;
//! the mirror sync reconciles them against the stored rows.

use chrono::{DateTime, Utc};

use super::dynamic_content::DynamicContentVariant;
use super::ticket_form::{CustomFieldOption, SystemFieldOption};

/// Category listing entry for one (country, locale).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamCategory {
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,
}

/// Section listing entry for one (country, locale).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSection {
    pub category_id: i64,
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,
}

/// Article listing entry for one (country, locale).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamArticle {
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
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub title: String,
    pub body: String,
    pub locale: String,
}

/// Ticket form listing entry (singleton scope).
///
/// `ticket_field_ids` keeps the upstream ordering; form assembly renders
/// fields in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTicketForm {
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

/// Ticket field listing entry (singleton scope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTicketField {
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
    pub custom_field_options: Vec<CustomFieldOption>,
    pub system_field_options: Vec<SystemFieldOption>,
}

/// Dynamic-content listing entry with all variants (singleton scope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamDynamicContent {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub placeholder: String,
    pub default_locale_id: i64,
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub variants: Vec<DynamicContentVariant>,
}
