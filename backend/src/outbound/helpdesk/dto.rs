//! DTOs for decoding upstream helpdesk JSON.
//!
//! The adapter decodes each page into these transport DTOs first, then maps
//! into upstream records in one pass. Every field defaults: the upstream
//! elides attributes it considers zero-valued, and a page that omits a
//! field must decode the same as one that spells it out.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::content::{
    CustomFieldOption, DynamicContentVariant, SystemFieldOption, UpstreamArticle,
    UpstreamCategory, UpstreamDynamicContent, UpstreamSection, UpstreamTicketField,
    UpstreamTicketForm,
};

/// One decoded page of an upstream resource.
///
/// Fetchers walk pages generically: each page yields its records and the
/// URL of the next page, if any.
pub(super) trait PageDto: serde::de::DeserializeOwned {
    type Record;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>);
}

/// A timestamp the upstream elided decodes as the epoch.
fn stamp(value: Option<DateTime<Utc>>) -> DateTime<Utc> {
    value.unwrap_or(DateTime::UNIX_EPOCH)
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoriesPageDto {
    #[serde(default)]
    categories: Vec<CategoryDto>,
    #[serde(default)]
    next_page: Option<String>,
}

impl PageDto for CategoriesPageDto {
    type Record = UpstreamCategory;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>) {
        let records = self
            .categories
            .into_iter()
            .map(CategoryDto::into_record)
            .collect();
        (records, self.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryDto {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    position: i32,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    source_locale: String,
    #[serde(default)]
    outdated: bool,
    #[serde(default)]
    url: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    locale: String,
}

impl CategoryDto {
    fn into_record(self) -> UpstreamCategory {
        UpstreamCategory {
            id: self.id,
            position: self.position,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
            source_locale: self.source_locale,
            outdated: self.outdated,
            url: self.url,
            html_url: self.html_url,
            name: self.name,
            description: self.description,
            locale: self.locale,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SectionsPageDto {
    #[serde(default)]
    sections: Vec<SectionDto>,
    #[serde(default)]
    next_page: Option<String>,
}

impl PageDto for SectionsPageDto {
    type Record = UpstreamSection;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>) {
        let records = self
            .sections
            .into_iter()
            .map(SectionDto::into_record)
            .collect();
        (records, self.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SectionDto {
    #[serde(default)]
    category_id: i64,
    #[serde(default)]
    id: i64,
    #[serde(default)]
    position: i32,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    source_locale: String,
    #[serde(default)]
    outdated: bool,
    #[serde(default)]
    url: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    locale: String,
}

impl SectionDto {
    fn into_record(self) -> UpstreamSection {
        UpstreamSection {
            category_id: self.category_id,
            id: self.id,
            position: self.position,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
            source_locale: self.source_locale,
            outdated: self.outdated,
            url: self.url,
            html_url: self.html_url,
            name: self.name,
            description: self.description,
            locale: self.locale,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticlesPageDto {
    #[serde(default)]
    articles: Vec<ArticleDto>,
    #[serde(default)]
    next_page: Option<String>,
}

impl PageDto for ArticlesPageDto {
    type Record = UpstreamArticle;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>) {
        let records = self
            .articles
            .into_iter()
            .map(ArticleDto::into_record)
            .collect();
        (records, self.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleDto {
    #[serde(default)]
    section_id: i64,
    #[serde(default)]
    id: i64,
    #[serde(default)]
    author_id: i64,
    #[serde(default)]
    comments_disable: bool,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    promoted: bool,
    #[serde(default)]
    position: i32,
    #[serde(default)]
    vote_sum: i32,
    #[serde(default)]
    vote_count: i32,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    source_locale: String,
    #[serde(default)]
    outdated: bool,
    #[serde(default)]
    outdated_locales: Vec<String>,
    #[serde(default)]
    edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    label_names: Vec<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    locale: String,
}

impl ArticleDto {
    fn into_record(self) -> UpstreamArticle {
        UpstreamArticle {
            section_id: self.section_id,
            id: self.id,
            author_id: self.author_id,
            comments_disable: self.comments_disable,
            draft: self.draft,
            promoted: self.promoted,
            position: self.position,
            vote_sum: self.vote_sum,
            vote_count: self.vote_count,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
            source_locale: self.source_locale,
            outdated: self.outdated,
            outdated_locales: self.outdated_locales,
            edited_at: stamp(self.edited_at),
            label_names: self.label_names,
            url: self.url,
            html_url: self.html_url,
            name: self.name,
            title: self.title,
            body: self.body,
            locale: self.locale,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TicketFormsPageDto {
    #[serde(default)]
    ticket_forms: Vec<TicketFormDto>,
    #[serde(default)]
    next_page: Option<String>,
}

impl PageDto for TicketFormsPageDto {
    type Record = UpstreamTicketForm;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>) {
        let records = self
            .ticket_forms
            .into_iter()
            .map(TicketFormDto::into_record)
            .collect();
        (records, self.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TicketFormDto {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    raw_name: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    raw_display_name: String,
    #[serde(default)]
    end_user_visible: bool,
    #[serde(default)]
    position: i32,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    in_all_brands: bool,
    #[serde(default)]
    restricted_brand_ids: Vec<i64>,
    #[serde(default)]
    ticket_field_ids: Vec<i64>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TicketFormDto {
    fn into_record(self) -> UpstreamTicketForm {
        UpstreamTicketForm {
            id: self.id,
            url: self.url,
            name: self.name,
            raw_name: self.raw_name,
            display_name: self.display_name,
            raw_display_name: self.raw_display_name,
            end_user_visible: self.end_user_visible,
            position: self.position,
            active: self.active,
            in_all_brands: self.in_all_brands,
            restricted_brand_ids: self.restricted_brand_ids,
            ticket_field_ids: self.ticket_field_ids,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TicketFieldsPageDto {
    #[serde(default)]
    ticket_fields: Vec<TicketFieldDto>,
    #[serde(default)]
    next_page: Option<String>,
}

impl PageDto for TicketFieldsPageDto {
    type Record = UpstreamTicketField;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>) {
        let records = self
            .ticket_fields
            .into_iter()
            .map(TicketFieldDto::into_record)
            .collect();
        (records, self.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TicketFieldDto {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    url: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    raw_title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    raw_description: String,
    #[serde(default)]
    position: i32,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    collapsed_for_agents: bool,
    #[serde(default)]
    regexp_for_validation: String,
    #[serde(default)]
    title_in_portal: String,
    #[serde(default)]
    raw_title_in_portal: String,
    #[serde(default)]
    visible_in_portal: bool,
    #[serde(default)]
    editable_in_portal: bool,
    #[serde(default)]
    required_in_portal: bool,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    removable: bool,
    #[serde(default)]
    custom_field_options: Vec<CustomFieldOption>,
    #[serde(default)]
    system_field_options: Vec<SystemFieldOption>,
}

impl TicketFieldDto {
    fn into_record(self) -> UpstreamTicketField {
        UpstreamTicketField {
            id: self.id,
            url: self.url,
            kind: self.kind,
            title: self.title,
            raw_title: self.raw_title,
            description: self.description,
            raw_description: self.raw_description,
            position: self.position,
            active: self.active,
            required: self.required,
            collapsed_for_agents: self.collapsed_for_agents,
            regexp_for_validation: self.regexp_for_validation,
            title_in_portal: self.title_in_portal,
            raw_title_in_portal: self.raw_title_in_portal,
            visible_in_portal: self.visible_in_portal,
            editable_in_portal: self.editable_in_portal,
            required_in_portal: self.required_in_portal,
            tag: self.tag,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
            removable: self.removable,
            custom_field_options: self.custom_field_options,
            system_field_options: self.system_field_options,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DynamicContentPageDto {
    #[serde(default)]
    items: Vec<DynamicContentItemDto>,
    #[serde(default)]
    next_page: Option<String>,
}

impl PageDto for DynamicContentPageDto {
    type Record = UpstreamDynamicContent;

    fn into_parts(self) -> (Vec<Self::Record>, Option<String>) {
        let records = self
            .items
            .into_iter()
            .map(DynamicContentItemDto::into_record)
            .collect();
        (records, self.next_page)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DynamicContentItemDto {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    placeholder: String,
    #[serde(default)]
    default_locale_id: i64,
    #[serde(default)]
    outdated: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    variants: Vec<VariantDto>,
}

impl DynamicContentItemDto {
    fn into_record(self) -> UpstreamDynamicContent {
        UpstreamDynamicContent {
            id: self.id,
            url: self.url,
            name: self.name,
            placeholder: self.placeholder,
            default_locale_id: self.default_locale_id,
            outdated: self.outdated,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
            variants: self
                .variants
                .into_iter()
                .map(VariantDto::into_variant)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct VariantDto {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    locale_id: i64,
    #[serde(default)]
    outdated: bool,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl VariantDto {
    fn into_variant(self) -> DynamicContentVariant {
        DynamicContentVariant {
            id: self.id,
            url: self.url,
            content: self.content,
            locale_id: self.locale_id,
            outdated: self.outdated,
            active: self.active,
            created_at: stamp(self.created_at),
            updated_at: stamp(self.updated_at),
        }
    }
}
