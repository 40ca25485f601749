//! Diesel table definitions for the content mirror schema.
//!
//! Parent tables carry the upstream identity plus per-country bookkeeping;
//! `*_translates` tables carry one row per `(parent id, locale)`. Every table
//! keeps a surrogate `sn` primary key because upstream ids repeat across
//! countries, so `(id, country_code)` rather than `id` is the logical key of
//! the country-scoped tables.

diesel::table! {
    /// Mirrored categories, one row per upstream category and country.
    categories (sn) {
        sn -> Int8,
        id -> Int8,
        position -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        source_locale -> Varchar,
        outdated -> Bool,
        country_code -> Varchar,
    }
}

diesel::table! {
    /// Localised category attributes, one row per category and locale.
    category_translates (sn) {
        sn -> Int8,
        category_id -> Int8,
        url -> Varchar,
        html_url -> Varchar,
        name -> Varchar,
        description -> Text,
        locale -> Varchar,
    }
}

diesel::table! {
    /// Operator-maintained key-name aliases for categories.
    ///
    /// Rows here are written by hand, never by a refresh; the mirror only
    /// reads them to resolve friendly names and to decorate listings.
    category_key (sn) {
        sn -> Int8,
        category_id -> Int8,
        key_name -> Varchar,
        country_code -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Mirrored sections, one row per upstream section and country.
    sections (sn) {
        sn -> Int8,
        category_id -> Int8,
        id -> Int8,
        position -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        source_locale -> Varchar,
        outdated -> Bool,
        country_code -> Varchar,
    }
}

diesel::table! {
    /// Localised section attributes, one row per section and locale.
    section_translates (sn) {
        sn -> Int8,
        section_id -> Int8,
        url -> Varchar,
        html_url -> Varchar,
        name -> Varchar,
        description -> Text,
        locale -> Varchar,
    }
}

diesel::table! {
    /// Mirrored articles, one row per upstream article and country.
    ///
    /// `click_count` defaults to zero on insert and is only ever touched by
    /// the click-counter update, so refreshes never reset popularity.
    articles (sn) {
        sn -> Int8,
        section_id -> Int8,
        id -> Int8,
        author_id -> Int8,
        comments_disable -> Bool,
        draft -> Bool,
        promoted -> Bool,
        position -> Int4,
        vote_sum -> Int4,
        vote_count -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        source_locale -> Varchar,
        outdated -> Bool,
        outdated_locales -> Array<Text>,
        edited_at -> Timestamptz,
        label_names -> Array<Text>,
        country_code -> Varchar,
        click_count -> Int8,
    }
}

diesel::table! {
    /// Localised article attributes, one row per article and locale.
    article_translates (sn) {
        sn -> Int8,
        article_id -> Int8,
        url -> Varchar,
        html_url -> Varchar,
        name -> Varchar,
        title -> Varchar,
        body -> Text,
        locale -> Varchar,
    }
}

diesel::table! {
    /// Mirrored ticket forms (deployment-wide, not country-scoped).
    ///
    /// `ticket_field_ids` preserves the upstream ordering; form assembly
    /// walks it to render fields in the order the form defines.
    ticket_forms (sn) {
        sn -> Int8,
        id -> Int8,
        url -> Varchar,
        name -> Varchar,
        raw_name -> Varchar,
        display_name -> Varchar,
        raw_display_name -> Varchar,
        end_user_visible -> Bool,
        position -> Int4,
        active -> Bool,
        in_all_brands -> Bool,
        restricted_brand_ids -> Array<Int8>,
        ticket_field_ids -> Array<Int8>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Mirrored ticket fields (deployment-wide, not country-scoped).
    ticket_fields (sn) {
        sn -> Int8,
        id -> Int8,
        url -> Varchar,
        /// Upstream calls this attribute `type`; `kind` avoids the keyword.
        #[sql_name = "type"]
        kind -> Varchar,
        title -> Varchar,
        raw_title -> Varchar,
        description -> Text,
        raw_description -> Text,
        position -> Int4,
        active -> Bool,
        required -> Bool,
        collapsed_for_agents -> Bool,
        regexp_for_validation -> Varchar,
        title_in_portal -> Varchar,
        raw_title_in_portal -> Varchar,
        visible_in_portal -> Bool,
        editable_in_portal -> Bool,
        required_in_portal -> Bool,
        tag -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        removable -> Bool,
        custom_field_options -> Jsonb,
        system_field_options -> Jsonb,
    }
}

diesel::table! {
    /// Mirrored dynamic-content items with their variants stored as JSON.
    dynamic_content_items (sn) {
        sn -> Int8,
        id -> Int8,
        url -> Varchar,
        name -> Varchar,
        placeholder -> Varchar,
        default_locale_id -> Int8,
        outdated -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        variants -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    category_translates,
    category_key,
    sections,
    section_translates,
    articles,
    article_translates,
    ticket_forms,
    ticket_fields,
    dynamic_content_items,
);

diesel::define_sql_function! {
    /// SQL `lower()`, used for case-insensitive key-name lookups.
    fn lower(input: diesel::sql_types::Text) -> diesel::sql_types::Text;
}
