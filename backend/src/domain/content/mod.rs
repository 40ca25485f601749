//! Mirrored help-centre content: entities, vocabulary, and listing shapes.
//!
//! Public surface:
//! - `Category` / `Section` / `Article` — locale-joined read entities.
//! - `TicketForm` / `TicketField` — portal-projected support form entities.
//! - `DynamicContentItem` — placeholder text with per-locale variants.
//! - `Country` / `Locale` / `SortBy` / `SortOrder` — request vocabulary.
//! - `ListingQuery` / `Listing` — pagination inputs and result pages.
//! - `Upstream*` — normalised upstream listing records consumed by sync.

mod article;
mod category;
mod dynamic_content;
mod listing;
mod locale;
mod section;
mod ticket_form;
mod upstream;

pub use article::Article;
pub use category::Category;
pub use dynamic_content::{DynamicContentItem, DynamicContentVariant};
pub use listing::{Listing, ListingQuery};
pub use locale::{Country, Locale, SortBy, SortOrder, VocabularyError};
pub use section::Section;
pub use ticket_form::{CustomFieldOption, SystemFieldOption, TicketField, TicketForm};
pub use upstream::{
    UpstreamArticle, UpstreamCategory, UpstreamDynamicContent, UpstreamSection,
    UpstreamTicketField, UpstreamTicketForm,
};
