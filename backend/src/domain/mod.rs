//! Domain entities, ports, and the refresh orchestration.
//!
//! Purpose: model the mirrored help-centre content (categories, sections,
//! articles, ticket forms, dynamic content) as strongly typed entities,
//! declare the ports the adapters implement, and own the demand-driven
//! refresh logic that keeps the mirror current.
//!
//! Public surface:
//! - `content` — entities and listing vocabulary shared across layers.
//! - `ContentService` — cached read operations backed by the query port.
//! - `Examiner` — touch-driven refresh orchestrator and force-sync entry.
//! - `Error` / `ErrorKind` — API error taxonomy with stable wire codes.

pub mod content;
pub mod content_service;
pub mod error;
pub mod ports;
pub mod refresh;

pub use self::content::{
    Article, Category, Country, CustomFieldOption, DynamicContentItem, DynamicContentVariant,
    Listing, ListingQuery, Locale, Section, SortBy, SortOrder, SystemFieldOption, TicketField,
    TicketForm,
};
pub use self::content_service::ContentService;
pub use self::error::{Error, ErrorBody, ErrorKind};
pub use self::refresh::{Examiner, ExaminerConfig, RefreshOutcome};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use zephyr_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("article 42 has no translation"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
