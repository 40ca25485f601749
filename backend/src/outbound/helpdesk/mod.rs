//! Upstream helpdesk adapter.
//!
//! Fetches categories, sections, articles, ticket forms, ticket fields and
//! dynamic content from the hosted helpdesk's REST API, walking pagination
//! until each collection is complete. Wire DTOs live in [`dto`] and stay
//! out of the domain; the adapter hands back upstream records ready for
//! reconciliation.

mod dto;
mod http_source;

pub use http_source::{HelpdeskHttpConfig, HelpdeskHttpSource};
