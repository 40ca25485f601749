//! HTTP inbound adapter exposing the public read API.
//!
//! ```text
//! GET  /api/categories
//! GET  /api/categories/{category_id}/sections
//! GET  /api/categories/{category_id}/articles
//! GET  /api/category/{category_key_name}
//! GET  /api/sections/{section_id}
//! GET  /api/sections/{section_id}/articles
//! GET  /api/articles/{article_id}
//! GET  /api/toparticles/{top_n}
//! GET  /api/ticket_forms/{form_id}
//! GET  /api/status
//! POST /api/forcesync
//! ```
//!
//! Every content read validates the shared query parameters first, serves
//! from the mirror through the response cache, and records demand so the
//! examiner can schedule a background refresh.

pub mod articles;
pub mod categories;
pub mod force_sync;
pub mod params;
pub mod responses;
pub mod sections;
pub mod state;
pub mod status;
#[cfg(test)]
pub mod test_utils;
pub mod ticket_forms;
