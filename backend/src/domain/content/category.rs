//! Category entity mirrored from the upstream help centre.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category joined with its translation for one locale.
///
/// `key_name` comes from the local key-name mapping and serialises as an
/// empty string when no mapping exists. Field order matches the public wire
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub country_code: String,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,
    pub key_name: String,
}
