//! Section entity mirrored from the upstream help centre.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A section joined with its translation for one locale.
///
/// Single-section reads fall back to blank translation fields when the
/// requested locale has no row; listings omit the section instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub category_id: i64,
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
}
