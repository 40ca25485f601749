//! Article entity mirrored from the upstream help centre.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article joined with its translation for one locale.
///
/// The persisted row also tracks a click counter used for top-N ranking;
/// that counter is bookkeeping, not content, and never appears on the wire,
/// so it is no field of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
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
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub title: String,
    pub body: String,
    pub locale: String,
}
