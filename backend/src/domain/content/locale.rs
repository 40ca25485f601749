//! Request vocabulary: country codes, locales, and sort parameters.
//!
//! Read endpoints accept a constrained vocabulary; anything outside it is an
//! invalid attribute. Parsing lives here so inbound adapters and the refresh
//! orchestration share one definition of what a valid country or locale is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parse failures for the request vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    UnknownCountry { value: String },
    UnknownLocale { value: String },
    UnknownSortBy { value: String },
    UnknownSortOrder { value: String },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCountry { value } => write!(f, "unknown country code '{value}'"),
            Self::UnknownLocale { value } => write!(f, "unknown locale '{value}'"),
            Self::UnknownSortBy { value } => write!(f, "unknown sort key '{value}'"),
            Self::UnknownSortOrder { value } => write!(f, "unknown sort order '{value}'"),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Country a mirror partition belongs to.
///
/// The mirror is partitioned by country code; every country-scoped read and
/// refresh carries one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Country {
    #[default]
    Sg,
    Hk,
    Tw,
    Jp,
    Th,
    My,
    Id,
    Ph,
}

impl Country {
    /// Every supported country, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Sg,
        Self::Hk,
        Self::Tw,
        Self::Jp,
        Self::Th,
        Self::My,
        Self::Id,
        Self::Ph,
    ];

    /// Wire representation of the country code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sg => "sg",
            Self::Hk => "hk",
            Self::Tw => "tw",
            Self::Jp => "jp",
            Self::Th => "th",
            Self::My => "my",
            Self::Id => "id",
            Self::Ph => "ph",
        }
    }

    /// Locales the site serves for this country.
    ///
    /// Force-sync walks this list per country to refresh the whole mirror.
    pub const fn supported_locales(self) -> &'static [Locale] {
        match self {
            Self::Sg | Self::My => &[Locale::EnUs, Locale::ZhCn],
            Self::Hk | Self::Tw => &[Locale::EnUs, Locale::ZhTw],
            Self::Jp => &[Locale::EnUs, Locale::Ja],
            Self::Th => &[Locale::EnUs, Locale::Th],
            Self::Id => &[Locale::EnUs, Locale::Id],
            Self::Ph => &[Locale::EnUs],
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sg" => Ok(Self::Sg),
            "hk" => Ok(Self::Hk),
            "tw" => Ok(Self::Tw),
            "jp" => Ok(Self::Jp),
            "th" => Ok(Self::Th),
            "my" => Ok(Self::My),
            "id" => Ok(Self::Id),
            "ph" => Ok(Self::Ph),
            other => Err(VocabularyError::UnknownCountry {
                value: other.to_owned(),
            }),
        }
    }
}

/// Translation locale requested by a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    ZhTw,
    ZhCn,
    #[default]
    EnUs,
    Ja,
    Th,
    Id,
}

impl Locale {
    /// Wire representation of the locale code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZhTw => "zh-tw",
            Self::ZhCn => "zh-cn",
            Self::EnUs => "en-us",
            Self::Ja => "ja",
            Self::Th => "th",
            Self::Id => "id",
        }
    }

    /// Numeric locale id used by dynamic-content variants.
    ///
    /// The upstream help desk identifies variant locales by number, not code;
    /// this mapping mirrors its locale registry.
    pub const fn dynamic_content_locale_id(self) -> i64 {
        match self {
            Self::EnUs => 1,
            Self::ZhTw => 9,
            Self::ZhCn => 10,
            Self::Ja => 67,
            Self::Id => 77,
            Self::Th => 81,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "zh-tw" => Ok(Self::ZhTw),
            "zh-cn" => Ok(Self::ZhCn),
            "en-us" => Ok(Self::EnUs),
            "ja" => Ok(Self::Ja),
            "th" => Ok(Self::Th),
            "id" => Ok(Self::Id),
            other => Err(VocabularyError::UnknownLocale {
                value: other.to_owned(),
            }),
        }
    }
}

/// Column a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Position,
    CreatedAt,
    UpdatedAt,
}

impl SortBy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "position" => Ok(Self::Position),
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            other => Err(VocabularyError::UnknownSortBy {
                value: other.to_owned(),
            }),
        }
    }
}

/// Direction a listing is ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(VocabularyError::UnknownSortOrder {
                value: other.to_owned(),
            }),
        }
    }
}
