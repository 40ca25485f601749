//! Refresh partition key shared by the refresh gate and response cache.
use crate::domain::content::{Country, Locale};

/// Identifies one independently refreshed slice of mirrored content.
///
/// Listing resources are partitioned per country and locale; ticket forms
/// are mirrored once for the whole deployment because the upstream feed is
/// not localised. Each key derives the backing-store names for its demand
/// counter, its refresh lock and its cached-response namespace, so every
/// collaborator agrees on the wire-level naming without sharing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshKey {
    /// Category listings for one country and locale.
    Categories { country: Country, locale: Locale },
    /// Section listings for one country and locale.
    Sections { country: Country, locale: Locale },
    /// Article listings for one country and locale.
    Articles { country: Country, locale: Locale },
    /// The deployment-wide ticket form mirror.
    TicketForms,
}

impl RefreshKey {
    /// Name of the demand counter tracked for this partition.
    pub fn counter_key(&self) -> String {
        self.scoped("counter")
    }

    /// Name of the advisory lock guarding refreshes of this partition.
    pub fn lock_key(&self) -> String {
        self.scoped("lock")
    }

    /// Namespace prefix under which responses for this partition are cached.
    pub fn cache_prefix(&self) -> String {
        self.scoped("dl")
    }

    fn scoped(&self, namespace: &str) -> String {
        format!("{namespace}:{self}")
    }
}

impl std::fmt::Display for RefreshKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Categories { country, locale } => {
                write!(f, "categories:{country}:{locale}")
            }
            Self::Sections { country, locale } => {
                write!(f, "sections:{country}:{locale}")
            }
            Self::Articles { country, locale } => {
                write!(f, "articles:{country}:{locale}")
            }
            Self::TicketForms => f.write_str("ticket_forms"),
        }
    }
}
