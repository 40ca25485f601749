//! Listing queries and paginated result envelopes.

use serde::{Deserialize, Serialize};

use super::locale::{Country, Locale, SortBy, SortOrder};

/// Validated parameters for a paginated listing read.
///
/// `page` is 1-based and `per_page` sits in `[1, 100]`; inbound validation
/// enforces both before a query reaches the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingQuery {
    pub country: Country,
    pub locale: Locale,
    pub page: i64,
    pub per_page: i64,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ListingQuery {
    /// Row offset for the requested page.
    pub const fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            country: Country::default(),
            locale: Locale::default(),
            page: 1,
            per_page: 30,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// One page of listing results together with pagination bookkeeping.
///
/// This is the unit the response cache stores: a hit replays the whole
/// page, items and counts alike, without touching the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub page_count: i64,
    pub count: i64,
}

impl<T> Listing<T> {
    /// Assemble a page from query parameters and the translated-row total.
    pub fn paginate(items: Vec<T>, query: &ListingQuery, count: i64) -> Self {
        Self {
            items,
            page: query.page,
            per_page: query.per_page,
            page_count: (count + query.per_page - 1) / query.per_page,
            count,
        }
    }
}
