//! Wire envelopes for the read endpoints.
//!
//! Listings wrap their items under a resource-named key with the pagination
//! bookkeeping alongside; single entities nest under a singular key. The
//! envelope layer exists so domain types never grow wire-specific naming.

use serde::Serialize;

use crate::domain::content::{Article, Category, Listing, Section, TicketForm};

/// Paginated category listing.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    pub page: i64,
    pub per_page: i64,
    pub page_count: i64,
    pub count: i64,
}

impl From<Listing<Category>> for CategoriesResponse {
    fn from(listing: Listing<Category>) -> Self {
        Self {
            categories: listing.items,
            page: listing.page,
            per_page: listing.per_page,
            page_count: listing.page_count,
            count: listing.count,
        }
    }
}

/// Paginated section listing.
#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<Section>,
    pub page: i64,
    pub per_page: i64,
    pub page_count: i64,
    pub count: i64,
}

impl From<Listing<Section>> for SectionsResponse {
    fn from(listing: Listing<Section>) -> Self {
        Self {
            sections: listing.items,
            page: listing.page,
            per_page: listing.per_page,
            page_count: listing.page_count,
            count: listing.count,
        }
    }
}

/// Paginated article listing.
#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    pub page: i64,
    pub per_page: i64,
    pub page_count: i64,
    pub count: i64,
}

impl From<Listing<Article>> for ArticlesResponse {
    fn from(listing: Listing<Article>) -> Self {
        Self {
            articles: listing.items,
            page: listing.page,
            per_page: listing.per_page,
            page_count: listing.page_count,
            count: listing.count,
        }
    }
}

/// Resolved category identifier for a key-name lookup.
#[derive(Debug, Serialize)]
pub struct CategoryIdResponse {
    pub category_id: i64,
}

/// Single section envelope.
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: Section,
}

/// Single article envelope.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

/// Ranked most-read articles; unpaginated.
#[derive(Debug, Serialize)]
pub struct TopArticlesResponse {
    pub articles: Vec<Article>,
}

/// Single ticket form envelope.
#[derive(Debug, Serialize)]
pub struct TicketFormResponse {
    pub ticket_form: TicketForm,
}
