//! Cached read facade over the content mirror.
//!
//! Every read flows through one pipeline: consult the response cache, fall
//! back to the store, cache what the store returned, then record the read
//! with the refresh examiner. The demand signal fires whether or not the
//! read produced data, so a request for content the mirror has not ingested
//! yet still drives a refresh that may bring it in.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::content::{
    Article, Category, Country, Listing, ListingQuery, Locale, Section, TicketForm,
};
use super::error::Error;
use super::ports::{ContentQueries, ContentQueryError, RefreshKey, ResponseCache};
use super::refresh::Examiner;

/// Read service combining the mirror store, the response cache, and the
/// demand-driven refresh examiner.
///
/// Cache entries live under the refresh partition they were read from, so a
/// completed refresh invalidates exactly the responses it made stale.
#[derive(Clone)]
pub struct ContentService {
    queries: Arc<dyn ContentQueries>,
    cache: Arc<dyn ResponseCache>,
    examiner: Arc<Examiner>,
}

impl ContentService {
    /// Assemble the service from its collaborators.
    pub fn new(
        queries: Arc<dyn ContentQueries>,
        cache: Arc<dyn ResponseCache>,
        examiner: Arc<Examiner>,
    ) -> Self {
        Self {
            queries,
            cache,
            examiner,
        }
    }

    /// List categories for a country and locale.
    pub async fn categories(&self, query: &ListingQuery) -> Result<Listing<Category>, Error> {
        let key = RefreshKey::Categories {
            country: query.country,
            locale: query.locale,
        };
        let fingerprint = format!("categories:{}", Self::paging_fingerprint(query));
        let result = self
            .cached_listing(&key, &fingerprint, query, || async move {
                self.queries.categories(query).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// Resolve a category key name to its category id.
    ///
    /// Key names match case-insensitively, so the cache slot is keyed on the
    /// lowercased name.
    pub async fn category_id_for_key_name(
        &self,
        key_name: &str,
        country: Country,
        locale: Locale,
    ) -> Result<i64, Error> {
        let key = RefreshKey::Categories { country, locale };
        let fingerprint = format!("category-key:{}", key_name.to_lowercase());
        let result = self
            .cached_value(&key, &fingerprint, || async move {
                self.queries.category_id_for_key_name(key_name, country).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// List the sections belonging to one category.
    pub async fn sections_by_category(
        &self,
        category_id: i64,
        query: &ListingQuery,
    ) -> Result<Listing<Section>, Error> {
        let key = RefreshKey::Sections {
            country: query.country,
            locale: query.locale,
        };
        let fingerprint = format!(
            "category-sections:{category_id}:{}",
            Self::paging_fingerprint(query)
        );
        let result = self
            .cached_listing(&key, &fingerprint, query, || async move {
                self.queries.sections_by_category(category_id, query).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// Fetch a single section.
    pub async fn section(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Section, Error> {
        let key = RefreshKey::Sections { country, locale };
        let fingerprint = format!("section:{id}");
        let result = self
            .cached_value(&key, &fingerprint, || async move {
                self.queries.section(id, country, locale).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// List every article for a country and locale.
    pub async fn articles(&self, query: &ListingQuery) -> Result<Listing<Article>, Error> {
        let key = RefreshKey::Articles {
            country: query.country,
            locale: query.locale,
        };
        let fingerprint = format!("articles:{}", Self::paging_fingerprint(query));
        let result = self
            .cached_listing(&key, &fingerprint, query, || async move {
                self.queries.articles(query).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// List articles carrying any of the given labels.
    ///
    /// The category listing endpoint filters by label rather than by category
    /// membership; an empty label set lists every article for the country and
    /// locale.
    pub async fn articles_by_category(
        &self,
        labels: &[String],
        query: &ListingQuery,
    ) -> Result<Listing<Article>, Error> {
        let key = RefreshKey::Articles {
            country: query.country,
            locale: query.locale,
        };
        let fingerprint = format!(
            "category-articles:{}:{}",
            labels.join(","),
            Self::paging_fingerprint(query)
        );
        let result = self
            .cached_listing(&key, &fingerprint, query, || async move {
                self.queries.articles_by_category(labels, query).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// List the articles belonging to one section.
    pub async fn articles_by_section(
        &self,
        section_id: i64,
        query: &ListingQuery,
    ) -> Result<Listing<Article>, Error> {
        let key = RefreshKey::Articles {
            country: query.country,
            locale: query.locale,
        };
        let fingerprint = format!(
            "section-articles:{section_id}:{}",
            Self::paging_fingerprint(query)
        );
        let result = self
            .cached_listing(&key, &fingerprint, query, || async move {
                self.queries.articles_by_section(section_id, query).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// Fetch a single article.
    ///
    /// The click counter and the demand signal record the read whether or
    /// not it produced an article.
    pub async fn article(
        &self,
        id: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Article, Error> {
        let key = RefreshKey::Articles { country, locale };
        let fingerprint = format!("article:{id}");
        let result = self
            .cached_value(&key, &fingerprint, || async move {
                self.queries.article(id, country, locale).await
            })
            .await;
        if let Err(error) = self.queries.bump_article_click(id, country).await {
            warn!(article_id = id, %country, %error, "article click bump failed");
        }
        self.examiner.touch(key).await;
        result
    }

    /// Most-read articles, ranked by promotion then click count.
    pub async fn top_articles(
        &self,
        top_n: i64,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<Article>, Error> {
        let key = RefreshKey::Articles { country, locale };
        let fingerprint = format!("top-articles:{top_n}");
        let result = self
            .cached_value(&key, &fingerprint, || async move {
                self.queries.top_articles(top_n, country, locale).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    /// Fetch a ticket form with its portal-visible fields for one locale.
    pub async fn ticket_form(&self, form_id: i64, locale: Locale) -> Result<TicketForm, Error> {
        let key = RefreshKey::TicketForms;
        let fingerprint = format!("ticket-form:{form_id}:{locale}");
        let result = self
            .cached_value(&key, &fingerprint, || async move {
                self.queries.ticket_form(form_id, locale).await
            })
            .await;
        self.examiner.touch(key).await;
        result
    }

    fn paging_fingerprint(query: &ListingQuery) -> String {
        format!(
            "{}:{}:{}:{}",
            query.page, query.per_page, query.sort_by, query.sort_order
        )
    }

    async fn cached_listing<T, F, Fut>(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
        query: &ListingQuery,
        fetch: F,
    ) -> Result<Listing<T>, Error>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(Vec<T>, i64), ContentQueryError>>,
    {
        if let Some(listing) = self.cache_lookup(key, fingerprint).await {
            return Ok(listing);
        }
        let (items, count) = fetch().await?;
        let listing = Listing::paginate(items, query, count);
        self.cache_store(key, fingerprint, &listing).await;
        Ok(listing)
    }

    async fn cached_value<T, F, Fut>(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
        fetch: F,
    ) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ContentQueryError>>,
    {
        if let Some(value) = self.cache_lookup(key, fingerprint).await {
            return Ok(value);
        }
        let value = fetch().await?;
        self.cache_store(key, fingerprint, &value).await;
        Ok(value)
    }

    /// Read a cached response, treating backend failures and malformed
    /// payloads as misses.
    async fn cache_lookup<T: DeserializeOwned>(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
    ) -> Option<T> {
        match self.cache.get(key, fingerprint).await {
            Ok(Some(body)) => match serde_json::from_str(&body) {
                Ok(value) => Some(value),
                Err(error) => {
                    warn!(%key, fingerprint, %error, "discarding malformed cached response");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(%key, fingerprint, %error, "response cache read failed, serving from the store");
                None
            }
        }
    }

    /// Write a response to the cache, logging rather than failing the read
    /// when the write cannot happen.
    async fn cache_store<T: Serialize>(&self, key: &RefreshKey, fingerprint: &str, value: &T) {
        let body = match serde_json::to_string(value) {
            Ok(body) => body,
            Err(error) => {
                warn!(%key, fingerprint, %error, "response serialisation failed, skipping cache write");
                return;
            }
        };
        if let Err(error) = self.cache.put(key, fingerprint, &body).await {
            warn!(%key, fingerprint, %error, "response cache write failed");
        }
    }
}
