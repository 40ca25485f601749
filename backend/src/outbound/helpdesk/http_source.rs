//! Reqwest-backed helpdesk source adapter.
//!
//! This adapter owns transport details only: URL construction, pagination
//! walking, authentication, HTTP status checks and JSON decoding into
//! upstream records.
//!
//! Listing endpoints are public and are fetched per country tenant and
//! locale. Ticket forms, ticket fields and dynamic content require an API
//! credential and are served identically by every tenant, so those feeds
//! are always fetched from the shared tenant.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::domain::content::{
    Country, Locale, UpstreamArticle, UpstreamCategory, UpstreamDynamicContent, UpstreamSection,
    UpstreamTicketField, UpstreamTicketForm,
};
use crate::domain::ports::{HelpdeskSource, HelpdeskSourceError};

use super::dto::{
    ArticlesPageDto, CategoriesPageDto, DynamicContentPageDto, PageDto, SectionsPageDto,
    TicketFieldsPageDto, TicketFormsPageDto,
};

/// Page size requested from upstream listing endpoints.
const PAGE_SIZE: u32 = 100;

/// Tenant that serves the deployment-wide feeds.
///
/// Ticket forms, ticket fields and dynamic content are identical across
/// tenants; every deployment provisions this one.
const SHARED_FEED_COUNTRY: Country = Country::Tw;

/// Endpoint table and credentials for the upstream helpdesk.
#[derive(Debug, Clone)]
pub struct HelpdeskHttpConfig {
    /// Base URL of each country's tenant, without a trailing slash.
    pub base_urls: HashMap<Country, String>,
    /// Account email for the API credential.
    pub email: String,
    /// API token paired with the account email.
    pub api_token: String,
    /// End-to-end timeout for each upstream request.
    pub timeout: Duration,
}

/// Helpdesk source adapter that performs HTTP GET requests per tenant.
pub struct HelpdeskHttpSource {
    client: Client,
    base_urls: HashMap<Country, String>,
    credential: String,
}

impl HelpdeskHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: HelpdeskHttpConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_urls: config.base_urls,
            credential: basic_credential(&config.email, &config.api_token),
        })
    }

    fn base_url(&self, country: Country) -> Result<&str, HelpdeskSourceError> {
        self.base_urls
            .get(&country)
            .map(String::as_str)
            .ok_or_else(|| {
                HelpdeskSourceError::transport(format!("no base URL configured for {country}"))
            })
    }

    fn listing_url(
        &self,
        country: Country,
        resource: &str,
        locale: Locale,
    ) -> Result<String, HelpdeskSourceError> {
        let base = self.base_url(country)?;
        Ok(format!(
            "{base}/api/v2/help_center/{locale}/{resource}.json?page=1&per_page={PAGE_SIZE}",
            locale = locale.as_str(),
        ))
    }

    fn feed_url(&self, path: &str) -> Result<String, HelpdeskSourceError> {
        let base = self.base_url(SHARED_FEED_COUNTRY)?;
        Ok(format!("{base}/api/v2/{path}"))
    }

    /// Walk a public listing endpoint through every page.
    async fn collect_listing<P: PageDto>(
        &self,
        country: Country,
        resource: &str,
        locale: Locale,
    ) -> Result<Vec<P::Record>, HelpdeskSourceError> {
        let mut url = self.listing_url(country, resource, locale)?;
        let mut records = Vec::new();
        loop {
            let page: P = self.fetch_json(&url, None).await?;
            let (mut batch, next_page) = page.into_parts();
            records.append(&mut batch);
            match next_listing_url(next_page) {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(records)
    }

    /// Walk an authenticated deployment-wide feed through every page.
    async fn collect_feed<P: PageDto>(
        &self,
        path: &str,
    ) -> Result<Vec<P::Record>, HelpdeskSourceError> {
        let mut url = self.feed_url(path)?;
        let mut records = Vec::new();
        loop {
            let page: P = self.fetch_json(&url, Some(self.credential.as_str())).await?;
            let (mut batch, next_page) = page.into_parts();
            records.append(&mut batch);
            match next_page.filter(|next| !next.is_empty()) {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(records)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        authorization: Option<&str>,
    ) -> Result<T, HelpdeskSourceError> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache");
        if let Some(credential) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, credential);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(HelpdeskSourceError::status(status.as_u16()));
        }

        response.json().await.map_err(map_body_error)
    }
}

#[async_trait]
impl HelpdeskSource for HelpdeskHttpSource {
    async fn categories(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<UpstreamCategory>, HelpdeskSourceError> {
        self.collect_listing::<CategoriesPageDto>(country, "categories", locale)
            .await
    }

    async fn sections(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<UpstreamSection>, HelpdeskSourceError> {
        self.collect_listing::<SectionsPageDto>(country, "sections", locale)
            .await
    }

    async fn articles(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<Vec<UpstreamArticle>, HelpdeskSourceError> {
        self.collect_listing::<ArticlesPageDto>(country, "articles", locale)
            .await
    }

    async fn ticket_forms(&self) -> Result<Vec<UpstreamTicketForm>, HelpdeskSourceError> {
        self.collect_feed::<TicketFormsPageDto>("ticket_forms.json")
            .await
    }

    async fn ticket_fields(&self) -> Result<Vec<UpstreamTicketField>, HelpdeskSourceError> {
        self.collect_feed::<TicketFieldsPageDto>("ticket_fields.json")
            .await
    }

    async fn dynamic_content(&self) -> Result<Vec<UpstreamDynamicContent>, HelpdeskSourceError> {
        self.collect_feed::<DynamicContentPageDto>("dynamic_content/items.json")
            .await
    }
}

/// Advance a listing walk to its next page.
///
/// The upstream's `next_page` links sometimes drop the `per_page` argument,
/// which would silently shrink every later page to the upstream default; the
/// requested size is re-appended when missing.
fn next_listing_url(next_page: Option<String>) -> Option<String> {
    let mut next = next_page.filter(|page| !page.is_empty())?;
    if !next.contains("per_page") {
        next.push_str(&format!("&per_page={PAGE_SIZE}"));
    }
    Some(next)
}

fn basic_credential(email: &str, api_token: &str) -> String {
    let token = STANDARD.encode(format!("{email}/token:{api_token}"));
    format!("Basic {token}")
}

fn map_transport_error(error: reqwest::Error) -> HelpdeskSourceError {
    HelpdeskSourceError::transport(error.to_string())
}

fn map_body_error(error: reqwest::Error) -> HelpdeskSourceError {
    if error.is_decode() {
        HelpdeskSourceError::decode(error.to_string())
    } else {
        HelpdeskSourceError::transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for URL building, pagination bookkeeping and JSON decoding.

    use base64::Engine as _;
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    fn source() -> HelpdeskHttpSource {
        let mut base_urls = HashMap::new();
        base_urls.insert(Country::Sg, "https://sg.helpdesk.test".to_owned());
        base_urls.insert(Country::Tw, "https://tw.helpdesk.test".to_owned());
        HelpdeskHttpSource::new(HelpdeskHttpConfig {
            base_urls,
            email: "mirror@example.test".to_owned(),
            api_token: "sekrit".to_owned(),
            timeout: Duration::from_secs(10),
        })
        .expect("client should build")
    }

    #[rstest]
    fn listing_urls_pin_page_one_and_the_page_size() {
        let url = source()
            .listing_url(Country::Sg, "categories", Locale::EnUs)
            .expect("url should build");

        assert_eq!(
            url,
            "https://sg.helpdesk.test/api/v2/help_center/en-us/categories.json?page=1&per_page=100"
        );
    }

    #[rstest]
    fn feeds_always_come_from_the_shared_tenant() {
        let url = source()
            .feed_url("dynamic_content/items.json")
            .expect("url should build");

        assert_eq!(
            url,
            "https://tw.helpdesk.test/api/v2/dynamic_content/items.json"
        );
    }

    #[rstest]
    fn unconfigured_tenants_are_reported_not_guessed() {
        let error = source()
            .listing_url(Country::Jp, "categories", Locale::Ja)
            .expect_err("missing tenant should fail");

        assert!(matches!(error, HelpdeskSourceError::Transport { .. }));
        assert!(error.to_string().contains("jp"));
    }

    #[rstest]
    #[case::finished(None, None)]
    #[case::blank_link(Some(String::new()), None)]
    #[case::keeps_existing_size(
        Some("https://sg.helpdesk.test/x.json?page=2&per_page=100".to_owned()),
        Some("https://sg.helpdesk.test/x.json?page=2&per_page=100".to_owned())
    )]
    #[case::reappends_dropped_size(
        Some("https://sg.helpdesk.test/x.json?page=2".to_owned()),
        Some("https://sg.helpdesk.test/x.json?page=2&per_page=100".to_owned())
    )]
    fn listing_walks_keep_their_page_size(
        #[case] next_page: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(next_listing_url(next_page), expected);
    }

    #[rstest]
    fn credentials_use_the_token_scheme() {
        let credential = basic_credential("mirror@example.test", "sekrit");

        let encoded = credential
            .strip_prefix("Basic ")
            .expect("credential should be basic");
        let decoded = STANDARD.decode(encoded).expect("valid base64");
        assert_eq!(decoded, b"mirror@example.test/token:sekrit");
    }

    #[rstest]
    fn category_pages_decode_records_and_the_next_link() {
        let body = r#"{
            "categories": [
                {
                    "id": 7,
                    "position": 2,
                    "created_at": "2018-03-12T08:30:00Z",
                    "updated_at": "2018-03-12T08:30:00Z",
                    "source_locale": "en-us",
                    "url": "https://sg.helpdesk.test/api/v2/help_center/en-us/categories/7.json",
                    "html_url": "https://sg.helpdesk.test/hc/en-us/categories/7",
                    "name": "Groceries",
                    "locale": "en-us"
                }
            ],
            "page": 1,
            "next_page": "https://sg.helpdesk.test/api/v2/help_center/en-us/categories.json?page=2"
        }"#;

        let page: CategoriesPageDto = serde_json::from_str(body).expect("page should decode");
        let (records, next_page) = page.into_parts();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
        assert_eq!(records[0].name, "Groceries");
        assert_eq!(records[0].description, "");
        assert!(next_page.is_some());
    }

    #[rstest]
    fn elided_article_timestamps_decode_as_the_epoch() {
        let body = r#"{
            "articles": [
                {
                    "section_id": 31,
                    "id": 11,
                    "title": "Where is my order",
                    "label_names": ["delivery"],
                    "created_at": "2018-03-12T08:30:00Z",
                    "updated_at": "2018-03-12T08:30:00Z",
                    "locale": "en-us"
                }
            ]
        }"#;

        let page: ArticlesPageDto = serde_json::from_str(body).expect("page should decode");
        let (records, next_page) = page.into_parts();

        assert_eq!(records[0].edited_at, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(
            records[0].created_at,
            Utc.with_ymd_and_hms(2018, 3, 12, 8, 30, 0).unwrap()
        );
        assert_eq!(records[0].label_names, vec!["delivery".to_owned()]);
        assert!(next_page.is_none());
    }

    #[rstest]
    fn ticket_fields_decode_their_wire_type_and_options() {
        let body = r#"{
            "ticket_fields": [
                {
                    "id": 5,
                    "type": "tagger",
                    "title": "Order Number",
                    "visible_in_portal": true,
                    "editable_in_portal": true,
                    "created_at": "2018-03-12T08:30:00Z",
                    "updated_at": "2018-03-12T08:30:00Z",
                    "custom_field_options": [
                        {"id": 1, "name": "Late delivery", "raw_name": "Late delivery", "value": "late_delivery"}
                    ]
                }
            ]
        }"#;

        let page: TicketFieldsPageDto = serde_json::from_str(body).expect("page should decode");
        let (records, _) = page.into_parts();

        assert_eq!(records[0].kind, "tagger");
        assert!(records[0].visible_in_portal);
        assert_eq!(records[0].custom_field_options.len(), 1);
        assert_eq!(records[0].custom_field_options[0].value, "late_delivery");
        assert!(records[0].system_field_options.is_empty());
    }

    #[rstest]
    fn dynamic_content_pages_decode_nested_variants() {
        let body = r#"{
            "items": [
                {
                    "id": 42,
                    "name": "form_order_number_field",
                    "placeholder": "{{dc.form_order_number_field}}",
                    "default_locale_id": 1,
                    "created_at": "2018-03-12T08:30:00Z",
                    "updated_at": "2018-03-12T08:30:00Z",
                    "variants": [
                        {
                            "id": 901,
                            "content": "Order Number",
                            "locale_id": 1,
                            "active": true,
                            "created_at": "2018-03-12T08:30:00Z",
                            "updated_at": "2018-03-12T08:30:00Z"
                        }
                    ]
                }
            ]
        }"#;

        let page: DynamicContentPageDto = serde_json::from_str(body).expect("page should decode");
        let (records, _) = page.into_parts();

        assert_eq!(records[0].placeholder, "{{dc.form_order_number_field}}");
        assert_eq!(records[0].variants.len(), 1);
        assert_eq!(records[0].variants[0].content, "Order Number");
        assert_eq!(records[0].variants[0].url, "");
    }

    #[rstest]
    fn ticket_forms_decode_their_field_ordering() {
        let body = r#"{
            "ticket_forms": [
                {
                    "id": 21,
                    "name": "Delivery enquiry",
                    "end_user_visible": true,
                    "ticket_field_ids": [5, 9, 3],
                    "created_at": "2018-03-12T08:30:00Z",
                    "updated_at": "2018-03-12T08:30:00Z"
                }
            ]
        }"#;

        let page: TicketFormsPageDto = serde_json::from_str(body).expect("page should decode");
        let (records, _) = page.into_parts();

        assert_eq!(records[0].ticket_field_ids, vec![5, 9, 3]);
        assert!(records[0].restricted_brand_ids.is_empty());
    }
}
