//! End-to-end routing coverage for the read API.
//!
//! The full route table is assembled the way the server wires it, over an
//! in-memory content store and a demand gate that records touches, so these
//! tests cover the handler-to-service-to-port path without external engines.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use zephyr_backend::Trace;
use zephyr_backend::domain::ContentService;
use zephyr_backend::domain::content::{
    Article, Category, Country, DynamicContentItem, ListingQuery, Locale, Section, TicketField,
    TicketForm, UpstreamArticle, UpstreamCategory, UpstreamDynamicContent, UpstreamSection,
    UpstreamTicketField, UpstreamTicketForm,
};
use zephyr_backend::domain::ports::{
    ContentQueries, ContentQueryError, HelpdeskSource, HelpdeskSourceError, MirrorSync,
    MirrorSyncError, RefreshGate, RefreshGateError, RefreshKey, ResponseCache, ResponseCacheError,
};
use zephyr_backend::domain::refresh::{Examiner, ExaminerConfig, ExaminerPorts};
use zephyr_backend::inbound::http::state::{AdminCredentials, HttpState};
use zephyr_backend::inbound::http::{
    articles, categories, force_sync, sections, status, ticket_forms,
};

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
}

fn category(id: i64, key_name: &str) -> Category {
    Category {
        id,
        position: 1,
        created_at: stamp(),
        updated_at: stamp(),
        source_locale: "en-us".to_owned(),
        outdated: false,
        country_code: "sg".to_owned(),
        url: format!("https://support.example.com/api/v2/help_center/en-us/categories/{id}.json"),
        html_url: format!("https://support.example.com/hc/en-us/categories/{id}"),
        name: "Groceries".to_owned(),
        description: String::new(),
        locale: "en-us".to_owned(),
        key_name: key_name.to_owned(),
    }
}

fn section(id: i64, category_id: i64) -> Section {
    Section {
        category_id,
        id,
        position: 2,
        created_at: stamp(),
        updated_at: stamp(),
        source_locale: "en-us".to_owned(),
        outdated: false,
        country_code: "sg".to_owned(),
        url: format!("https://support.example.com/api/v2/help_center/en-us/sections/{id}.json"),
        html_url: format!("https://support.example.com/hc/en-us/sections/{id}"),
        name: "Delivery".to_owned(),
        description: String::new(),
        locale: "en-us".to_owned(),
    }
}

fn article(id: i64, section_id: i64, labels: &[&str]) -> Article {
    Article {
        section_id,
        id,
        author_id: 24_400_386_667,
        comments_disable: false,
        draft: false,
        promoted: false,
        position: 1,
        vote_sum: 0,
        vote_count: 0,
        created_at: stamp(),
        updated_at: stamp(),
        source_locale: "en-us".to_owned(),
        outdated: false,
        outdated_locales: Vec::new(),
        edited_at: stamp(),
        label_names: labels.iter().map(|label| (*label).to_owned()).collect(),
        country_code: "sg".to_owned(),
        url: format!("https://support.example.com/api/v2/help_center/en-us/articles/{id}.json"),
        html_url: format!("https://support.example.com/hc/en-us/articles/{id}"),
        name: "Where is my order?".to_owned(),
        title: "Where is my order?".to_owned(),
        body: "<p>Check the tracking page.</p>".to_owned(),
        locale: "en-us".to_owned(),
    }
}

fn ticket_form(id: i64) -> TicketForm {
    TicketForm {
        id,
        url: format!("https://support.example.com/api/v2/ticket_forms/{id}.json"),
        name: "contact us".to_owned(),
        raw_name: "contact us".to_owned(),
        display_name: "Contact us".to_owned(),
        raw_display_name: "Contact us".to_owned(),
        end_user_visible: true,
        position: 1,
        active: true,
        in_all_brands: true,
        restricted_brand_ids: Vec::new(),
        ticket_fields: Vec::new(),
        created_at: stamp(),
        updated_at: stamp(),
    }
}

/// In-memory content store seeded with one category tree.
struct SeededQueries {
    clicks: AtomicUsize,
}

impl SeededQueries {
    fn new() -> Self {
        Self {
            clicks: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ContentQueries for SeededQueries {
    async fn categories(
        &self,
        _query: &ListingQuery,
    ) -> Result<(Vec<Category>, i64), ContentQueryError> {
        Ok((vec![category(41, "groceries")], 1))
    }

    async fn category_id_for_key_name(
        &self,
        key_name: &str,
        _country: Country,
    ) -> Result<i64, ContentQueryError> {
        if key_name.eq_ignore_ascii_case("groceries") {
            Ok(41)
        } else {
            Err(ContentQueryError::not_found("category key name"))
        }
    }

    async fn sections_by_category(
        &self,
        category_id: i64,
        _query: &ListingQuery,
    ) -> Result<(Vec<Section>, i64), ContentQueryError> {
        if category_id == 41 {
            Ok((vec![section(31, 41)], 1))
        } else {
            Ok((Vec::new(), 0))
        }
    }

    async fn section(
        &self,
        id: i64,
        _country: Country,
        _locale: Locale,
    ) -> Result<Section, ContentQueryError> {
        if id == 31 {
            Ok(section(31, 41))
        } else {
            Err(ContentQueryError::not_found(format!("section {id}")))
        }
    }

    async fn articles(
        &self,
        _query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        Ok((
            vec![article(9, 31, &["delivery"]), article(10, 31, &["billing"])],
            2,
        ))
    }

    async fn articles_by_category(
        &self,
        labels: &[String],
        _query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        let rows = [article(9, 31, &["delivery"]), article(10, 31, &["billing"])];
        let matching: Vec<Article> = rows
            .into_iter()
            .filter(|row| {
                labels.is_empty() || row.label_names.iter().any(|label| labels.contains(label))
            })
            .collect();
        let count = matching.len() as i64;
        Ok((matching, count))
    }

    async fn articles_by_section(
        &self,
        section_id: i64,
        _query: &ListingQuery,
    ) -> Result<(Vec<Article>, i64), ContentQueryError> {
        if section_id == 31 {
            Ok((vec![article(9, 31, &["delivery"])], 1))
        } else {
            Ok((Vec::new(), 0))
        }
    }

    async fn article(
        &self,
        id: i64,
        _country: Country,
        _locale: Locale,
    ) -> Result<Article, ContentQueryError> {
        if id == 9 {
            Ok(article(9, 31, &["delivery"]))
        } else {
            Err(ContentQueryError::not_found(format!("article {id}")))
        }
    }

    async fn top_articles(
        &self,
        limit: i64,
        _country: Country,
        _locale: Locale,
    ) -> Result<Vec<Article>, ContentQueryError> {
        let rows = vec![article(9, 31, &["delivery"]), article(10, 31, &["billing"])];
        Ok(rows.into_iter().take(limit.max(0) as usize).collect())
    }

    async fn bump_article_click(
        &self,
        _id: i64,
        _country: Country,
    ) -> Result<(), ContentQueryError> {
        self.clicks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn ticket_form(
        &self,
        form_id: i64,
        _locale: Locale,
    ) -> Result<TicketForm, ContentQueryError> {
        if form_id == 13 {
            Ok(ticket_form(13))
        } else {
            Err(ContentQueryError::not_found(format!("ticket form {form_id}")))
        }
    }

    async fn ticket_field(
        &self,
        field_id: i64,
        _locale: Locale,
    ) -> Result<TicketField, ContentQueryError> {
        Err(ContentQueryError::not_found(format!("ticket field {field_id}")))
    }

    async fn dynamic_content_item(
        &self,
        placeholder: &str,
    ) -> Result<DynamicContentItem, ContentQueryError> {
        Err(ContentQueryError::not_found(format!(
            "dynamic content {placeholder}"
        )))
    }
}

/// Cache double that always misses and accepts writes.
struct NullCache;

#[async_trait]
impl ResponseCache for NullCache {
    async fn get(
        &self,
        _key: &RefreshKey,
        _fingerprint: &str,
    ) -> Result<Option<String>, ResponseCacheError> {
        Ok(None)
    }

    async fn put(
        &self,
        _key: &RefreshKey,
        _fingerprint: &str,
        _body: &str,
    ) -> Result<bool, ResponseCacheError> {
        Ok(true)
    }

    async fn invalidate(&self, _key: &RefreshKey) -> Result<(), ResponseCacheError> {
        Ok(())
    }
}

/// Gate double that records demand bumps and never grants the refresh lock.
struct CountingGate {
    bumps: AtomicUsize,
}

impl CountingGate {
    fn new() -> Self {
        Self {
            bumps: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RefreshGate for CountingGate {
    async fn bump(&self, _key: &RefreshKey) -> Result<i64, RefreshGateError> {
        self.bumps.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    }

    async fn reset(&self, _key: &RefreshKey) -> Result<(), RefreshGateError> {
        Ok(())
    }

    async fn try_lock(&self, _key: &RefreshKey) -> Result<bool, RefreshGateError> {
        Ok(false)
    }

    async fn unlock(&self, _key: &RefreshKey) -> Result<(), RefreshGateError> {
        Ok(())
    }
}

/// Upstream double for flows that must never fetch.
struct UnreachableSource;

#[async_trait]
impl HelpdeskSource for UnreachableSource {
    async fn categories(
        &self,
        _country: Country,
        _locale: Locale,
    ) -> Result<Vec<UpstreamCategory>, HelpdeskSourceError> {
        Err(HelpdeskSourceError::transport("not wired in this test"))
    }

    async fn sections(
        &self,
        _country: Country,
        _locale: Locale,
    ) -> Result<Vec<UpstreamSection>, HelpdeskSourceError> {
        Err(HelpdeskSourceError::transport("not wired in this test"))
    }

    async fn articles(
        &self,
        _country: Country,
        _locale: Locale,
    ) -> Result<Vec<UpstreamArticle>, HelpdeskSourceError> {
        Err(HelpdeskSourceError::transport("not wired in this test"))
    }

    async fn ticket_forms(&self) -> Result<Vec<UpstreamTicketForm>, HelpdeskSourceError> {
        Err(HelpdeskSourceError::transport("not wired in this test"))
    }

    async fn ticket_fields(&self) -> Result<Vec<UpstreamTicketField>, HelpdeskSourceError> {
        Err(HelpdeskSourceError::transport("not wired in this test"))
    }

    async fn dynamic_content(&self) -> Result<Vec<UpstreamDynamicContent>, HelpdeskSourceError> {
        Err(HelpdeskSourceError::transport("not wired in this test"))
    }
}

/// Mirror double for flows that must never reconcile.
struct IdleMirror;

#[async_trait]
impl MirrorSync for IdleMirror {
    async fn sync_categories(
        &self,
        _upstream: &[UpstreamCategory],
        _country: Country,
        _locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        Err(MirrorSyncError::transaction("not wired in this test"))
    }

    async fn sync_sections(
        &self,
        _upstream: &[UpstreamSection],
        _country: Country,
        _locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        Err(MirrorSyncError::transaction("not wired in this test"))
    }

    async fn sync_articles(
        &self,
        _upstream: &[UpstreamArticle],
        _country: Country,
        _locale: Locale,
    ) -> Result<(), MirrorSyncError> {
        Err(MirrorSyncError::transaction("not wired in this test"))
    }

    async fn sync_ticket_forms(
        &self,
        _upstream: &[UpstreamTicketForm],
    ) -> Result<(), MirrorSyncError> {
        Err(MirrorSyncError::transaction("not wired in this test"))
    }

    async fn sync_ticket_fields(
        &self,
        _upstream: &[UpstreamTicketField],
    ) -> Result<(), MirrorSyncError> {
        Err(MirrorSyncError::transaction("not wired in this test"))
    }

    async fn sync_dynamic_content(
        &self,
        _upstream: &[UpstreamDynamicContent],
    ) -> Result<(), MirrorSyncError> {
        Err(MirrorSyncError::transaction("not wired in this test"))
    }
}

struct Harness {
    state: HttpState,
    queries: Arc<SeededQueries>,
    gate: Arc<CountingGate>,
}

fn harness(admin: Option<AdminCredentials>) -> Harness {
    let queries = Arc::new(SeededQueries::new());
    let gate = Arc::new(CountingGate::new());
    // High limits keep the read tests from scheduling background refreshes.
    let config = ExaminerConfig {
        max_workers: 2,
        max_pool: 4,
        categories_refresh_limit: 1_000_000,
        sections_refresh_limit: 1_000_000,
        articles_refresh_limit: 1_000_000,
        ticket_forms_refresh_limit: 1_000_000,
    };
    let examiner = Arc::new(Examiner::new(
        ExaminerPorts::new(
            Arc::new(UnreachableSource),
            Arc::new(IdleMirror),
            gate.clone(),
            Arc::new(NullCache),
        ),
        config,
    ));
    let content = ContentService::new(queries.clone(), Arc::new(NullCache), examiner.clone());
    Harness {
        state: HttpState::new(content, examiner, admin),
        queries,
        gate,
    }
}

fn full_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(categories::get_categories)
        .service(categories::get_category_sections)
        .service(categories::get_category_articles)
        .service(categories::get_category_id_for_key_name)
        .service(sections::get_section)
        .service(sections::get_section_articles)
        .service(articles::get_article)
        .service(articles::get_top_articles)
        .service(ticket_forms::get_ticket_form)
        .service(status::get_status)
        .service(force_sync::force_sync);

    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api)
}

async fn get_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> (StatusCode, Value) {
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let body = actix_test::read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn every_read_route_is_reachable() {
    let app = actix_test::init_service(full_app(harness(None).state)).await;

    for uri in [
        "/api/categories",
        "/api/categories/41/sections",
        "/api/categories/41/articles",
        "/api/category/groceries",
        "/api/sections/31",
        "/api/sections/31/articles",
        "/api/articles/9",
        "/api/toparticles/2",
        "/api/ticket_forms/13",
        "/api/status",
    ] {
        let (status, _) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri} should serve");
    }
}

#[actix_web::test]
async fn listings_carry_the_flat_paging_envelope() {
    let app = actix_test::init_service(full_app(harness(None).state)).await;

    let (status, body) = get_json(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"][0]["key_name"], "groceries");
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 30);
    assert_eq!(body["page_count"], 1);
    assert_eq!(body["count"], 1);
}

#[actix_web::test]
async fn label_filters_narrow_category_articles() {
    let app = actix_test::init_service(full_app(harness(None).state)).await;

    let (_, unfiltered) = get_json(&app, "/api/categories/41/articles").await;
    let (_, filtered) = get_json(&app, "/api/categories/41/articles?label_names=billing").await;

    assert_eq!(unfiltered["count"], 2);
    assert_eq!(filtered["count"], 1);
    assert_eq!(filtered["articles"][0]["id"], 10);
}

#[actix_web::test]
async fn article_reads_count_clicks_and_record_demand() {
    let fixture = harness(None);
    let app = actix_test::init_service(full_app(fixture.state)).await;

    let (status, body) = get_json(&app, "/api/articles/9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["id"], 9);
    assert_eq!(fixture.queries.clicks.load(Ordering::SeqCst), 1);
    assert_eq!(fixture.gate.bumps.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn missing_rows_use_the_error_envelope() {
    let app = actix_test::init_service(full_app(harness(None).state)).await;

    let (status, body) = get_json(&app, "/api/category/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1003);
    assert_eq!(body["error"], "Record Not Found");
}

#[actix_web::test]
async fn invalid_vocabulary_is_rejected_with_details() {
    let app = actix_test::init_service(full_app(harness(None).state)).await;

    let (status, body) = get_json(&app, "/api/sections/31?country_code=uk").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1002);
    assert_eq!(body["error"], "You passed an invalid value for the attributes.");
    assert_eq!(body["details"]["field"], "country_code");
}

#[actix_web::test]
async fn force_sync_authenticates_before_spawning() {
    let admin = AdminCredentials::new("ops", "sesame");
    let app = actix_test::init_service(full_app(harness(Some(admin)).state)).await;

    let denied = actix_test::TestRequest::post()
        .uri("/api/forcesync")
        .insert_header((
            "Authorization",
            format!("Basic {}", STANDARD.encode("ops:guessed")),
        ))
        .to_request();
    let denied = actix_test::call_service(&app, denied).await;
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

    let granted = actix_test::TestRequest::post()
        .uri("/api/forcesync")
        .insert_header((
            "Authorization",
            format!("Basic {}", STANDARD.encode("ops:sesame")),
        ))
        .to_request();
    let granted = actix_test::call_service(&app, granted).await;
    assert_eq!(granted.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(granted).await;
    assert_eq!(body, serde_json::json!("success trigger force sync job"));
}

#[actix_web::test]
async fn unknown_paths_fall_through_to_plain_not_found() {
    let app = actix_test::init_service(full_app(harness(None).state)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/publishers")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = actix_test::read_body(response).await;
    assert!(body.is_empty(), "router misses carry no error envelope");
}
