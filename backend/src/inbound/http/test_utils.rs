//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ContentService;
use crate::domain::content::{Article, Category, Section, TicketForm};
use crate::domain::ports::{
    MockContentQueries, MockHelpdeskSource, MockMirrorSync, MockRefreshGate, MockResponseCache,
};
use crate::domain::refresh::{Examiner, ExaminerConfig, ExaminerPorts};

use super::state::{AdminCredentials, HttpState};

/// Examiner whose gate accepts any number of demand bumps and whose limits
/// are high enough that no refresh is ever scheduled.
pub fn passive_examiner() -> Arc<Examiner> {
    let mut gate = MockRefreshGate::new();
    gate.expect_bump().returning(|_| Ok(1));
    examiner_with_gate(gate)
}

/// Examiner whose partitions always appear locked, so force syncs return
/// before reaching the upstream source.
pub fn locked_examiner() -> Arc<Examiner> {
    let mut gate = MockRefreshGate::new();
    gate.expect_bump().returning(|_| Ok(1));
    gate.expect_try_lock().returning(|_| Ok(false));
    examiner_with_gate(gate)
}

fn examiner_with_gate(gate: MockRefreshGate) -> Arc<Examiner> {
    let config = ExaminerConfig {
        max_workers: 1,
        max_pool: 1,
        categories_refresh_limit: 1_000_000,
        sections_refresh_limit: 1_000_000,
        articles_refresh_limit: 1_000_000,
        ticket_forms_refresh_limit: 1_000_000,
    };
    Arc::new(Examiner::new(
        ExaminerPorts::new(
            Arc::new(MockHelpdeskSource::new()),
            Arc::new(MockMirrorSync::new()),
            Arc::new(gate),
            Arc::new(MockResponseCache::new()),
        ),
        config,
    ))
}

/// Response cache that always misses and accepts every write.
pub fn passthrough_cache() -> MockResponseCache {
    let mut cache = MockResponseCache::new();
    cache.expect_get().returning(|_, _| Ok(None));
    cache.expect_put().returning(|_, _, _| Ok(true));
    cache
}

/// Handler state over mocked store queries, with the response cache always
/// missing and no force-sync credentials configured.
pub fn state_with_queries(queries: MockContentQueries) -> HttpState {
    let content = ContentService::new(
        Arc::new(queries),
        Arc::new(passthrough_cache()),
        passive_examiner(),
    );
    HttpState::new(content, passive_examiner(), None)
}

/// Handler state for force-sync tests: the examiner reports every partition
/// as already locked, so a spawned sync walk completes without upstream I/O.
pub fn state_with_admin(admin: Option<AdminCredentials>) -> HttpState {
    let content = ContentService::new(
        Arc::new(MockContentQueries::new()),
        Arc::new(passthrough_cache()),
        passive_examiner(),
    );
    HttpState::new(content, locked_examiner(), admin)
}

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Category fixture with wire-plausible attributes.
pub fn sample_category(id: i64) -> Category {
    Category {
        id,
        position: 1,
        created_at: stamp(),
        updated_at: stamp(),
        source_locale: "en-us".to_owned(),
        outdated: false,
        country_code: "sg".to_owned(),
        url: format!("https://support.example.com/api/v2/help_center/categories/{id}.json"),
        html_url: format!("https://support.example.com/hc/en-us/categories/{id}"),
        name: format!("category {id}"),
        description: String::new(),
        locale: "en-us".to_owned(),
        key_name: "faq".to_owned(),
    }
}

/// Section fixture with wire-plausible attributes.
pub fn sample_section(id: i64) -> Section {
    Section {
        category_id: 7,
        id,
        position: 1,
        created_at: stamp(),
        updated_at: stamp(),
        source_locale: "en-us".to_owned(),
        outdated: false,
        country_code: "sg".to_owned(),
        url: format!("https://support.example.com/api/v2/help_center/sections/{id}.json"),
        html_url: format!("https://support.example.com/hc/en-us/sections/{id}"),
        name: format!("section {id}"),
        description: String::new(),
        locale: "en-us".to_owned(),
    }
}

/// Article fixture with wire-plausible attributes.
pub fn sample_article(id: i64) -> Article {
    Article {
        section_id: 31,
        id,
        author_id: 99,
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
        label_names: vec!["delivery".to_owned()],
        country_code: "sg".to_owned(),
        url: format!("https://support.example.com/api/v2/help_center/articles/{id}.json"),
        html_url: format!("https://support.example.com/hc/en-us/articles/{id}"),
        name: format!("article {id}"),
        title: format!("article {id}"),
        body: "<p>body</p>".to_owned(),
        locale: "en-us".to_owned(),
    }
}

/// Ticket-form fixture with no fields attached.
pub fn sample_ticket_form(id: i64) -> TicketForm {
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
