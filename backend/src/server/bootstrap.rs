//! Adapter construction from loaded settings.
//!
//! This is the composition root: it builds the connection pools, stands the
//! outbound adapters up against them, and assembles the examiner and the
//! content service the HTTP layer shares.

use std::sync::Arc;

use crate::config::Settings;
use crate::domain::ContentService;
use crate::domain::refresh::{Examiner, ExaminerPorts};
use crate::inbound::http::state::{AdminCredentials, HttpState};
use crate::outbound::cache::{RedisPool, RedisRefreshGate, RedisResponseCache};
use crate::outbound::helpdesk::HelpdeskHttpSource;
use crate::outbound::persistence::{DbPool, DieselContentQueries, DieselMirrorSync};

use super::RESPONSE_CACHE_TTL;

/// Shared handles produced by [`build_service`].
pub struct ServiceHandles {
    /// Request state for the HTTP layer.
    pub state: HttpState,
    /// Examiner handle, kept for shutdown.
    pub examiner: Arc<Examiner>,
}

/// Build every adapter and assemble the domain service.
///
/// # Errors
///
/// Returns an I/O error naming the collaborator that could not be built.
pub async fn build_service(settings: &Settings) -> std::io::Result<ServiceHandles> {
    let db_pool = DbPool::new(settings.store.pool_config())
        .await
        .map_err(|error| std::io::Error::other(format!("mirror store pool: {error}")))?;
    let redis_pool = RedisPool::new(settings.cache.pool_config())
        .await
        .map_err(|error| std::io::Error::other(format!("cache pool: {error}")))?;

    let queries = Arc::new(DieselContentQueries::new(
        db_pool.clone(),
        settings.store.read_deadline(),
        settings.store.write_deadline(),
    ));
    let mirror = Arc::new(DieselMirrorSync::new(
        db_pool,
        settings.store.transaction_deadline(),
    ));
    let gate = Arc::new(RedisRefreshGate::new(
        redis_pool.clone(),
        settings.cache.read_deadline(),
    ));
    let response_cache = Arc::new(
        RedisResponseCache::new(redis_pool, RESPONSE_CACHE_TTL)
            .with_read_deadline(settings.cache.read_deadline())
            .with_write_deadline(settings.cache.write_deadline()),
    );
    let helpdesk_config = settings
        .upstream
        .helpdesk_config()
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let source = Arc::new(
        HelpdeskHttpSource::new(helpdesk_config)
            .map_err(|error| std::io::Error::other(format!("helpdesk client: {error}")))?,
    );

    let examiner = Arc::new(Examiner::new(
        ExaminerPorts::new(source, mirror, gate, response_cache.clone()),
        settings.examiner.examiner_config(),
    ));
    let content = ContentService::new(queries, response_cache, Arc::clone(&examiner));
    let admin = settings
        .http
        .force_sync_credentials()
        .map(|(user, password)| AdminCredentials::new(user, password));

    Ok(ServiceHandles {
        state: HttpState::new(content, Arc::clone(&examiner), admin),
        examiner,
    })
}
