//! Demand-driven refresh of the content mirror.
//!
//! Every read path touches the [`Examiner`]. A touch bumps the partition's
//! demand counter; once the counter crosses the partition's configured
//! limit, the examiner takes the partition lock and hands a refresh job to
//! a bounded worker pool. The job pulls a fresh snapshot from the upstream
//! helpdesk, reconciles the mirror, invalidates cached responses and resets
//! the counter. Failures release the lock without resetting the counter so
//! the next touch past the limit retries promptly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::domain::content::{Country, Locale};
use crate::domain::error::Error;
use crate::domain::ports::{HelpdeskSource, MirrorSync, RefreshGate, RefreshKey, ResponseCache};

mod worker_pool;

pub use worker_pool::{SubmitOutcome, WorkerPool};

/// Sizing and trigger thresholds for the examiner.
///
/// A refresh limit of `0` refreshes the partition on every touch; a limit
/// of `n > 0` refreshes once the demand counter reaches `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExaminerConfig {
    /// Concurrent refresh job limit.
    pub max_workers: usize,
    /// Queued refresh job limit.
    pub max_pool: usize,
    /// Demand threshold for category partitions.
    pub categories_refresh_limit: i64,
    /// Demand threshold for section partitions.
    pub sections_refresh_limit: i64,
    /// Demand threshold for article partitions.
    pub articles_refresh_limit: i64,
    /// Demand threshold for the ticket-form singleton.
    pub ticket_forms_refresh_limit: i64,
}

impl Default for ExaminerConfig {
    fn default() -> Self {
        Self {
            max_workers: 100,
            max_pool: 200,
            categories_refresh_limit: 0,
            sections_refresh_limit: 0,
            articles_refresh_limit: 0,
            ticket_forms_refresh_limit: 0,
        }
    }
}

/// Port bundle required by the examiner.
#[derive(Clone)]
pub struct ExaminerPorts {
    /// Upstream helpdesk fetchers.
    pub source: Arc<dyn HelpdeskSource>,
    /// Mirror reconciliation adapter.
    pub mirror: Arc<dyn MirrorSync>,
    /// Demand counter and refresh lock adapter.
    pub gate: Arc<dyn RefreshGate>,
    /// Cached response invalidation adapter.
    pub cache: Arc<dyn ResponseCache>,
}

impl ExaminerPorts {
    /// Build a strongly-typed examiner port bundle.
    pub fn new(
        source: Arc<dyn HelpdeskSource>,
        mirror: Arc<dyn MirrorSync>,
        gate: Arc<dyn RefreshGate>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            source,
            mirror,
            gate,
            cache,
        }
    }
}

/// Result of a synchronous force refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The partition was fetched, reconciled and invalidated.
    Completed,
    /// Another refresher holds the partition lock.
    AlreadyInProgress,
}

/// Watches read demand per partition and refreshes the mirror when demand
/// crosses the configured threshold.
pub struct Examiner {
    ports: ExaminerPorts,
    pool: WorkerPool,
    config: ExaminerConfig,
    closed: AtomicBool,
}

impl Examiner {
    /// Build an examiner and spawn its refresh workers.
    pub fn new(ports: ExaminerPorts, config: ExaminerConfig) -> Self {
        let pool = WorkerPool::new(config.max_workers, config.max_pool);
        Self {
            ports,
            pool,
            config,
            closed: AtomicBool::new(false),
        }
    }

    /// Record one read against a partition, scheduling a refresh when its
    /// demand counter reaches the partition's limit.
    ///
    /// Never fails: counter and lock errors abandon the trigger and the read
    /// that prompted the touch has already been served. After
    /// [`Examiner::close`] this is a no-op.
    pub async fn touch(&self, key: RefreshKey) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }

        let count = match self.ports.gate.bump(&key).await {
            Ok(count) => count,
            Err(error) => {
                warn!(%key, %error, "demand counter bump failed, touch abandoned");
                return;
            }
        };
        if count < self.refresh_limit(&key) {
            return;
        }

        match self.ports.gate.try_lock(&key).await {
            Ok(true) => {}
            Ok(false) => return,
            Err(error) => {
                warn!(%key, %error, "refresh lock attempt failed, touch abandoned");
                return;
            }
        }

        let outcome = self
            .pool
            .submit(key.to_string(), Self::run_refresh(self.ports.clone(), key));
        if outcome != SubmitOutcome::Scheduled {
            debug!(%key, ?outcome, "refresh submission dropped, releasing lock");
            Self::unlock_quietly(self.ports.gate.as_ref(), &key).await;
        }
    }

    /// Synchronously refresh category content, bypassing the demand counter.
    pub async fn force_sync_categories(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<RefreshOutcome, Error> {
        self.force(RefreshKey::Categories { country, locale }).await
    }

    /// Synchronously refresh section content, bypassing the demand counter.
    pub async fn force_sync_sections(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<RefreshOutcome, Error> {
        self.force(RefreshKey::Sections { country, locale }).await
    }

    /// Synchronously refresh article content, bypassing the demand counter.
    pub async fn force_sync_articles(
        &self,
        country: Country,
        locale: Locale,
    ) -> Result<RefreshOutcome, Error> {
        self.force(RefreshKey::Articles { country, locale }).await
    }

    /// Synchronously refresh ticket forms, fields and dynamic content.
    pub async fn force_sync_ticket_forms(&self) -> Result<RefreshOutcome, Error> {
        self.force(RefreshKey::TicketForms).await
    }

    /// Stop scheduling refreshes and wait for queued and running jobs.
    ///
    /// Idempotent; later touches become no-ops.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.pool.close().await;
    }

    fn refresh_limit(&self, key: &RefreshKey) -> i64 {
        match key {
            RefreshKey::Categories { .. } => self.config.categories_refresh_limit,
            RefreshKey::Sections { .. } => self.config.sections_refresh_limit,
            RefreshKey::Articles { .. } => self.config.articles_refresh_limit,
            RefreshKey::TicketForms => self.config.ticket_forms_refresh_limit,
        }
    }

    async fn force(&self, key: RefreshKey) -> Result<RefreshOutcome, Error> {
        match self.ports.gate.try_lock(&key).await {
            Ok(true) => {}
            Ok(false) => return Ok(RefreshOutcome::AlreadyInProgress),
            Err(error) => return Err(Error::from(error)),
        }

        match Self::refresh_partition(&self.ports, key).await {
            Ok(()) => {
                info!(%key, "forced mirror refresh complete");
                Ok(RefreshOutcome::Completed)
            }
            Err(error) => {
                Self::unlock_quietly(self.ports.gate.as_ref(), &key).await;
                Err(error)
            }
        }
    }

    async fn run_refresh(ports: ExaminerPorts, key: RefreshKey) {
        match Self::refresh_partition(&ports, key).await {
            Ok(()) => info!(%key, "mirror refresh complete"),
            Err(error) => {
                warn!(%key, %error, "mirror refresh failed");
                Self::unlock_quietly(ports.gate.as_ref(), &key).await;
            }
        }
    }

    /// Fetch, reconcile and invalidate one partition, then reset its counter
    /// and release its lock.
    ///
    /// An error return leaves the counter un-reset; the caller is expected
    /// to release the lock.
    async fn refresh_partition(ports: &ExaminerPorts, key: RefreshKey) -> Result<(), Error> {
        match key {
            RefreshKey::Categories { country, locale } => {
                let upstream = ports.source.categories(country, locale).await?;
                ensure_not_empty(&upstream, key)?;
                ports.mirror.sync_categories(&upstream, country, locale).await?;
            }
            RefreshKey::Sections { country, locale } => {
                let upstream = ports.source.sections(country, locale).await?;
                ensure_not_empty(&upstream, key)?;
                ports.mirror.sync_sections(&upstream, country, locale).await?;
            }
            RefreshKey::Articles { country, locale } => {
                let upstream = ports.source.articles(country, locale).await?;
                ensure_not_empty(&upstream, key)?;
                ports.mirror.sync_articles(&upstream, country, locale).await?;
            }
            RefreshKey::TicketForms => {
                // The singleton partition chains forms, fields and dynamic
                // content, invalidating after each stage so a later failure
                // leaves no synced stage serving stale responses.
                let forms = ports.source.ticket_forms().await?;
                ensure_not_empty(&forms, key)?;
                ports.mirror.sync_ticket_forms(&forms).await?;
                Self::invalidate_quietly(ports, &key).await;

                let fields = ports.source.ticket_fields().await?;
                ensure_not_empty(&fields, key)?;
                ports.mirror.sync_ticket_fields(&fields).await?;
                Self::invalidate_quietly(ports, &key).await;

                let items = ports.source.dynamic_content().await?;
                ensure_not_empty(&items, key)?;
                ports.mirror.sync_dynamic_content(&items).await?;
            }
        }

        Self::invalidate_quietly(ports, &key).await;
        if let Err(error) = ports.gate.reset(&key).await {
            warn!(%key, %error, "demand counter reset failed");
        }
        if let Err(error) = ports.gate.unlock(&key).await {
            warn!(%key, %error, "refresh lock release failed");
        }
        Ok(())
    }

    async fn invalidate_quietly(ports: &ExaminerPorts, key: &RefreshKey) {
        // Stale reads for up to one cache expiry are tolerable, so an
        // invalidation failure does not fail the refresh.
        if let Err(error) = ports.cache.invalidate(key).await {
            warn!(%key, %error, "cached response invalidation failed");
        }
    }

    async fn unlock_quietly(gate: &dyn RefreshGate, key: &RefreshKey) {
        if let Err(error) = gate.unlock(key).await {
            warn!(%key, %error, "refresh lock release failed");
        }
    }
}

fn ensure_not_empty<T>(upstream: &[T], key: RefreshKey) -> Result<(), Error> {
    if upstream.is_empty() {
        return Err(Error::upstream_failure(format!(
            "upstream returned no {key} records, keeping the existing mirror"
        )));
    }
    Ok(())
}
