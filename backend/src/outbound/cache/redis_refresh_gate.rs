//! Redis-backed demand counters and refresh locks.
//!
//! Each refresh partition owns an `INCR` counter and an advisory lock. The
//! lock is taken with `SET NX EX` so a refresher that dies mid-run cannot
//! wedge its partition; the key simply expires and the next reader's
//! `try_lock` wins. Every command runs under a deadline, keeping the touch
//! path bounded even when the cache engine stalls.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::redis;
use bb8_redis::redis::AsyncCommands;

use crate::domain::ports::{RefreshGate, RefreshGateError, RefreshKey};

use super::redis_pool::{RedisPool, RedisPoolError};

/// Seconds before an unreleased refresh lock expires on its own.
const LOCK_EXPIRY_SECS: i64 = 60;

/// Refresh gate adapter backed by Redis.
#[derive(Clone)]
pub struct RedisRefreshGate {
    pool: RedisPool,
    command_deadline: Duration,
}

impl RedisRefreshGate {
    /// Create a new gate over the given pool with a per-command deadline.
    pub fn new(pool: RedisPool, command_deadline: Duration) -> Self {
        Self {
            pool,
            command_deadline,
        }
    }

    async fn with_deadline<T>(
        &self,
        command: impl Future<Output = Result<T, RefreshGateError>>,
    ) -> Result<T, RefreshGateError> {
        run_bounded(self.command_deadline, command).await
    }

    async fn bump_counter(&self, key: &RefreshKey) -> Result<i64, RefreshGateError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.incr(key.counter_key(), 1)
            .await
            .map_err(map_redis_error)
    }

    async fn reset_counter(&self, key: &RefreshKey) -> Result<(), RefreshGateError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Written as zero, not deleted, so the counter key stays observable
        // between refreshes.
        conn.set::<_, _, ()>(key.counter_key(), 0)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn acquire_lock(&self, key: &RefreshKey) -> Result<bool, RefreshGateError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let outcome: Option<String> = redis::cmd("SET")
            .arg(key.lock_key())
            .arg(true)
            .arg("EX")
            .arg(LOCK_EXPIRY_SECS)
            .arg("NX")
            .query_async(&mut *conn)
            .await
            .map_err(map_redis_error)?;
        Ok(outcome.is_some())
    }

    async fn release_lock(&self, key: &RefreshKey) -> Result<(), RefreshGateError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.del::<_, ()>(key.lock_key())
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}

#[async_trait]
impl RefreshGate for RedisRefreshGate {
    async fn bump(&self, key: &RefreshKey) -> Result<i64, RefreshGateError> {
        self.with_deadline(self.bump_counter(key)).await
    }

    async fn reset(&self, key: &RefreshKey) -> Result<(), RefreshGateError> {
        self.with_deadline(self.reset_counter(key)).await
    }

    async fn try_lock(&self, key: &RefreshKey) -> Result<bool, RefreshGateError> {
        self.with_deadline(self.acquire_lock(key)).await
    }

    async fn unlock(&self, key: &RefreshKey) -> Result<(), RefreshGateError> {
        self.with_deadline(self.release_lock(key)).await
    }
}

async fn run_bounded<T>(
    deadline: Duration,
    command: impl Future<Output = Result<T, RefreshGateError>>,
) -> Result<T, RefreshGateError> {
    tokio::time::timeout(deadline, command)
        .await
        .map_err(|_| RefreshGateError::backend("cache command deadline exceeded"))?
}

fn map_pool_error(error: RedisPoolError) -> RefreshGateError {
    RefreshGateError::backend(error.to_string())
}

fn map_redis_error(error: redis::RedisError) -> RefreshGateError {
    RefreshGateError::backend(error.to_string())
}
