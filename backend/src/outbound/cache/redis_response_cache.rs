//! Redis-backed cache of serialised read responses.
//!
//! Entries live under `dl:<partition>:<sha256(fingerprint)>`. Hashing the
//! fingerprint keeps arbitrary query arguments from injecting key
//! separators and bounds key length, while the plain-text partition prefix
//! lets a refresh sweep its whole namespace with one `SCAN`/`DEL` pass.
//!
//! Writes use `SET NX` so a response cached while a refresh was sweeping
//! cannot overwrite a fresher entry, and hits re-arm the entry's expiry so
//! hot partitions stay cached between refreshes. Reads and writes each run
//! under their own deadline so a stalled cache engine degrades the read
//! path instead of hanging it.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::redis;
use bb8_redis::redis::AsyncCommands;
use sha2::{Digest, Sha256};

use crate::domain::ports::{RefreshKey, ResponseCache, ResponseCacheError};

use super::redis_pool::{RedisPool, RedisPoolError};

/// Response cache adapter backed by Redis.
#[derive(Clone)]
pub struct RedisResponseCache {
    pool: RedisPool,
    ttl_seconds: i64,
    read_deadline: Duration,
    write_deadline: Duration,
}

impl RedisResponseCache {
    /// Create a new cache over the given pool with the given entry lifetime.
    pub fn new(pool: RedisPool, ttl: Duration) -> Self {
        Self {
            pool,
            ttl_seconds: ttl.as_secs() as i64,
            read_deadline: Duration::from_secs(10),
            write_deadline: Duration::from_secs(15),
        }
    }

    /// Override the deadline for read commands.
    pub fn with_read_deadline(mut self, deadline: Duration) -> Self {
        self.read_deadline = deadline;
        self
    }

    /// Override the deadline for write and invalidation commands.
    pub fn with_write_deadline(mut self, deadline: Duration) -> Self {
        self.write_deadline = deadline;
        self
    }

    async fn fetch_entry(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
    ) -> Result<Option<String>, ResponseCacheError> {
        let entry = entry_key(key, fingerprint);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let body: Option<String> = conn.get(&entry).await.map_err(map_redis_error)?;
        if body.is_some() {
            conn.expire::<_, bool>(&entry, self.ttl_seconds)
                .await
                .map_err(map_redis_error)?;
        }
        Ok(body)
    }

    async fn store_entry(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
        body: &str,
    ) -> Result<bool, ResponseCacheError> {
        let entry = entry_key(key, fingerprint);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome: Option<String> = redis::cmd("SET")
            .arg(&entry)
            .arg(body)
            .arg("EX")
            .arg(self.ttl_seconds)
            .arg("NX")
            .query_async(&mut *conn)
            .await
            .map_err(map_redis_error)?;
        Ok(outcome.is_some())
    }

    async fn sweep_partition(&self, key: &RefreshKey) -> Result<(), ResponseCacheError> {
        let pattern = sweep_pattern(key);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Cursor-driven SCAN rather than KEYS: the sweep shares the engine
        // with live read traffic.
        let mut stale: Vec<String> = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .query_async(&mut *conn)
                .await
                .map_err(map_redis_error)?;
            stale.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        if !stale.is_empty() {
            conn.del::<_, ()>(stale).await.map_err(map_redis_error)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ResponseCache for RedisResponseCache {
    async fn get(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
    ) -> Result<Option<String>, ResponseCacheError> {
        run_bounded(self.read_deadline, self.fetch_entry(key, fingerprint)).await
    }

    async fn put(
        &self,
        key: &RefreshKey,
        fingerprint: &str,
        body: &str,
    ) -> Result<bool, ResponseCacheError> {
        run_bounded(
            self.write_deadline,
            self.store_entry(key, fingerprint, body),
        )
        .await
    }

    async fn invalidate(&self, key: &RefreshKey) -> Result<(), ResponseCacheError> {
        run_bounded(self.write_deadline, self.sweep_partition(key)).await
    }
}

async fn run_bounded<T>(
    deadline: Duration,
    command: impl Future<Output = Result<T, ResponseCacheError>>,
) -> Result<T, ResponseCacheError> {
    tokio::time::timeout(deadline, command)
        .await
        .map_err(|_| ResponseCacheError::backend("cache command deadline exceeded"))?
}

fn entry_key(key: &RefreshKey, fingerprint: &str) -> String {
    let digest = Sha256::digest(fingerprint.as_bytes());
    format!("{}:{}", key.cache_prefix(), hex::encode(digest))
}

fn sweep_pattern(key: &RefreshKey) -> String {
    format!("{}:*", key.cache_prefix())
}

fn map_pool_error(error: RedisPoolError) -> ResponseCacheError {
    ResponseCacheError::backend(error.to_string())
}

fn map_redis_error(error: redis::RedisError) -> ResponseCacheError {
    ResponseCacheError::backend(error.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::domain::content::{Country, Locale};

    use super::*;

    fn partition() -> RefreshKey {
        RefreshKey::Categories {
            country: Country::Sg,
            locale: Locale::EnUs,
        }
    }

    #[rstest]
    fn entry_keys_stay_inside_the_partition_namespace() {
        let key = partition();
        let entry = entry_key(&key, "page=1:per_page=30");

        assert!(entry.starts_with("dl:categories:sg:en-us:"));
        assert!(sweep_pattern(&key).ends_with(":*"));
        assert!(entry.starts_with(sweep_pattern(&key).trim_end_matches('*')));
    }

    #[rstest]
    fn fingerprints_hash_to_fixed_width_suffixes() {
        let key = partition();
        let entry = entry_key(&key, "page=1:per_page=30");

        let suffix = entry.rsplit(':').next().unwrap();
        assert_eq!(suffix.len(), 64);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[rstest]
    fn distinct_fingerprints_never_collide_on_one_key() {
        let key = partition();

        let first = entry_key(&key, "page=1:per_page=30");
        let second = entry_key(&key, "page=2:per_page=30");
        assert_ne!(first, second);
        assert_eq!(first, entry_key(&key, "page=1:per_page=30"));
    }

    #[rstest]
    fn backend_failures_carry_their_messages() {
        let error = map_pool_error(RedisPoolError::checkout("pool timed out"));
        assert!(matches!(error, ResponseCacheError::Backend { .. }));
        assert!(error.to_string().contains("pool timed out"));
    }

    #[rstest]
    #[tokio::test]
    async fn stalled_commands_hit_the_deadline() {
        let error = run_bounded(
            Duration::from_millis(5),
            std::future::pending::<Result<(), ResponseCacheError>>(),
        )
        .await
        .expect_err("deadline should fire");

        assert!(error.to_string().contains("deadline exceeded"));
    }
}
