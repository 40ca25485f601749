//! Async connection pool for the Redis cache backend.
//!
//! Wraps `bb8-redis` behind the same small config shape as the mirror-store
//! pool, so the gate and response-cache adapters check out connections
//! without caring about pool mechanics. Failures map onto
//! [`RedisPoolError`] variants instead of leaking bb8 types upward.

use std::time::Duration;

use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection};

/// Errors that can occur during cache pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedisPoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from cache pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build cache pool: {message}")]
    Build { message: String },
}

impl RedisPoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the Redis connection pool.
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    redis_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
    idle_timeout: Option<Duration>,
}

impl RedisPoolConfig {
    /// Create a new configuration with the given Redis URL.
    pub fn new(redis_url: impl Into<String>) -> Self {
        Self {
            redis_url: redis_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(5),
            idle_timeout: None,
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Close connections that stay idle for longer than the given window.
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }
}

/// Shared handle to the Redis pool.
///
/// Cloning is cheap; the gate and the response cache each hold their own
/// handle to the same underlying pool.
#[derive(Clone)]
pub struct RedisPool {
    inner: Pool<RedisConnectionManager>,
}

impl RedisPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RedisPoolError::Build`] when the pool cannot be
    /// constructed, for example because the Redis URL does not parse.
    pub async fn new(config: RedisPoolConfig) -> Result<Self, RedisPoolError> {
        let manager = RedisConnectionManager::new(config.redis_url.as_str())
            .map_err(|err| RedisPoolError::build(err.to_string()))?;

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .idle_timeout(config.idle_timeout)
            .build(manager)
            .await
            .map_err(|err| RedisPoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`RedisPoolError::Checkout`] when no connection becomes
    /// available within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, RedisConnectionManager>, RedisPoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| RedisPoolError::checkout(err.to_string()))
    }
}
