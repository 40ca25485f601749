//! Redis-backed cache adapters.
//!
//! Implements the refresh gate and the response cache over a shared
//! `bb8-redis` pool. The two adapters cover the demand-driven refresh
//! machinery end to end:
//!
//! - [`RedisRefreshGate`]: per-partition `INCR` demand counters plus
//!   short-expiry `SET NX` advisory locks, so at most one refresher runs
//!   per partition and a crashed one cannot wedge it.
//! - [`RedisResponseCache`]: serialised responses under namespaced keys
//!   (`dl:<partition>:<sha256>`), written with `SET NX`, re-armed on hit
//!   and swept per partition when a refresh lands.

mod redis_pool;
mod redis_refresh_gate;
mod redis_response_cache;

pub use redis_pool::{RedisPool, RedisPoolConfig, RedisPoolError};
pub use redis_refresh_gate::RedisRefreshGate;
pub use redis_response_cache::RedisResponseCache;
