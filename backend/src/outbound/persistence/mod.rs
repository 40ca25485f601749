//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module implements the content store ports against the relational
//! mirror via the Diesel ORM with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: [`DieselContentQueries`] and [`DieselMirrorSync`]
//!   only translate between Diesel rows and domain types. Refresh policy
//!   and caching live in the service layer.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Async-safe pooling**: Connections are managed via `bb8` pools with
//!   proper async integration through `diesel-async`.
//! - **Strongly typed errors**: All database errors are mapped to the port
//!   error types.
//!
//! # Example
//!
//! ```ignore
//! use zephyr_backend::outbound::persistence::{DbPool, DieselContentQueries, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/zephyr");
//! let pool = DbPool::new(config).await?;
//! let queries =
//!     DieselContentQueries::new(pool, Duration::from_secs(10), Duration::from_secs(15));
//! ```

mod diesel_content_queries;
mod diesel_mirror_sync;
mod models;
mod pool;
mod schema;

pub use diesel_content_queries::DieselContentQueries;
pub use diesel_mirror_sync::DieselMirrorSync;
pub use pool::{DbPool, PoolConfig, PoolError};
