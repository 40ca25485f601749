//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits for various infrastructure concerns:
//!
//! - **persistence**: PostgreSQL-backed content mirror using Diesel ORM
//! - **cache**: Redis-backed refresh accounting and response caching
//! - **helpdesk**: HTTP client for the upstream helpdesk REST API
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod cache;
pub mod helpdesk;
pub mod persistence;
