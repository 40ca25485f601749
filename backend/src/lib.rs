//! Help-centre mirror service library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, ports, and
//! the refresh orchestration; `inbound` adapts HTTP requests onto the domain;
//! `outbound` implements the ports against PostgreSQL, Redis, and the remote
//! help-centre API; `server` wires everything into an Actix application.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::Trace;
