//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service layer and remain testable without I/O.

use std::sync::Arc;

use crate::domain::{ContentService, Examiner};

/// Credentials the force-sync endpoint authenticates against.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub user: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Cached read facade over the content mirror.
    pub content: ContentService,
    /// Refresh orchestrator, used directly by the force-sync endpoint.
    pub examiner: Arc<Examiner>,
    /// Force-sync credentials; `None` keeps the endpoint locked.
    pub admin: Option<AdminCredentials>,
}

impl HttpState {
    /// Assemble handler state from the domain services.
    pub fn new(
        content: ContentService,
        examiner: Arc<Examiner>,
        admin: Option<AdminCredentials>,
    ) -> Self {
        Self {
            content,
            examiner,
            admin,
        }
    }
}
