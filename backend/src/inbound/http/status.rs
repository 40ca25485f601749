//! Service status endpoint.
//!
//! ```text
//! GET /api/status
//! ```

use actix_web::{HttpResponse, get};
use chrono::Utc;
use serde::Serialize;

use crate::domain::ApiResult;

/// Build and liveness details for monitoring probes.
#[derive(Debug, Serialize)]
struct StatusResponse {
    service: &'static str,
    #[serde(rename = "app-version")]
    app_version: &'static str,
    #[serde(rename = "server-time")]
    server_time: String,
}

/// Report the running service name, version, and clock.
#[get("/status")]
pub async fn get_status() -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(StatusResponse {
        service: env!("CARGO_PKG_NAME"),
        app_version: env!("CARGO_PKG_VERSION"),
        server_time: Utc::now().to_rfc3339(),
    }))
}
