//! Operator-triggered full mirror refresh.
//!
//! ```text
//! POST /api/forcesync
//! ```
//!
//! The endpoint authenticates with HTTP basic credentials, spawns the full
//! walk in the background and returns immediately; partitions another
//! refresher already holds are skipped, not retried.

use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, post, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{error, info};

use crate::domain::content::{Country, Locale};
use crate::domain::refresh::{Examiner, RefreshOutcome};
use crate::domain::{ApiResult, Error};

use super::state::{AdminCredentials, HttpState};

/// Acknowledgement body returned once the background walk is spawned.
const FORCE_SYNC_STARTED: &str = "success trigger force sync job";

/// Refresh every content partition for every country and locale.
#[post("/forcesync")]
pub async fn force_sync(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let presented = basic_credentials(&request)?;
    let admin = state
        .admin
        .as_ref()
        .ok_or_else(|| Error::unauthorised("force-sync credentials are not configured"))?;
    if presented != *admin {
        return Err(Error::unauthorised("force-sync credentials rejected"));
    }

    let examiner = Arc::clone(&state.examiner);
    tokio::spawn(run_full_sync(examiner));
    Ok(HttpResponse::Ok().json(FORCE_SYNC_STARTED))
}

/// Extract the basic-auth user and password from the request.
fn basic_credentials(request: &HttpRequest) -> Result<AdminCredentials, Error> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::invalid_attribute("authorization header is missing"))?;
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| Error::invalid_attribute("authorization scheme must be Basic"))?;
    let decoded = STANDARD
        .decode(encoded)
        .map_err(|error| Error::invalid_attribute(format!("credentials are not base64: {error}")))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|error| Error::invalid_attribute(format!("credentials are not utf-8: {error}")))?;
    let (user, password) = decoded
        .split_once(':')
        .ok_or_else(|| Error::invalid_attribute("credentials must be user:password"))?;
    Ok(AdminCredentials::new(user, password))
}

/// Walk every country, locale and partition, logging rather than aborting on
/// failure so one bad partition cannot starve the rest of the refresh.
async fn run_full_sync(examiner: Arc<Examiner>) {
    info!("force sync started");
    for country in Country::ALL {
        for &locale in country.supported_locales() {
            report(
                "categories",
                country,
                locale,
                examiner.force_sync_categories(country, locale).await,
            );
            report(
                "sections",
                country,
                locale,
                examiner.force_sync_sections(country, locale).await,
            );
            report(
                "articles",
                country,
                locale,
                examiner.force_sync_articles(country, locale).await,
            );
        }
    }
    match examiner.force_sync_ticket_forms().await {
        Ok(RefreshOutcome::Completed) => info!("force sync refreshed ticket forms"),
        Ok(RefreshOutcome::AlreadyInProgress) => {
            info!("force sync skipped ticket forms, refresh already running");
        }
        Err(error) => error!(%error, "force sync failed for ticket forms"),
    }
    info!("force sync finished");
}

fn report(
    partition: &str,
    country: Country,
    locale: Locale,
    outcome: Result<RefreshOutcome, Error>,
) {
    match outcome {
        Ok(RefreshOutcome::Completed) => {
            info!(partition, %country, %locale, "force sync refreshed partition");
        }
        Ok(RefreshOutcome::AlreadyInProgress) => {
            info!(partition, %country, %locale, "force sync skipped partition, refresh already running");
        }
        Err(error) => {
            error!(partition, %country, %locale, %error, "force sync failed for partition");
        }
    }
}

#[cfg(test)]
mod tests {
    //! Route-level coverage for the force-sync endpoint.

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use base64::Engine as _;
    use serde_json::Value;

    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::state_with_admin;

    use super::*;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api").service(force_sync))
    }

    fn basic_header(user: &str, password: &str) -> (&'static str, String) {
        let encoded = STANDARD.encode(format!("{user}:{password}"));
        ("Authorization", format!("Basic {encoded}"))
    }

    fn admin() -> AdminCredentials {
        AdminCredentials::new("ops", "sesame")
    }

    #[actix_web::test]
    async fn valid_credentials_start_the_walk() {
        let app =
            actix_test::init_service(test_app(state_with_admin(Some(admin())))).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/forcesync")
            .insert_header(basic_header("ops", "sesame"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!(FORCE_SYNC_STARTED));
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorised() {
        let app =
            actix_test::init_service(test_app(state_with_admin(Some(admin())))).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/forcesync")
            .insert_header(basic_header("ops", "guessed"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1005);
        assert_eq!(body["error"], "Unauthorized");
    }

    #[actix_web::test]
    async fn missing_header_is_an_invalid_attribute() {
        let app =
            actix_test::init_service(test_app(state_with_admin(Some(admin())))).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/forcesync")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1002);
    }

    #[actix_web::test]
    async fn garbled_base64_is_an_invalid_attribute() {
        let app =
            actix_test::init_service(test_app(state_with_admin(Some(admin())))).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/forcesync")
            .insert_header(("Authorization", "Basic not!base64"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1002);
    }

    #[actix_web::test]
    async fn unconfigured_credentials_lock_the_endpoint() {
        let app = actix_test::init_service(test_app(state_with_admin(None))).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/forcesync")
            .insert_header(basic_header("ops", "sesame"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1005);
    }
}
