//! Ticket form read endpoint.
//!
//! ```text
//! GET /api/ticket_forms/{form_id}
//! ```
//!
//! Forms are singleton-scoped, so only the locale from the query string
//! shapes the response; the country parameter is validated and ignored.

use actix_web::{HttpResponse, get, web};

use crate::domain::ApiResult;

use super::params::{ReadQuery, parse_id};
use super::responses::TicketFormResponse;
use super::state::HttpState;

/// Fetch a ticket form with its portal-visible fields.
#[get("/ticket_forms/{form_id}")]
pub async fn get_ticket_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let form_id = parse_id(&path.into_inner(), "form_id")?;
    let ticket_form = state.content.ticket_form(form_id, listing.locale).await?;
    Ok(HttpResponse::Ok().json(TicketFormResponse { ticket_form }))
}

#[cfg(test)]
mod tests {
    //! Route-level coverage for the ticket form endpoint.

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

    use crate::domain::content::Locale;
    use crate::domain::ports::{ContentQueryError, MockContentQueries};
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{sample_ticket_form, state_with_queries};

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
            .service(web::scope("/api").service(get_ticket_form))
    }

    #[actix_web::test]
    async fn form_lookup_honours_the_requested_locale() {
        let mut queries = MockContentQueries::new();
        queries
            .expect_ticket_form()
            .withf(|form_id, locale| *form_id == 13 && *locale == Locale::ZhTw)
            .returning(|form_id, _| Ok(sample_ticket_form(form_id)));
        let app = actix_test::init_service(test_app(state_with_queries(queries))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/ticket_forms/13?locale=zh-tw")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["ticket_form"]["id"], 13);
        assert_eq!(body["ticket_form"]["name"], "contact us");
    }

    #[actix_web::test]
    async fn missing_form_maps_to_the_not_found_code() {
        let mut queries = MockContentQueries::new();
        queries
            .expect_ticket_form()
            .returning(|_, _| Err(ContentQueryError::not_found("ticket form 404")));
        let app = actix_test::init_service(test_app(state_with_queries(queries))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/ticket_forms/404")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1003);
    }

    #[actix_web::test]
    async fn unknown_locale_is_rejected_before_the_lookup() {
        let app =
            actix_test::init_service(test_app(state_with_queries(MockContentQueries::new())))
                .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/ticket_forms/13?locale=fr-fr")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1002);
        assert_eq!(body["details"]["field"], "locale");
    }
}
