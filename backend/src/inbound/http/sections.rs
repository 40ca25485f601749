//! Section read endpoints.
//!
//! ```text
//! GET /api/sections/{section_id}
//! GET /api/sections/{section_id}/articles
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::ApiResult;

use super::params::{ReadQuery, parse_id};
use super::responses::{ArticlesResponse, SectionResponse};
use super::state::HttpState;

/// Fetch a single section.
#[get("/sections/{section_id}")]
pub async fn get_section(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let section_id = parse_id(&path.into_inner(), "section_id")?;
    let section = state
        .content
        .section(section_id, listing.country, listing.locale)
        .await?;
    Ok(HttpResponse::Ok().json(SectionResponse { section }))
}

/// List the articles belonging to one section.
#[get("/sections/{section_id}/articles")]
pub async fn get_section_articles(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let section_id = parse_id(&path.into_inner(), "section_id")?;
    let page = state
        .content
        .articles_by_section(section_id, &listing)
        .await?;
    Ok(HttpResponse::Ok().json(ArticlesResponse::from(page)))
}

#[cfg(test)]
mod tests {
    //! Route-level coverage for the section endpoints.

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

    use crate::domain::content::{Country, Locale};
    use crate::domain::ports::{ContentQueryError, MockContentQueries};
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{sample_article, sample_section, state_with_queries};

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
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api")
                .service(get_section)
                .service(get_section_articles),
        )
    }

    #[actix_web::test]
    async fn section_lookup_honours_country_and_locale() {
        let mut queries = MockContentQueries::new();
        queries
            .expect_section()
            .withf(|id, country, locale| {
                *id == 31 && *country == Country::Tw && *locale == Locale::ZhTw
            })
            .returning(|id, _, _| Ok(sample_section(id)));
        let app = actix_test::init_service(test_app(state_with_queries(queries))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/sections/31?country_code=tw&locale=zh-tw")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["section"]["id"], 31);
        assert_eq!(body["section"]["category_id"], 7);
    }

    #[actix_web::test]
    async fn missing_section_maps_to_the_not_found_code() {
        let mut queries = MockContentQueries::new();
        queries
            .expect_section()
            .returning(|_, _, _| Err(ContentQueryError::not_found("section 404")));
        let app = actix_test::init_service(test_app(state_with_queries(queries))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/sections/404")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1003);
    }

    #[actix_web::test]
    async fn bad_sort_vocabulary_is_rejected_before_the_id_parse() {
        let app =
            actix_test::init_service(test_app(state_with_queries(MockContentQueries::new())))
                .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/sections/not-a-number?sort_by=sideways")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 1002);
        assert_eq!(body["details"]["field"], "sort_by");
    }

    #[actix_web::test]
    async fn section_articles_page_through_the_section() {
        let mut queries = MockContentQueries::new();
        queries
            .expect_articles_by_section()
            .withf(|section_id, listing| *section_id == 31 && listing.per_page == 5)
            .returning(|_, _| Ok((vec![sample_article(9), sample_article(10)], 12)));
        let app = actix_test::init_service(test_app(state_with_queries(queries))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/sections/31/articles?per_page=5")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["articles"][1]["id"], 10);
        assert_eq!(body["page_count"], 3);
        assert_eq!(body["count"], 12);
    }
}
