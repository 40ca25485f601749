//! Category read endpoints.
//!
//! ```text
//! GET /api/categories
//! GET /api/categories/{category_id}/sections
//! GET /api/categories/{category_id}/articles
//! GET /api/category/{category_key_name}
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::ApiResult;

use super::params::{ReadQuery, parse_id};
use super::responses::{
    ArticlesResponse, CategoriesResponse, CategoryIdResponse, SectionsResponse,
};
use super::state::HttpState;

/// List categories for a country and locale.
#[get("/categories")]
pub async fn get_categories(
    state: web::Data<HttpState>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let page = state.content.categories(&listing).await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse::from(page)))
}

/// List the sections belonging to one category.
#[get("/categories/{category_id}/sections")]
pub async fn get_category_sections(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let category_id = parse_id(&path.into_inner(), "category_id")?;
    let page = state
        .content
        .sections_by_category(category_id, &listing)
        .await?;
    Ok(HttpResponse::Ok().json(SectionsResponse::from(page)))
}

/// List articles under a category's path, filtered by labels.
///
/// The path id is validated but is not a filter: article membership on this
/// endpoint is label-driven, and an empty `label_names` lists every article
/// for the country and locale.
#[get("/categories/{category_id}/articles")]
pub async fn get_category_articles(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    parse_id(&path.into_inner(), "category_id")?;
    let labels = query.labels();
    let page = state
        .content
        .articles_by_category(&labels, &listing)
        .await?;
    Ok(HttpResponse::Ok().json(ArticlesResponse::from(page)))
}

/// Resolve a case-insensitive category key name to its category id.
#[get("/category/{category_key_name}")]
pub async fn get_category_id_for_key_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let key_name = path.into_inner();
    let category_id = state
        .content
        .category_id_for_key_name(&key_name, listing.country, listing.locale)
        .await?;
    Ok(HttpResponse::Ok().json(CategoryIdResponse { category_id }))
}
