//! Article read endpoints.
//!
//! ```text
//! GET /api/articles/{article_id}
//! GET /api/toparticles/{top_n}
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::ApiResult;

use super::params::{ReadQuery, parse_id};
use super::responses::{ArticleResponse, TopArticlesResponse};
use super::state::HttpState;

/// Fetch a single article, recording the read against its click counter.
#[get("/articles/{article_id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let article_id = parse_id(&path.into_inner(), "article_id")?;
    let article = state
        .content
        .article(article_id, listing.country, listing.locale)
        .await?;
    Ok(HttpResponse::Ok().json(ArticleResponse { article }))
}

/// Most-read articles for a country and locale, unpaged.
#[get("/toparticles/{top_n}")]
pub async fn get_top_articles(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ReadQuery>,
) -> ApiResult<HttpResponse> {
    let listing = query.listing()?;
    let top_n = parse_id(&path.into_inner(), "top_n")?;
    let articles = state
        .content
        .top_articles(top_n, listing.country, listing.locale)
        .await?;
    Ok(HttpResponse::Ok().json(TopArticlesResponse { articles }))
}
