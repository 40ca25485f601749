//! Server construction and adapter wiring.

mod bootstrap;

pub use bootstrap::{ServiceHandles, build_service};

use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::Trace;
use crate::config::HttpSettings;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{articles, categories, force_sync, sections, status, ticket_forms};

/// Lifetime of cached responses.
///
/// Entries also refresh this window on every hit, so actively read responses
/// stay warm until the partition's next reconciliation invalidates them.
pub const RESPONSE_CACHE_TTL: Duration = Duration::from_secs(3600);

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(categories::get_categories)
        .service(categories::get_category_sections)
        .service(categories::get_category_articles)
        .service(categories::get_category_id_for_key_name)
        .service(sections::get_section)
        .service(sections::get_section_articles)
        .service(articles::get_article)
        .service(articles::get_top_articles)
        .service(ticket_forms::get_ticket_form)
        .service(status::get_status)
        .service(force_sync::force_sync);

    App::new().app_data(state).wrap(Trace).service(api)
}

/// Construct an Actix HTTP server over the shared state.
///
/// The read timeout bounds request delivery, the idle timeout bounds
/// keep-alive connections, and the write timeout becomes the drain budget
/// for in-flight responses during shutdown.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the listen address fails.
pub fn create_server(settings: &HttpSettings, state: HttpState) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let server = HttpServer::new(move || build_app(state.clone()))
        .client_request_timeout(settings.read_timeout())
        .keep_alive(settings.idle_timeout())
        .shutdown_timeout(settings.write_timeout_secs)
        .bind(settings.listen_address.as_str())?
        .run();
    Ok(server)
}
