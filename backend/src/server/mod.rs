//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Compress;
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::populate::populate;
use crate::inbound::http::search::search;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::status::home;
use crate::middleware::Trace;
use crate::outbound::elasticsearch::ElasticsearchUserIndex;

/// Bound applied to inbound request reads, matching the facade's contract of
/// cutting hung connections at the transport level.
const CLIENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

fn build_app(
    state: web::Data<HttpState>,
    allowed_origin: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = Cors::default()
        .allowed_origin(&allowed_origin)
        .allowed_methods(["GET"])
        .allow_any_header();

    let app = App::new()
        .app_data(state)
        .wrap(Trace)
        .wrap(cors)
        .wrap(Compress::default())
        .service(search)
        .service(populate)
        .service(home);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Connect to the engine, then bind and run the HTTP server.
///
/// Startup is all-or-nothing: a failed engine ping or bind aborts before any
/// request is served.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the engine client cannot be built, the
/// startup ping fails, or the socket cannot be bound.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let index = ElasticsearchUserIndex::new(config.engine_url.clone()).map_err(|error| {
        std::io::Error::other(format!("engine client construction failed: {error}"))
    })?;
    index.ping().await.map_err(|error| {
        std::io::Error::other(format!("engine unreachable at startup: {error}"))
    })?;
    info!(engine = %config.engine_url, "engine connected");

    let state = web::Data::new(HttpState::new(Arc::new(index)));
    let allowed_origin = config.allowed_origin.clone();
    let server = HttpServer::new(move || build_app(state.clone(), allowed_origin.clone()))
        .client_request_timeout(CLIENT_REQUEST_TIMEOUT)
        .bind(("0.0.0.0", config.port))?;

    info!(port = config.port, "server listening");
    server.run().await
}
