//! OpenAPI documentation configuration.
//!
//! Registers the three HTTP routes and the document schema. Swagger UI is
//! mounted in debug builds only.

use utoipa::OpenApi;

use crate::domain::user::UserDocument;

/// OpenAPI document for the facade's REST surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "mini-search-engine",
        description = "Thin HTTP facade over an external search engine: populate a user index with synthetic documents and run fuzzy multi-field searches."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::status::home,
        crate::inbound::http::search::search,
        crate::inbound::http::populate::populate,
    ),
    components(schemas(UserDocument)),
    tags(
        (name = "status", description = "Service liveness"),
        (name = "search", description = "Fuzzy multi-field user search"),
        (name = "populate", description = "Synthetic data population")
    )
)]
pub struct ApiDoc;
