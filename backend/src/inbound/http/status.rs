//! Service liveness endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Fixed body returned by the root route.
pub const LIVENESS_MESSAGE: &str = "The service mini-search-engine is working!";

/// Liveness check. Always answers 200 with a fixed plain-text body.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    ),
    tags = ["status"]
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(LIVENESS_MESSAGE)
}
