//! Fuzzy user search endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::error;

use crate::domain::user::UserDocument;
use crate::inbound::http::state::HttpState;

/// Window pinned by this route; the domain searcher stays general.
const SEARCH_FROM: u64 = 0;
const SEARCH_SIZE: u64 = 20;

/// Search the user index for documents fuzzily matching `term`.
///
/// Engine failures surface as 400 with the error text in plain text, the
/// observed contract of this facade.
#[utoipa::path(
    get,
    path = "/search/{term}",
    params(
        ("term" = String, Path, description = "Free-text term matched across username, email, and real name")
    ),
    responses(
        (status = 200, description = "Relevance-ranked matches", body = [UserDocument]),
        (status = 400, description = "Engine call failed", body = String, content_type = "text/plain")
    ),
    tags = ["search"]
)]
#[get("/search/{term}")]
pub async fn search(state: web::Data<HttpState>, term: web::Path<String>) -> HttpResponse {
    match state.search.search(term.as_str(), SEARCH_FROM, SEARCH_SIZE).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(error) => {
            error!(term = %term, %error, "search request failed");
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(error.to_string())
        }
    }
}
