//! Synthetic-data population endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::error;

use crate::inbound::http::state::HttpState;

/// Inclusive bounds accepted for the document count.
const MIN_DOCUMENTS: u32 = 1;
const MAX_DOCUMENTS: u32 = 100;

/// Fixed confirmation body on success.
pub const POPULATED_MESSAGE: &str = "Populated!";

/// Fixed rejection body for counts outside the accepted range.
pub const BAD_VALUE_MESSAGE: &str = "ERROR: bad value";

/// Write `number` synthetic users into the index.
///
/// Validation happens here; the domain populator trusts the bound. A count
/// outside `[1, 100]` (or non-numeric input) is rejected without touching
/// the engine.
#[utoipa::path(
    get,
    path = "/populate/{number}",
    params(
        ("number" = u32, Path, description = "Documents to generate, between 1 and 100 inclusive")
    ),
    responses(
        (status = 200, description = "All documents written", body = String, content_type = "text/plain"),
        (status = 400, description = "Count out of range or engine call failed", body = String, content_type = "text/plain")
    ),
    tags = ["populate"]
)]
#[get("/populate/{number}")]
pub async fn populate(state: web::Data<HttpState>, number: web::Path<String>) -> HttpResponse {
    let Some(count) = parse_count(number.as_str()) else {
        error!(number = %number, "rejected populate request with bad count");
        return HttpResponse::BadRequest()
            .content_type(ContentType::plaintext())
            .body(BAD_VALUE_MESSAGE);
    };

    match state.populator.populate(count).await {
        Ok(()) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(POPULATED_MESSAGE),
        Err(error) => {
            error!(count, %error, "populate request failed");
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(error.to_string())
        }
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.parse()
        .ok()
        .filter(|count| (MIN_DOCUMENTS..=MAX_DOCUMENTS).contains(count))
}

#[cfg(test)]
mod tests {
    //! Route and validation coverage with a mocked engine port.

    use std::sync::Arc;

    use actix_web::App;
    use actix_web::test as actix_test;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockUserIndex, UserIndexError};

    fn state_with(index: MockUserIndex) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(index)))
    }

    #[rstest]
    #[case::one("1", Some(1))]
    #[case::hundred("100", Some(100))]
    #[case::zero("0", None)]
    #[case::over_limit("101", None)]
    #[case::negative("-3", None)]
    #[case::not_a_number("abc", None)]
    fn parse_count_enforces_the_inclusive_bounds(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_count(raw), expected);
    }

    #[actix_web::test]
    async fn out_of_range_count_is_rejected_without_engine_calls() {
        let mut index = MockUserIndex::new();
        index.expect_index_exists().never();
        index.expect_create_index().never();
        index.expect_index_user().never();

        let app =
            actix_test::init_service(App::new().app_data(state_with(index)).service(populate)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/populate/101").to_request(),
        )
        .await;

        assert_eq!(response.status().as_u16(), 400);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), BAD_VALUE_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn successful_populate_confirms_in_plain_text() {
        let mut index = MockUserIndex::new();
        index.expect_index_exists().times(1).returning(|| Ok(true));
        index
            .expect_index_user()
            .times(5)
            .returning(|_| Ok(()));

        let app =
            actix_test::init_service(App::new().app_data(state_with(index)).service(populate)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/populate/5").to_request(),
        )
        .await;

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .expect("content type header")
                .to_str()
                .expect("ascii header"),
            "text/plain; charset=utf-8"
        );

        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), POPULATED_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn engine_failure_renders_as_400_plain_text() {
        let mut index = MockUserIndex::new();
        index.expect_index_exists().times(1).returning(|| Ok(true));
        index
            .expect_index_user()
            .times(1)
            .returning(|_| Err(UserIndexError::rejected("status 503: write failed")));

        let app =
            actix_test::init_service(App::new().app_data(state_with(index)).service(populate)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/populate/5").to_request(),
        )
        .await;

        assert_eq!(response.status().as_u16(), 400);
        let body = actix_test::read_body(response).await;
        let text = std::str::from_utf8(&body).expect("utf8 body");
        assert!(text.contains("write failed"));
    }
}
