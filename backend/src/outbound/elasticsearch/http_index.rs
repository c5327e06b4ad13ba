//! Reqwest-backed Elasticsearch index adapter.
//!
//! This adapter owns transport details only: REST request shaping, timeout
//! and HTTP error mapping, and JSON decoding into domain documents. One
//! instance is built at startup and shared across request tasks; reqwest's
//! client pools connections internally.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::json;

use super::dto::SearchResponseDto;
use crate::domain::ports::{USER_INDEX, UserIndex, UserIndexError, UserSearchQuery};
use crate::domain::user::UserDocument;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fields targeted by the fuzzy multi-match query.
const SEARCH_FIELDS: [&str; 3] = ["username", "email", "real_name"];

/// Auto-scaled edit-distance policy: exact below 2 characters, one edit up to
/// 5, two edits beyond.
const FUZZINESS: &str = "AUTO:2,5";

/// Elasticsearch adapter implementing the [`UserIndex`] port over REST.
pub struct ElasticsearchUserIndex {
    client: Client,
    base_url: Url,
}

impl ElasticsearchUserIndex {
    /// Build an adapter with the default per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Fail-fast connectivity probe used before the server starts serving.
    ///
    /// # Errors
    ///
    /// Returns [`UserIndexError`] when the engine is unreachable or answers
    /// with a non-success status.
    pub async fn ping(&self) -> Result<(), UserIndexError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.bytes().await.unwrap_or_default();
            Err(map_status_error(status, body.as_ref()))
        }
    }

    fn index_url(&self, segments: &[&str]) -> Result<Url, UserIndexError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UserIndexError::rejected("engine base URL cannot carry path segments"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl UserIndex for ElasticsearchUserIndex {
    async fn index_exists(&self) -> Result<bool, UserIndexError> {
        let url = self.index_url(&[USER_INDEX])?;
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(map_status_error(status, &[])),
        }
    }

    async fn create_index(&self) -> Result<(), UserIndexError> {
        let url = self.index_url(&[USER_INDEX])?;
        let response = self
            .client
            .put(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        expect_success(response).await.map(|_| ())
    }

    async fn index_user(&self, user: &UserDocument) -> Result<(), UserIndexError> {
        let url = self.index_url(&[USER_INDEX, "_doc"])?;
        let response = self
            .client
            .post(url)
            .json(user)
            .send()
            .await
            .map_err(map_transport_error)?;

        expect_success(response).await.map(|_| ())
    }

    async fn search_users(
        &self,
        query: &UserSearchQuery,
    ) -> Result<Vec<UserDocument>, UserIndexError> {
        let url = self.index_url(&[USER_INDEX, "_search"])?;
        let body = build_search_body(query);
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let payload = expect_success(response).await?;
        parse_search_response(&payload)
    }
}

/// Drain the response body and fail on non-success statuses.
async fn expect_success(response: reqwest::Response) -> Result<Vec<u8>, UserIndexError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if status.is_success() {
        Ok(body.to_vec())
    } else {
        Err(map_status_error(status, body.as_ref()))
    }
}

fn build_search_body(query: &UserSearchQuery) -> serde_json::Value {
    json!({
        "query": {
            "multi_match": {
                "query": query.term,
                "fields": SEARCH_FIELDS,
                "fuzziness": FUZZINESS
            }
        },
        "from": query.from,
        "size": query.size
    })
}

fn parse_search_response(body: &[u8]) -> Result<Vec<UserDocument>, UserIndexError> {
    let decoded: SearchResponseDto = serde_json::from_slice(body).map_err(|error| {
        UserIndexError::decode(format!("invalid search response payload: {error}"))
    })?;
    Ok(decoded.into_documents())
}

fn map_transport_error(error: reqwest::Error) -> UserIndexError {
    if error.is_timeout() {
        UserIndexError::timeout(error.to_string())
    } else {
        UserIndexError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserIndexError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserIndexError::timeout(message)
        }
        _ => UserIndexError::rejected(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network request shaping and mapping helpers.

    use rstest::rstest;

    use super::*;

    #[test]
    fn search_body_carries_query_policy_and_window() {
        let body = build_search_body(&UserSearchQuery {
            term: "johnd0e".to_owned(),
            from: 40,
            size: 20,
        });

        assert_eq!(body["query"]["multi_match"]["query"], "johnd0e");
        assert_eq!(body["query"]["multi_match"]["fuzziness"], "AUTO:2,5");
        assert_eq!(
            body["query"]["multi_match"]["fields"],
            json!(["username", "email", "real_name"])
        );
        assert_eq!(body["from"], 40);
        assert_eq!(body["size"], 20);
    }

    #[test]
    fn parses_hits_into_documents_in_hit_order() {
        let body = r#"{
            "took": 3,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    {
                        "_index": "users",
                        "_id": "a1",
                        "_score": 2.4,
                        "_source": {
                            "username": "johndoe",
                            "email": "john@example.com",
                            "real_name": "John Doe"
                        }
                    },
                    {
                        "_index": "users",
                        "_id": "b2",
                        "_score": 1.1,
                        "_source": {
                            "username": "janedoe",
                            "email": "jane@example.com",
                            "real_name": "Jane Doe"
                        }
                    }
                ]
            }
        }"#;

        let users = parse_search_response(body.as_bytes()).expect("payload should decode");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "johndoe");
        assert_eq!(users[1].username, "janedoe");
    }

    #[test]
    fn parses_zero_hits_as_empty_result() {
        let body = r#"{ "hits": { "hits": [] } }"#;

        let users = parse_search_response(body.as_bytes()).expect("payload should decode");
        assert!(users.is_empty());
    }

    #[test]
    fn malformed_hit_fails_the_whole_decode() {
        let body = r#"{
            "hits": {
                "hits": [
                    { "_source": { "username": "johndoe", "email": "john@example.com", "real_name": "John Doe" } },
                    { "_source": { "username": 42 } }
                ]
            }
        }"#;

        let error = parse_search_response(body.as_bytes()).expect_err("decode should fail");
        assert!(matches!(error, UserIndexError::Decode { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::bad_request(StatusCode::BAD_REQUEST, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn maps_statuses_to_expected_port_errors(#[case] status: StatusCode, #[case] timeout: bool) {
        let error = map_status_error(status, b"{\"error\":\"index_not_found_exception\"}");
        if timeout {
            assert!(
                matches!(error, UserIndexError::Timeout { .. }),
                "timeout statuses should map to Timeout"
            );
        } else {
            assert!(
                matches!(error, UserIndexError::Rejected { .. }),
                "other failure statuses should map to Rejected"
            );
        }
    }

    #[test]
    fn status_message_includes_compacted_body_preview() {
        let error = map_status_error(StatusCode::BAD_REQUEST, b"mapper\n  parsing\n  failed");
        assert_eq!(
            error.to_string(),
            "engine rejected request: status 400: mapper parsing failed"
        );
    }

    #[test]
    fn index_url_joins_segments_under_the_base() {
        let adapter = ElasticsearchUserIndex::new(
            Url::parse("http://localhost:9200/").expect("base URL should parse"),
        )
        .expect("adapter should build");

        let url = adapter
            .index_url(&[USER_INDEX, "_search"])
            .expect("URL should build");
        assert_eq!(url.as_str(), "http://localhost:9200/users/_search");
    }
}
