//! `ApiClient` - the HTTP request pipeline shared by all endpoint groups.
//!
//! One invocation of [`ApiClient::get_json`] performs exactly one
//! authenticated GET and yields either a typed payload or a
//! [`TmdbError`]. There is no retrying, caching or rate limiting; callers
//! needing any of those wrap the client externally.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::error::{Result, TmdbError, TmdbErrorResponse};

/// Ordered query-string pairs for a single request.
///
/// Unset values are never pushed, so an omitted parameter can never reach
/// the wire (in particular never as a literal `"undefined"` or empty
/// placeholder). Values are stringified here; URL-encoding is left to
/// reqwest when the query is attached.
#[derive(Debug, Clone, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Creates an empty query.
    pub(crate) const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a required parameter.
    pub(crate) fn push(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Appends an optional parameter; `None` is skipped entirely.
    pub(crate) fn push_opt(mut self, name: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    /// Appends a list parameter as a comma-joined scalar; empty or absent
    /// lists are skipped.
    pub(crate) fn push_list(mut self, name: &'static str, values: &[&str]) -> Self {
        if !values.is_empty() {
            self.pairs.push((name, values.join(",")));
        }
        self
    }

    /// The accumulated pairs, in push order.
    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Recursively removes `null`-valued object entries.
///
/// Together with `Option` + `#[serde(default)]` response fields this makes
/// "field absent" and "field explicitly null" indistinguishable, so
/// optional-field semantics are uniform regardless of how the provider
/// spelled the missing value. Array elements are kept in place.
pub(crate) fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Authenticated HTTP pipeline against one TMDB base URL.
#[derive(Debug)]
pub(crate) struct ApiClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL all request paths are joined onto.
    base_url: Url,
    /// Bearer access token.
    access_token: String,
}

impl ApiClient {
    /// Creates a pipeline over an already-built HTTP client.
    pub(crate) const fn new(http_client: Client, base_url: Url, access_token: String) -> Self {
        Self {
            http_client,
            base_url,
            access_token,
        }
    }

    /// Sends one GET request and decodes the JSON response.
    ///
    /// Success statuses decode into `T` after the null-normalization pass;
    /// everything else becomes a [`TmdbError`] - from the provider's
    /// structured error body when it parses, from the HTTP reason phrase
    /// (provider code `-1`) when it does not, and with no HTTP status at
    /// all when the request never completed.
    #[instrument(skip(self, query))]
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TmdbError::library(format!("invalid request path {path}: {e}")))?;

        let request = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json;charset=utf-8")
            .query(query.pairs())
            .build()
            .map_err(|e| TmdbError::library(format!("failed to build request {path}: {e}")))?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| TmdbError::library(format!("request failed: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_owned();
            let body = response.text().await.unwrap_or_default();
            return Err(serde_json::from_str::<TmdbErrorResponse>(&body).map_or_else(
                |_| TmdbError::http(reason, status.as_u16()),
                |e| TmdbError::api(e.status_message, status.as_u16(), e.status_code),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TmdbError::http(format!("failed to read response body: {e}"), status.as_u16()))?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| TmdbError::http(format!("failed to decode JSON response: {e}"), status.as_u16()))?;
        serde_json::from_value(strip_nulls(value))
            .map_err(|e| TmdbError::http(format!("response shape mismatch: {e}"), status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::{LIBRARY_ERROR_CODE, NO_HTTP_STATUS};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: u64,
        title: String,
        #[serde(default)]
        tagline: Option<String>,
    }

    fn test_client(base: &str) -> ApiClient {
        ApiClient::new(
            Client::new(),
            base.parse().unwrap(),
            String::from("test-token"),
        )
    }

    #[test]
    fn test_query_skips_absent_values() {
        // Arrange & Act
        let query = Query::new()
            .push("query", "Fight Club")
            .push_opt("language", None::<String>)
            .push_opt("page", Some(2));

        // Assert
        assert_eq!(
            query.pairs(),
            &[
                ("query", String::from("Fight Club")),
                ("page", String::from("2")),
            ]
        );
    }

    #[test]
    fn test_query_joins_lists_with_commas() {
        // Arrange & Act
        let query = Query::new()
            .push_list("append_to_response", &["credits", "images"])
            .push_list("empty", &[]);

        // Assert
        assert_eq!(
            query.pairs(),
            &[("append_to_response", String::from("credits,images"))]
        );
    }

    #[test]
    fn test_strip_nulls_removes_nested_null_entries() {
        // Arrange
        let value = json!({
            "id": 550,
            "tagline": null,
            "collection": {"name": null, "id": 1},
            "genres": [{"id": 18, "name": null}],
        });

        // Act
        let stripped = strip_nulls(value);

        // Assert
        assert_eq!(
            stripped,
            json!({
                "id": 550,
                "collection": {"id": 1},
                "genres": [{"id": 18}],
            })
        );
    }

    #[test]
    fn test_strip_nulls_leaves_other_values_untouched() {
        // Arrange
        let value = json!({"a": [1, "two", true], "b": {"c": 0.5}});

        // Act & Assert
        assert_eq!(strip_nulls(value.clone()), value);
    }

    #[tokio::test]
    async fn test_success_decodes_payload() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 550, "title": "Fight Club", "tagline": null})),
            )
            .mount(&mock_server)
            .await;
        let client = test_client(&format!("{}/3/", mock_server.uri()));

        // Act
        let payload: Payload = client.get_json("movie/550", &Query::new()).await.unwrap();

        // Assert: explicit null arrives as absent
        assert_eq!(payload.id, 550);
        assert_eq!(payload.title, "Fight Club");
        assert!(payload.tagline.is_none());
    }

    #[tokio::test]
    async fn test_absent_params_never_reach_the_wire() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "Fight Club"))
            .and(query_param_is_missing("language"))
            .and(query_param_is_missing("region"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "ok"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = test_client(&format!("{}/3/", mock_server.uri()));
        let query = Query::new()
            .push("query", "Fight Club")
            .push_opt("language", None::<String>)
            .push_opt("region", None::<String>);

        // Act & Assert (mock expect(1) verifies the absent keys)
        let _: Payload = client.get_json("search/movie", &query).await.unwrap();
    }

    #[tokio::test]
    async fn test_structured_error_body_maps_to_provider_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "status_code": 34,
                "status_message": "The resource you requested could not be found.",
            })))
            .mount(&mock_server)
            .await;
        let client = test_client(&format!("{}/3/", mock_server.uri()));

        // Act
        let result: Result<Payload> = client.get_json("movie/0", &Query::new()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code, 404);
        assert_eq!(err.tmdb_status_code, 34);
        assert_eq!(err.message, "The resource you requested could not be found.");
    }

    #[tokio::test]
    async fn test_unparsable_error_body_falls_back_to_status_text() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&mock_server)
            .await;
        let client = test_client(&format!("{}/3/", mock_server.uri()));

        // Act
        let result: Result<Payload> = client.get_json("movie/550", &Query::new()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code, 502);
        assert_eq!(err.tmdb_status_code, LIBRARY_ERROR_CODE);
        assert_eq!(err.message, "Bad Gateway");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_library_error() {
        // Arrange: nothing listens on port 1
        let client = test_client("http://127.0.0.1:1/3/");

        // Act
        let result: Result<Payload> = client.get_json("movie/550", &Query::new()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code, NO_HTTP_STATUS);
        assert_eq!(err.tmdb_status_code, LIBRARY_ERROR_CODE);
        assert!(err.message.contains("request failed"));
    }

    #[tokio::test]
    async fn test_shape_mismatch_maps_to_library_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "not-a-number"})))
            .mount(&mock_server)
            .await;
        let client = test_client(&format!("{}/3/", mock_server.uri()));

        // Act
        let result: Result<Payload> = client.get_json("movie/550", &Query::new()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code, 200);
        assert_eq!(err.tmdb_status_code, LIBRARY_ERROR_CODE);
        assert!(err.message.contains("shape mismatch"));
    }
}
