use crate::config::HarnessConfig;
use crate::core::Result;
use crate::modules::api::{ApiExpectation, Endpoint};
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;

/// Thin client over the payment API.
///
/// One synchronous call per request, bounded by the configured timeout.
/// A transport failure propagates as [`crate::HarnessError::HttpClient`]
/// and fails the test immediately; the harness never retries.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &HarnessConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.wait_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Issue a bodyless request.
    pub async fn send(&self, endpoint: Endpoint, method: Method) -> Result<Response> {
        tracing::debug!(%method, path = endpoint.path(), "api request");
        let response = self
            .http
            .request(method, self.url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "api response");
        Ok(response)
    }

    /// Issue a request with a JSON body.
    pub async fn send_json<T: Serialize>(
        &self,
        endpoint: Endpoint,
        method: Method,
        body: &T,
    ) -> Result<Response> {
        tracing::debug!(%method, path = endpoint.path(), "api request with body");
        let response = self
            .http
            .request(method, self.url(endpoint))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "api response");
        Ok(response)
    }

    /// Assert the headers the application sets on every response.
    ///
    /// Must run before the body is consumed.
    pub fn assert_standard_headers(&self, response: &Response) {
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            content_type.starts_with("application/json"),
            "Expected Content-Type application/json, got {content_type:?}"
        );
        for header in ["date", "transfer-encoding", "vary"] {
            assert!(
                response.headers().contains_key(header),
                "Expected {header} header on response, got headers: {:?}",
                response.headers()
            );
        }
    }

    /// Assert status code and body shape against an expectation.
    ///
    /// Success outcomes must carry `status` equal to the transaction
    /// status token; error outcomes must echo the numeric status in
    /// `status` and the reason phrase in `error`. Returns the parsed body
    /// for any further checks.
    pub async fn assert_status(
        &self,
        response: Response,
        expected: ApiExpectation,
    ) -> Result<Value> {
        let status = response.status();
        assert_eq!(
            status,
            expected.status_code(),
            "Expected HTTP {}, got {} {}",
            expected.status_code().as_u16(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        let body: Value = response.json().await?;
        if expected.is_success() {
            assert_eq!(
                body["status"],
                expected.body_token(),
                "Expected body status {:?}, got: {body}",
                expected.body_token()
            );
        } else {
            assert_eq!(
                body["status"],
                expected.status_code().as_u16(),
                "Expected numeric status field, got: {body}"
            );
            assert_eq!(
                body["error"],
                expected.body_token(),
                "Expected error {:?}, got: {body}",
                expected.body_token()
            );
        }
        Ok(body)
    }
}
