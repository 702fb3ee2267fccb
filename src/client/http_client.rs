//! HTTP client for Dixa API communication.
//!
//! This module provides the [`DixaClient`] type: one authenticated,
//! retried logical operation per call, producing a shape-checked JSON
//! payload.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::errors::{ApiError, ExhaustedRetriesError, Result, RetryOutcome, ShapeError};
use crate::client::http_request::{Expect, HttpMethod, HttpRequest};
use crate::client::http_response::HttpResponse;
use crate::client::retry::RetryPolicy;
use crate::config::DixaConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for making authenticated requests to the Dixa API.
///
/// The client handles:
/// - Authentication headers derived from the configured credentials
/// - Automatic retries for 429, 5xx, and transport failures
/// - Envelope unwrapping and payload shape checking
/// - Cursor pagination (see [`DixaClient::paginate`])
///
/// It is a stateless facade over its immutable configuration: safe to
/// share across threads and async tasks, with no ordering imposed
/// across distinct calls.
///
/// # Example
///
/// ```rust,ignore
/// use dixa_api::{ApiKey, DixaClient, DixaConfig};
///
/// let config = DixaConfig::builder()
///     .api_key(ApiKey::new("api-key").unwrap())
///     .build()?;
/// let client = DixaClient::new(&config)?;
///
/// let agent = client.agents().get("agent-id").await?;
/// ```
#[derive(Debug)]
pub struct DixaClient {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Base URL (e.g., `https://dev.dixa.io`).
    base_url: String,
    /// Default headers included in every request.
    default_headers: HashMap<String, String>,
    /// Retry decision policy.
    retry: RetryPolicy,
    /// Optional pagination page cap.
    max_pages: Option<u32>,
}

// Verify DixaClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DixaClient>();
};

impl DixaClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DixaError::Transport`] if the underlying HTTP client
    /// cannot be constructed (e.g., TLS initialization failure).
    pub fn new(config: &DixaConfig) -> Result<Self> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Dixa API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        // The Dixa API authenticates with the raw key in Authorization.
        default_headers.insert(
            "Authorization".to_string(),
            config.api_key().as_ref().to_string(),
        );
        if let Some(secret) = config.api_secret() {
            default_headers.insert(
                "X-Dixa-Api-Secret".to_string(),
                secret.as_ref().to_string(),
            );
        }

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            retry: RetryPolicy::from_config(config),
            max_pages: config.max_pages(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy for this client.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Returns the pagination page cap, if configured.
    #[must_use]
    pub const fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Sends a request, retrying retry-eligible failures, and returns
    /// the raw 2xx response.
    ///
    /// This is the single place that decides retry vs. surface; the
    /// transport below it and the retry policy beside it never swallow
    /// errors.
    ///
    /// # Errors
    ///
    /// - [`DixaError::InvalidRequest`] if the request fails validation
    /// - [`DixaError::Api`] on a non-retryable 4xx, after one attempt
    /// - [`DixaError::ExhaustedRetries`] when a 429, 5xx, or transport
    ///   failure persists past the retry budget
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        request.verify()?;

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut retry_after = None;
            let outcome = match self.round_trip(request).await {
                Ok(response) => {
                    if response.is_ok() {
                        return Ok(response);
                    }
                    if !RetryPolicy::eligible_status(response.code) {
                        let error = ApiError {
                            status: response.code,
                            body: response.body,
                        };
                        tracing::error!(
                            path = %request.path,
                            status = error.status,
                            "request failed: {error}"
                        );
                        return Err(error.into());
                    }
                    retry_after = response.retry_after;
                    RetryOutcome::Status {
                        code: response.code,
                        body: response.body,
                    }
                }
                Err(err) => RetryOutcome::Transport(err),
            };

            if self.retry.should_retry(attempt, &outcome) {
                let delay = self.retry.delay_with_hint(attempt, retry_after);
                tracing::warn!(
                    path = %request.path,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "retrying after {outcome}"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            let error = ExhaustedRetriesError {
                tries: attempt,
                last: outcome,
            };
            tracing::error!(path = %request.path, tries = attempt, "request failed: {error}");
            return Err(error.into());
        }
    }

    /// Executes a request and returns the shape-checked payload.
    ///
    /// On 2xx the body's `data` envelope member is unwrapped when
    /// present (the Dixa response convention) and checked against the
    /// request's expected shape.
    ///
    /// # Errors
    ///
    /// Everything [`Self::send`] returns, plus [`DixaError::Shape`]
    /// when the payload shape does not match the expectation.
    pub async fn execute(&self, request: &HttpRequest) -> Result<Value> {
        let response = self.send(request).await?;
        let payload = unwrap_envelope(response.body);

        if !request.expect.matches(&payload) {
            return Err(ShapeError {
                expected: request.expect,
                actual: shape_name(&payload),
            }
            .into());
        }

        Ok(payload)
    }

    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
        expect: Expect,
    ) -> Result<Value> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path).expect(expect);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.execute(&builder.build()?).await
    }

    /// Performs a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn post(&self, path: &str, body: Value, expect: Expect) -> Result<Value> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .expect(expect)
            .build()?;
        self.execute(&request).await
    }

    /// Performs a PUT request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn put(&self, path: &str, body: Option<Value>, expect: Expect) -> Result<Value> {
        let mut builder = HttpRequest::builder(HttpMethod::Put, path).expect(expect);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.execute(&builder.build()?).await
    }

    /// Performs a PATCH request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn patch(&self, path: &str, body: Option<Value>, expect: Expect) -> Result<Value> {
        let mut builder = HttpRequest::builder(HttpMethod::Patch, path).expect(expect);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.execute(&builder.build()?).await
    }

    /// Performs a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn delete(&self, path: &str) -> Result<Value> {
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .expect(Expect::Any)
            .build()?;
        self.execute(&request).await
    }

    /// Performs exactly one network round-trip.
    ///
    /// No retries and no status interpretation at this layer;
    /// connection-level failures surface as the `Err` variant.
    async fn round_trip(
        &self,
        request: &HttpRequest,
    ) -> std::result::Result<HttpResponse, reqwest::Error> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Patch => self.http.patch(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = parse_response_headers(res.headers());
        let text = res.text().await.unwrap_or_default();

        let body = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
        };

        Ok(HttpResponse::new(code, headers, body))
    }
}

/// Unwraps the `data` envelope member when the body is an object
/// carrying one; otherwise returns the body unchanged.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Returns a short description of a JSON value's shape.
pub(crate) const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// Parses response headers into a map of lower-cased names.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}
