//! Response types for the Dixa API client.

use std::collections::HashMap;

/// A parsed HTTP response from the Dixa API.
///
/// Contains the status code, headers, decoded JSON body, and the parsed
/// `Retry-After` value when the server supplied one.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, with lower-cased names (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying, from the `Retry-After` header.
    pub retry_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_after,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "expected !is_ok() for code {code}");
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_absent() {
        let response = HttpResponse::new(429, HashMap::new(), json!({}));
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_unparseable_retry_after_is_ignored() {
        let mut headers = HashMap::new();
        headers.insert(
            "retry-after".to_string(),
            vec!["Wed, 21 Oct 2026 07:28:00 GMT".to_string()],
        );

        let response = HttpResponse::new(429, headers, json!({}));
        assert!(response.retry_after.is_none());
    }
}
