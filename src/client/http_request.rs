//! Request types for the Dixa API client.
//!
//! [`HttpRequest`] is an ephemeral value describing one logical call:
//! method, path, optional JSON body, optional query parameters, and the
//! payload shape the caller expects back.

use std::collections::HashMap;
use std::fmt;

use crate::client::errors::InvalidRequestError;

/// HTTP methods supported by the Dixa API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The payload shape an operation expects from a successful response.
///
/// Shape is structural only: whether the decoded JSON is an object or
/// an array, independent of field-level schema. A mismatch fails with
/// [`crate::ShapeError`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expect {
    /// The payload must be a JSON object.
    #[default]
    Object,
    /// The payload must be a JSON array.
    Array,
    /// Any payload is accepted as-is.
    Any,
}

impl Expect {
    /// Returns `true` if the given value satisfies this expectation.
    #[must_use]
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Any => true,
        }
    }
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// One logical request to the Dixa API.
///
/// Constructed fresh per call via [`HttpRequest::builder`], never
/// persisted.
///
/// # Example
///
/// ```rust
/// use dixa_api::client::{Expect, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/v1/endusers")
///     .body(json!({"email": "jo@example.com"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.expect, Expect::Object);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the API base URL (e.g., `/v1/conversations`).
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// The payload shape expected from a successful response.
    pub expect: Expect,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request before sending.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if the method is
    /// `Post` and no body is set. PUT and PATCH are allowed without a
    /// body; several Dixa endpoints (claim, anonymize, tag) take none.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(self.method, HttpMethod::Post) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    expect: Expect,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
            expect: Expect::Object,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the expected response payload shape (default: object).
    #[must_use]
    pub const fn expect(mut self, expect: Expect) -> Self {
        self.expect = expect;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            query: self.query,
            expect: self.expect,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_expect_matches_shapes() {
        assert!(Expect::Object.matches(&json!({})));
        assert!(!Expect::Object.matches(&json!([])));
        assert!(Expect::Array.matches(&json!([1, 2])));
        assert!(!Expect::Array.matches(&json!({"a": 1})));
        assert!(Expect::Any.matches(&json!(null)));
        assert!(Expect::Any.matches(&json!("text")));
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/v1/agents")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v1/agents");
        assert!(request.body.is_none());
        assert_eq!(request.expect, Expect::Object);
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "/v1/tags")
            .body(json!({"name": "billing"}))
            .expect(Expect::Object)
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.body.is_some());
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "/v1/tags").build();

        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_put_and_patch_allowed_without_body() {
        assert!(HttpRequest::builder(HttpMethod::Put, "/v1/conversations/1/claim")
            .build()
            .is_ok());
        assert!(
            HttpRequest::builder(HttpMethod::Patch, "/v1/conversations/1/anonymize")
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "/v1/endusers")
            .query_param("email", "jo@example.com")
            .query_param("pageLimit", "50")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("email"), Some(&"jo@example.com".to_string()));
        assert_eq!(query.get("pageLimit"), Some(&"50".to_string()));
    }

    #[test]
    fn test_expect_defaults_to_object() {
        let request = HttpRequest::builder(HttpMethod::Get, "/v1/agents/1")
            .build()
            .unwrap();
        assert_eq!(request.expect, Expect::Object);
    }
}
