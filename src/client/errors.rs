//! Error types for API operations.
//!
//! The client distinguishes failure modes precisely so callers can react
//! without re-running with tracing enabled:
//!
//! - [`ApiError`]: non-retryable 4xx responses, surfaced immediately
//! - [`ExhaustedRetriesError`]: a retry-eligible outcome (429, 5xx, or
//!   transport failure) that persisted past the configured retry budget
//! - [`ShapeError`]: a 2xx response whose payload shape does not match
//!   what the calling operation expected
//! - [`InvalidRequestError`]: a request that failed validation before
//!   being sent
//! - [`DixaError`]: the unified error type for all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get("/v1/agents/123", None, Expect::Object).await {
//!     Ok(agent) => println!("{agent}"),
//!     Err(DixaError::Api(e)) => println!("rejected with status {}", e.status),
//!     Err(DixaError::ExhaustedRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::client::http_request::Expect;

/// A specialized `Result` type for Dixa API operations.
pub type Result<T> = std::result::Result<T, DixaError>;

/// The outcome of a single failed attempt that was eligible for retry.
#[derive(Debug)]
pub enum RetryOutcome {
    /// The server answered with a retry-eligible status (429 or 5xx).
    Status {
        /// The HTTP status code.
        code: u16,
        /// The decoded response body.
        body: Value,
    },
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
}

impl RetryOutcome {
    /// Returns the HTTP status code, if the outcome was a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Transport(_) => None,
        }
    }
}

impl fmt::Display for RetryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::Transport(err) => write!(f, "transport failure: {err}"),
        }
    }
}

/// Error returned when the API rejects a request with a non-retryable
/// 4xx status.
///
/// Carries the status code and the decoded error payload; retrying a
/// client error is futile, so the request is surfaced after exactly one
/// attempt.
#[derive(Debug, Error)]
#[error("API error (status {status}): {body}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The decoded error body.
    pub body: Value,
}

/// Error returned when the retry budget is exhausted.
///
/// A 429, 5xx, or transport failure that persisted through
/// `max_retries + 1` attempts ends up here, annotated with the attempt
/// count and the last observed outcome.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry attempts ({tries}). Last outcome: {last}")]
pub struct ExhaustedRetriesError {
    /// Total attempts made, including the first.
    pub tries: u32,
    /// The outcome of the final attempt.
    pub last: RetryOutcome,
}

/// Error returned when a successful response has the wrong payload shape.
///
/// The shape contract is structural only (JSON object vs. array); a
/// mismatch is a programming or API-contract error and is never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Expected {expected} response payload, got {actual}")]
pub struct ShapeError {
    /// The shape the calling operation expected.
    pub expected: Expect,
    /// A short description of the value actually received.
    pub actual: &'static str,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST request was built without a body.
    #[error("Cannot use {method} without a request body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all Dixa API operations.
#[derive(Debug, Error)]
pub enum DixaError {
    /// The API rejected the request (non-retryable 4xx).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Retry budget exhausted on a retry-eligible outcome.
    #[error(transparent)]
    ExhaustedRetries(#[from] ExhaustedRetriesError),

    /// Successful response with a payload of the wrong shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network-level failure outside the retry loop (e.g., client
    /// construction).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A payload could not be converted into its typed record.
    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A pagination run exceeded the configured page cap.
    #[error("Pagination exceeded the configured cap of {limit} pages")]
    PageLimitExceeded {
        /// The configured page cap.
        limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_includes_status_and_body() {
        let error = ApiError {
            status: 404,
            body: json!({"message": "Not found"}),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not found"));
    }

    #[test]
    fn test_exhausted_retries_includes_try_count_and_last_outcome() {
        let error = ExhaustedRetriesError {
            tries: 4,
            last: RetryOutcome::Status {
                code: 503,
                body: json!({"message": "unavailable"}),
            },
        };
        let message = error.to_string();
        assert!(message.contains("4"));
        assert!(message.contains("503"));
        assert!(message.contains("Exceeded maximum retry attempts"));
    }

    #[test]
    fn test_retry_outcome_status_accessor() {
        let outcome = RetryOutcome::Status {
            code: 429,
            body: json!({}),
        };
        assert_eq!(outcome.status(), Some(429));
    }

    #[test]
    fn test_shape_error_names_both_shapes() {
        let error = ShapeError {
            expected: Expect::Object,
            actual: "array",
        };
        let message = error.to_string();
        assert!(message.contains("object"));
        assert!(message.contains("array"));
    }

    #[test]
    fn test_invalid_request_missing_body() {
        let error = InvalidRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without a request body.");
    }

    #[test]
    fn test_page_limit_exceeded_names_limit() {
        let error = DixaError::PageLimitExceeded { limit: 10 };
        assert!(error.to_string().contains("10"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api: &dyn std::error::Error = &ApiError {
            status: 400,
            body: json!({}),
        };
        let _ = api;

        let shape: &dyn std::error::Error = &ShapeError {
            expected: Expect::Array,
            actual: "object",
        };
        let _ = shape;
    }
}
