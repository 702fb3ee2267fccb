//! HTTP engine for Dixa API communication.
//!
//! This module provides the request/retry/pagination machinery that
//! underlies every resource method:
//!
//! - [`DixaClient`]: the authenticated async client
//! - [`HttpRequest`] / [`HttpResponse`]: the per-call request and
//!   response values
//! - [`Expect`]: the structural shape contract for response payloads
//! - [`RetryPolicy`]: pure retry eligibility and backoff decisions
//! - [`DixaError`] and friends: the error taxonomy
//!
//! # Retry behavior
//!
//! Retry-eligible outcomes are 429, any 5xx, and transport failures
//! (DNS, connection reset, timeout). Backoff grows exponentially from
//! the configured base delay; a 429 with a `Retry-After` hint waits at
//! least as long as the server asked. Non-429 4xx responses surface
//! immediately after a single attempt.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
mod retry;

pub use errors::{
    ApiError, DixaError, ExhaustedRetriesError, InvalidRequestError, Result, RetryOutcome,
    ShapeError,
};
pub use http_client::{DixaClient, SDK_VERSION};
pub use http_request::{Expect, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use retry::RetryPolicy;
