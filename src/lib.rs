//! # Dixa API Rust SDK
//!
//! A Rust client for the Dixa customer service platform API, providing
//! type-safe configuration, authenticated HTTP access with retry and
//! backoff, cursor pagination, and typed resource services.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DixaConfig`] and [`DixaConfigBuilder`]
//! - Validated newtypes for API credentials and the base URL
//! - Async HTTP client with rate limit and server error retries
//! - Transparent `pageKey` cursor pagination
//! - Typed resource services for conversations, end users, agents,
//!   tags, queues, teams, and webhooks
//!
//! ## Quick Start
//!
//! ```rust
//! use dixa_api::{ApiKey, DixaConfig};
//!
//! let config = DixaConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use dixa_api::{ApiKey, DixaClient, DixaConfig};
//!
//! let config = DixaConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()?;
//! let client = DixaClient::new(&config)?;
//!
//! // Fetch one conversation.
//! let conversation = client.conversations().get(123).await?;
//!
//! // List every agent, following pagination to the end.
//! let agents = client.agents().list().await?;
//! ```
//!
//! Rate limited (429) and server error (5xx) responses are retried
//! with exponential backoff up to the configured budget; other client
//! errors surface immediately as [`DixaError::Api`].

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod resources;

pub use client::{
    ApiError, DixaClient, DixaError, ExhaustedRetriesError, Expect, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidRequestError, Result, RetryOutcome, RetryPolicy,
    ShapeError, SDK_VERSION,
};
pub use config::{ApiKey, ApiSecretKey, BaseUrl, DixaConfig, DixaConfigBuilder};
pub use error::ConfigError;
