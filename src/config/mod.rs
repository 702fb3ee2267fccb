//! Configuration types for the Dixa API client.
//!
//! The main types in this module are:
//!
//! - [`DixaConfig`]: the configuration struct holding credentials and
//!   client behavior settings
//! - [`DixaConfigBuilder`]: a builder for constructing [`DixaConfig`]
//! - [`ApiKey`] / [`ApiSecretKey`]: validated credential newtypes
//! - [`BaseUrl`]: a validated API endpoint
//!
//! # Example
//!
//! ```rust
//! use dixa_api::{ApiKey, DixaConfig};
//!
//! let config = DixaConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecretKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of retries for retry-eligible failures.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay between retry attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Dixa API client.
///
/// Holds the credentials and behavior settings a [`crate::DixaClient`]
/// reads for its entire lifetime. Immutable after construction and safe
/// to share across threads.
///
/// # Example
///
/// ```rust
/// use dixa_api::{ApiKey, DixaConfig};
///
/// let config = DixaConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_retries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DixaConfig {
    api_key: ApiKey,
    api_secret: Option<ApiSecretKey>,
    base_url: BaseUrl,
    max_retries: u32,
    retry_delay: Duration,
    request_timeout: Duration,
    user_agent_prefix: Option<String>,
    max_pages: Option<u32>,
}

// Verify DixaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DixaConfig>();
};

impl DixaConfig {
    /// Creates a new builder for constructing a `DixaConfig`.
    #[must_use]
    pub fn builder() -> DixaConfigBuilder {
        DixaConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret, if configured.
    #[must_use]
    pub const fn api_secret(&self) -> Option<&ApiSecretKey> {
        self.api_secret.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the maximum number of retries for retry-eligible failures.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the base delay between retry attempts.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the pagination page cap, if configured.
    #[must_use]
    pub const fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }
}

/// Builder for constructing [`DixaConfig`] instances.
///
/// The only required field is `api_key`; everything else has defaults:
/// 3 retries, 10 second base retry delay, 30 second request timeout,
/// the production endpoint, and no pagination cap.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use dixa_api::{ApiKey, ApiSecretKey, BaseUrl, DixaConfig};
///
/// let config = DixaConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecretKey::new("secret").unwrap())
///     .base_url(BaseUrl::new("https://dev.dixa.io").unwrap())
///     .retry_delay(Duration::from_secs(2))
///     .max_pages(100)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DixaConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecretKey>,
    base_url: Option<BaseUrl>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    request_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    max_pages: Option<u32>,
}

impl DixaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret.
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecretKey) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the maximum number of retries for retry-eligible failures.
    ///
    /// Zero disables retries: every request gets exactly one attempt.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the base delay between retry attempts.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets the per-request timeout.
    ///
    /// A timed-out request is treated as a transport failure and
    /// retried like any other.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Caps the number of pages a single pagination run may fetch.
    ///
    /// Continuation is entirely server-driven; the cap protects against
    /// a server that never stops returning cursors. Exceeding it fails
    /// the run with [`crate::DixaError::PageLimitExceeded`].
    #[must_use]
    pub const fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Builds the [`DixaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<DixaConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(DixaConfig {
            api_key,
            api_secret: self.api_secret,
            base_url: self.base_url.unwrap_or_default(),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
            max_pages: self.max_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = DixaConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = DixaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://dev.dixa.io");
        assert_eq!(config.max_retries(), DEFAULT_MAX_RETRIES);
        assert_eq!(config.retry_delay(), DEFAULT_RETRY_DELAY);
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
        assert!(config.api_secret().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.max_pages().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = DixaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecretKey::new("secret").unwrap())
            .base_url(BaseUrl::new("http://localhost:4000").unwrap())
            .max_retries(7)
            .retry_delay(Duration::from_millis(250))
            .request_timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .max_pages(50)
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:4000");
        assert_eq!(config.max_retries(), 7);
        assert_eq!(config.retry_delay(), Duration::from_millis(250));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.api_secret().unwrap().as_ref(), "secret");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.max_pages(), Some(50));
    }

    #[test]
    fn test_zero_retries_is_allowed() {
        let config = DixaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .max_retries(0)
            .build()
            .unwrap();

        assert_eq!(config.max_retries(), 0);
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = DixaConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecretKey::new("secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("DixaConfig"));
        assert!(!debug_str.contains("secret"));
    }
}
