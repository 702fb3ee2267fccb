//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that an
//! invalid credential or endpoint is rejected before the first request
//! is ever made.

use std::fmt;

use crate::error::ConfigError;

/// A validated Dixa API key.
///
/// Ensures the key is non-empty and provides type safety to prevent
/// accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use dixa_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Dixa API secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiSecretKey(*****)`, so the secret cannot leak through log output.
///
/// # Example
///
/// ```rust
/// use dixa_api::ApiSecretKey;
///
/// let secret = ApiSecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecretKey(String);

impl ApiSecretKey {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecretKey`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecretKey);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecretKey(*****)")
    }
}

/// A validated base URL for the Dixa API.
///
/// Accepts an absolute `http` or `https` URL; a trailing slash is
/// stripped so paths can always be appended verbatim.
///
/// # Example
///
/// ```rust
/// use dixa_api::BaseUrl;
///
/// let url = BaseUrl::new("https://dev.dixa.io/").unwrap();
/// assert_eq!(url.as_ref(), "https://dev.dixa.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production Dixa API endpoint.
    pub const PRODUCTION: &'static str = "https://dev.dixa.io";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme
    /// or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host = &url[scheme_end + 3..];
        if host.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }

    /// Returns the default production endpoint.
    #[must_use]
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
