//! URL-shortener adapter.
//!
//! `Shortener` is an enum over concrete provider backends. Enum dispatch
//! keeps the call sites free of `dyn` trait objects; adding a backend is a
//! new variant plus a new `shorten` arm. Each invocation is one
//! best-effort call: no retry, no backoff.

use reqwest::Client;
use tracing::debug;

use crate::errors::{HelperError, Result};

/// All available shortening backends.
#[derive(Debug, Clone)]
pub enum Shortener {
    /// The is.gd simple-format endpoint.
    IsGd(IsGd),
    /// Canned response, for tests and offline use.
    Fixed(Fixed),
}

impl Shortener {
    /// Build the default backend.
    pub fn is_gd() -> Result<Self> {
        Ok(Shortener::IsGd(IsGd::new()?))
    }

    /// Ask the backend for a short URL.
    ///
    /// `Ok(None)` means the service answered but had no result to offer;
    /// transport failures come back as errors.
    pub async fn shorten(&self, url: &str) -> Result<Option<String>> {
        match self {
            Shortener::IsGd(p) => p.shorten(url).await,
            Shortener::Fixed(p) => p.shorten(url).await,
        }
    }
}

/// Provider backed by `https://is.gd/create.php?format=simple`.
#[derive(Debug, Clone)]
pub struct IsGd {
    client: Client,
    endpoint: String,
}

impl IsGd {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: "https://is.gd/create.php".to_string(),
        })
    }

    async fn shorten(&self, url: &str) -> Result<Option<String>> {
        debug!(url, "requesting short url");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "simple"), ("url", url)])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let short = body.trim();
        if short.is_empty() {
            Ok(None)
        } else {
            Ok(Some(short.to_string()))
        }
    }
}

/// Backend that always answers with the configured result.
#[derive(Debug, Clone)]
pub struct Fixed {
    result: Option<String>,
}

impl Fixed {
    pub fn new(result: Option<String>) -> Self {
        Self { result }
    }

    async fn shorten(&self, _url: &str) -> Result<Option<String>> {
        Ok(self.result.clone())
    }
}

/// Shorten `url` with the given backend.
///
/// An empty provider result fails with the fixed service-not-available
/// error; everything else resolves to the provider's string.
pub async fn shorten_url_with(provider: &Shortener, url: &str) -> Result<String> {
    match provider.shorten(url).await? {
        Some(short) => Ok(short),
        None => Err(HelperError::ServiceUnavailable),
    }
}

/// Shorten `url` with the default backend.
pub async fn shorten_url(url: &str) -> Result<String> {
    let provider = Shortener::is_gd()?;
    shorten_url_with(&provider, url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_backend_resolves_with_its_result() {
        let provider = Shortener::Fixed(Fixed::new(Some("https://is.gd/x".into())));
        let short = shorten_url_with(&provider, "https://example.com/very/long")
            .await
            .unwrap();
        assert_eq!(short, "https://is.gd/x");
    }

    #[tokio::test]
    async fn empty_result_maps_to_the_fixed_message() {
        let provider = Shortener::Fixed(Fixed::new(None));
        let err = shorten_url_with(&provider, "https://example.com")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "shortenUrl: service not available");
    }
}
