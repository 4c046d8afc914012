//! HTTP client implementation for the Tumblr `customize_api`.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::api::ThemeApi;
use super::{ThemeRequest, UploadError};

/// Tumblr API client.
#[derive(Clone)]
pub struct TumblrClient {
  base_url: Url,
  client: reqwest::Client,
}

impl TumblrClient {
  /// Create a new Tumblr client.
  ///
  /// # Arguments
  /// * `base_url` - Scheme and host of the Tumblr web app (e.g., https://www.tumblr.com)
  /// * `timeout` - Optional request timeout. `None` waits indefinitely.
  ///
  /// # Errors
  /// Returns an error if `base_url` is not an absolute http(s) URL or the
  /// underlying `reqwest::Client` cannot be built.
  pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
    let parsed = Url::parse(base_url).with_context(|| format!("Invalid API URL: {base_url}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
      return Err(anyhow!("API URL must use http or https: {base_url}"));
    }

    let mut builder = reqwest::Client::builder().user_agent(format!(
      "tumblr-upload/{} ({})",
      env!("CARGO_PKG_VERSION"),
      env!("TARGET")
    ));
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().context("Failed to create HTTP client")?;

    Ok(Self {
      base_url: parsed,
      client,
    })
  }
}

#[async_trait]
impl ThemeApi for TumblrClient {
  fn base_url(&self) -> &Url {
    &self.base_url
  }

  async fn post_theme(&self, request: &ThemeRequest) -> Result<String, UploadError> {
    let mut builder = self.client.post(request.url());
    for (name, value) in request.headers() {
      builder = builder.header(*name, value.as_str());
    }

    let response = builder
      .json(request.body())
      .send()
      .await
      .map_err(|e| UploadError::network(&e))?;

    let status = response.status();
    debug!(%status, url = request.url(), "Received customize_api response");

    response.text().await.map_err(|e| UploadError::network(&e))
  }
}
