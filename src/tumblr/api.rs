//! Trait definitions for talking to Tumblr.

use async_trait::async_trait;
use url::Url;

use super::{ThemeRequest, UploadError};

/// Transport for theme uploads (enables testing with fake implementations).
#[async_trait]
pub trait ThemeApi: Send + Sync {
  /// Scheme and host requests are built against.
  fn base_url(&self) -> &Url;

  /// Send `request` once and return the fully buffered response body,
  /// whatever the HTTP status.
  ///
  /// # Errors
  /// Returns [`UploadError::Network`] when the request cannot be sent or the
  /// body cannot be read to the end.
  async fn post_theme(&self, request: &ThemeRequest) -> Result<String, UploadError>;
}
