//! Fake Tumblr transport for testing
//!
//! Returns canned bodies or transport failures without touching the network
//! and records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use tumblr_upload::tumblr::{DEFAULT_BASE_URL, ThemeApi, ThemeRequest, UploadError};
use url::Url;

/// What the fake answers with.
#[derive(Debug, Clone)]
pub enum FakeReply {
  Body(String),
  ConnectionError(String),
}

/// A fake transport that records requests and replies with a fixed answer.
pub struct FakeTumblrClient {
  base_url: Url,
  reply: FakeReply,
  requests: Mutex<Vec<ThemeRequest>>,
}

impl FakeTumblrClient {
  /// A fake that answers every request with `body`.
  pub fn replying(body: impl Into<String>) -> Self {
    Self {
      base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
      reply: FakeReply::Body(body.into()),
      requests: Mutex::new(Vec::new()),
    }
  }

  /// A fake that fails every request at the transport level.
  pub fn failing(message: impl Into<String>) -> Self {
    Self {
      base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
      reply: FakeReply::ConnectionError(message.into()),
      requests: Mutex::new(Vec::new()),
    }
  }

  /// Requests received so far.
  pub fn requests(&self) -> Vec<ThemeRequest> {
    self.requests.lock().unwrap().clone()
  }
}

#[async_trait]
impl ThemeApi for FakeTumblrClient {
  fn base_url(&self) -> &Url {
    &self.base_url
  }

  async fn post_theme(&self, request: &ThemeRequest) -> Result<String, UploadError> {
    self.requests.lock().unwrap().push(request.clone());

    match &self.reply {
      FakeReply::Body(body) => Ok(body.clone()),
      FakeReply::ConnectionError(message) => Err(UploadError::Network(message.clone())),
    }
  }
}
