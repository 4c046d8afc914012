//! One-shot theme uploads.
//!
//! An [`Uploader`] sends exactly one request per call and never retries.
//! Overlapping uploads for the same blog are not coordinated; callers that
//! care about ordering must wait for one outcome before starting the next.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::api::ThemeApi;
use super::response::classify_response;
use super::{ThemeRequest, UploadError};
use crate::credentials::CredentialSet;

/// Uploads theme templates through a [`ThemeApi`] transport.
#[derive(Clone)]
pub struct Uploader {
  api: Arc<dyn ThemeApi>,
}

/// An upload running in the background.
///
/// Dropping the handle does not cancel the upload; call
/// [`UploadHandle::abort`] for that.
#[derive(Debug)]
pub struct UploadHandle {
  task: JoinHandle<Result<(), UploadError>>,
}

impl Uploader {
  /// Create an uploader sending requests through `api`.
  pub fn new(api: Arc<dyn ThemeApi>) -> Self {
    Self { api }
  }

  /// Build the request that [`Uploader::upload`] would send, without sending
  /// it.
  pub fn prepare(&self, creds: &CredentialSet, template: &str) -> ThemeRequest {
    ThemeRequest::new(self.api.base_url(), creds, template)
  }

  /// Upload `template` as the theme of the blog named by `creds`.
  ///
  /// # Errors
  /// - [`UploadError::Network`] when the transport fails.
  /// - [`UploadError::AuthenticationFailed`] when Tumblr rejects the session.
  /// - [`UploadError::MalformedResponse`] when the reply isn't JSON.
  pub async fn upload(&self, creds: &CredentialSet, template: &str) -> Result<(), UploadError> {
    let request = self.prepare(creds, template);
    info!(blog = creds.tumblr_id(), bytes = template.len(), "Uploading theme");

    let body = self.api.post_theme(&request).await?;
    let outcome = classify_response(&body);

    match &outcome {
      Ok(()) => info!(blog = creds.tumblr_id(), "Theme uploaded"),
      Err(e) => warn!(blog = creds.tumblr_id(), error = %e, "Theme upload rejected"),
    }
    outcome
  }

  /// Start an upload on the current tokio runtime and return a handle that
  /// can abort it or wait for its outcome.
  pub fn spawn(&self, creds: CredentialSet, template: String) -> UploadHandle {
    let uploader = self.clone();
    let task = tokio::spawn(async move { uploader.upload(&creds, &template).await });
    UploadHandle { task }
  }
}

impl UploadHandle {
  /// Cancel the in-flight request. The outcome becomes
  /// [`UploadError::Network`] unless the upload already finished.
  pub fn abort(&self) {
    self.task.abort();
  }

  /// Whether the upload has completed (successfully, with an error, or by
  /// being aborted).
  pub fn is_finished(&self) -> bool {
    self.task.is_finished()
  }

  /// Wait for the upload's single outcome.
  pub async fn outcome(self) -> Result<(), UploadError> {
    match self.task.await {
      Ok(outcome) => outcome,
      Err(e) if e.is_cancelled() => Err(UploadError::Network("upload aborted".to_string())),
      Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
  }
}
