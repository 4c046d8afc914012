//! Upload failure taxonomy.

use thiserror::Error;

/// Why an upload did not succeed.
///
/// Every upload attempt produces exactly one `Result<(), UploadError>`.
/// None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
  /// Tumblr rejected the session cookies.
  #[error("Authentication failed")]
  AuthenticationFailed,

  /// The response body was not JSON. The raw body is kept for diagnosis.
  #[error("Failed parsing of response: {body}")]
  MalformedResponse { body: String },

  /// The request never produced a complete response (connection refused,
  /// DNS failure, aborted transfer, ...).
  #[error("Network error: {0}")]
  Network(String),
}

impl UploadError {
  /// Build a [`UploadError::Network`] from a transport error, including its
  /// source chain so the root cause survives.
  pub fn network(err: &(dyn std::error::Error + 'static)) -> Self {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
      message.push_str(": ");
      message.push_str(&cause.to_string());
      source = cause.source();
    }
    Self::Network(message)
  }
}

#[cfg(test)]
mod tests {
  use std::io;

  use super::*;

  #[test]
  fn test_network_error_includes_source_chain() {
    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] io::Error);

    let err = Outer(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
    assert_eq!(
      UploadError::network(&err),
      UploadError::Network("error sending request: connection refused".to_string())
    );
  }

  #[test]
  fn test_malformed_response_carries_body() {
    let err = UploadError::MalformedResponse {
      body: "gibberish".to_string(),
    };
    assert_eq!(err.to_string(), "Failed parsing of response: gibberish");
  }
}
