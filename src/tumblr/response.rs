//! Interpretation of `customize_api` responses.
//!
//! Tumblr answers with HTTP 200 for most failures, so the status line is
//! ignored and the buffered body alone decides the outcome.

use super::UploadError;

/// Phrases Tumblr uses when the session cookies are not accepted.
const AUTH_FAILURE_PHRASES: [&str; 2] = ["authentication required", "permission"];

/// Classify a fully buffered response body.
///
/// 1. Any authentication phrase (case-insensitive) is an
///    [`UploadError::AuthenticationFailed`].
/// 2. A body that isn't JSON is an [`UploadError::MalformedResponse`].
/// 3. Anything else is a success.
pub fn classify_response(body: &str) -> Result<(), UploadError> {
  let lowered = body.to_lowercase();
  if AUTH_FAILURE_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
    return Err(UploadError::AuthenticationFailed);
  }

  serde_json::from_str::<serde_json::Value>(body).map_err(|_| UploadError::MalformedResponse {
    body: body.to_string(),
  })?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_json_body_is_success() {
    assert_eq!(classify_response(r#"{"meta":{"status":200}}"#), Ok(()));
    assert_eq!(classify_response("[]"), Ok(()));
  }

  #[test]
  fn test_authentication_phrase_any_case() {
    for body in [
      "Authentication required",
      "<html><body>AUTHENTICATION REQUIRED</body></html>",
      r#"{"error":"authentication required"}"#,
    ] {
      assert_eq!(classify_response(body), Err(UploadError::AuthenticationFailed), "{body}");
    }
  }

  #[test]
  fn test_permission_phrase_wins_over_valid_json() {
    assert_eq!(
      classify_response(r#"{"error":"You do not have Permission to edit this blog"}"#),
      Err(UploadError::AuthenticationFailed)
    );
  }

  #[test]
  fn test_non_json_is_malformed() {
    assert_eq!(
      classify_response("gibberish"),
      Err(UploadError::MalformedResponse {
        body: "gibberish".to_string()
      })
    );
  }

  #[test]
  fn test_empty_body_is_malformed() {
    assert!(matches!(
      classify_response(""),
      Err(UploadError::MalformedResponse { .. })
    ));
  }
}
