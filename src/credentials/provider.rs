//! Credential provider abstractions.
//!
//! Defines the [`CredentialsProvider`] trait so the CLI can pick between
//! inline credentials and the `tumblr-upload.ini` file without changing call
//! sites.

use super::{CredentialError, CredentialSet};

/// A source of [`CredentialSet`]s keyed by blog identifier.
pub trait CredentialsProvider {
  /// Resolve the credentials for `blog`.
  ///
  /// # Arguments
  /// * `blog` - Blog identifier the template will be uploaded to.
  ///
  /// # Errors
  /// Returns `Err(CredentialError)` when the provider cannot produce a
  /// complete credential set for the blog. No network I/O happens here.
  fn get_credentials(&self, blog: &str) -> Result<CredentialSet, CredentialError>;
}
