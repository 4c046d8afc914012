//! Credentials passed directly on the command line.
//!
//! `--credentials` carries six comma-separated values
//! (`user_form_key,anon_id,pfe,pfp,pfs,pfu`); the blog identifier comes from
//! the positional argument and is prepended before validation.

use super::{CredentialError, CredentialSet, CredentialsProvider};

/// A provider wrapping a comma-separated credential list.
#[derive(Clone)]
pub struct InlineProvider {
  list: String,
}

impl InlineProvider {
  /// Wrap the raw `--credentials` value.
  pub fn new(list: impl Into<String>) -> Self {
    Self { list: list.into() }
  }
}

impl CredentialsProvider for InlineProvider {
  fn get_credentials(&self, blog: &str) -> Result<CredentialSet, CredentialError> {
    let values: Vec<&str> = std::iter::once(blog)
      .chain(self.list.split(',').map(str::trim))
      .collect();

    CredentialSet::from_ordered_values(&values)
  }
}
