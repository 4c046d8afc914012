//! Strongly typed credentials and related errors.
//!
//! A [`CredentialSet`] is the only thing the uploader needs to authenticate:
//! the blog identifier, the account's form key, the anonymous session id and
//! the four `pf*` session cookies copied out of a logged-in browser.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of every credential field, in the positional order accepted by
/// [`CredentialSet::from_ordered_values`].
pub const CREDENTIAL_FIELDS: [&str; 7] = ["tumblr_id", "user_form_key", "anon_id", "pfe", "pfp", "pfs", "pfu"];

/// A complete, validated set of Tumblr session credentials.
///
/// Instances can only be built through [`CredentialSet::from_ordered_values`]
/// or [`CredentialSet::from_record`], both of which reject empty or missing
/// fields, so holding a `CredentialSet` means every field is usable.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialSet {
  tumblr_id: String,
  user_form_key: String,
  anon_id: String,
  pfe: String,
  pfp: String,
  pfs: String,
  pfu: String,
}

/// Named, possibly partial credential fields as found in a config file or
/// assembled by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
  pub tumblr_id: Option<String>,
  pub user_form_key: Option<String>,
  pub anon_id: Option<String>,
  pub pfe: Option<String>,
  pub pfp: Option<String>,
  pub pfs: Option<String>,
  pub pfu: Option<String>,
}

/// Errors that can occur while resolving credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
  /// A credential set was built with absent or empty fields.
  #[error("Credentials missing or incomplete!")]
  Incomplete,

  /// The blog identifier cannot name a URL path segment.
  #[error("Blog identifier `{blog}` is not valid")]
  InvalidBlogId { blog: String },

  /// No configuration file was found in any candidate directory.
  #[error("Credentials missing! I looked for {file_name} in:\n{}", display_paths(.searched))]
  ConfigNotFound {
    file_name: String,
    searched: Vec<PathBuf>,
  },

  /// The configuration file has no section for the requested blog.
  #[error("Blog `{blog}` doesn't exist in the config file {}", .path.display())]
  BlogNotFound { blog: String, path: PathBuf },

  /// The blog's section is missing required fields.
  #[error(
    "Credentials incomplete for blog `{blog}` in {}: missing {}; found {}",
    .path.display(),
    display_fields(.missing),
    display_fields(.present)
  )]
  IncompleteConfig {
    blog: String,
    path: PathBuf,
    missing: Vec<&'static str>,
    present: Vec<&'static str>,
  },

  /// An I/O error occurred while reading credentials.
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

fn display_fields(fields: &[&'static str]) -> String {
  if fields.is_empty() {
    "nothing".to_string()
  } else {
    fields.join(", ")
  }
}

fn display_paths(paths: &[PathBuf]) -> String {
  paths
    .iter()
    .map(|p| p.display().to_string())
    .collect::<Vec<_>>()
    .join("\n")
}

impl CredentialSet {
  /// Build a credential set from seven positional values.
  ///
  /// The order is `tumblr_id, user_form_key, anon_id, pfe, pfp, pfs, pfu`.
  ///
  /// # Errors
  /// Returns [`CredentialError::Incomplete`] when the slice does not hold
  /// exactly seven values or any of them is empty, and
  /// [`CredentialError::InvalidBlogId`] for a `.` or `..` blog identifier.
  pub fn from_ordered_values<S: AsRef<str>>(values: &[S]) -> Result<Self, CredentialError> {
    let [tumblr_id, user_form_key, anon_id, pfe, pfp, pfs, pfu] = values else {
      return Err(CredentialError::Incomplete);
    };

    Self::from_record(CredentialRecord {
      tumblr_id: Some(tumblr_id.as_ref().to_string()),
      user_form_key: Some(user_form_key.as_ref().to_string()),
      anon_id: Some(anon_id.as_ref().to_string()),
      pfe: Some(pfe.as_ref().to_string()),
      pfp: Some(pfp.as_ref().to_string()),
      pfs: Some(pfs.as_ref().to_string()),
      pfu: Some(pfu.as_ref().to_string()),
    })
  }

  /// Build a credential set from named fields.
  ///
  /// # Errors
  /// - [`CredentialError::Incomplete`] when any field is absent or empty.
  /// - [`CredentialError::InvalidBlogId`] when the blog identifier is `.` or
  ///   `..`.
  pub fn from_record(record: CredentialRecord) -> Result<Self, CredentialError> {
    if !record.missing_fields().is_empty() {
      return Err(CredentialError::Incomplete);
    }
    if let Some(blog @ ("." | "..")) = record.tumblr_id.as_deref() {
      return Err(CredentialError::InvalidBlogId { blog: blog.to_string() });
    }

    // missing_fields() guarantees every field is Some and non-empty
    let take = |field: Option<String>| field.unwrap_or_default();
    Ok(Self {
      tumblr_id: take(record.tumblr_id),
      user_form_key: take(record.user_form_key),
      anon_id: take(record.anon_id),
      pfe: take(record.pfe),
      pfp: take(record.pfp),
      pfs: take(record.pfs),
      pfu: take(record.pfu),
    })
  }

  /// Blog identifier, used in the API path and the request body.
  pub fn tumblr_id(&self) -> &str {
    &self.tumblr_id
  }

  pub fn user_form_key(&self) -> &str {
    &self.user_form_key
  }

  pub fn anon_id(&self) -> &str {
    &self.anon_id
  }

  pub fn pfe(&self) -> &str {
    &self.pfe
  }

  pub fn pfp(&self) -> &str {
    &self.pfp
  }

  pub fn pfs(&self) -> &str {
    &self.pfs
  }

  pub fn pfu(&self) -> &str {
    &self.pfu
  }
}

impl fmt::Debug for CredentialSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CredentialSet")
      .field("tumblr_id", &self.tumblr_id)
      .field("user_form_key", &mask(&self.user_form_key))
      .field("anon_id", &mask(&self.anon_id))
      .field("pfe", &mask(&self.pfe))
      .field("pfp", &mask(&self.pfp))
      .field("pfs", &mask(&self.pfs))
      .field("pfu", &mask(&self.pfu))
      .finish()
  }
}

impl CredentialRecord {
  /// Look up a field by its config-file name.
  pub fn get(&self, field: &str) -> Option<&str> {
    let value = match field {
      "tumblr_id" => &self.tumblr_id,
      "user_form_key" => &self.user_form_key,
      "anon_id" => &self.anon_id,
      "pfe" => &self.pfe,
      "pfp" => &self.pfp,
      "pfs" => &self.pfs,
      "pfu" => &self.pfu,
      _ => return None,
    };
    value.as_deref()
  }

  /// Set a field by its config-file name. Unknown names are ignored and
  /// reported back as `false`.
  pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
    let slot = match field {
      "tumblr_id" => &mut self.tumblr_id,
      "user_form_key" => &mut self.user_form_key,
      "anon_id" => &mut self.anon_id,
      "pfe" => &mut self.pfe,
      "pfp" => &mut self.pfp,
      "pfs" => &mut self.pfs,
      "pfu" => &mut self.pfu,
      _ => return false,
    };
    *slot = Some(value.into());
    true
  }

  /// Fields that are absent or empty, in canonical order.
  pub fn missing_fields(&self) -> Vec<&'static str> {
    CREDENTIAL_FIELDS
      .into_iter()
      .filter(|field| self.get(field).is_none_or(str::is_empty))
      .collect()
  }

  /// Fields that carry a non-empty value, in canonical order.
  pub fn present_fields(&self) -> Vec<&'static str> {
    CREDENTIAL_FIELDS
      .into_iter()
      .filter(|field| self.get(field).is_some_and(|value| !value.is_empty()))
      .collect()
  }
}

/// Mask a secret for display, keeping at most the first four characters of
/// long values.
pub fn mask(secret: &str) -> String {
  let len = secret.chars().count();
  if len > 8 {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}{}", "*".repeat(len - 4))
  } else {
    "*".repeat(len)
  }
}
