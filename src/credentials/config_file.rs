//! `tumblr-upload.ini` discovery and blog lookup.
//!
//! The config file is searched for in an explicit, ordered list of candidate
//! directories. The first directory holding a readable file wins; files are
//! never merged.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ini::{IniSections, parse_ini};
use super::{CredentialError, CredentialRecord, CredentialSet, CredentialsProvider};

/// File name looked up in every candidate directory.
pub const CONFIG_FILE_NAME: &str = "tumblr-upload.ini";

/// Ordered list of directories that may contain [`CONFIG_FILE_NAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSearch {
  candidates: Vec<PathBuf>,
}

/// A loaded config file: blog sections plus the path they came from.
#[derive(Debug, Clone)]
pub struct CredentialsConfig {
  path: PathBuf,
  blogs: IniSections,
}

impl ConfigSearch {
  /// Search the given directories, in order.
  pub fn new(candidates: Vec<PathBuf>) -> Self {
    Self { candidates }
  }

  /// The conventional search list: the working directory, the directory of
  /// the running executable, and the project root.
  ///
  /// Directories that cannot be determined are left out, and duplicates are
  /// dropped while keeping the first occurrence.
  pub fn default_candidates() -> Self {
    let cwd = env::current_dir().ok();
    let exe_dir = env::current_exe()
      .ok()
      .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let project_root = cwd.as_deref().map(find_project_root);

    let mut candidates: Vec<PathBuf> = Vec::new();
    for dir in [cwd, exe_dir, project_root].into_iter().flatten() {
      if !candidates.contains(&dir) {
        candidates.push(dir);
      }
    }

    Self::new(candidates)
  }

  /// Directories searched, in order.
  pub fn candidates(&self) -> &[PathBuf] {
    &self.candidates
  }

  /// Load the first config file found among the candidates.
  ///
  /// # Errors
  /// Returns [`CredentialError::ConfigNotFound`] listing every searched
  /// directory when none of them holds a readable config file.
  pub fn load(&self) -> Result<CredentialsConfig, CredentialError> {
    for dir in &self.candidates {
      let path = dir.join(CONFIG_FILE_NAME);
      debug!(path = %path.display(), "Looking for credentials config");

      if !path.is_file() {
        continue;
      }

      match CredentialsConfig::read(&path) {
        Ok(config) => {
          debug!(path = %path.display(), blogs = config.blogs.len(), "Loaded credentials config");
          return Ok(config);
        }
        Err(e) => {
          warn!(path = %path.display(), error = %e, "Skipping unreadable credentials config");
        }
      }
    }

    Err(CredentialError::ConfigNotFound {
      file_name: CONFIG_FILE_NAME.to_string(),
      searched: self.candidates.clone(),
    })
  }
}

/// Walk up from `start` looking for a directory that looks like a project
/// root (contains `.git` or `Cargo.toml`). Falls back to `start` itself.
fn find_project_root(start: &Path) -> PathBuf {
  start
    .ancestors()
    .find(|dir| dir.join(".git").exists() || dir.join("Cargo.toml").is_file())
    .unwrap_or(start)
    .to_path_buf()
}

impl CredentialsConfig {
  /// Read and parse the config file at `path`.
  ///
  /// # Errors
  /// Returns [`CredentialError::Io`] if the file cannot be read.
  pub fn read(path: &Path) -> Result<Self, CredentialError> {
    let content = std::fs::read_to_string(path)?;
    Ok(Self::parse(path, &content))
  }

  /// Parse config `content` attributed to `path`.
  pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
    Self {
      path: path.into(),
      blogs: parse_ini(content),
    }
  }

  /// Path the config was loaded from.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Blog identifiers present in the file.
  pub fn blog_ids(&self) -> impl Iterator<Item = &str> {
    self.blogs.keys().map(String::as_str)
  }

  /// The raw, possibly partial credential fields stored for `blog`, with the
  /// blog identifier injected as `tumblr_id`.
  pub fn record(&self, blog: &str) -> Option<CredentialRecord> {
    let section = self.blogs.get(blog)?;

    let mut record = CredentialRecord::default();
    for (key, value) in section {
      if !record.set(key, value.as_str()) {
        debug!(blog, key = %key, "Ignoring unknown credentials field");
      }
    }
    record.tumblr_id = Some(blog.to_string());

    Some(record)
  }

  /// Build the credential set for `blog`.
  ///
  /// # Errors
  /// - [`CredentialError::BlogNotFound`] when the file has no section for
  ///   `blog`.
  /// - [`CredentialError::IncompleteConfig`] when the section lacks any
  ///   required field.
  pub fn credentials_for(&self, blog: &str) -> Result<CredentialSet, CredentialError> {
    let record = self.record(blog).ok_or_else(|| CredentialError::BlogNotFound {
      blog: blog.to_string(),
      path: self.path.clone(),
    })?;

    let missing = record.missing_fields();
    if !missing.is_empty() {
      return Err(CredentialError::IncompleteConfig {
        blog: blog.to_string(),
        path: self.path.clone(),
        missing,
        present: record.present_fields(),
      });
    }

    CredentialSet::from_record(record)
  }
}

/// Where a [`ConfigFileProvider`] gets its config file from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
  /// Search a list of candidate directories.
  Search(ConfigSearch),
  /// Load exactly this file.
  File(PathBuf),
}

/// A credentials provider backed by `tumblr-upload.ini`.
#[derive(Debug, Clone)]
pub struct ConfigFileProvider {
  source: ConfigSource,
}

impl ConfigFileProvider {
  /// Search the given directories for the config file.
  pub fn with_search(search: ConfigSearch) -> Self {
    Self {
      source: ConfigSource::Search(search),
    }
  }

  /// Use an explicit config file path.
  pub fn with_file(path: impl Into<PathBuf>) -> Self {
    Self {
      source: ConfigSource::File(path.into()),
    }
  }

  /// Where this provider reads from.
  pub fn source(&self) -> &ConfigSource {
    &self.source
  }

  /// Load the config file this provider points at.
  ///
  /// # Errors
  /// Returns [`CredentialError::ConfigNotFound`] if no file is found, or
  /// [`CredentialError::Io`] if an explicit file cannot be read.
  pub fn load(&self) -> Result<CredentialsConfig, CredentialError> {
    match &self.source {
      ConfigSource::Search(search) => search.load(),
      ConfigSource::File(path) => {
        if !path.is_file() {
          let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
          let file_name = path
            .file_name()
            .map_or_else(|| CONFIG_FILE_NAME.to_string(), |name| name.to_string_lossy().into_owned());
          return Err(CredentialError::ConfigNotFound {
            file_name,
            searched: vec![dir],
          });
        }
        CredentialsConfig::read(path)
      }
    }
  }
}

impl Default for ConfigFileProvider {
  fn default() -> Self {
    Self::with_search(ConfigSearch::default_candidates())
  }
}

impl CredentialsProvider for ConfigFileProvider {
  fn get_credentials(&self, blog: &str) -> Result<CredentialSet, CredentialError> {
    self.load()?.credentials_for(blog)
  }
}
