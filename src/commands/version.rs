//! Version/metadata reporting.
//!
//! Implements `tumblr-upload version`, printing either a short version, a
//! JSON document, or a colored summary of the build.

use std::process;

use serde::Serialize;

use crate::color::ColorScheme;

/// Build metadata embedded by `build.rs`.
#[derive(Debug, Serialize)]
struct BuildInfo {
  version: &'static str,
  git_commit: &'static str,
  build_timestamp: String,
  target: &'static str,
  rust_version: &'static str,
}

impl BuildInfo {
  fn current() -> Self {
    Self {
      version: env!("CARGO_PKG_VERSION"),
      git_commit: env!("GIT_HASH"),
      build_timestamp: format_timestamp(env!("BUILD_TIMESTAMP")),
      target: env!("TARGET"),
      rust_version: env!("RUSTC_VERSION"),
    }
  }

  fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// Render version and build metadata in JSON or human-readable form.
///
/// # Arguments
/// * `json` - When `true`, emit a JSON document instead of colored text.
/// * `short` - When `true`, print only the semantic version string.
/// * `colors` - Shared color palette for styled terminal output.
pub(crate) fn handle_version_command(json: bool, short: bool, colors: &ColorScheme) {
  let info = BuildInfo::current();

  if short {
    println!("{}", info.version);
    return;
  }

  if json {
    match info.to_json() {
      Ok(doc) => println!("{doc}"),
      Err(e) => {
        eprintln!("{} Failed to encode version info: {e}", colors.error("✗"));
        process::exit(1);
      }
    }
    return;
  }

  println!("{} {}", colors.emphasis("tumblr-upload"), colors.number(info.version));
  println!("{}: {}", colors.emphasis("Git commit"), colors.code(info.git_commit));
  println!("{}: {}", colors.emphasis("Built"), colors.dimmed(&info.build_timestamp));
  println!("{}: {}", colors.emphasis("Target"), info.target);
  println!("{}: {}", colors.emphasis("Rust version"), info.rust_version);
}

/// Convert Unix epoch seconds into `YYYY-MM-DD HH:MM:SS UTC`, or return the
/// input unchanged if it isn't a valid timestamp.
fn format_timestamp(timestamp: &str) -> String {
  timestamp
    .parse::<i64>()
    .ok()
    .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
    .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_timestamp() {
    assert_eq!(format_timestamp("0"), "1970-01-01 00:00:00 UTC");
    assert_eq!(format_timestamp("1443671682"), "2015-10-01 03:54:42 UTC");
  }

  #[test]
  fn test_format_timestamp_passthrough() {
    assert_eq!(format_timestamp("unknown"), "unknown");
  }

  #[test]
  fn test_build_info_serializes() {
    let doc: serde_json::Value = serde_json::from_str(&BuildInfo::current().to_json().unwrap()).unwrap();
    assert_eq!(doc["version"], env!("CARGO_PKG_VERSION"));
    assert!(doc.get("rust_version").is_some());
  }
}
