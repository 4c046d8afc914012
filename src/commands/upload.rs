//! The main upload flow: read the template, resolve credentials, send it.

use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::commands::credentials::{CredentialSource, print_setup_hint};
use crate::tumblr::{TumblrClient, UploadError, Uploader};

/// Upload `file` as the theme of `blog`, printing the result and exiting
/// non-zero on any failure.
pub(crate) async fn handle_upload(blog: &str, file: &Path, cli: &Cli, colors: &ColorScheme) {
  let template = match read_template(file).await {
    Ok(template) => template,
    Err(e) => fail(colors, e.to_string()),
  };

  let creds = match CredentialSource::from_cli(cli).resolve(blog) {
    Ok(creds) => creds,
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), e);
      print_setup_hint(blog, colors);
      process::exit(1);
    }
  };
  debug!(?creds, "Resolved credentials");

  let client = match TumblrClient::new(&cli.network.api_url, cli.network.timeout.map(Duration::from_secs)) {
    Ok(client) => client,
    Err(e) => fail(colors, format!("Failed to create API client: {e:#}")),
  };
  let uploader = Uploader::new(Arc::new(client));

  if cli.behavior.dry_run {
    let request = uploader.prepare(&creds, &template);
    println!(
      "{} {}",
      colors.warning("⚠"),
      colors.warning("DRY RUN: nothing will be uploaded")
    );
    println!("  {}: {}", colors.emphasis("POST"), colors.link(request.url()));
    println!(
      "  {}: {} bytes",
      colors.emphasis("Template"),
      colors.number(template.len())
    );
    return;
  }

  match uploader.upload(&creds, &template).await {
    Ok(()) => {
      if !cli.behavior.quiet {
        println!("{} {}", colors.success("✓"), colors.success("Uploaded"));
      }
    }
    Err(e) => {
      eprintln!("{} Failed to upload: {e}", colors.error("✗"));
      if matches!(e, UploadError::AuthenticationFailed) {
        eprintln!(
          "  {}",
          colors.dimmed("Session cookies expire; copy fresh values from a logged-in browser")
        );
      }
      process::exit(1);
    }
  }
}

/// Read the theme template at `file`.
///
/// # Errors
/// Fails when the file cannot be read or holds only whitespace.
pub(crate) async fn read_template(file: &Path) -> Result<String> {
  let template = match tokio::fs::read_to_string(file).await {
    Ok(template) => template,
    Err(e) => {
      debug!(path = %file.display(), error = %e, "Failed to read template");
      bail!("File {} not found", file.display());
    }
  };

  // Tumblr accepts an empty theme and then silently keeps the old one
  if template.trim().is_empty() {
    bail!("Template {} is empty, nothing to upload", file.display());
  }

  Ok(template)
}

fn fail(colors: &ColorScheme, message: String) -> ! {
  eprintln!("{} {message}", colors.error("✗"));
  process::exit(1);
}
