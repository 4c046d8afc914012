//! Credential inspection.
//!
//! `tumblr-upload credentials <BLOG>` resolves credentials exactly the way an
//! upload would and prints where they came from, with secrets masked. No
//! request is sent.

use std::process;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::credentials::{
  ConfigFileProvider, ConfigSearch, ConfigSource, CredentialError, CredentialSet, CredentialsProvider, InlineProvider,
  mask,
};

/// Where an upload's credentials are read from.
pub(crate) enum CredentialSource {
  /// `--credentials` on the command line.
  Inline(InlineProvider),
  /// `tumblr-upload.ini`, searched for or given by `--config`.
  ConfigFile(ConfigFileProvider),
}

impl CredentialSource {
  /// Pick the credential source requested on the command line: inline
  /// credentials win, then an explicit `--config`, then the default search.
  pub(crate) fn from_cli(cli: &Cli) -> Self {
    if let Some(list) = &cli.auth.credentials {
      return Self::Inline(InlineProvider::new(list.as_str()));
    }

    match &cli.auth.config {
      Some(path) => Self::ConfigFile(ConfigFileProvider::with_file(path)),
      None => Self::ConfigFile(ConfigFileProvider::with_search(ConfigSearch::default_candidates())),
    }
  }

  /// Resolve the credentials for `blog`.
  ///
  /// # Errors
  /// Propagates the provider's [`CredentialError`].
  pub(crate) fn resolve(&self, blog: &str) -> Result<CredentialSet, CredentialError> {
    match self {
      Self::Inline(provider) => provider.get_credentials(blog),
      Self::ConfigFile(provider) => provider.get_credentials(blog),
    }
  }
}

/// Print the resolved credentials for `blog`, or the reason they could not
/// be resolved.
pub(crate) fn handle_credentials_command(blog: &str, cli: &Cli, colors: &ColorScheme) {
  println!("{}\n", colors.emphasis("Credential Configuration"));
  println!("{}: {}", colors.emphasis("Blog"), blog);

  let source = CredentialSource::from_cli(cli);
  match &source {
    CredentialSource::Inline(_) => {
      println!("  {}: {}", colors.dimmed("Source"), colors.dimmed("--credentials flag"));
    }
    CredentialSource::ConfigFile(provider) => match provider.source() {
      ConfigSource::File(path) => {
        println!("  {}: {}", colors.dimmed("Source"), colors.path(path.display()));
      }
      ConfigSource::Search(search) => {
        println!("  {}:", colors.dimmed("Search path"));
        for dir in search.candidates() {
          println!("    {}", colors.path(dir.display()));
        }
      }
    },
  }

  let creds = match source.resolve(blog) {
    Ok(creds) => creds,
    Err(e) => {
      eprintln!("\n{} {}", colors.error("✗"), colors.error("Credentials unavailable"));
      eprintln!("  {e}");
      print_setup_hint(blog, colors);
      process::exit(1);
    }
  };

  println!();
  for (name, value) in [
    ("user_form_key", creds.user_form_key()),
    ("anon_id", creds.anon_id()),
    ("pfe", creds.pfe()),
    ("pfp", creds.pfp()),
    ("pfs", creds.pfs()),
    ("pfu", creds.pfu()),
  ] {
    println!(
      "{}: {} {}",
      colors.emphasis(format!("{name:>13}")),
      colors.dimmed(mask(value)),
      colors.dimmed(format!("({} characters)", value.chars().count()))
    );
  }

  println!("\n{} {}", colors.success("✓"), colors.success("Credentials complete"));
}

/// Explain how to provide credentials after a resolution failure.
pub(crate) fn print_setup_hint(blog: &str, colors: &ColorScheme) {
  eprintln!("\n{}", colors.info("Provide credentials via:"));
  eprintln!(
    "  • {} {}",
    colors.code("--credentials"),
    colors.dimmed("user_form_key,anon_id,pfe,pfp,pfs,pfu")
  );
  eprintln!("  • a tumblr-upload.ini file containing:");
  eprintln!("      [{blog}]");
  eprintln!("      user_form_key = ...");
  eprintln!("      anon_id = ...");
  eprintln!("      pfe = ...");
  eprintln!("      pfp = ...");
  eprintln!("      pfs = ...");
  eprintln!("      pfu = ...");
}
