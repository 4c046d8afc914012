//! Command-line interface definitions for tumblr-upload.
//!
//! This module defines the CLI structure using clap derives and dispatches
//! to the command handlers, which own every exit-code decision.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::completions::handle_completions_command;
use crate::commands::credentials::handle_credentials_command;
use crate::commands::upload::handle_upload;
use crate::commands::version::handle_version_command;
use crate::tumblr::DEFAULT_BASE_URL;

/// tumblr-upload - Upload HTML themes to Tumblr
#[derive(Debug, Parser)]
#[command(
  name = "tumblr-upload",
  version,
  about = "Upload HTML theme templates to Tumblr",
  long_about = "A command-line tool for uploading a custom HTML theme to a Tumblr blog.\n\
                Authenticates with session cookies taken from a logged-in browser, read from\n\
                --credentials or from a tumblr-upload.ini file.",
  after_help = "Examples:\n  $ tumblr-upload blog-name index.html\n  ✓ Uploaded",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Blog identifier (the part before .tumblr.com)
  #[arg(value_name = "BLOG")]
  pub blog: Option<String>,

  /// Theme template to upload
  #[arg(value_name = "FILE")]
  pub file: Option<PathBuf>,

  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Option<Command>,

  /// Credential options
  #[command(flatten)]
  pub auth: AuthOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,

  /// Network options
  #[command(flatten)]
  pub network: NetworkOptions,
}

/// Subcommands for inspection and shell integration
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Show which credentials would be used for a blog, without uploading
  Credentials {
    /// Blog identifier to resolve credentials for
    #[arg(value_name = "BLOG")]
    blog: String,
  },

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

/// Credential options
#[derive(Debug, Parser)]
pub struct AuthOptions {
  /// Comma-separated credentials in this order: user_form_key,anon_id,pfe,pfp,pfs,pfu
  #[arg(long, value_name = "LIST", conflicts_with = "config")]
  pub credentials: Option<String>,

  /// Read credentials from this file instead of searching for tumblr-upload.ini
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Resolve credentials and show the request target without uploading
  #[arg(long)]
  pub dry_run: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Network options
#[derive(Debug, Parser)]
pub struct NetworkOptions {
  /// Request timeout in seconds (no timeout by default)
  #[arg(long, value_name = "SECONDS")]
  pub timeout: Option<u64>,

  /// Base URL of the Tumblr web app
  #[arg(long, default_value = DEFAULT_BASE_URL, value_name = "URL", hide = true)]
  pub api_url: String,
}

impl Cli {
  /// Parse CLI arguments from the environment
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if self.command.is_some() {
      return Ok(());
    }

    match (&self.blog, &self.file) {
      (Some(_), Some(_)) => {}
      _ => return Err("You must supply a Tumblr ID and a filename".to_string()),
    }

    if self.network.timeout == Some(0) {
      return Err("--timeout must be at least 1 second".to_string());
    }

    Ok(())
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse_args();

  init_tracing(&cli.behavior);

  // Create color scheme based on user preference
  let colors = ColorScheme::new(cli.behavior.color);

  // Validate CLI arguments
  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("✗"), e);
    process::exit(1);
  }

  // Handle subcommands
  if let Some(ref command) = cli.command {
    match command {
      Command::Credentials { blog } => {
        handle_credentials_command(blog, &cli, &colors);
      }
      Command::Version { json, short } => {
        handle_version_command(*json, *short, &colors);
      }
      Command::Completions { shell } => {
        handle_completions_command(*shell);
      }
    }
    return;
  }

  // Handle the upload itself
  if let (Some(blog), Some(file)) = (&cli.blog, &cli.file) {
    handle_upload(blog, file, &cli, &colors).await;
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tumblr-upload").chain(args.iter().copied())).unwrap()
  }

  #[test]
  fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_upload_arguments() {
    let cli = parse(&["myblog", "theme.html"]);

    assert_eq!(cli.blog.as_deref(), Some("myblog"));
    assert_eq!(cli.file, Some(PathBuf::from("theme.html")));
    assert_eq!(cli.network.api_url, DEFAULT_BASE_URL);
    assert_eq!(cli.network.timeout, None);
    assert!(cli.validate().is_ok());
  }

  #[test]
  fn test_parse_inline_credentials() {
    let cli = parse(&["myblog", "theme.html", "--credentials", "k,a,e,p,s,u"]);
    assert_eq!(cli.auth.credentials.as_deref(), Some("k,a,e,p,s,u"));
  }

  #[test]
  fn test_credentials_conflicts_with_config() {
    let result = Cli::try_parse_from([
      "tumblr-upload",
      "myblog",
      "theme.html",
      "--credentials",
      "k,a,e,p,s,u",
      "--config",
      "x.ini",
    ]);
    assert!(result.is_err());
  }

  #[test]
  fn test_cli_validation_requires_blog_and_file() {
    let cli = parse(&["myblog"]);
    let result = cli.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("You must supply a Tumblr ID and a filename"));
  }

  #[test]
  fn test_cli_validation_rejects_zero_timeout() {
    let cli = parse(&["myblog", "theme.html", "--timeout", "0"]);
    assert!(cli.validate().unwrap_err().contains("--timeout"));
  }

  #[test]
  fn test_subcommand_skips_upload_validation() {
    let cli = parse(&["version", "--short"]);
    assert!(matches!(cli.command, Some(Command::Version { short: true, .. })));
    assert!(cli.validate().is_ok());
  }
}
