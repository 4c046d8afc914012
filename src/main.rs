//! tumblr-upload - Upload HTML themes to Tumblr
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  tumblr_upload::cli::run().await;
}
