//! Tumblr theme uploader library
//!
//! Resolves Tumblr session credentials and uploads HTML theme templates
//! through the theme editor's `customize_api` endpoint.

pub mod cli;
pub mod color;
pub mod commands;
pub mod credentials;
pub mod tumblr;
