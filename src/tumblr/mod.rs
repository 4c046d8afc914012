//! Tumblr module providing the transport abstraction, the HTTP client,
//! request construction, response classification and the uploader.

pub mod api;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod uploader;

pub use api::ThemeApi;
pub use client::TumblrClient;
pub use error::UploadError;
pub use request::{DEFAULT_BASE_URL, ThemeBody, ThemeRequest, api_url, cookie_header};
pub use response::classify_response;
pub use uploader::{UploadHandle, Uploader};
