//! Construction of the theme upload request.
//!
//! The `customize_api` endpoint is what Tumblr's own theme editor calls, so
//! the request has to look like a same-site XHR from that page: session
//! cookies, an `X-Requested-With` marker and a referer pointing back at the
//! customize screen. Requests missing any of these are rejected.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::credentials::CredentialSet;

/// Base URL of the Tumblr web application.
pub const DEFAULT_BASE_URL: &str = "https://www.tumblr.com";

/// JSON payload accepted by `customize_api`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeBody {
  pub custom_theme: String,
  pub id: String,
  pub user_form_key: String,
}

/// A fully built upload request: target URL, headers and JSON body.
#[derive(Debug, Clone)]
pub struct ThemeRequest {
  url: Url,
  headers: Vec<(&'static str, String)>,
  body: ThemeBody,
}

impl ThemeRequest {
  /// Build the upload request for `template` on the blog named by `creds`.
  ///
  /// # Arguments
  /// * `base_url` - Scheme and host of the Tumblr web app (normally
  ///   [`DEFAULT_BASE_URL`]).
  /// * `creds` - Session credentials for the target blog.
  /// * `template` - Theme HTML, sent verbatim.
  pub fn new(base_url: &Url, creds: &CredentialSet, template: &str) -> Self {
    let id = creds.tumblr_id();

    let headers = vec![
      ("content-type", "application/json".to_string()),
      ("accept", "application/json, text/javascript, */*; q=0.01".to_string()),
      ("x-requested-with", "XMLHttpRequest".to_string()),
      ("pragma", "no-cache".to_string()),
      ("cache-control", "no-cache".to_string()),
      ("cookie", cookie_header(creds)),
      ("referer", referer_url(base_url, id).into()),
    ];

    Self {
      url: api_url(base_url, id),
      headers,
      body: ThemeBody {
        custom_theme: template.to_string(),
        id: id.to_string(),
        user_form_key: creds.user_form_key().to_string(),
      },
    }
  }

  /// Absolute URL the request is posted to.
  pub fn url(&self) -> &str {
    self.url.as_str()
  }

  /// Headers to send, with lowercase names.
  pub fn headers(&self) -> &[(&'static str, String)] {
    &self.headers
  }

  /// Value of the header `name` (case-insensitive), if set.
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }

  /// JSON payload, serialized as-is onto the wire.
  pub fn body(&self) -> &ThemeBody {
    &self.body
  }
}

/// URL of the theme endpoint for `tumblr_id`. The identifier always stays a
/// single percent-encoded path segment.
pub fn api_url(base_url: &Url, tumblr_id: &str) -> Url {
  join_segments(base_url, &["customize_api", "blog", tumblr_id])
}

/// The customize screen the editor XHR originates from.
fn referer_url(base_url: &Url, tumblr_id: &str) -> Url {
  let mut url = join_segments(base_url, &["customize", tumblr_id]);
  let encoded_id = url
    .path_segments()
    .and_then(|segments| segments.last())
    .unwrap_or_default()
    .to_string();
  url.set_query(Some(&format!("redirect_to=/blog/{encoded_id}")));
  url
}

fn join_segments(base_url: &Url, segments: &[&str]) -> Url {
  let mut url = base_url.clone();
  url.set_query(None);
  url.set_fragment(None);
  // http(s) URLs always have a hierarchical path
  if let Ok(mut path) = url.path_segments_mut() {
    path.pop_if_empty().extend(segments);
  }
  url
}

/// Synthesize the `Cookie` header a logged-in browser would send.
pub fn cookie_header(creds: &CredentialSet) -> String {
  format!(
    "logged_in=1; pfp={}; pfs={}; pfe={}; pfu={}; anon_id={};",
    creds.pfp(),
    creds.pfs(),
    creds.pfe(),
    creds.pfu(),
    creds.anon_id()
  )
}
