//! Credentials management for Tumblr session authentication.
//!
//! Tumblr's theme editor API has no public token scheme, so uploads borrow a
//! logged-in browser session: the account's `user_form_key`, the `anon_id`
//! cookie and the four `pf*` session cookies. These are read either from the
//! command line or from a `tumblr-upload.ini` file:
//!
//! ```text
//! [your-blog-name]
//! user_form_key = ...
//! anon_id = ...
//! pfe = ...
//! pfp = ...
//! pfs = ...
//! pfu = ...
//! ```

mod config_file;
mod ini;
mod inline;
mod provider;
mod types;

pub use config_file::{CONFIG_FILE_NAME, ConfigFileProvider, ConfigSearch, ConfigSource, CredentialsConfig};
pub use ini::{IniSections, parse_ini};
pub use inline::InlineProvider;
pub use provider::CredentialsProvider;
pub use types::{CREDENTIAL_FIELDS, CredentialError, CredentialRecord, CredentialSet, mask};
