//! Test fixtures: sample credentials and `tumblr-upload.ini` contents.

use tumblr_upload::credentials::{CredentialRecord, CredentialSet};

pub const BLOG: &str = "ultrasweetnachostudent";

/// Seven credential values in positional order.
pub fn credential_values() -> [&'static str; 7] {
  [
    BLOG,
    "zV6hVQTJ9VId6Bm1WLHZSTpJcE",
    "WRZLKTSEBTTHTFHXWTYCULNQBAESAAWS",
    "1443671682",
    "Z6ejAQF9HmJgjGdp7dMtIOpPzLiY2hzYdF3JP6su",
    "awsHPTIk3RDfGHQINHBJw8m4ilo",
    "179409735",
  ]
}

/// The same credentials as named fields.
pub fn credential_record() -> CredentialRecord {
  CredentialRecord {
    tumblr_id: Some(BLOG.to_string()),
    user_form_key: Some("zV6hVQTJ9VId6Bm1WLHZSTpJcE".to_string()),
    anon_id: Some("WRZLKTSEBTTHTFHXWTYCULNQBAESAAWS".to_string()),
    pfe: Some("1443671682".to_string()),
    pfp: Some("Z6ejAQF9HmJgjGdp7dMtIOpPzLiY2hzYdF3JP6su".to_string()),
    pfs: Some("awsHPTIk3RDfGHQINHBJw8m4ilo".to_string()),
    pfu: Some("179409735".to_string()),
  }
}

pub fn credentials() -> CredentialSet {
  CredentialSet::from_ordered_values(&credential_values()).expect("fixture credentials are complete")
}

pub const VALID_INI: &str = r#"
; credentials copied from a logged-in browser
[ultrasweetnachostudent]
user_form_key = zV6hVQTJ9VId6Bm1WLHZSTpJcE
anon_id = WRZLKTSEBTTHTFHXWTYCULNQBAESAAWS
pfe = 1443671682
pfp = Z6ejAQF9HmJgjGdp7dMtIOpPzLiY2hzYdF3JP6su
pfs = awsHPTIk3RDfGHQINHBJw8m4ilo
pfu = 179409735
"#;

pub const INCOMPLETE_INI: &str = r#"
[ultrasweetnachostudent]
user_form_key = zV6hVQTJ9VId6Bm1WLHZSTpJcE
pfe = 1443671682
pfp = Z6ejAQF9HmJgjGdp7dMtIOpPzLiY2hzYdF3JP6su
pfs = awsHPTIk3RDfGHQINHBJw8m4ilo
pfu = 179409735
"#;

pub const INVALID_INI: &str = "{ \"this\": \"is json, not ini\" }\n";

pub const EMPTY_INI: &str = "";
