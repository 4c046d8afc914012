//! Minimal INI reader for `tumblr-upload.ini`.
//!
//! The file maps blog identifiers (section names) to their credential fields:
//!
//! ```text
//! [ultrasweetnachostudent]
//! user_form_key = zV6hVQTJ9VId6Bm1WLHZSTpJcE
//! anon_id = WRZLKTSEBTTHTFHXWTYCULNQBAESAAWS
//! pfe = 1443671682
//! pfp = Z6ejAQF9HmJgjGdp7dMtIOpPzLiY2hzYdF3JP6su
//! pfs = awsHPTIk3RDfGHQINHBJw8m4ilo
//! pfu = 179409735
//! ```
//!
//! Parsing is lenient: anything that doesn't look like a section header or a
//! `key = value` pair is skipped, so a garbled file simply yields no blogs.

use std::collections::BTreeMap;

use tracing::debug;

/// Sections of an INI document, keyed by section name.
pub type IniSections = BTreeMap<String, BTreeMap<String, String>>;

/// Parse INI `content` into its sections.
///
/// Keys that appear before the first section header are ignored, since they
/// cannot belong to a blog.
pub fn parse_ini(content: &str) -> IniSections {
  let mut sections = IniSections::new();
  let mut current: Option<String> = None;

  for (index, line) in content.lines().enumerate() {
    let line = line.trim();

    // Skip empty lines and comments
    if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
      continue;
    }

    if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
      let name = name.trim();
      if name.is_empty() {
        debug!(line = index + 1, "Skipping empty section header");
        current = None;
        continue;
      }
      sections.entry(name.to_string()).or_default();
      current = Some(name.to_string());
      continue;
    }

    let Some((key, value)) = split_pair(line) else {
      debug!(line = index + 1, "Skipping malformed config line");
      continue;
    };

    match &current {
      Some(section) => {
        sections
          .entry(section.clone())
          .or_default()
          .insert(key.to_string(), unquote(value).to_string());
      }
      None => {
        debug!(line = index + 1, key, "Ignoring key outside of any section");
      }
    }
  }

  sections
}

/// Split a `key = value` or `key: value` line at its first separator.
fn split_pair(line: &str) -> Option<(&str, &str)> {
  let separator = line.find(['=', ':'])?;
  let key = line[..separator].trim();
  if key.is_empty() {
    return None;
  }
  Some((key, line[separator + 1..].trim()))
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if value.len() >= 2
      && let Some(inner) = value.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote))
    {
      return inner;
    }
  }
  value
}
