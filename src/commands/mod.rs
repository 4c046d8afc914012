//! CLI subcommand handlers.
//!
//! Each handler prints its own status lines and decides the process exit
//! code; the library modules underneath only return values.

pub mod completions;
pub mod credentials;
pub mod upload;
pub mod version;
