//! # Userdesk (user administration client)
//!
//! `userdesk` is a thin client for a REST "user" resource. Every outgoing
//! request flows through a small `tower` pipeline before it reaches the
//! network:
//!
//! 1. **Auth stage:** forwards the request unmodified. Token attachment is not
//!    implemented.
//! 2. **Logging stage:** logs method and URL, then exactly one completion or
//!    failure line with the elapsed time.
//! 3. **Transport:** a `reqwest::Client`.
//!
//! ## Users
//!
//! [`features::users::UserService`] maps one method to one endpoint under
//! `/users` (list, get, create, update, deactivate). Responses are decoded into
//! DTOs; there is no retry, caching, or client-side validation. Identifiers are
//! always assigned by the server.
//!
//! ## Icons
//!
//! [`theme::icons::IconRegistry`] is a name to SVG markup table populated with
//! six defaults at construction.

pub mod api;
pub mod cli;
pub mod features;
pub mod theme;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
