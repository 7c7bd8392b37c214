//! # DevConnect client
//!
//! `devconnect` is a small client for the DevConnect project tracker. It keeps
//! an opaque session token, gates the protected dashboard behind a route guard
//! and drives the project CRUD endpoints of the DevConnect REST API.
//!
//! ## Session
//!
//! The session token is held by a [`session::SessionContext`] that is passed
//! explicitly to the route guard and the API client. Its presence is the only
//! proof of authentication the client knows about: the token is never decoded,
//! its expiry is never checked and no refresh is attempted.
//!
//! ## Reconciliation
//!
//! The dashboard never patches its local project list. Every successful create,
//! update or delete is followed by a full re-fetch that replaces the list
//! wholesale, so the server stays the only source of truth.

pub mod api;
pub mod cli;
pub mod config;
pub mod forms;
pub mod guard;
pub mod projects;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
