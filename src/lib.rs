//! # Medi-Insta (healthcare portal client)
//!
//! `medinsta` is the client side of the Medi-Insta patient/doctor portal. The
//! backend owns persistence and enforces authorization; this crate owns the
//! session lifecycle, role-gated navigation and the client-side orchestration
//! of appointments, reports and notifications.
//!
//! ## Access Control
//!
//! Every navigable path is declared in [`routes::Route`] with an access rule:
//! public, any signed-in identity, or a set of roles (`patient`, `doctor`,
//! `admin`). The route guard runs before a view mounts:
//!
//! - **No session:** redirect to `/login`, carrying the requested path in `from`.
//! - **Wrong role:** silent redirect to the role's home dashboard. There is no
//!   "forbidden" view.
//! - **Otherwise:** the view renders.
//!
//! ## Session Persistence
//!
//! The [`features::auth::state::SessionStore`] mirrors the session into a
//! durable key/value store under the keys `token`, `role` and `user`, so a
//! restart does not sign the user out. A stored token without a readable user
//! record is treated as signed out.

pub mod api;
pub mod cli;
pub mod features;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
