//! Auth feature module covering login, registration, session persistence and
//! role-gated navigation. It keeps access-control logic out of the views and
//! must stay aligned with the backend's role names. This module handles bearer
//! tokens and passwords and must not log either.
//!
//! Flow Overview: login posts credentials to `auth/login`, stores the returned
//! token and user record in the [`state::SessionStore`] and lands on the page
//! that triggered the login (or the role default). Every navigation goes
//! through [`guards::evaluate`], which reads the current session and the
//! route's access rule before the view mounts.

pub mod client;
pub mod guards;
pub mod home;
pub mod role;
pub mod signup;
pub mod state;
pub mod storage;
pub mod token;
pub mod types;

pub use guards::{evaluate, GuardDecision};
pub use home::{landing_after_login, resolve_home};
pub use role::{Role, RoleClaim};
pub use state::SessionStore;
pub use token::BearerToken;
pub use types::{Session, UserRecord};
