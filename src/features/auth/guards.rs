//! Route guard. The decision is made synchronously from the session snapshot
//! before a view mounts, so a protected view never renders, even briefly, for
//! someone who may not see it. Access denial is a silent redirect; there is no
//! forbidden view. The backend still enforces authorization on every call.

use super::{home::resolve_home, role::RoleClaim, types::Session};
use crate::routes::{normalize_path, Access, Route};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Not signed in; `from` is the path to return to after login.
    RedirectToLogin { from: String },
    /// Signed in but the role may not see the route.
    RedirectHome(Route),
}

/// Decides whether `requested` may render for `session` under `access`.
#[must_use]
pub fn evaluate(access: &Access, session: Option<&Session>, requested: &str) -> GuardDecision {
    if *access == Access::Public {
        return GuardDecision::Render;
    }

    let Some(session) = session else {
        return GuardDecision::RedirectToLogin {
            from: normalize_path(requested),
        };
    };

    if is_authorized(access, &session.user.role) {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectHome(resolve_home(&session.user.role))
    }
}

/// Role check for a signed-in identity. Unrecognized roles pass only routes
/// that do not restrict roles.
#[must_use]
pub fn is_authorized(access: &Access, role: &RoleClaim) -> bool {
    match access {
        Access::Public | Access::Authenticated => true,
        Access::Roles(allowed) if allowed.is_empty() => true,
        Access::Roles(allowed) => match role {
            RoleClaim::Known(role) => allowed.contains(role),
            RoleClaim::Unrecognized(_) => false,
        },
    }
}
