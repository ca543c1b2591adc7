//! Role-aware navigation menu. Links are derived from the session snapshot;
//! showing a link grants nothing, the guard still decides on navigation.

use super::paths;
use crate::features::auth::{resolve_home, Role, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }
}

const ADMIN_LINKS: [NavLink; 3] = [
    NavLink::new("Home", paths::HOME),
    NavLink::new("Find Doctors", paths::DOCTORS),
    NavLink::new("Attendance Record", paths::HOME),
];

const MEMBER_LINKS: [NavLink; 3] = [
    NavLink::new("Home", paths::HOME),
    NavLink::new("Find Doctors", paths::DOCTORS),
    NavLink::new("Medical Records", paths::RECORDS),
];

/// Healthcare services offered to patients. These pages are not in the route
/// table yet and open the not-found view.
pub const SERVICE_LINKS: [NavLink; 4] = [
    NavLink::new("Primary Care", "/primary-care"),
    NavLink::new("Specialist Consultation", "/specialist"),
    NavLink::new("Emergency Care", "/emergency"),
    NavLink::new("Health Check-up", "/health-checkup"),
];

pub const BLOG_LINK: NavLink = NavLink::new("Blog", paths::BLOG);

/// Everything the header shows for one session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub links: Vec<NavLink>,
    pub dashboard: NavLink,
    pub services: Vec<NavLink>,
    pub extras: Vec<NavLink>,
    /// Profile and logout when signed in, login and signup otherwise. Logout
    /// clears the session and lands on `/`.
    pub account: Vec<NavLink>,
}

#[must_use]
pub fn build(session: Option<&Session>) -> Menu {
    let role = session.and_then(|s| s.user.role.role());

    let account = if session.is_some() {
        vec![
            NavLink::new("Profile", paths::PROFILE),
            NavLink::new("Logout", paths::HOME),
        ]
    } else {
        vec![
            NavLink::new("Login", paths::LOGIN),
            NavLink::new("Get Started", paths::SIGNUP),
        ]
    };

    Menu {
        links: nav_links(session),
        dashboard: NavLink::new(
            if session.is_some() {
                "Dashboard"
            } else {
                "Appointments"
            },
            dashboard_target(session),
        ),
        services: if role == Some(Role::Patient) {
            SERVICE_LINKS.to_vec()
        } else {
            Vec::new()
        },
        extras: if role == Some(Role::Doctor) {
            vec![BLOG_LINK]
        } else {
            Vec::new()
        },
        account,
    }
}

/// Top-level links, shown only to a signed-in user.
#[must_use]
pub fn nav_links(session: Option<&Session>) -> Vec<NavLink> {
    match session.map(|s| s.user.role.role()) {
        None => Vec::new(),
        Some(Some(Role::Admin)) => ADMIN_LINKS.to_vec(),
        Some(_) => MEMBER_LINKS.to_vec(),
    }
}

/// Where the dashboard button goes. An unrecognized role targets the
/// `/dashboard` alias and leaves the decision to the guard.
#[must_use]
pub fn dashboard_target(session: Option<&Session>) -> &'static str {
    match session {
        None => paths::LOGIN,
        Some(session) if session.user.role.role().is_none() => paths::DASHBOARD,
        Some(session) => resolve_home(&session.user.role).path(),
    }
}
