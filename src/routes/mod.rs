//! Route table for the portal. Each named route declares who may see it; the
//! guard in `features::auth::guards` enforces that declaration on every
//! navigation.

pub mod menu;
pub mod navigator;

use crate::features::auth::role::Role;
use std::collections::BTreeSet;
use std::fmt;

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const CONTACT: &str = "/contact";
    pub const DOCTORS: &str = "/doctors";
    pub const BLOG: &str = "/blog";
    pub const DOCTOR_DASHBOARD: &str = "/doctor-dashboard";
    pub const PATIENT_DASHBOARD: &str = "/patient-dashboard";
    pub const PROFILE: &str = "/profile";
    pub const PROFILE_EDIT: &str = "/profile/edit";
    pub const RECORDS: &str = "/records";
    pub const ADMIN_DASHBOARD: &str = "/admin-dashboard";
    pub const DASHBOARD: &str = "/dashboard";
    pub const NOT_FOUND: &str = "*";
}

/// Who may render a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// No guard at all.
    Public,
    /// Any signed-in identity, whatever its role.
    Authenticated,
    /// Signed-in identities whose role is in the set. An empty set behaves
    /// like `Authenticated`.
    Roles(BTreeSet<Role>),
}

impl Access {
    #[must_use]
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::Roles(roles.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Contact,
    Doctors,
    Blog,
    DoctorDashboard,
    PatientDashboard,
    Profile,
    ProfileEdit,
    Records,
    AdminDashboard,
    /// Neutral alias resolved to the signed-in role's dashboard.
    Dashboard,
    NotFound,
}

/// Static description of a navigable path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub route: Route,
    pub path: &'static str,
    pub access: Access,
}

impl Route {
    pub const ALL: [Self; 14] = [
        Self::Home,
        Self::Login,
        Self::Signup,
        Self::Contact,
        Self::Doctors,
        Self::Blog,
        Self::DoctorDashboard,
        Self::PatientDashboard,
        Self::Profile,
        Self::ProfileEdit,
        Self::Records,
        Self::AdminDashboard,
        Self::Dashboard,
        Self::NotFound,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => paths::HOME,
            Self::Login => paths::LOGIN,
            Self::Signup => paths::SIGNUP,
            Self::Contact => paths::CONTACT,
            Self::Doctors => paths::DOCTORS,
            Self::Blog => paths::BLOG,
            Self::DoctorDashboard => paths::DOCTOR_DASHBOARD,
            Self::PatientDashboard => paths::PATIENT_DASHBOARD,
            Self::Profile => paths::PROFILE,
            Self::ProfileEdit => paths::PROFILE_EDIT,
            Self::Records => paths::RECORDS,
            Self::AdminDashboard => paths::ADMIN_DASHBOARD,
            Self::Dashboard => paths::DASHBOARD,
            Self::NotFound => paths::NOT_FOUND,
        }
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Home | Self::Login | Self::Signup | Self::NotFound => Access::Public,
            Self::Contact | Self::Doctors | Self::Blog | Self::Dashboard => Access::Authenticated,
            Self::DoctorDashboard => Access::roles([Role::Doctor]),
            Self::PatientDashboard => Access::roles([Role::Patient]),
            Self::AdminDashboard => Access::roles([Role::Admin]),
            Self::Profile | Self::ProfileEdit => Access::roles(Role::ALL),
            Self::Records => Access::roles([Role::Doctor, Role::Patient]),
        }
    }

    #[must_use]
    pub fn descriptor(self) -> RouteDescriptor {
        RouteDescriptor {
            route: self,
            path: self.path(),
            access: self.access(),
        }
    }

    /// Matches a location against the table. Unknown paths land on `NotFound`.
    #[must_use]
    pub fn match_path(location: &str) -> Self {
        let path = normalize_path(location);
        Self::ALL
            .into_iter()
            .find(|route| *route != Self::NotFound && route.path() == path)
            .unwrap_or(Self::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Reduces a location to its pathname: query and fragment are dropped, a
/// leading slash is ensured and a single trailing slash is removed.
#[must_use]
pub fn normalize_path(location: &str) -> String {
    let trimmed = location.trim();
    let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());
    let path = &trimmed[..end];

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}
