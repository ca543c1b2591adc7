use super::{
    role::{Role, RoleClaim},
    types::UserRecord,
};
use crate::routes::{paths, Route};

/// Home view for a signed-in role. Also the target of silent access-denied
/// redirects. Unrecognized roles land on the public home page.
#[must_use]
pub fn resolve_home(role: &RoleClaim) -> Route {
    match role {
        RoleClaim::Known(Role::Doctor) => Route::DoctorDashboard,
        RoleClaim::Known(Role::Patient) => Route::PatientDashboard,
        RoleClaim::Known(Role::Admin) => Route::AdminDashboard,
        RoleClaim::Unrecognized(_) => Route::Home,
    }
}

/// Where to go right after a successful login: back to the page that sent the
/// user to `/login`, otherwise the admin dashboard for admins and the home page
/// for everyone else.
#[must_use]
pub fn landing_after_login(user: &UserRecord, from: Option<&str>) -> String {
    if let Some(from) = from.map(str::trim).filter(|from| !from.is_empty()) {
        if from != paths::LOGIN {
            return from.to_string();
        }
    }

    match user.role {
        RoleClaim::Known(Role::Admin) => paths::ADMIN_DASHBOARD.to_string(),
        RoleClaim::Known(Role::Doctor | Role::Patient) | RoleClaim::Unrecognized(_) => {
            paths::HOME.to_string()
        }
    }
}
