use super::{portal::appointment_line, Portal};
use crate::{
    features::{appointments::stats, dashboard},
    routes::{menu, navigator::Navigation, Route},
};
use anyhow::Result;
use chrono::Local;
use std::fmt::Write as _;

/// Opens `path` through the guard, prints the redirect chain and renders the
/// view that mounted.
///
/// # Errors
/// Returns an error if redirects do not settle.
pub async fn open(portal: &Portal, path: &str) -> Result<String> {
    let navigation = portal.navigator().navigate(path)?;
    let mut out = String::new();

    for hop in &navigation.redirects {
        let _ = writeln!(out, "redirect: {hop}");
    }
    let _ = writeln!(out, "location: {}", navigation.location());
    out.push_str(&render(portal, &navigation).await);

    Ok(out)
}

async fn render(portal: &Portal, navigation: &Navigation) -> String {
    let Some(session) = navigation.session.as_ref() else {
        return match navigation.route {
            Route::Login => "Sign in to continue.\n".to_string(),
            Route::Signup => "Create an account.\n".to_string(),
            Route::NotFound => "Page not found.\n".to_string(),
            _ => "Welcome to Medi-Insta.\n".to_string(),
        };
    };

    match navigation.route {
        Route::PatientDashboard => {
            let data = dashboard::load(portal.api(), session, None).await;
            let counters = data.stats(Local::now().date_naive());
            let mut out = format!("Welcome back, {}\n", session.user.username);
            let _ = writeln!(
                out,
                "pending: {}  today: {}  approved: {}  reports: {}  unread notifications: {}",
                counters.pending,
                counters.today,
                counters.approved,
                counters.reports,
                data.unread()
            );
            for appointment in stats::recent(&data.appointments) {
                out.push_str(&appointment_line(appointment));
            }
            for error in &data.errors {
                let _ = writeln!(out, "error: {error}");
            }
            out
        }
        Route::DoctorDashboard | Route::AdminDashboard => {
            format!("Welcome back, {}\n", session.user.username)
        }
        Route::Profile | Route::ProfileEdit => {
            let mut out = format!("{} ({})\n", session.user.username, session.user.role);
            for (key, value) in &session.user.profile {
                let _ = writeln!(out, "{key}: {value}");
            }
            out
        }
        Route::NotFound => "Page not found.\n".to_string(),
        route => format!("{route}\n"),
    }
}

/// Navigation menu for the current session.
#[must_use]
pub fn menu(portal: &Portal) -> String {
    let session = portal.sessions().current_session();
    let menu = menu::build(session.as_ref());
    let mut out = String::new();

    for link in menu
        .links
        .iter()
        .chain(std::iter::once(&menu.dashboard))
        .chain(&menu.extras)
    {
        let _ = writeln!(out, "{:<24} {}", link.label, link.path);
    }
    if !menu.services.is_empty() {
        out.push_str("Services\n");
        for link in &menu.services {
            let _ = writeln!(out, "  {:<22} {}", link.label, link.path);
        }
    }
    for link in &menu.account {
        let _ = writeln!(out, "{:<24} {}", link.label, link.path);
    }

    out
}
