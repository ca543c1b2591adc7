//! Domain-level client features (auth, doctors, appointments, reports,
//! notifications). Views and CLI actions import these modules so access
//! control and API handling stay in dedicated feature areas.

pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod doctors;
pub mod notifications;
pub mod reports;
