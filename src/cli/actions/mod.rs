pub mod auth;
pub mod navigate;
pub mod portal;
pub mod recommend;

mod context;
pub use context::Portal;

// Single place where `Action` variants are matched.
mod run;
pub use run::execute_with;

use crate::{
    cli::globals::GlobalArgs,
    features::{
        auth::signup::SignupForm,
        doctors::{Problem, Specialization},
    },
};

#[derive(Debug)]
pub enum Action {
    Login(auth::LoginArgs),
    Logout,
    WhoAmI,
    Register(SignupForm),
    Open { path: String },
    Menu,
    Notifications,
    Doctors { specialization: Option<Specialization> },
    Availability { doctor_id: String },
    Appointments,
    Book(portal::BookArgs),
    Reports,
    Recommend { problem: Option<Problem> },
}

impl Action {
    /// Execute the action and return what it prints.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<String> {
        run::execute(self, globals).await
    }
}
