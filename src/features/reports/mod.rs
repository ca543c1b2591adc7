//! Medical reports for the signed-in patient or doctor.

pub mod client;
pub mod types;

pub use types::Report;
