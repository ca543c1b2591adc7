//! Appointment listing, booking and the counters derived from them.

pub mod booking;
pub mod client;
pub mod stats;
pub mod types;

pub use booking::{BookingError, BookingForm};
pub use stats::PatientStats;
pub use types::{Appointment, AppointmentRequest, AppointmentStatus};
