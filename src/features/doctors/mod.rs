//! Doctor directory, availability and the symptom → specialization lookup used
//! by the booking form.

pub mod client;
pub mod symptoms;
pub mod types;

pub use symptoms::{Problem, Specialization};
pub use types::Doctor;

/// Doctors matching the selected specialization, or all of them when none is
/// selected.
#[must_use]
pub fn filter_by_specialization(
    doctors: &[Doctor],
    specialization: Option<Specialization>,
) -> Vec<&Doctor> {
    match specialization {
        Some(selected) => doctors
            .iter()
            .filter(|doctor| doctor.specialization.as_deref() == Some(selected.label()))
            .collect(),
        None => doctors.iter().collect(),
    }
}
