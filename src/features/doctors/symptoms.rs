//! Frozen lookup from a reported problem to the specializations that treat it.
//! Both sides are closed sets taken from the booking and signup forms, so the
//! lookup is total: every problem maps to at least one specialization and
//! `Other` maps to all of them.

use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Specialization {
    GeneralPhysician,
    Neurologist,
    Endocrinologist,
    Cardiologist,
    Dermatologist,
    PsychiatristPsychologist,
    Pediatrician,
    GynecologistObstetrician,
    OrthopedicSpecialist,
    Ophthalmologist,
    Dentist,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Problem {
    GeneralConsultation,
    FeverFlu,
    HeadacheMigraine,
    DiabetesManagement,
    BloodPressureIssues,
    SkinProblems,
    MentalHealth,
    ChildHealth,
    WomensHealth,
    HeartProblems,
    OrthopedicIssues,
    EyeProblems,
    DentalIssues,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown specialization: {0}")]
pub struct UnknownSpecialization(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown medical problem: {0}")]
pub struct UnknownProblem(pub String);

impl Specialization {
    /// Signup/booking option order.
    pub const ALL: [Self; 12] = [
        Self::GeneralPhysician,
        Self::Neurologist,
        Self::Endocrinologist,
        Self::Cardiologist,
        Self::Dermatologist,
        Self::PsychiatristPsychologist,
        Self::Pediatrician,
        Self::GynecologistObstetrician,
        Self::OrthopedicSpecialist,
        Self::Ophthalmologist,
        Self::Dentist,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralPhysician => "General Physician",
            Self::Neurologist => "Neurologist",
            Self::Endocrinologist => "Endocrinologist",
            Self::Cardiologist => "Cardiologist",
            Self::Dermatologist => "Dermatologist",
            Self::PsychiatristPsychologist => "Psychiatrist / Psychologist",
            Self::Pediatrician => "Pediatrician",
            Self::GynecologistObstetrician => "Gynecologist / Obstetrician",
            Self::OrthopedicSpecialist => "Orthopedic Surgeon / Specialist",
            Self::Ophthalmologist => "Ophthalmologist",
            Self::Dentist => "Dentist / Dental Surgeon",
            Self::Other => "Other",
        }
    }
}

impl Problem {
    /// Booking form option order.
    pub const ALL: [Self; 14] = [
        Self::GeneralConsultation,
        Self::FeverFlu,
        Self::HeadacheMigraine,
        Self::DiabetesManagement,
        Self::BloodPressureIssues,
        Self::SkinProblems,
        Self::MentalHealth,
        Self::ChildHealth,
        Self::WomensHealth,
        Self::HeartProblems,
        Self::OrthopedicIssues,
        Self::EyeProblems,
        Self::DentalIssues,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralConsultation => "General Consultation",
            Self::FeverFlu => "Fever/Flu",
            Self::HeadacheMigraine => "Headache/Migraine",
            Self::DiabetesManagement => "Diabetes Management",
            Self::BloodPressureIssues => "Blood Pressure Issues",
            Self::SkinProblems => "Skin Problems",
            Self::MentalHealth => "Mental Health",
            Self::ChildHealth => "Child Health",
            Self::WomensHealth => "Women's Health",
            Self::HeartProblems => "Heart Problems",
            Self::OrthopedicIssues => "Orthopedic Issues",
            Self::EyeProblems => "Eye Problems",
            Self::DentalIssues => "Dental Issues",
            Self::Other => "Other",
        }
    }

    /// Recommended specializations, most relevant first. Never empty.
    #[must_use]
    pub fn specializations(self) -> &'static [Specialization] {
        use Specialization as S;
        match self {
            Self::GeneralConsultation | Self::FeverFlu => &[S::GeneralPhysician],
            Self::HeadacheMigraine => &[S::Neurologist],
            Self::DiabetesManagement => &[S::Endocrinologist],
            Self::BloodPressureIssues | Self::HeartProblems => &[S::Cardiologist],
            Self::SkinProblems => &[S::Dermatologist],
            Self::MentalHealth => &[S::PsychiatristPsychologist],
            Self::ChildHealth => &[S::Pediatrician],
            Self::WomensHealth => &[S::GynecologistObstetrician],
            Self::OrthopedicIssues => &[S::OrthopedicSpecialist],
            Self::EyeProblems => &[S::Ophthalmologist],
            Self::DentalIssues => &[S::Dentist],
            Self::Other => &Specialization::ALL,
        }
    }

    /// Specialization pre-selected as the doctor filter when this problem is
    /// chosen.
    #[must_use]
    pub fn default_specialization(self) -> Specialization {
        self.specializations()[0]
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialization {
    type Err = UnknownSpecialization;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.label() == value)
            .ok_or_else(|| UnknownSpecialization(value.to_string()))
    }
}

impl FromStr for Problem {
    type Err = UnknownProblem;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|problem| problem.label() == value)
            .ok_or_else(|| UnknownProblem(value.to_string()))
    }
}
