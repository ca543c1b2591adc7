//! Client-side registration checks. The backend validates again; these checks
//! only catch incomplete forms before a request is sent. Role-specific fields:
//! doctors need specialization, experience and age, admins need the secret key.

use super::{
    role::Role,
    types::{AdminRegisterRequest, RegisterRequest},
};
use crate::features::doctors::symptoms::{Specialization, UnknownSpecialization};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error(transparent)]
    Specialization(#[from] UnknownSpecialization),
}

/// Signup form as entered by the user.
#[derive(Debug)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub role: Role,
    pub avatar: String,
    pub phone: String,
    pub specialization: Option<String>,
    pub experience: Option<u32>,
    pub age: Option<u32>,
    pub secret: Option<SecretString>,
}

/// Validated registration, routed to the matching endpoint.
#[derive(Clone)]
pub enum RegistrationRequest {
    Standard(RegisterRequest),
    Admin(AdminRegisterRequest),
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

impl SignupForm {
    /// Checks required fields for the selected role and builds the request.
    ///
    /// # Errors
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<RegistrationRequest, SignupError> {
        let username = required(&self.username, "username")?;
        let email = required(&self.email, "email")?;
        if !valid_email(&email) {
            return Err(SignupError::InvalidEmail);
        }
        let password = self.password.expose_secret();
        if password.is_empty() {
            return Err(SignupError::Missing("password"));
        }

        match self.role {
            Role::Admin => {
                let secret = self
                    .secret
                    .as_ref()
                    .map(|secret| secret.expose_secret().trim().to_string())
                    .filter(|secret| !secret.is_empty())
                    .ok_or(SignupError::Missing("secret"))?;

                Ok(RegistrationRequest::Admin(AdminRegisterRequest {
                    username,
                    email,
                    password: password.to_string(),
                    avatar: self.avatar.trim().to_string(),
                    phone: self.phone.trim().to_string(),
                    secret,
                }))
            }
            Role::Doctor => {
                let specialization = self
                    .specialization
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .ok_or(SignupError::Missing("specialization"))?
                    .parse::<Specialization>()?;
                let experience = self.experience.ok_or(SignupError::Missing("experience"))?;
                let age = self.age.ok_or(SignupError::Missing("age"))?;

                Ok(RegistrationRequest::Standard(RegisterRequest {
                    username,
                    email,
                    password: password.to_string(),
                    role: Role::Doctor.as_str().to_string(),
                    avatar: self.avatar.trim().to_string(),
                    phone: self.phone.trim().to_string(),
                    specialization: Some(specialization.label().to_string()),
                    experience: Some(experience),
                    age: Some(age),
                }))
            }
            Role::Patient => Ok(RegistrationRequest::Standard(RegisterRequest {
                username,
                email,
                password: password.to_string(),
                role: Role::Patient.as_str().to_string(),
                avatar: self.avatar.trim().to_string(),
                phone: self.phone.trim().to_string(),
                specialization: None,
                experience: None,
                age: self.age,
            })),
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, SignupError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SignupError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(role: Role) -> SignupForm {
        SignupForm {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: SecretString::from("s3cret"),
            role,
            avatar: String::new(),
            phone: "555-0100".to_string(),
            specialization: None,
            experience: None,
            age: None,
            secret: None,
        }
    }

    #[test]
    fn email_shapes() {
        assert!(valid_email("a@b.co"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a b@c.d"));
        assert!(!valid_email(""));
    }

    #[test]
    fn patient_needs_only_basics() {
        let Ok(RegistrationRequest::Standard(request)) = form(Role::Patient).validate() else {
            panic!("patient registration should validate");
        };
        assert_eq!(request.role, "patient");
        assert_eq!(request.specialization, None);
    }

    #[test]
    fn doctor_needs_profile_fields() {
        let mut doctor = form(Role::Doctor);
        assert_eq!(
            doctor.validate().err(),
            Some(SignupError::Missing("specialization"))
        );

        doctor.specialization = Some("Cardiologist".to_string());
        assert_eq!(
            doctor.validate().err(),
            Some(SignupError::Missing("experience"))
        );

        doctor.experience = Some(7);
        doctor.age = Some(41);
        let Ok(RegistrationRequest::Standard(request)) = doctor.validate() else {
            panic!("doctor registration should validate");
        };
        assert_eq!(request.specialization.as_deref(), Some("Cardiologist"));
        assert_eq!(request.experience, Some(7));
    }

    #[test]
    fn doctor_specialization_must_be_known() {
        let mut doctor = form(Role::Doctor);
        doctor.specialization = Some("Astrologer".to_string());
        doctor.experience = Some(1);
        doctor.age = Some(30);
        assert!(matches!(
            doctor.validate(),
            Err(SignupError::Specialization(_))
        ));
    }

    #[test]
    fn admin_needs_secret_and_uses_admin_endpoint() {
        let mut admin = form(Role::Admin);
        assert_eq!(admin.validate().err(), Some(SignupError::Missing("secret")));

        admin.secret = Some(SecretString::from("letmein"));
        let Ok(RegistrationRequest::Admin(request)) = admin.validate() else {
            panic!("admin registration should validate");
        };
        assert_eq!(request.secret, "letmein");
    }

    #[test]
    fn missing_basics_are_reported() {
        let mut patient = form(Role::Patient);
        patient.email = "nope".to_string();
        assert_eq!(patient.validate().err(), Some(SignupError::InvalidEmail));

        patient.username = "  ".to_string();
        assert_eq!(
            patient.validate().err(),
            Some(SignupError::Missing("username"))
        );
    }
}
