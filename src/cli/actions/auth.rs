use super::Portal;
use crate::{
    features::auth::{
        client::{self, LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE},
        landing_after_login,
        signup::SignupForm,
        types::LoginRequest,
    },
    routes::paths,
};
use anyhow::{anyhow, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt::Write as _;
use tracing::{info, warn};

#[derive(Debug)]
pub struct LoginArgs {
    pub email: String,
    pub password: SecretString,
    /// Path the guard redirected away from, if any.
    pub from: Option<String>,
}

/// Signs in, stores the session and opens the landing page.
///
/// # Errors
/// Returns the backend's message (or a generic one) when the login is
/// rejected; nothing is stored in that case.
pub async fn login(portal: &Portal, args: LoginArgs) -> Result<String> {
    let request = LoginRequest {
        email: args.email.trim().to_string(),
        password: args.password.expose_secret().to_string(),
    };

    let response = client::login(portal.api(), &request)
        .await
        .map_err(|err| {
            warn!("login rejected: {err}");
            anyhow!(err.inline_message(LOGIN_FAILED_MESSAGE))
        })?;

    let landing = landing_after_login(&response.user, args.from.as_deref());
    let mut out = format!(
        "Signed in as {} ({})\n",
        response.user.username, response.user.role
    );

    portal.sessions().login(response.user, response.token);
    let navigation = portal.navigator().navigate(&landing)?;
    let _ = writeln!(out, "Opened {}", navigation.location());

    Ok(out)
}

/// Clears the session and returns to the home page.
///
/// # Errors
/// Returns an error only if navigation to the home page fails.
pub fn logout(portal: &Portal) -> Result<String> {
    let was_signed_in = portal.sessions().is_authenticated();
    portal.sessions().logout();
    let navigation = portal.navigator().navigate(paths::HOME)?;
    info!(was_signed_in, "logout");

    Ok(if was_signed_in {
        format!("Signed out\nOpened {}\n", navigation.location())
    } else {
        "Not signed in\n".to_string()
    })
}

#[must_use]
pub fn whoami(portal: &Portal) -> String {
    match portal.sessions().current_session() {
        Some(session) => {
            let mut out = format!("{} ({})\n", session.user.username, session.user.role);
            if let Some(email) = &session.user.email {
                let _ = writeln!(out, "email: {email}");
            }
            let _ = writeln!(out, "id: {}", session.user.id);
            out
        }
        None => "Not signed in\n".to_string(),
    }
}

/// Validates the form and creates the account.
///
/// # Errors
/// Returns the first validation problem, or the backend's message when the
/// registration is refused.
pub async fn register(portal: &Portal, form: SignupForm) -> Result<String> {
    let request = form.validate()?;
    client::register(portal.api(), &request)
        .await
        .map_err(|err| anyhow!(err.inline_message(REGISTRATION_FAILED_MESSAGE)))?;

    info!(role = %form.role, "registered");
    Ok(format!(
        "Registration successful. Sign in to continue: {}\n",
        paths::LOGIN
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{ApiClient, ApiConfig},
        features::auth::{storage::MemoryStorage, BearerToken, Role, RoleClaim, UserRecord},
    };
    use serde_json::Map;
    use std::sync::Arc;

    fn portal() -> Portal {
        let config = ApiConfig::new("http://127.0.0.1:9/api/", 1).unwrap();
        Portal::new(
            ApiClient::new(&config).unwrap(),
            Arc::new(MemoryStorage::new()),
        )
    }

    #[test]
    fn whoami_and_logout() {
        let portal = portal();
        assert_eq!(whoami(&portal), "Not signed in\n");
        assert_eq!(logout(&portal).unwrap(), "Not signed in\n");

        portal.sessions().login(
            UserRecord {
                id: "p-7".to_string(),
                username: "ana".to_string(),
                email: Some("ana@clinic.tld".to_string()),
                role: RoleClaim::Known(Role::Patient),
                profile: Map::new(),
            },
            BearerToken::new("t"),
        );
        assert_eq!(
            whoami(&portal),
            "ana (patient)\nemail: ana@clinic.tld\nid: p-7\n"
        );

        assert_eq!(logout(&portal).unwrap(), "Signed out\nOpened /\n");
        assert!(!portal.sessions().is_authenticated());
    }

    #[tokio::test]
    async fn register_validates_before_calling_the_backend() {
        let form = SignupForm {
            username: "dr who".to_string(),
            email: "who@clinic.tld".to_string(),
            password: SecretString::from("pw"),
            role: Role::Doctor,
            avatar: String::new(),
            phone: String::new(),
            specialization: None,
            experience: Some(3),
            age: Some(40),
            secret: None,
        };
        let err = register(&portal(), form).await.unwrap_err();
        assert_eq!(err.to_string(), "specialization is required");
    }
}
